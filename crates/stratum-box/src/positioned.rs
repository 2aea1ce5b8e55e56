//! CSS Positioned Layout.
//!
//! [§ 9.3 Positioning schemes](https://www.w3.org/TR/CSS2/visuren.html#positioning-scheme)
//!
//! Layout proper happens upstream. What lives here is the final offsetting
//! step the layer engine triggers once geometry has settled: resolving an
//! absolutely positioned box against its containing block, and shifting an
//! inline relatively positioned box.

use serde::{Deserialize, Serialize};

use super::box_model::Rect;

/// [§ 9.3.1 Choosing a positioning scheme: 'position' property](https://www.w3.org/TR/CSS2/visuren.html#choose-position)
///
/// "The 'position' and 'float' properties determine which of the CSS 2
/// positioning algorithms is used to calculate the position of a box."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PositionType {
    /// "The box is a normal box, laid out according to the normal flow."
    #[default]
    Static,
    /// "The box's position is calculated according to the normal flow.
    /// Then the box is offset relative to its normal position."
    Relative,
    /// "The box's position (and possibly size) is specified with the
    /// 'top', 'right', 'bottom', and 'left' properties."
    Absolute,
    /// "The box's position is calculated according to the 'absolute' model,
    /// but the box is fixed with respect to some reference."
    Fixed,
}

/// [§ 9.3.2 Box offsets: 'top', 'right', 'bottom', 'left'](https://www.w3.org/TR/CSS2/visuren.html#position-props)
///
/// `None` is `auto`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoxOffsets {
    /// Offset of the top edge below the containing block's top edge.
    pub top: Option<f32>,
    /// Offset of the right edge left of the containing block's right edge.
    pub right: Option<f32>,
    /// Offset of the bottom edge above the containing block's bottom edge.
    pub bottom: Option<f32>,
    /// Offset of the left edge right of the containing block's left edge.
    pub left: Option<f32>,
}

impl BoxOffsets {
    /// Offsets with only `top` and `left` set.
    #[must_use]
    pub const fn top_left(top: f32, left: f32) -> Self {
        Self {
            top: Some(top),
            right: None,
            bottom: None,
            left: Some(left),
        }
    }
}

/// Offset resolution for positioned boxes.
///
/// [§ 9.3 Positioning schemes](https://www.w3.org/TR/CSS2/visuren.html#positioning-scheme)
#[derive(Debug)]
pub struct PositionedLayout;

impl PositionedLayout {
    /// [§ 9.4.3 Relative positioning](https://www.w3.org/TR/CSS2/visuren.html#relative-positioning)
    ///
    /// Returns the `(dx, dy)` shift to apply to a box laid out in normal flow.
    ///
    /// "If both 'left' and 'right' are 'auto', the used values are both 0."
    /// "If 'left' is 'auto', its used value is minus the value of 'right'."
    /// "If neither 'left' nor 'right' is 'auto', the position is
    /// over-constrained... the value of 'left' wins" (ltr only).
    #[must_use]
    pub fn layout_relative(offsets: &BoxOffsets) -> (f32, f32) {
        let dx = match (offsets.left, offsets.right) {
            (None, None) => 0.0,
            (Some(left), _) => left,
            (None, Some(right)) => -right,
        };

        // "If neither is 'auto', 'bottom' is ignored"
        let dy = match (offsets.top, offsets.bottom) {
            (None, None) => 0.0,
            (Some(top), _) => top,
            (None, Some(bottom)) => -bottom,
        };

        (dx, dy)
    }

    /// [§ 10.3.7 Absolutely positioned, non-replaced elements](https://www.w3.org/TR/CSS2/visudet.html#abs-non-replaced-width)
    ///
    /// Resolves the box's position relative to the containing block origin.
    /// Sizes are taken as already computed by layout; only the offset
    /// equations are solved here:
    ///
    /// ```text
    /// left given           -> x = left
    /// left auto, right set -> x = cb.width - right - width
    /// both auto            -> x = static position
    /// ```
    ///
    /// and the same for `top`/`bottom` against the containing block height.
    #[must_use]
    pub fn layout_absolute(
        offsets: &BoxOffsets,
        size: (f32, f32),
        static_position: (f32, f32),
        containing_block: Rect,
    ) -> (f32, f32) {
        let (width, height) = size;

        let x = match (offsets.left, offsets.right) {
            (Some(left), _) => left,
            (None, Some(right)) => containing_block.width - right - width,
            (None, None) => static_position.0,
        };

        let y = match (offsets.top, offsets.bottom) {
            (Some(top), _) => top,
            (None, Some(bottom)) => containing_block.height - bottom - height,
            (None, None) => static_position.1,
        };

        (x, y)
    }
}
