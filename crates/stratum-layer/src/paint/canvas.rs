//! The drawing surface seen by the layer painter.

use serde::{Deserialize, Serialize};
use stratum_box::{BoxId, LayoutBox, ListMarker, Rect, ReplacedContent};

use crate::collect::InlinePaintable;

/// Drawing primitives the painter issues, in painting order.
///
/// Implementations decide what a background or a border looks like; the
/// painter only decides when each is drawn.
pub trait Canvas {
    /// The current clip region in canvas space.
    fn clip(&self) -> Rect;

    /// [§ 3 Backgrounds](https://www.w3.org/TR/css-backgrounds-3/#backgrounds)
    fn paint_background(&mut self, id: BoxId, layout_box: &LayoutBox);

    /// [§ 4 Borders](https://www.w3.org/TR/css-backgrounds-3/#borders)
    fn paint_border(&mut self, id: BoxId, layout_box: &LayoutBox);

    /// Outline the border box for layout debugging.
    fn paint_debug_outline(&mut self, id: BoxId, layout_box: &LayoutBox);

    /// [§ 12.5 Lists](https://www.w3.org/TR/CSS2/generate.html#lists)
    fn paint_list_marker(&mut self, id: BoxId, layout_box: &LayoutBox, marker: &ListMarker);

    /// Draw a piece of inline content.
    fn paint_inline(&mut self, item: &InlinePaintable);

    /// Let the embedded widget of a replaced box draw itself.
    fn paint_component(&mut self, id: BoxId, layout_box: &LayoutBox, content: &ReplacedContent);
}

/// Caller-controlled painting switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaintOptions {
    /// Live rendering: embedded widgets manage their own redraw and are not
    /// painted.
    pub interactive: bool,
    /// Outline every painted block.
    pub debug_draw_boxes: bool,
}

/// Everything a paint pass needs besides the trees.
pub struct RenderingContext<'a> {
    /// Where drawing goes.
    pub canvas: &'a mut dyn Canvas,
    /// The viewport fixed boxes are anchored to.
    pub fixed_rectangle: Rect,
    /// Painting switches.
    pub options: PaintOptions,
}

impl<'a> RenderingContext<'a> {
    /// A context with default options.
    #[must_use]
    pub fn new(canvas: &'a mut dyn Canvas, fixed_rectangle: Rect) -> Self {
        Self {
            canvas,
            fixed_rectangle,
            options: PaintOptions::default(),
        }
    }

    /// Replace the painting switches.
    #[must_use]
    pub fn with_options(mut self, options: PaintOptions) -> Self {
        self.options = options;
        self
    }
}
