//! The slice of computed style the layer engine reads.
//!
//! Cascade and value computation happen upstream; a box carries the resolved
//! values below or nothing at all. The engine never defaults a missing style.

use serde::{Deserialize, Serialize};

use crate::positioned::{BoxOffsets, PositionType};

/// [§ 9.9.1 Specifying the stack level: the 'z-index' property](https://www.w3.org/TR/CSS2/visuren.html#z-index)
///
/// "For a positioned box, the 'z-index' property specifies:
///
/// 1. The stack level of the box in the current stacking context.
/// 2. Whether the box establishes a stacking context."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ZIndex {
    /// "The stack level of the generated box in the current stacking context
    /// is 0. The box does not establish a new stacking context unless it is
    /// the root element."
    #[default]
    Auto,
    /// "This integer is the stack level of the generated box in the current
    /// stacking context. The box also establishes a new stacking context."
    Integer(i32),
}

impl ZIndex {
    /// Whether the value is `auto`.
    #[must_use]
    pub const fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }

    /// The stack level used for ordering; `auto` stacks at level 0.
    #[must_use]
    pub const fn stack_level(self) -> i32 {
        match self {
            Self::Auto => 0,
            Self::Integer(level) => level,
        }
    }
}

/// [§ 2.1 Outer display roles](https://www.w3.org/TR/css-display-3/#outer-role)
///
/// Only the outer role matters for layering: inline-level layers skip their
/// own background phase and the replaced-content shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OuterDisplay {
    /// "The element generates a box that is block-level when placed in flow
    /// layout."
    #[default]
    Block,
    /// "The element generates a box that is inline-level when placed in flow
    /// layout."
    Inline,
}

/// Resolved style values consumed by layering and painting.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoxStyle {
    /// Computed `z-index`.
    pub z_index: ZIndex,
    /// Computed `position`.
    pub position: PositionType,
    /// Outer display role.
    pub display: OuterDisplay,
    /// Computed `top`/`right`/`bottom`/`left`, `None` meaning `auto`.
    pub offsets: BoxOffsets,
}

impl BoxStyle {
    /// A static, block-level style with `z-index: auto`.
    #[must_use]
    pub fn block() -> Self {
        Self::default()
    }

    /// A static, inline-level style with `z-index: auto`.
    #[must_use]
    pub fn inline() -> Self {
        Self {
            display: OuterDisplay::Inline,
            ..Self::default()
        }
    }

    /// Set the `position` value.
    #[must_use]
    pub const fn with_position(mut self, position: PositionType) -> Self {
        self.position = position;
        self
    }

    /// Set an integer `z-index`.
    #[must_use]
    pub const fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = ZIndex::Integer(z_index);
        self
    }

    /// Set the box offsets.
    #[must_use]
    pub const fn with_offsets(mut self, offsets: BoxOffsets) -> Self {
        self.offsets = offsets;
        self
    }

    /// `position: fixed`.
    #[must_use]
    pub fn is_fixed(&self) -> bool {
        self.position == PositionType::Fixed
    }

    /// `position: absolute`.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.position == PositionType::Absolute
    }

    /// `position: relative`.
    #[must_use]
    pub fn is_relative(&self) -> bool {
        self.position == PositionType::Relative
    }
}
