//! Geometry shared by the box tree and the layer engine.
//!
//! [CSS Box Model Module Level 3](https://www.w3.org/TR/css-box-3/)

use serde::{Deserialize, Serialize};

/// A rectangle positioned in 2D space.
///
/// [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
///
/// Boxes report their border box as a `Rect` in absolute (canvas)
/// coordinates; clip and viewport rectangles use the same space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Horizontal position of the top-left corner.
    pub x: f32,
    /// Vertical position of the top-left corner.
    pub y: f32,
    /// Width of the rectangle.
    pub width: f32,
    /// Height of the rectangle.
    pub height: f32,
}

impl Rect {
    /// Create a rectangle from its origin and size.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The x coordinate of the right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// The y coordinate of the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Return this rectangle moved by `(dx, dy)`, size unchanged.
    #[must_use]
    pub fn translate(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Whether the two rectangles share any area.
    ///
    /// Zero-sized rectangles still intersect when their origin lies inside
    /// `other`, so empty boxes sitting inside a clip are not culled.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.x <= other.right()
            && other.x <= self.right()
            && self.y <= other.bottom()
            && other.y <= self.bottom()
    }
}

/// The furthest extent reached by painted content.
///
/// Unlike [`Rect`], a dimension has no origin: `width` is the maximum
/// `x + width` and `height` the maximum `y + height` seen so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    /// Maximum right edge.
    pub width: f32,
    /// Maximum bottom edge.
    pub height: f32,
}

impl Dimension {
    /// Create a dimension.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The extent reached by the far corner of `rect`.
    #[must_use]
    pub fn reached_by(rect: &Rect) -> Self {
        Self {
            width: rect.right(),
            height: rect.bottom(),
        }
    }

    /// Grow each axis independently to cover `other`.
    pub fn expand_to(&mut self, other: Self) {
        if other.width > self.width {
            self.width = other.width;
        }
        if other.height > self.height {
            self.height = other.height;
        }
    }
}
