//! Layer Painting
//!
//! [CSS 2.1 Appendix E - Elaborate description of Stacking Contexts](https://www.w3.org/TR/CSS2/zindex.html)
//!
//! The painter walks the layer tree and drives a [`Canvas`]. Drawing itself
//! belongs to the canvas implementation; [`DisplayListCanvas`] records the
//! calls so a backend (or a test) can replay them:
//!
//! ```text
//! LayerTree + BoxTree → LayerPainter → Canvas
//!                                        ↓
//!                                   DisplayList
//! ```

mod canvas;
mod display_list;
mod painter;

pub use canvas::{Canvas, PaintOptions, RenderingContext};
pub use display_list::{DisplayCommand, DisplayList, DisplayListCanvas};
pub use painter::LayerPainter;
