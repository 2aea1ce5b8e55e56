//! Stacking contexts and paint order for a laid-out box tree.
//!
//! [§ 9.9 Layered presentation](https://www.w3.org/TR/CSS2/visuren.html#layers)
//!
//! # Scope
//!
//! Layout hands over a [`BoxTree`]. Every box that establishes a stacking
//! context or a positioning boundary gets a [`Layer`] in a parallel
//! [`LayerTree`]. This crate then:
//!
//! - **Resolves stacking order** - which descendant layers a stacking context
//!   paints, in which batch, sorted by z-index ([`StackBatch`])
//! - **Finalizes positions** - absolute and inline relative offsets once
//!   layout settles, fixed re-anchoring at paint time
//! - **Scans bounds** - the paintable extent of a layer
//! - **Paints** - [`LayerPainter`] drives a [`Canvas`] in CSS 2.1 Appendix E
//!   order
//!
//! # Example
//!
//! ```
//! use stratum_layer::{
//!     BoxStyle, BoxTree, DisplayListCanvas, FlowCollector, LayerPainter, LayerTree,
//!     LayoutBox, Rect, RenderingContext,
//! };
//!
//! let mut boxes = BoxTree::new();
//! let html = boxes.alloc(LayoutBox::block(BoxStyle::block()).at(0.0, 0.0, 800.0, 600.0));
//!
//! let layers = LayerTree::new();
//! let root = layers.create(&mut boxes, html, None)?;
//!
//! let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
//! let mut canvas = DisplayListCanvas::new(viewport);
//! let mut ctx = RenderingContext::new(&mut canvas, viewport);
//! LayerPainter::new(&layers, &FlowCollector).paint(&mut ctx, &mut boxes, root, 0.0, 0.0)?;
//!
//! assert_eq!(canvas.display_list().len(), 2);
//! # Ok::<(), stratum_layer::LayerError>(())
//! ```

/// Painting extent of a layer.
pub mod bounds;
/// Paintable content of a layer.
pub mod collect;
/// The layer arena.
pub mod layer;
/// Layer painting per [CSS 2.1 Appendix E](https://www.w3.org/TR/CSS2/zindex.html).
pub mod paint;
/// Final positioning of layer masters.
pub mod position;
/// Stacking order resolution.
pub mod stacking;

mod error;

pub use collect::{BoxCollector, Collected, FlowCollector, InlinePaintable};
pub use error::{LayerError, Result};
pub use layer::{Layer, LayerTree};
pub use paint::{
    Canvas, DisplayCommand, DisplayList, DisplayListCanvas, LayerPainter, PaintOptions,
    RenderingContext,
};
pub use position::position_fixed_layer;
pub use stacking::StackBatch;
pub use stratum_box::{BoxId, BoxStyle, BoxTree, Dimension, LayerId, LayoutBox, Rect};
