//! Laid-out box tree consumed by the stratum layer engine.
//!
//! # Scope
//!
//! Layout, cascade and float placement run upstream. This crate holds their
//! results in the shape the layer engine needs:
//!
//! - **Box Tree** - arena of [`LayoutBox`] records addressed by [`BoxId`],
//!   each with its resolved [`BoxStyle`], local and absolute geometry, and
//!   back references to the layer that paints it
//! - **Float Registry** ([§ 9.5 Floats](https://www.w3.org/TR/CSS2/visuren.html#floats))
//!   - the floats placed inside a block formatting context, iterable in
//!     placement order
//! - **Positioned Layout** ([§ 9.3 Positioning schemes](https://www.w3.org/TR/CSS2/visuren.html#positioning-scheme))
//!   - final offset resolution for absolute, fixed and relative boxes
//!
//! Box kinds form a closed enum ([`BoxKind`]); consumers dispatch with
//! `match` rather than through trait objects.

/// Rectangles and extents.
pub mod box_model;
/// Float registry per [§ 9.5 Floats](https://www.w3.org/TR/CSS2/visuren.html#floats).
pub mod float;
/// Box records.
pub mod layout_box;
/// Positioned layout per [§ 9.3](https://www.w3.org/TR/CSS2/visuren.html#positioning-scheme).
pub mod positioned;
/// Resolved style values read by layering.
pub mod style;
/// The box arena.
pub mod tree;

mod error;

pub use box_model::{Dimension, Rect};
pub use error::{BoxTreeError, Result};
pub use float::FloatRegistry;
pub use layout_box::{
    BlockBox, BoxKind, InlineBox, InlineChild, LayoutBox, ListMarker, ReplacedContent, TextRun,
};
pub use positioned::{BoxOffsets, PositionType, PositionedLayout};
pub use style::{BoxStyle, OuterDisplay, ZIndex};
pub use tree::{BoxId, BoxTree, LayerId};
