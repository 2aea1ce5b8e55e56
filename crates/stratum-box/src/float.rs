//! Float registry of a block formatting context.
//!
//! [§ 9.5 Floats](https://www.w3.org/TR/CSS2/visuren.html#floats)
//!
//! "A float is a box that is shifted to the left or right on the current line."
//!
//! Float placement is done by layout. The registry only remembers which boxes
//! were floated inside a formatting context, in placement order, so that later
//! passes (bounds scanning in particular) can visit them.

use crate::tree::BoxId;

/// Floats placed within one block formatting context.
///
/// [§ 9.4.1 Block formatting contexts](https://www.w3.org/TR/CSS2/visuren.html#block-formatting)
///
/// "Floats, absolutely positioned elements, block containers ... that are not
/// block boxes, and block boxes with 'overflow' other than 'visible' ...
/// establish new block formatting contexts for their contents."
#[derive(Debug, Clone, Default)]
pub struct FloatRegistry {
    floats: Vec<BoxId>,
}

impl FloatRegistry {
    /// Create an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self { floats: Vec::new() }
    }

    /// Record a placed float.
    pub fn register(&mut self, box_id: BoxId) {
        self.floats.push(box_id);
    }

    /// Iterate the floated boxes in placement order.
    pub fn iter(&self) -> impl Iterator<Item = BoxId> + '_ {
        self.floats.iter().copied()
    }
}
