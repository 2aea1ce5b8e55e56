//! Arena-based box tree.
//!
//! The tree uses arena allocation with [`BoxId`] indices for all relationships,
//! the same way the layer tree refers back to boxes. Boxes point at the layer
//! they induced through a [`LayerId`] index, never a reference, so neither
//! tree owns the other.

use std::fmt;

use log::trace;

use crate::box_model::Rect;
use crate::error::{BoxTreeError, Result};
use crate::float::FloatRegistry;
use crate::layout_box::{BoxKind, InlineChild, LayoutBox, TextRun};
use crate::positioned::PositionedLayout;
use crate::style::{BoxStyle, OuterDisplay};

/// A type-safe index into the box tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoxId(pub usize);

impl fmt::Display for BoxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Index of a layer in the layer tree.
///
/// Allocated by the layer engine; the box tree only stores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(pub usize);

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}", self.0)
    }
}

/// Arena of laid-out boxes.
#[derive(Debug, Clone, Default)]
pub struct BoxTree {
    /// All boxes, indexed by `BoxId`.
    boxes: Vec<LayoutBox>,
}

impl BoxTree {
    /// Create an empty tree.
    #[must_use]
    pub const fn new() -> Self {
        Self { boxes: Vec::new() }
    }

    /// Allocate a box and return its id. The box is not attached yet.
    pub fn alloc(&mut self, layout_box: LayoutBox) -> BoxId {
        let id = BoxId(self.boxes.len());
        self.boxes.push(layout_box);
        id
    }

    /// Number of boxes in the arena.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Whether the arena is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Get a box by id.
    ///
    /// # Errors
    ///
    /// Returns [`BoxTreeError::UnknownBox`] if `id` is not in this tree.
    pub fn get(&self, id: BoxId) -> Result<&LayoutBox> {
        self.boxes.get(id.0).ok_or(BoxTreeError::UnknownBox(id))
    }

    /// Get a mutable box by id.
    ///
    /// # Errors
    ///
    /// Returns [`BoxTreeError::UnknownBox`] if `id` is not in this tree.
    pub fn get_mut(&mut self, id: BoxId) -> Result<&mut LayoutBox> {
        self.boxes.get_mut(id.0).ok_or(BoxTreeError::UnknownBox(id))
    }

    /// The resolved style of a box.
    ///
    /// # Errors
    ///
    /// Returns [`BoxTreeError::UnresolvedStyle`] when the cascade has not run
    /// for this box, or [`BoxTreeError::UnknownBox`].
    pub fn style(&self, id: BoxId) -> Result<&BoxStyle> {
        self.get(id)?
            .style
            .as_ref()
            .ok_or(BoxTreeError::UnresolvedStyle(id))
    }

    /// The outer display role of a box, read from its resolved style.
    ///
    /// # Errors
    ///
    /// Returns [`BoxTreeError::DisplayMismatch`] when the style's role
    /// disagrees with the kind of box layout built,
    /// [`BoxTreeError::UnresolvedStyle`], or [`BoxTreeError::UnknownBox`].
    pub fn display(&self, id: BoxId) -> Result<OuterDisplay> {
        let inline_kind = self.get(id)?.is_inline();
        let display = self.style(id)?.display;
        if (display == OuterDisplay::Inline) != inline_kind {
            return Err(BoxTreeError::DisplayMismatch(id));
        }
        Ok(display)
    }

    /// The border box of a box in canvas space.
    ///
    /// # Errors
    ///
    /// Returns [`BoxTreeError::UnknownBox`] if `id` is not in this tree.
    pub fn bounds(&self, id: BoxId) -> Result<Rect> {
        Ok(self.get(id)?.bounds())
    }

    /// Append `child` as the last child of `parent`.
    ///
    /// Inline parents receive the child as inline content; block parents in
    /// their block child list.
    ///
    /// # Errors
    ///
    /// Returns [`BoxTreeError::UnknownBox`] if either id is not in this tree.
    pub fn append_child(&mut self, parent: BoxId, child: BoxId) -> Result<()> {
        let _ = self.get(child)?;
        let parent_box = self.get_mut(parent)?;
        match &mut parent_box.kind {
            BoxKind::Inline(inline) => inline.inline_children.push(InlineChild::Box(child)),
            BoxKind::Block(_) | BoxKind::Floated { .. } => parent_box.children.push(child),
        }
        self.get_mut(child)?.parent = Some(parent);
        Ok(())
    }

    /// Append a text run to an inline box.
    ///
    /// # Errors
    ///
    /// Returns [`BoxTreeError::UnknownBox`] if `id` is not in this tree. Text
    /// appended to a block-level box is ignored.
    pub fn append_text(&mut self, id: BoxId, run: TextRun) -> Result<()> {
        if let BoxKind::Inline(inline) = &mut self.get_mut(id)?.kind {
            inline.inline_children.push(InlineChild::Text(run));
        }
        Ok(())
    }

    /// Get the parent of a box.
    #[must_use]
    pub fn parent(&self, id: BoxId) -> Option<BoxId> {
        self.get(id).ok().and_then(|b| b.parent)
    }

    /// Get the block-level children of a box.
    #[must_use]
    pub fn children(&self, id: BoxId) -> &[BoxId] {
        self.get(id).map_or(&[], |b| b.children.as_slice())
    }

    // ------------------------------------------------------------------
    // Layer back references
    // ------------------------------------------------------------------

    /// The layer `id` induced, if any.
    #[must_use]
    pub fn layer(&self, id: BoxId) -> Option<LayerId> {
        self.get(id).ok().and_then(|b| b.layer)
    }

    /// Record the layer `id` induced.
    ///
    /// # Errors
    ///
    /// Returns [`BoxTreeError::UnknownBox`] if `id` is not in this tree.
    pub fn set_layer(&mut self, id: BoxId, layer: LayerId) -> Result<()> {
        self.get_mut(id)?.layer = Some(layer);
        Ok(())
    }

    /// Forget the layer of a box that is being destroyed or re-laid out.
    ///
    /// # Errors
    ///
    /// Returns [`BoxTreeError::UnknownBox`] if `id` is not in this tree.
    pub fn clear_layer(&mut self, id: BoxId) -> Result<()> {
        let layout_box = self.get_mut(id)?;
        layout_box.layer = None;
        layout_box.containing_layer = None;
        Ok(())
    }

    /// The layer whose content `id` belongs to.
    #[must_use]
    pub fn containing_layer(&self, id: BoxId) -> Option<LayerId> {
        self.get(id).ok().and_then(|b| b.containing_layer)
    }

    /// Record the layer whose content `id` belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`BoxTreeError::UnknownBox`] if `id` is not in this tree.
    pub fn set_containing_layer(&mut self, id: BoxId, layer: LayerId) -> Result<()> {
        self.get_mut(id)?.containing_layer = Some(layer);
        Ok(())
    }

    /// The layer responsible for painting a floated box.
    #[must_use]
    pub fn drawing_layer(&self, id: BoxId) -> Option<LayerId> {
        match self.get(id).ok().map(|b| &b.kind) {
            Some(BoxKind::Floated { drawing_layer, .. }) => *drawing_layer,
            _ => None,
        }
    }

    /// Record the layer responsible for painting a floated box.
    ///
    /// # Errors
    ///
    /// Returns [`BoxTreeError::NotFloated`] if `id` is not a floated box.
    pub fn set_drawing_layer(&mut self, id: BoxId, layer: LayerId) -> Result<()> {
        match &mut self.get_mut(id)?.kind {
            BoxKind::Floated { drawing_layer, .. } => {
                *drawing_layer = Some(layer);
                Ok(())
            }
            BoxKind::Block(_) | BoxKind::Inline(_) => Err(BoxTreeError::NotFloated(id)),
        }
    }

    // ------------------------------------------------------------------
    // Float registry
    // ------------------------------------------------------------------

    /// Register `float` with the formatting context owned by `owner`,
    /// creating the registry on first use.
    ///
    /// # Errors
    ///
    /// Returns [`BoxTreeError::NotFloated`] if `float` is not a floated box,
    /// or [`BoxTreeError::UnknownBox`]. Inline owners cannot hold a registry
    /// and are ignored.
    pub fn register_float(&mut self, owner: BoxId, float: BoxId) -> Result<()> {
        if !self.get(float)?.is_floated() {
            return Err(BoxTreeError::NotFloated(float));
        }
        if let Some(block) = self.get_mut(owner)?.block_data_mut() {
            block
                .float_registry
                .get_or_insert_with(FloatRegistry::new)
                .register(float);
        }
        Ok(())
    }

    /// Iterate the floats registered with the formatting context `id` owns.
    ///
    /// Yields nothing when `id` owns no registry.
    pub fn floats(&self, id: BoxId) -> impl Iterator<Item = BoxId> + '_ {
        self.get(id)
            .ok()
            .and_then(LayoutBox::float_registry)
            .into_iter()
            .flat_map(FloatRegistry::iter)
    }

    // ------------------------------------------------------------------
    // Positioning
    // ------------------------------------------------------------------

    /// Move a box to a new local and absolute origin, carrying its
    /// descendants along in canvas space.
    ///
    /// # Errors
    ///
    /// Returns [`BoxTreeError::UnknownBox`] if `id` or one of its descendants
    /// is not in this tree.
    pub fn move_to(&mut self, id: BoxId, x: f32, y: f32, abs_x: f32, abs_y: f32) -> Result<()> {
        let layout_box = self.get_mut(id)?;
        let dx = abs_x - layout_box.abs_x;
        let dy = abs_y - layout_box.abs_y;
        layout_box.x = x;
        layout_box.y = y;
        layout_box.abs_x = abs_x;
        layout_box.abs_y = abs_y;

        if dx != 0.0 || dy != 0.0 {
            self.translate_descendants(id, dx, dy)?;
        }
        Ok(())
    }

    fn translate_descendants(&mut self, id: BoxId, dx: f32, dy: f32) -> Result<()> {
        let mut stack = self.get(id)?.child_boxes();
        while let Some(current) = stack.pop() {
            let layout_box = self.get_mut(current)?;
            layout_box.abs_x += dx;
            layout_box.abs_y += dy;
            stack.extend(layout_box.child_boxes());
        }
        Ok(())
    }

    /// [§ 10.3.7](https://www.w3.org/TR/CSS2/visudet.html#abs-non-replaced-width)
    ///
    /// Resolve an absolutely positioned box against its containing block.
    ///
    /// # Errors
    ///
    /// Returns [`BoxTreeError::MissingContainingBlock`] when layout did not
    /// assign a containing block, or a style/lookup error.
    pub fn position_absolute(&mut self, id: BoxId) -> Result<()> {
        let offsets = self.style(id)?.offsets;
        let layout_box = self.get(id)?;
        let containing_block = layout_box
            .containing_block
            .ok_or(BoxTreeError::MissingContainingBlock(id))?;

        let (x, y) = PositionedLayout::layout_absolute(
            &offsets,
            (layout_box.width, layout_box.height),
            (layout_box.x, layout_box.y),
            containing_block,
        );
        trace!("absolute {id}: ({x}, {y}) in {containing_block:?}");

        self.move_to(id, x, y, containing_block.x + x, containing_block.y + y)
    }

    /// [§ 9.4.3 Relative positioning](https://www.w3.org/TR/CSS2/visuren.html#relative-positioning)
    ///
    /// Shift a box from its normal-flow position by its offsets.
    ///
    /// # Errors
    ///
    /// Returns a style or lookup error.
    pub fn position_relative(&mut self, id: BoxId) -> Result<()> {
        let offsets = self.style(id)?.offsets;
        let (dx, dy) = PositionedLayout::layout_relative(&offsets);
        let layout_box = self.get(id)?;
        let (x, y) = (layout_box.x + dx, layout_box.y + dy);
        let (abs_x, abs_y) = (layout_box.abs_x + dx, layout_box.abs_y + dy);
        trace!("relative {id}: shifted by ({dx}, {dy})");

        self.move_to(id, x, y, abs_x, abs_y)
    }
}
