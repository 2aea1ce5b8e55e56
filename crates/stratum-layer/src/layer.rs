//! The layer tree.
//!
//! [CSS 2.1 Appendix E.2 Painting order](https://www.w3.org/TR/CSS2/zindex.html#painting-order)
//!
//! A [`Layer`] is created for every box that establishes a stacking context or
//! a positioning boundary. Layers live in an append-only arena and refer to
//! each other and to their master box by index. Each layer guards its own
//! children and floats, so layout threads working on sibling subtrees only
//! contend when they attach to the same parent.

use std::fmt;

use log::{debug, trace};
use parking_lot::{Mutex, RwLock};
use stratum_box::{BoxId, BoxTree, LayerId, OuterDisplay};
use stratum_common::warning::warn_once;

use crate::error::{LayerError, Result};

const UNATTACHED_FLOAT: &str = "removing a float that is not attached";

/// One node of the layer tree.
#[derive(Debug)]
pub struct Layer {
    parent: Option<LayerId>,
    master: BoxId,
    stacking_context: bool,
    inline: bool,
    end: Option<BoxId>,
    fixed_background: bool,
    children: RwLock<Vec<LayerId>>,
    floats: Mutex<Vec<BoxId>>,
}

impl Layer {
    /// The parent layer, `None` for the root.
    #[must_use]
    pub const fn parent(&self) -> Option<LayerId> {
        self.parent
    }

    /// The box that induced this layer.
    #[must_use]
    pub const fn master(&self) -> BoxId {
        self.master
    }

    /// [§ 9.9.1](https://www.w3.org/TR/CSS2/visuren.html#z-index)
    ///
    /// "The root element forms the root stacking context. Other stacking
    /// contexts are generated by any positioned element ... having a computed
    /// value of 'z-index' other than 'auto'."
    #[must_use]
    pub const fn is_stacking_context(&self) -> bool {
        self.stacking_context
    }

    /// A parentless stacking context.
    #[must_use]
    pub const fn is_root_layer(&self) -> bool {
        self.parent.is_none() && self.stacking_context
    }

    /// Whether the master is an inline box.
    #[must_use]
    pub const fn is_inline(&self) -> bool {
        self.inline
    }

    /// Mark the layer as inline (or not).
    pub const fn set_inline(&mut self, inline: bool) {
        self.inline = inline;
    }

    /// The box where a split inline layer's content ends.
    #[must_use]
    pub const fn end(&self) -> Option<BoxId> {
        self.end
    }

    /// Set the box where a split inline layer's content ends.
    pub const fn set_end(&mut self, end: Option<BoxId>) {
        self.end = end;
    }

    /// Whether the master paints a `background-attachment: fixed` background.
    #[must_use]
    pub const fn fixed_background(&self) -> bool {
        self.fixed_background
    }

    /// Record whether the master paints a fixed background.
    pub const fn set_fixed_background(&mut self, fixed_background: bool) {
        self.fixed_background = fixed_background;
    }

    /// The z-index of the master, `auto` reading as 0.
    ///
    /// # Errors
    ///
    /// Fails if the master's style is unresolved.
    pub fn z_index(&self, boxes: &BoxTree) -> Result<i32> {
        Ok(boxes.style(self.master)?.z_index.stack_level())
    }

    /// Snapshot of the child layers in attachment order.
    #[must_use]
    pub fn children(&self) -> Vec<LayerId> {
        self.children.read().clone()
    }

    /// Snapshot of the attached floats in attachment order.
    #[must_use]
    pub fn floats(&self) -> Vec<BoxId> {
        self.floats.lock().clone()
    }
}

/// Arena of layers.
///
/// Creation and attachment take `&self`: the arena only grows, and each
/// layer carries its own locks.
pub struct LayerTree {
    layers: boxcar::Vec<Layer>,
    root: Mutex<Option<LayerId>>,
}

impl LayerTree {
    /// Create an empty layer tree.
    #[must_use]
    pub fn new() -> Self {
        Self {
            layers: boxcar::Vec::new(),
            root: Mutex::new(None),
        }
    }

    /// Number of layers ever created.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.count()
    }

    /// Whether no layer has been created yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The root layer, once created.
    #[must_use]
    pub fn root(&self) -> Option<LayerId> {
        *self.root.lock()
    }

    /// Look up a layer.
    ///
    /// # Errors
    ///
    /// Returns [`LayerError::UnknownLayer`] for an id this tree never issued.
    pub fn get(&self, id: LayerId) -> Result<&Layer> {
        self.layers.get(id.0).ok_or(LayerError::UnknownLayer(id))
    }

    /// Look up a layer for its driver-settable flags.
    ///
    /// # Errors
    ///
    /// Returns [`LayerError::UnknownLayer`] for an id this tree never issued.
    pub fn get_mut(&mut self, id: LayerId) -> Result<&mut Layer> {
        self.layers.get_mut(id.0).ok_or(LayerError::UnknownLayer(id))
    }

    /// Create the layer induced by `master`.
    ///
    /// The layer is inline when the master's computed display is inline.
    /// Without a parent the layer becomes the root and is always a stacking
    /// context. With one, it is a stacking context iff the master's z-index is
    /// not `auto`. The master's layer and containing-layer references are set
    /// to the new layer. The layer is not attached: call
    /// [`add_child`](Self::add_child) (or use [`create_child`](Self::create_child)).
    ///
    /// # Errors
    ///
    /// - [`LayerError::AlreadyWrapped`] if the master already has a layer
    /// - [`LayerError::RootExists`] for a second parentless layer
    /// - [`LayerError::UnknownLayer`] if `parent` does not exist
    /// - a box error if the master is unknown, its style unresolved, or its
    ///   display role contradicts its kind
    pub fn create(
        &self,
        boxes: &mut BoxTree,
        master: BoxId,
        parent: Option<LayerId>,
    ) -> Result<LayerId> {
        let inline = boxes.display(master)? == OuterDisplay::Inline;
        if let Some(layer) = boxes.layer(master) {
            return Err(LayerError::AlreadyWrapped { master, layer });
        }
        let z_index = boxes.style(master)?.z_index;
        if let Some(parent) = parent {
            let _ = self.get(parent)?;
        }

        let layer = Layer {
            parent,
            master,
            stacking_context: parent.is_none() || !z_index.is_auto(),
            inline,
            end: None,
            fixed_background: false,
            children: RwLock::new(Vec::new()),
            floats: Mutex::new(Vec::new()),
        };

        let id = if parent.is_none() {
            let mut root = self.root.lock();
            if let Some(existing) = *root {
                return Err(LayerError::RootExists(existing));
            }
            let id = LayerId(self.layers.push(layer));
            *root = Some(id);
            id
        } else {
            LayerId(self.layers.push(layer))
        };

        boxes.set_layer(master, id)?;
        boxes.set_containing_layer(master, id)?;
        debug!("created layer {id} for box {master} (parent {parent:?}, z-index {z_index:?})");
        Ok(id)
    }

    /// Create a layer under `parent` and attach it.
    ///
    /// # Errors
    ///
    /// See [`create`](Self::create).
    pub fn create_child(
        &self,
        boxes: &mut BoxTree,
        master: BoxId,
        parent: LayerId,
    ) -> Result<LayerId> {
        let id = self.create(boxes, master, Some(parent))?;
        self.add_child(parent, id)?;
        Ok(id)
    }

    /// Append `child` to the children of `parent`.
    ///
    /// Serialized per parent; attaching to different parents never contends.
    ///
    /// # Errors
    ///
    /// - [`LayerError::ParentMismatch`] unless `child` was created under `parent`
    /// - [`LayerError::AlreadyAttached`] if `parent` already lists `child`
    /// - [`LayerError::UnknownLayer`]
    pub fn add_child(&self, parent: LayerId, child: LayerId) -> Result<()> {
        let expected = self.get(child)?.parent;
        if expected != Some(parent) {
            return Err(LayerError::ParentMismatch {
                child,
                parent,
                expected,
            });
        }
        let mut children = self.get(parent)?.children.write();
        if children.contains(&child) {
            return Err(LayerError::AlreadyAttached { child, parent });
        }
        children.push(child);
        trace!("attached layer {child} to {parent}");
        Ok(())
    }

    /// Remove a layer from its parent's children.
    ///
    /// The parent back link is kept, so detaching twice fails. Detaching the
    /// root does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`LayerError::NotAChild`] if the parent does not list the layer.
    pub fn detach(&self, id: LayerId) -> Result<()> {
        let Some(parent) = self.get(id)?.parent else {
            return Ok(());
        };
        let mut siblings = self.get(parent)?.children.write();
        let index = siblings
            .iter()
            .position(|&child| child == id)
            .ok_or(LayerError::NotAChild { child: id, parent })?;
        let _ = siblings.remove(index);
        debug!("detached layer {id} from {parent}");
        Ok(())
    }

    /// Attach a floated box to a layer and make it the float's drawing layer.
    ///
    /// # Errors
    ///
    /// Fails if the layer is unknown or `float` is not a floated box.
    pub fn add_float(&self, boxes: &mut BoxTree, id: LayerId, float: BoxId) -> Result<()> {
        let layer = self.get(id)?;
        boxes.set_drawing_layer(float, id)?;
        layer.floats.lock().push(float);
        trace!("float {float} drawn by layer {id}");
        Ok(())
    }

    /// Detach a floated box from a layer.
    ///
    /// Removing a float that is not attached is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`LayerError::UnknownLayer`] if the layer does not exist.
    pub fn remove_float(&self, id: LayerId, float: BoxId) -> Result<()> {
        let mut floats = self.get(id)?.floats.lock();
        match floats.iter().position(|&f| f == float) {
            Some(index) => {
                let _ = floats.remove(index);
            }
            None => {
                let _ = warn_once("layer", UNATTACHED_FLOAT);
                debug!("float {float} is not attached to layer {id}");
            }
        }
        Ok(())
    }

    /// Whether painting this layer depends on the viewport: it paints a fixed
    /// background, or one of its direct children is fixed-positioned.
    ///
    /// Grandchildren are not considered.
    ///
    /// # Errors
    ///
    /// Fails on an unknown layer or an unresolved child style.
    pub fn contains_fixed_content(&self, boxes: &BoxTree, id: LayerId) -> Result<bool> {
        let layer = self.get(id)?;
        if layer.fixed_background {
            return Ok(true);
        }
        for child in layer.children() {
            if boxes.style(self.get(child)?.master)?.is_fixed() {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl Default for LayerTree {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LayerTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayerTree")
            .field("root", &self.root())
            .field(
                "layers",
                &(0..self.layers.count())
                    .filter_map(|index| self.layers.get(index))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
