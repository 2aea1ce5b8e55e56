//! Gathering the paintable content of a layer.
//!
//! A layer paints the boxes of its master's subtree that belong to it: boxes
//! that induced their own layer are painted by that layer, and floats are
//! painted by the layer they are attached to.

use stratum_box::{BoxId, BoxKind, BoxTree, InlineChild, LayerId, Rect};

use crate::error::Result;
use crate::layer::LayerTree;

/// A piece of inline content ready to paint.
#[derive(Debug, Clone, PartialEq)]
pub struct InlinePaintable {
    /// The inline box the text belongs to.
    pub owner: BoxId,
    /// The text.
    pub text: String,
    /// Bounds in canvas space.
    pub bounds: Rect,
}

/// Output of a collection pass.
#[derive(Debug, Clone, Default)]
pub struct Collected {
    /// Block-level boxes within the clip, in document order.
    pub blocks: Vec<BoxId>,
    /// Inline items within the clip, in document order.
    pub lines: Vec<InlinePaintable>,
}

/// Finds what a layer has to paint inside a clip region.
pub trait BoxCollector {
    /// Collect the content of `layer` visible within `clip`.
    ///
    /// With a `starting_box` the walk is rooted there and the starting box
    /// itself is included. Without one the walk starts at the layer's master,
    /// which is left out (the layer paints it separately).
    ///
    /// # Errors
    ///
    /// Fails on an unknown layer or box.
    fn collect(
        &self,
        boxes: &BoxTree,
        layers: &LayerTree,
        clip: Rect,
        layer: LayerId,
        starting_box: Option<BoxId>,
    ) -> Result<Collected>;
}

/// Document-order collector over the box tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlowCollector;

impl BoxCollector for FlowCollector {
    fn collect(
        &self,
        boxes: &BoxTree,
        layers: &LayerTree,
        clip: Rect,
        layer: LayerId,
        starting_box: Option<BoxId>,
    ) -> Result<Collected> {
        let root = match starting_box {
            Some(id) => id,
            None => layers.get(layer)?.master(),
        };
        let mut collected = Collected::default();
        let mut walk = Walk {
            boxes,
            clip,
            root,
            include_root: starting_box.is_some(),
            collected: &mut collected,
        };
        walk.visit(root)?;
        Ok(collected)
    }
}

struct Walk<'a> {
    boxes: &'a BoxTree,
    clip: Rect,
    root: BoxId,
    include_root: bool,
    collected: &'a mut Collected,
}

impl Walk<'_> {
    fn visit(&mut self, id: BoxId) -> Result<()> {
        let layout_box = self.boxes.get(id)?;
        let is_root = id == self.root;
        if !is_root && (layout_box.layer.is_some() || layout_box.is_floated()) {
            return Ok(());
        }

        match &layout_box.kind {
            BoxKind::Inline(inline) => {
                for child in &inline.inline_children {
                    match child {
                        InlineChild::Text(run) => {
                            let bounds = run.bounds.translate(layout_box.abs_x, layout_box.abs_y);
                            if bounds.intersects(&self.clip) {
                                self.collected.lines.push(InlinePaintable {
                                    owner: id,
                                    text: run.text.clone(),
                                    bounds,
                                });
                            }
                        }
                        InlineChild::Box(child) => self.visit(*child)?,
                    }
                }
            }
            BoxKind::Block(_) | BoxKind::Floated { .. } => {
                if (!is_root || self.include_root) && layout_box.bounds().intersects(&self.clip)
                {
                    self.collected.blocks.push(id);
                }
                for &child in &layout_box.children {
                    self.visit(child)?;
                }
            }
        }
        Ok(())
    }
}
