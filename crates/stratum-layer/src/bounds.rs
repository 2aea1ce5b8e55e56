//! Painting extent of a layer.
//!
//! The extent is the furthest right and bottom edge reached by anything the
//! layer may paint, in canvas space. It sizes the canvas and decides how much
//! has to be repainted when a fixed background scrolls.

use stratum_box::{BoxKind, BoxTree, Dimension, LayerId};

use crate::error::Result;
use crate::layer::LayerTree;

impl LayerTree {
    /// Extent of the master's subtree.
    ///
    /// Visits every descendant box, the inline boxes nested in inline content,
    /// and the floats registered with any block formatting context on the way.
    ///
    /// # Errors
    ///
    /// Fails on an unknown layer or box.
    pub fn scan_layer(&self, boxes: &BoxTree, id: LayerId) -> Result<Dimension> {
        let master = self.get(id)?.master();
        let mut extent = Dimension::reached_by(&boxes.bounds(master)?);
        let mut stack = vec![master];

        while let Some(current) = stack.pop() {
            let layout_box = boxes.get(current)?;
            extent.expand_to(Dimension::reached_by(&layout_box.bounds()));

            match &layout_box.kind {
                BoxKind::Inline(inline) => stack.extend(inline.child_boxes()),
                BoxKind::Block(_) | BoxKind::Floated { .. } => {
                    stack.extend(boxes.floats(current));
                    stack.extend(layout_box.children.iter().copied());
                }
            }
        }
        Ok(extent)
    }

    /// Extent of the layer including its absolutely positioned children.
    ///
    /// Fixed-positioned children are sized against the viewport and are left
    /// out. Only direct children are checked.
    ///
    /// # Errors
    ///
    /// Fails on an unknown layer or box, or an unresolved child style.
    pub fn painting_dimension(&self, boxes: &BoxTree, id: LayerId) -> Result<Dimension> {
        let mut extent = self.scan_layer(boxes, id)?;

        for child in self.get(id)?.children() {
            let style = boxes.style(self.get(child)?.master())?;
            if style.is_fixed() {
                continue;
            }
            if style.is_absolute() {
                extent.expand_to(self.scan_layer(boxes, child)?);
            }
        }
        Ok(extent)
    }
}
