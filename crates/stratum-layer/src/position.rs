//! Final positioning of layer masters.
//!
//! [§ 9.3 Positioning schemes](https://www.w3.org/TR/CSS2/visuren.html#positioning-scheme)
//!
//! Absolute and inline relative offsets are resolved once layout has settled.
//! Fixed masters depend on the viewport and are re-anchored every time they
//! are painted instead.

use log::{debug, trace};
use stratum_box::{BoxId, BoxTree, LayerId, Rect};

use crate::error::Result;
use crate::layer::LayerTree;

impl LayerTree {
    /// Finalize the position of every child of `id`.
    ///
    /// # Errors
    ///
    /// Fails on an unknown layer, an unresolved style, or an absolute master
    /// without a containing block.
    pub fn position_children(&self, boxes: &mut BoxTree, id: LayerId) -> Result<()> {
        for child in self.get(id)?.children() {
            self.finalize_position(boxes, child)?;
        }
        Ok(())
    }

    /// Resolve the final offsets of one layer's master.
    ///
    /// Block-level relative positioning is already applied by layout; only
    /// inline relative masters are shifted here.
    ///
    /// # Errors
    ///
    /// See [`position_children`](Self::position_children).
    pub fn finalize_position(&self, boxes: &mut BoxTree, id: LayerId) -> Result<()> {
        let layer = self.get(id)?;
        let master = layer.master();
        let style = *boxes.style(master)?;

        if style.is_absolute() {
            trace!("finalize {id}: absolute master {master}");
            boxes.position_absolute(master)?;
        } else if style.is_relative() && layer.is_inline() {
            trace!("finalize {id}: inline relative master {master}");
            boxes.position_relative(master)?;
        }
        Ok(())
    }
}

/// [§ 9.6.1 Fixed positioning](https://www.w3.org/TR/CSS2/visuren.html#fixed-positioning)
///
/// "Fixed positioning is a subcategory of absolute positioning. The only
/// difference is that for a fixed positioned box, the containing block is
/// established by the viewport."
///
/// Re-anchor a fixed master against the current viewport rectangle. The
/// rectangle is moved up and left by one unit so the box border does not
/// overlap the viewport edge.
///
/// # Errors
///
/// Fails on an unknown box or an unresolved style.
pub fn position_fixed_layer(boxes: &mut BoxTree, master: BoxId, fixed_rectangle: Rect) -> Result<()> {
    let viewport = fixed_rectangle.translate(-1.0, -1.0);
    debug!("re-anchoring fixed box {master} against {viewport:?}");

    boxes.move_to(master, 0.0, -viewport.y, 0.0, 0.0)?;
    boxes.get_mut(master)?.containing_block = Some(viewport);
    boxes.position_absolute(master)?;
    Ok(())
}
