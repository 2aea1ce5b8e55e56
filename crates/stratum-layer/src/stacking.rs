//! Stacking order resolution.
//!
//! [§ 9.9 Layered presentation](https://www.w3.org/TR/CSS2/visuren.html#layers)
//!
//! "An element in CSS 2 may have a stack level, which describes its position
//! within a set of elements sharing the same stacking context."
//!
//! [CSS 2.1 Appendix E.2 Painting order](https://www.w3.org/TR/CSS2/zindex.html#painting-order)
//!
//! A stacking context paints the descendant layers it owns in batches. Layers
//! that are not stacking contexts are transparent to the search: their own
//! stacking-context descendants belong to the enclosing context. A nested
//! stacking context is opaque: nothing below it is ever collected here.

use strum_macros::{Display, EnumIter};

use stratum_box::{BoxTree, LayerId};

use crate::error::Result;
use crate::layer::LayerTree;

/// A batch of descendant layers painted together.
///
/// [CSS 2.1 Appendix E.2](https://www.w3.org/TR/CSS2/zindex.html#painting-order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum StackBatch {
    /// Step 3: "Stacking contexts formed by positioned descendants with
    /// negative z-indices (excluding 0) in z-index order (most negative
    /// first) then tree order."
    Negative,
    /// Step 9: stacking contexts with z-index 0.
    Zero,
    /// Step 10: "Stacking contexts formed by positioned descendants with
    /// z-indices greater than or equal to 1 in z-index order (smallest
    /// first) then tree order."
    Positive,
    /// Step 8: "All positioned descendants with 'z-index: auto' or
    /// 'z-index: 0', in tree order." Here only the `auto` ones, which never
    /// form a stacking context.
    Auto,
}

impl StackBatch {
    /// Whether a stacking-context layer with this stack level belongs to the
    /// batch. Never true for [`StackBatch::Auto`].
    #[must_use]
    pub const fn admits(self, z_index: i32) -> bool {
        match self {
            Self::Negative => z_index < 0,
            Self::Zero => z_index == 0,
            Self::Positive => z_index > 0,
            Self::Auto => false,
        }
    }
}

impl LayerTree {
    /// Collect the descendant layers of `id` in `batch`, in encounter order.
    ///
    /// For the z-index batches the direct stacking-context children come
    /// first, followed by what each non-stacking-context child contributes,
    /// recursively. For [`StackBatch::Auto`] every non-stacking-context
    /// descendant reachable without crossing a stacking context is listed,
    /// each before its own descendants.
    ///
    /// # Errors
    ///
    /// Fails on an unknown layer or an unresolved master style.
    pub fn collect_layers(
        &self,
        boxes: &BoxTree,
        id: LayerId,
        batch: StackBatch,
    ) -> Result<Vec<LayerId>> {
        let mut result = Vec::new();
        self.collect_into(boxes, id, batch, &mut result)?;
        Ok(result)
    }

    fn collect_into(
        &self,
        boxes: &BoxTree,
        id: LayerId,
        batch: StackBatch,
        result: &mut Vec<LayerId>,
    ) -> Result<()> {
        let children = self.get(id)?.children();

        if batch != StackBatch::Auto {
            for &child in &children {
                let layer = self.get(child)?;
                if layer.is_stacking_context() && batch.admits(layer.z_index(boxes)?) {
                    result.push(child);
                }
            }
        }

        for child in children {
            if !self.get(child)?.is_stacking_context() {
                if batch == StackBatch::Auto {
                    result.push(child);
                }
                self.collect_into(boxes, child, batch, result)?;
            }
        }
        Ok(())
    }

    /// [`collect_layers`](Self::collect_layers), stably sorted by ascending
    /// z-index. Equal z-indices keep their encounter order.
    ///
    /// # Errors
    ///
    /// Fails on an unknown layer or an unresolved master style.
    pub fn sorted_layers(
        &self,
        boxes: &BoxTree,
        id: LayerId,
        batch: StackBatch,
    ) -> Result<Vec<LayerId>> {
        let mut keyed = self
            .collect_layers(boxes, id, batch)?
            .into_iter()
            .map(|layer| Ok((self.get(layer)?.z_index(boxes)?, layer)))
            .collect::<Result<Vec<_>>>()?;
        keyed.sort_by_key(|&(z_index, _)| z_index);
        Ok(keyed.into_iter().map(|(_, layer)| layer).collect())
    }
}
