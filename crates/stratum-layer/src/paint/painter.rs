//! Painter - walks the layer tree in stacking order
//!
//! [CSS 2.1 Appendix E.2 Painting order](https://www.w3.org/TR/CSS2/zindex.html#painting-order)
//!
//! The painter issues drawing calls to a [`Canvas`](super::Canvas) back to front. Within a
//! stacking context the order is:
//!
//! ```text
//! own background and border
//! negative z-index layers
//! block backgrounds and borders, floats, list markers, inline content,
//!   replaced content
//! z-index: auto layers, z-index: 0 layers, positive z-index layers
//! ```

use log::trace;
use stratum_box::{BoxId, BoxTree, LayerId, LayoutBox};

use super::canvas::RenderingContext;
use crate::collect::{BoxCollector, Collected};
use crate::error::Result;
use crate::layer::LayerTree;
use crate::position::position_fixed_layer;
use crate::stacking::StackBatch;

/// Paints layers of a [`LayerTree`].
///
/// Holds no state between calls; every pass asks the collector and the layer
/// tree afresh.
pub struct LayerPainter<'a> {
    layers: &'a LayerTree,
    collector: &'a dyn BoxCollector,
}

impl<'a> LayerPainter<'a> {
    /// Create a painter over `layers`, gathering content with `collector`.
    #[must_use]
    pub fn new(layers: &'a LayerTree, collector: &'a dyn BoxCollector) -> Self {
        Self { layers, collector }
    }

    /// Paint a layer and, if it is a stacking context, the layers it owns.
    ///
    /// Descendant layers are painted with this layer's master position as
    /// their origin. A fixed master is re-anchored against
    /// [`RenderingContext::fixed_rectangle`] first, which moves it in the box
    /// tree.
    ///
    /// # Errors
    ///
    /// Stops at the first unknown layer or box, unresolved style, or failed
    /// positioning.
    pub fn paint(
        &self,
        ctx: &mut RenderingContext<'_>,
        boxes: &mut BoxTree,
        id: LayerId,
        origin_x: f32,
        origin_y: f32,
    ) -> Result<()> {
        let layer = self.layers.get(id)?;
        let master = layer.master();
        trace!("painting layer {id} from origin ({origin_x}, {origin_y})");

        if boxes.style(master)?.is_fixed() {
            position_fixed_layer(boxes, master, ctx.fixed_rectangle)?;
        }

        let master_box = boxes.get(master)?;
        if !layer.is_inline() && master_box.is_replaced() {
            paint_replaced_element(ctx, master, master_box);
            return Ok(());
        }

        let collected = self
            .collector
            .collect(boxes, self.layers, ctx.canvas.clip(), id, None)?;

        if !layer.is_inline() {
            ctx.canvas.paint_background(master, master_box);
            ctx.canvas.paint_border(master, master_box);
            if ctx.options.debug_draw_boxes {
                ctx.canvas.paint_debug_outline(master, master_box);
            }
        }

        let origin = (master_box.abs_x, master_box.abs_y);
        let stacking = layer.is_root_layer() || layer.is_stacking_context();

        if stacking {
            self.paint_batch(ctx, boxes, id, StackBatch::Negative, origin)?;
        }

        paint_backgrounds_and_borders(ctx, boxes, &collected.blocks)?;
        self.paint_floats(ctx, boxes, id)?;
        paint_list_markers(ctx, boxes, &collected.blocks)?;
        paint_inline_content(ctx, &collected);
        paint_replaced_elements(ctx, boxes, &collected.blocks)?;

        if stacking {
            // Auto and zero layers are separate batches; auto paints first.
            for batch in [StackBatch::Auto, StackBatch::Zero, StackBatch::Positive] {
                self.paint_batch(ctx, boxes, id, batch, origin)?;
            }
        }
        Ok(())
    }

    /// Paint the content rooted at `starting_box` as if it were a layer of
    /// its own, without stacking-context processing.
    ///
    /// Used for floats, which belong to a layer but paint their whole subtree
    /// at once.
    ///
    /// # Errors
    ///
    /// Fails on an unknown layer or box.
    pub fn paint_as_layer(
        &self,
        ctx: &mut RenderingContext<'_>,
        boxes: &BoxTree,
        id: LayerId,
        starting_box: BoxId,
    ) -> Result<()> {
        let start = boxes.get(starting_box)?;
        if start.is_replaced() {
            paint_replaced_element(ctx, starting_box, start);
            return Ok(());
        }

        let collected =
            self.collector
                .collect(boxes, self.layers, ctx.canvas.clip(), id, Some(starting_box))?;

        paint_backgrounds_and_borders(ctx, boxes, &collected.blocks)?;
        paint_list_markers(ctx, boxes, &collected.blocks)?;
        paint_inline_content(ctx, &collected);
        paint_replaced_elements(ctx, boxes, &collected.blocks)
    }

    fn paint_batch(
        &self,
        ctx: &mut RenderingContext<'_>,
        boxes: &mut BoxTree,
        id: LayerId,
        batch: StackBatch,
        (origin_x, origin_y): (f32, f32),
    ) -> Result<()> {
        let layers = match batch {
            StackBatch::Auto => self.layers.collect_layers(boxes, id, batch)?,
            StackBatch::Negative | StackBatch::Zero | StackBatch::Positive => {
                self.layers.sorted_layers(boxes, id, batch)?
            }
        };
        if !layers.is_empty() {
            trace!("layer {id}: painting {} {batch} layer(s)", layers.len());
        }
        for layer in layers {
            self.paint(ctx, boxes, layer, origin_x, origin_y)?;
        }
        Ok(())
    }

    /// Floats are painted most recently attached first.
    fn paint_floats(
        &self,
        ctx: &mut RenderingContext<'_>,
        boxes: &BoxTree,
        id: LayerId,
    ) -> Result<()> {
        for float in self.layers.get(id)?.floats().into_iter().rev() {
            self.paint_as_layer(ctx, boxes, id, float)?;
        }
        Ok(())
    }
}

fn paint_backgrounds_and_borders(
    ctx: &mut RenderingContext<'_>,
    boxes: &BoxTree,
    blocks: &[BoxId],
) -> Result<()> {
    for &id in blocks {
        let layout_box = boxes.get(id)?;
        ctx.canvas.paint_background(id, layout_box);
        ctx.canvas.paint_border(id, layout_box);
        if ctx.options.debug_draw_boxes {
            ctx.canvas.paint_debug_outline(id, layout_box);
        }
    }
    Ok(())
}

fn paint_list_markers(
    ctx: &mut RenderingContext<'_>,
    boxes: &BoxTree,
    blocks: &[BoxId],
) -> Result<()> {
    for &id in blocks {
        let layout_box = boxes.get(id)?;
        if let Some(marker) = layout_box.block_data().and_then(|b| b.list_marker.as_ref()) {
            ctx.canvas.paint_list_marker(id, layout_box, marker);
        }
    }
    Ok(())
}

fn paint_inline_content(ctx: &mut RenderingContext<'_>, collected: &Collected) {
    for item in &collected.lines {
        ctx.canvas.paint_inline(item);
    }
}

fn paint_replaced_elements(
    ctx: &mut RenderingContext<'_>,
    boxes: &BoxTree,
    blocks: &[BoxId],
) -> Result<()> {
    for &id in blocks {
        paint_replaced_element(ctx, id, boxes.get(id)?);
    }
    Ok(())
}

/// Widgets redraw themselves in interactive mode.
fn paint_replaced_element(ctx: &mut RenderingContext<'_>, id: BoxId, layout_box: &LayoutBox) {
    if ctx.options.interactive {
        return;
    }
    if let Some(content) = layout_box.replaced() {
        ctx.canvas.paint_component(id, layout_box, content);
    }
}
