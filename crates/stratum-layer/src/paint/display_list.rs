//! Display List - a recording of drawing calls
//!
//! [CSS 2.1 Appendix E](https://www.w3.org/TR/CSS2/zindex.html)
//!
//! [`DisplayListCanvas`] implements [`Canvas`] by appending one
//! [`DisplayCommand`] per call, so the painting order produced by the layer
//! painter can be replayed by a backend or inspected directly.

use stratum_box::{BoxId, LayoutBox, ListMarker, Rect, ReplacedContent};

use super::canvas::Canvas;
use crate::collect::InlinePaintable;

/// A single drawing command.
///
/// Commands are added to the display list in painting order (back to front).
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayCommand {
    /// Paint the background of a box.
    Background {
        /// The box painted.
        box_id: BoxId,
        /// Its border box.
        rect: Rect,
    },

    /// Paint the border of a box.
    Border {
        /// The box painted.
        box_id: BoxId,
        /// Its border box.
        rect: Rect,
    },

    /// Outline a box for debugging.
    DebugOutline {
        /// The box outlined.
        box_id: BoxId,
        /// Its border box.
        rect: Rect,
    },

    /// Draw a list item marker.
    ///
    /// [§ 12.5 Lists](https://www.w3.org/TR/CSS2/generate.html#lists)
    ListMarker {
        /// The list item.
        box_id: BoxId,
        /// Marker text.
        text: String,
        /// The list item's border box.
        rect: Rect,
    },

    /// Draw text.
    ///
    /// [CSS 2.1 Appendix E.2](https://www.w3.org/TR/CSS2/zindex.html#painting-order)
    /// Step 7: "the element's text"
    Text {
        /// The inline box the text belongs to.
        box_id: BoxId,
        /// The text content to draw.
        text: String,
        /// Text bounds.
        rect: Rect,
    },

    /// Let an embedded widget draw itself.
    ///
    /// [CSS 2.1 Appendix E.2](https://www.w3.org/TR/CSS2/zindex.html#painting-order)
    /// Step 5: "the replaced content of replaced inline-level elements"
    Component {
        /// The replaced box.
        box_id: BoxId,
        /// Widget source key.
        source: String,
        /// The replaced box's border box.
        rect: Rect,
    },
}

impl DisplayCommand {
    /// The box this command draws.
    #[must_use]
    pub const fn box_id(&self) -> BoxId {
        match self {
            Self::Background { box_id, .. }
            | Self::Border { box_id, .. }
            | Self::DebugOutline { box_id, .. }
            | Self::ListMarker { box_id, .. }
            | Self::Text { box_id, .. }
            | Self::Component { box_id, .. } => *box_id,
        }
    }
}

/// A list of drawing commands in painting order.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    commands: Vec<DisplayCommand>,
}

impl DisplayList {
    /// Create an empty display list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Add a command to the display list.
    pub fn push(&mut self, command: DisplayCommand) {
        self.commands.push(command);
    }

    /// Get the commands in painting order.
    #[must_use]
    pub fn commands(&self) -> &[DisplayCommand] {
        &self.commands
    }

    /// Get the number of commands.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if the display list is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// A [`Canvas`] that records every call into a [`DisplayList`].
#[derive(Debug, Clone)]
pub struct DisplayListCanvas {
    clip: Rect,
    list: DisplayList,
}

impl DisplayListCanvas {
    /// Record into an empty list, clipping to `clip`.
    #[must_use]
    pub const fn new(clip: Rect) -> Self {
        Self {
            clip,
            list: DisplayList::new(),
        }
    }

    /// The commands recorded so far.
    #[must_use]
    pub const fn display_list(&self) -> &DisplayList {
        &self.list
    }

    /// Take the recorded list.
    #[must_use]
    pub fn into_display_list(self) -> DisplayList {
        self.list
    }
}

impl Canvas for DisplayListCanvas {
    fn clip(&self) -> Rect {
        self.clip
    }

    fn paint_background(&mut self, id: BoxId, layout_box: &LayoutBox) {
        self.list.push(DisplayCommand::Background {
            box_id: id,
            rect: layout_box.bounds(),
        });
    }

    fn paint_border(&mut self, id: BoxId, layout_box: &LayoutBox) {
        self.list.push(DisplayCommand::Border {
            box_id: id,
            rect: layout_box.bounds(),
        });
    }

    fn paint_debug_outline(&mut self, id: BoxId, layout_box: &LayoutBox) {
        self.list.push(DisplayCommand::DebugOutline {
            box_id: id,
            rect: layout_box.bounds(),
        });
    }

    fn paint_list_marker(&mut self, id: BoxId, layout_box: &LayoutBox, marker: &ListMarker) {
        self.list.push(DisplayCommand::ListMarker {
            box_id: id,
            text: marker.text.clone(),
            rect: layout_box.bounds(),
        });
    }

    fn paint_inline(&mut self, item: &InlinePaintable) {
        self.list.push(DisplayCommand::Text {
            box_id: item.owner,
            text: item.text.clone(),
            rect: item.bounds,
        });
    }

    fn paint_component(&mut self, id: BoxId, layout_box: &LayoutBox, content: &ReplacedContent) {
        self.list.push(DisplayCommand::Component {
            box_id: id,
            source: content.source.clone(),
            rect: layout_box.bounds(),
        });
    }
}
