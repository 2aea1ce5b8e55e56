//! Laid-out box records.
//!
//! [§ 9.2 Controlling box generation](https://www.w3.org/TR/CSS2/visuren.html#box-gen)

use crate::box_model::Rect;
use crate::float::FloatRegistry;
use crate::style::BoxStyle;
use crate::tree::{BoxId, LayerId};

/// Content of a replaced element, drawn by an embedded widget.
///
/// [§ 3.1 Replaced elements](https://www.w3.org/TR/css-display-3/#replaced-element)
///
/// "An element whose content is outside the scope of the CSS formatting model,
/// such as an image or embedded document."
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacedContent {
    /// Identifies the widget (an image source, a form control key, ...).
    pub source: String,
}

/// [§ 12.5 Lists](https://www.w3.org/TR/CSS2/generate.html#lists)
///
/// The marker box generated for a `display: list-item` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListMarker {
    /// Rendered marker text ("•", "3.", ...).
    pub text: String,
}

/// A run of text laid out inside an inline box.
///
/// Coordinates are relative to the owning box's absolute origin.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    /// The text content.
    pub text: String,
    /// Position and size relative to the owning box.
    pub bounds: Rect,
}

/// Data carried by block-level boxes (in flow or floated).
#[derive(Debug, Clone, Default)]
pub struct BlockBox {
    /// Set when the block is a replaced element.
    pub replaced: Option<ReplacedContent>,
    /// Set for list items.
    pub list_marker: Option<ListMarker>,
    /// Present when this block owns a block formatting context that
    /// outlives layout (its floats stay queryable).
    pub float_registry: Option<FloatRegistry>,
}

/// An item of an inline box's content.
#[derive(Debug, Clone, PartialEq)]
pub enum InlineChild {
    /// A nested box (inline or atomic).
    Box(BoxId),
    /// A text run.
    Text(TextRun),
}

/// Data carried by inline boxes.
///
/// [§ 9.2.2 Inline-level elements and inline boxes](https://www.w3.org/TR/CSS2/visuren.html#inline-boxes)
#[derive(Debug, Clone, Default)]
pub struct InlineBox {
    /// Inline content in logical order.
    pub inline_children: Vec<InlineChild>,
}

impl InlineBox {
    /// Iterate the boxes among the inline children, skipping text.
    pub fn child_boxes(&self) -> impl Iterator<Item = BoxId> + '_ {
        self.inline_children.iter().filter_map(|child| match child {
            InlineChild::Box(id) => Some(*id),
            InlineChild::Text(_) => None,
        })
    }
}

/// The closed set of box kinds the layer engine distinguishes.
#[derive(Debug, Clone)]
pub enum BoxKind {
    /// An in-flow block-level box.
    Block(BlockBox),
    /// A floated block box, painted by the layer it is attached to.
    Floated {
        /// The block data of the float.
        block: BlockBox,
        /// Layer responsible for painting this float, once attached.
        drawing_layer: Option<LayerId>,
    },
    /// An inline box.
    Inline(InlineBox),
}

/// A box produced by layout.
///
/// Geometry is stored twice, the way layout hands it over: `x`/`y` relative to
/// the containing block, `abs_x`/`abs_y` in canvas space.
#[derive(Debug, Clone)]
pub struct LayoutBox {
    /// What kind of box this is.
    pub kind: BoxKind,
    /// Resolved style; `None` until the cascade has run for this box.
    pub style: Option<BoxStyle>,
    /// Horizontal position relative to the containing block.
    pub x: f32,
    /// Vertical position relative to the containing block.
    pub y: f32,
    /// Horizontal position in canvas space.
    pub abs_x: f32,
    /// Vertical position in canvas space.
    pub abs_y: f32,
    /// Border-box width.
    pub width: f32,
    /// Border-box height.
    pub height: f32,
    /// Containing block (canvas space) used by absolute positioning.
    pub containing_block: Option<Rect>,
    /// Parent box.
    pub parent: Option<BoxId>,
    /// Block-level children in document order. Inline boxes keep their
    /// content in [`InlineBox::inline_children`] instead.
    pub children: Vec<BoxId>,
    /// The layer this box induced, if any.
    pub layer: Option<LayerId>,
    /// The layer this box's content belongs to.
    pub containing_layer: Option<LayerId>,
}

impl LayoutBox {
    /// Create a box of the given kind with zeroed geometry.
    #[must_use]
    pub const fn new(kind: BoxKind, style: BoxStyle) -> Self {
        Self {
            kind,
            style: Some(style),
            x: 0.0,
            y: 0.0,
            abs_x: 0.0,
            abs_y: 0.0,
            width: 0.0,
            height: 0.0,
            containing_block: None,
            parent: None,
            children: Vec::new(),
            layer: None,
            containing_layer: None,
        }
    }

    /// An in-flow block box.
    #[must_use]
    pub fn block(style: BoxStyle) -> Self {
        Self::new(BoxKind::Block(BlockBox::default()), style)
    }

    /// A floated block box.
    #[must_use]
    pub fn floated(style: BoxStyle) -> Self {
        Self::new(
            BoxKind::Floated {
                block: BlockBox::default(),
                drawing_layer: None,
            },
            style,
        )
    }

    /// An inline box.
    #[must_use]
    pub fn inline(style: BoxStyle) -> Self {
        Self::new(BoxKind::Inline(InlineBox::default()), style)
    }

    /// Place the box: sets both local and absolute origin to `(x, y)`.
    #[must_use]
    pub const fn at(mut self, x: f32, y: f32, width: f32, height: f32) -> Self {
        self.x = x;
        self.y = y;
        self.abs_x = x;
        self.abs_y = y;
        self.width = width;
        self.height = height;
        self
    }

    /// The border box in canvas space.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        Rect {
            x: self.abs_x,
            y: self.abs_y,
            width: self.width,
            height: self.height,
        }
    }

    /// Block data for block-level and floated boxes.
    #[must_use]
    pub const fn block_data(&self) -> Option<&BlockBox> {
        match &self.kind {
            BoxKind::Block(block) | BoxKind::Floated { block, .. } => Some(block),
            BoxKind::Inline(_) => None,
        }
    }

    /// Mutable block data for block-level and floated boxes.
    pub fn block_data_mut(&mut self) -> Option<&mut BlockBox> {
        match &mut self.kind {
            BoxKind::Block(block) | BoxKind::Floated { block, .. } => Some(block),
            BoxKind::Inline(_) => None,
        }
    }

    /// Whether this is an inline box.
    #[must_use]
    pub const fn is_inline(&self) -> bool {
        matches!(self.kind, BoxKind::Inline(_))
    }

    /// Whether this is a floated box.
    #[must_use]
    pub const fn is_floated(&self) -> bool {
        matches!(self.kind, BoxKind::Floated { .. })
    }

    /// The widget content if this is a replaced block.
    #[must_use]
    pub const fn replaced(&self) -> Option<&ReplacedContent> {
        match self.block_data() {
            Some(block) => block.replaced.as_ref(),
            None => None,
        }
    }

    /// Whether this is a replaced block.
    #[must_use]
    pub const fn is_replaced(&self) -> bool {
        self.replaced().is_some()
    }

    /// The float registry of the formatting context this box owns, if any.
    #[must_use]
    pub const fn float_registry(&self) -> Option<&FloatRegistry> {
        match self.block_data() {
            Some(block) => block.float_registry.as_ref(),
            None => None,
        }
    }

    /// Child boxes in document order, whatever the kind.
    #[must_use]
    pub fn child_boxes(&self) -> Vec<BoxId> {
        match &self.kind {
            BoxKind::Inline(inline) => inline.child_boxes().collect(),
            BoxKind::Block(_) | BoxKind::Floated { .. } => self.children.clone(),
        }
    }
}
