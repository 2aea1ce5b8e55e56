use stratum_box::{BoxId, BoxTreeError, LayerId};
use thiserror::Error;

/// Errors raised while building, positioning, or painting the layer tree.
///
/// Every variant is a broken invariant in the tree handed over by layout.
/// Paint and layout passes stop at the first one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayerError {
    /// The id does not name a layer in this tree.
    #[error("layer {0} does not exist")]
    UnknownLayer(LayerId),

    /// `detach` could not find the layer among its parent's children.
    #[error("layer {child} is not among the children of {parent}")]
    NotAChild {
        /// The layer being detached.
        child: LayerId,
        /// Its recorded parent.
        parent: LayerId,
    },

    /// A second layer was requested for a box that already has one.
    #[error("box {master} is already wrapped by layer {layer}")]
    AlreadyWrapped {
        /// The master box.
        master: BoxId,
        /// The layer that already wraps it.
        layer: LayerId,
    },

    /// A parentless layer was requested but the tree already has a root.
    #[error("the layer tree already has root {0}")]
    RootExists(LayerId),

    /// `add_child` was called on a layer that is not the child's parent.
    #[error("layer {child} was created under {expected:?}, not {parent}")]
    ParentMismatch {
        /// The layer being attached.
        child: LayerId,
        /// The layer it was being attached to.
        parent: LayerId,
        /// The parent recorded at creation.
        expected: Option<LayerId>,
    },

    /// `add_child` was called for a layer its parent already lists.
    #[error("layer {child} is already attached to {parent}")]
    AlreadyAttached {
        /// The layer being attached.
        child: LayerId,
        /// Its parent.
        parent: LayerId,
    },

    /// A box tree query failed (unknown box, unresolved style, ...).
    #[error(transparent)]
    Box(#[from] BoxTreeError),
}

/// Result alias for layer operations.
pub type Result<T> = std::result::Result<T, LayerError>;
