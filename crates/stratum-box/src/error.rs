use thiserror::Error;

use crate::tree::BoxId;

/// Errors raised by box tree queries.
///
/// None of these are recoverable by the layer engine: they mean the box tree
/// handed over by layout is incomplete or was mutated behind its back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoxTreeError {
    /// The id does not name a box in this tree.
    #[error("box {0} does not exist")]
    UnknownBox(BoxId),
    /// The cascade has not produced a style for this box.
    #[error("box {0} has no resolved style")]
    UnresolvedStyle(BoxId),
    /// Absolute positioning was requested without a containing block.
    #[error("box {0} has no containing block to position against")]
    MissingContainingBlock(BoxId),
    /// The style's outer display role contradicts the box kind.
    #[error("box {0} has a display role that does not match its kind")]
    DisplayMismatch(BoxId),
    /// A float-only operation was applied to a box that is not floated.
    #[error("box {0} is not a floated box")]
    NotFloated(BoxId),
}

/// Result alias for box tree operations.
pub type Result<T> = std::result::Result<T, BoxTreeError>;
