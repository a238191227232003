//! Error types for cfg-ir
//!
//! Provides unified error handling across the crate.

use thiserror::Error;

use crate::features::flow_graph::domain::BlockId;

/// Main error type for cfg-ir operations
#[derive(Debug, Error)]
pub enum CfgError {
    /// An operation addressed a block id that is not present in the arena.
    /// This indicates a builder logic defect and is always fatal to the
    /// current build.
    #[error("invalid block reference: {0}")]
    InvalidBlock(BlockId),

    /// A `break` statement was encountered with no enclosing loop.
    #[error("break statement outside of a loop")]
    BreakOutsideLoop,

    /// A `continue` statement was encountered with no enclosing loop.
    #[error("continue statement outside of a loop")]
    ContinueOutsideLoop,

    /// Serialization error from an export adapter
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for cfg-ir operations
pub type Result<T> = std::result::Result<T, CfgError>;
