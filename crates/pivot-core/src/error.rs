//! Error types for transform operations.

use thiserror::Error;

/// Errors that can occur while scaling, rotating or cropping.
///
/// None of these are fatal: every operation is deterministic, so the caller
/// either changes its inputs or gives up. Nothing is retried internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// The drawing surface could not allocate a canvas or read back pixels.
    #[error("allocation failure: {0}")]
    AllocationFailure(String),

    /// A zero-area (or otherwise unusable) source where a scale factor
    /// would require division by zero.
    #[error("degenerate input: {0}")]
    DegenerateInput(String),

    /// A crop rectangle outside the bounds of the buffer it crops.
    #[error("invalid region: {0}")]
    InvalidRegion(String),
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
