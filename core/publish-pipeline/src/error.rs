//! Error types for the publish pipeline.

use crate::context::PublishAction;
use thiserror::Error;

/// Result type for publish pipeline operations.
pub type PublishResult<T> = Result<T, PublishError>;

/// Errors that can occur while deciding a publish action.
///
/// Missing items and versions are not errors; they are ordinary branches of
/// the decision.
#[derive(Debug, Error)]
pub enum PublishError {
    /// The item store failed. Passed through unchanged; the caller owns the
    /// retry policy.
    #[error("store error: {0}")]
    Store(String),

    /// A required argument was missing or malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The context already carries a decision.
    #[error("decision already recorded: {action}")]
    DecisionAlreadyRecorded { action: PublishAction },

    /// Settings could not be parsed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
