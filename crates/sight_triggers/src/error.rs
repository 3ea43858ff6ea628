//! Error types for condition setup

use crate::target::TargetId;
use thiserror::Error;

/// Errors raised while setting a condition up.
///
/// Per-tick evaluation never fails; a condition that cannot be satisfied
/// simply keeps reporting `false`.
#[derive(Debug, Error)]
pub enum ConditionError {
    /// Target could not be resolved from the scene
    #[error("Target not found: {0:?}")]
    TargetNotFound(TargetId),

    /// Configuration could not be parsed
    #[error("Invalid condition configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

/// Result type for condition setup
pub type Result<T> = std::result::Result<T, ConditionError>;
