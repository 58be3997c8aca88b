//! Engine error types
//!
//! Host-level conditions only. Everything a student can cause is reported
//! through [`super::EvaluationReport`] instead.

use thiserror::Error;

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Engine errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Two regions share a name; name-keyed rule lookups would silently
    /// collide, so the scenario is rejected outright
    #[error("duplicate editable region name {0:?}")]
    DuplicateRegion(String),
}
