//! Sandbox error types

use rhai::EvalAltResult;
use thiserror::Error;

/// Result type for sandbox operations
pub type SandboxResult<T> = Result<T, SandboxError>;

/// Sandbox errors
///
/// All variants are reported to the student as failing-test reasons; none
/// propagate past the evaluator.
#[derive(Debug, Clone, Error)]
pub enum SandboxError {
    /// The operation budget ran out (runaway or adversarial code)
    #[error("evaluation exceeded the operation budget")]
    BudgetExhausted,

    /// The script raised or failed to parse
    #[error("{0}")]
    Eval(String),

    /// The result value has no JSON representation
    #[error("test result is not serializable: {0}")]
    Serialize(String),
}

impl SandboxError {
    /// Classify an engine error, keeping budget exhaustion distinct so the
    /// evaluator can fail closed with a precise reason.
    pub(crate) fn from_eval(err: Box<EvalAltResult>) -> Self {
        match &*err {
            EvalAltResult::ErrorTooManyOperations(_) => Self::BudgetExhausted,
            _ => Self::Eval(err.to_string()),
        }
    }
}
