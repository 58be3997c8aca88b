//! Evaluation report

use serde::{Deserialize, Serialize};

/// Outcome of evaluating a submission: passed, or failed with exactly one
/// reason. There is no partial credit and no failure aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Whether every directive was satisfied
    pub passed: bool,
    /// The first violation's message, when failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl EvaluationReport {
    /// A passing report.
    pub fn passed() -> Self {
        Self {
            passed: true,
            reason: None,
        }
    }

    /// A failing report with the violation's message.
    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            passed: false,
            reason: Some(reason.into()),
        }
    }
}
