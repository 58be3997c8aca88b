//! Reconciliation error types
//!
//! Every variant is a student-caused or fail-closed condition: the
//! evaluator converts these into failing reports, never into panics or
//! host errors.

use thiserror::Error;

/// Result type for reconciliation operations
pub type ReconcileResult<T> = Result<T, ReconcileError>;

/// Reconciliation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconcileError {
    /// The submission does not match the anchor pattern
    #[error("the submission changed text outside the editable regions")]
    EditedOutsideRegions,

    /// Defensive check: recovered capture count differs from region count
    #[error("editable region mismatch: expected {expected} regions, recovered {actual}")]
    RegionCountMismatch { expected: usize, actual: usize },

    /// The anchor pattern exceeded the compilation budget; matching is
    /// abandoned rather than attempted on a degenerate skeleton
    #[error("anchor pattern exceeds the compilation budget")]
    PatternBudget,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_counts() {
        let err = ReconcileError::RegionCountMismatch {
            expected: 2,
            actual: 1,
        };
        let msg = err.to_string();
        assert!(msg.contains('2'));
        assert!(msg.contains('1'));
    }
}
