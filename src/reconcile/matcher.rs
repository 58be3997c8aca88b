//! Anchor matching against the submitted document
//!
//! Builds a single full-document pattern from literal-escaped anchors
//! joined by non-greedy captures, then runs it once. The `regex` crate's
//! engine is linear-time, so the pattern cannot exhibit the superlinear
//! backtracking a general-purpose engine would risk here; a compiled-size
//! budget covers degenerate skeletons and fails closed.

use regex::{Regex, RegexBuilder};

use crate::text;

use super::errors::{ReconcileError, ReconcileResult};

/// Compiled-pattern size budget. Anchors are plain escaped literals, so
/// realistic skeletons stay far below this.
const PATTERN_SIZE_LIMIT: usize = 1 << 24;

/// Full-document matcher over a fixed anchor sequence.
pub struct AnchorMatcher {
    pattern: Regex,
    region_count: usize,
}

impl AnchorMatcher {
    /// Compile the anchor sequence into a full-document pattern.
    ///
    /// For anchors `[a0, a1, .. aN]` the pattern is
    /// `^a0(.*?)a1(.*?)..aN$` with every anchor literal-escaped and `.`
    /// matching newlines.
    pub fn build(anchors: &[String]) -> ReconcileResult<Self> {
        let mut source = String::from("(?s)^");
        for (i, anchor) in anchors.iter().enumerate() {
            if i > 0 {
                source.push_str("(.*?)");
            }
            source.push_str(&regex::escape(anchor));
        }
        source.push('$');

        let pattern = RegexBuilder::new(&source)
            .size_limit(PATTERN_SIZE_LIMIT)
            .build()
            .map_err(|_| ReconcileError::PatternBudget)?;

        Ok(Self {
            pattern,
            region_count: anchors.len().saturating_sub(1),
        })
    }

    /// Number of regions this matcher recovers.
    pub fn region_count(&self) -> usize {
        self.region_count
    }

    /// Recover one body per region from the submitted document.
    ///
    /// The submission is newline-normalized and right-trimmed per line
    /// before matching, mirroring anchor normalization: line-trailing
    /// blanks are insignificant on both sides.
    pub fn recover(&self, submitted: &str) -> ReconcileResult<Vec<String>> {
        let document = text::rtrim_lines(&text::normalize_newlines(submitted));

        let captures = self
            .pattern
            .captures(&document)
            .ok_or(ReconcileError::EditedOutsideRegions)?;

        let bodies: Vec<String> = (1..captures.len())
            .map(|i| {
                captures
                    .get(i)
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_default()
            })
            .collect();

        if bodies.len() != self.region_count {
            return Err(ReconcileError::RegionCountMismatch {
                expected: self.region_count,
                actual: bodies.len(),
            });
        }

        Ok(bodies)
    }
}
