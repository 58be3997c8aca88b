//! Anchor splitting
//!
//! Anchors are the literal "outside" segments before, between, and after
//! regions. Marker lines are removed and every line is right-trimmed, so
//! anchors are insensitive to marker formatting and trailing blanks. All
//! remaining characters are load-bearing for reconciliation.

use crate::text;

use super::extractor::strip_markers;
use super::region::Region;

/// Split the skeleton into anchors around the given regions.
///
/// Returns `regions.len() + 1` segments.
pub fn split_anchors(skeleton: &str, regions: &[Region]) -> Vec<String> {
    let mut anchors = Vec::with_capacity(regions.len() + 1);
    let mut cursor = 0usize;

    for region in regions {
        anchors.push(clean(&skeleton[cursor..region.full_start]));
        cursor = region.full_end;
    }
    anchors.push(clean(&skeleton[cursor..]));

    anchors
}

/// Marker lines can survive outside region ranges (an unclosed begin
/// marker); they are stripped here exactly as they are from the visible
/// document, keeping both sides consistent.
fn clean(segment: &str) -> String {
    text::rtrim_lines(&strip_markers(segment))
}
