//! Region discovery for UI highlighting
//!
//! Maps each editable region to its span in the student's current
//! document by sequential literal anchor search. Offsets are byte offsets
//! into the normalized (LF, line-right-trimmed) document; lines are
//! 1-based. Returns `None` when any anchor cannot be located, and the
//! caller is expected to render a "couldn't locate blocks" state.

use serde::Serialize;

use crate::skeleton::{extract_regions, split_anchors};
use crate::text;

/// Preview lines are truncated to this many characters.
pub const PREVIEW_CHAR_BUDGET: usize = 80;

/// One editable region located in the student's document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionSpan {
    /// Region name from the skeleton
    pub name: String,
    /// Byte offset where the editable span starts
    pub start: usize,
    /// Byte offset just past the editable span
    pub end: usize,
    /// 1-based line of the span start
    pub line_start: usize,
    /// 1-based line of the span end
    pub line_end: usize,
    /// First non-blank line of the span, trimmed and truncated
    pub preview: String,
}

/// Locate every region's span in the student's document.
pub fn locate_regions(starter: &str, submitted: &str) -> Option<Vec<RegionSpan>> {
    let skeleton_src = text::normalize_newlines(starter);
    let regions = extract_regions(&skeleton_src);
    let anchors = split_anchors(&skeleton_src, &regions);
    let document = text::rtrim_lines(&text::normalize_newlines(submitted));

    let mut spans = Vec::with_capacity(regions.len());
    let mut pos = 0usize;

    for (i, anchor) in anchors.iter().enumerate() {
        let found = if anchor.is_empty() && i == anchors.len() - 1 {
            document.len() // an empty tail anchor matches the document end
        } else {
            pos + document[pos..].find(anchor.as_str())?
        };

        if i > 0 {
            let region = &regions[i - 1];
            let segment = &document[pos..found];
            spans.push(RegionSpan {
                name: region.name.clone(),
                start: pos,
                end: found,
                line_start: line_of(&document, pos),
                line_end: end_line_of(&document, pos, segment),
                preview: preview_of(segment),
            });
        }

        pos = found + anchor.len();
    }

    Some(spans)
}

fn line_of(document: &str, offset: usize) -> usize {
    document[..offset].matches('\n').count() + 1
}

fn end_line_of(document: &str, start: usize, segment: &str) -> usize {
    let newlines = segment.matches('\n').count();
    let trailing = usize::from(segment.ends_with('\n'));
    line_of(document, start) + newlines - trailing.min(newlines)
}

fn preview_of(segment: &str) -> String {
    segment
        .lines()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("")
        .trim()
        .chars()
        .take(PREVIEW_CHAR_BUDGET)
        .collect()
}
