//! Region type: a named editable span located within the skeleton

/// A named editable region delimited by marker lines.
///
/// All offsets are byte offsets into the skeleton. The full range covers
/// both marker lines, including the newline between each marker line and
/// the body; the inner range covers only the body text. The newline
/// separating a marker line from surrounding non-region text belongs to
/// the adjacent anchor, so splicing a new body into the inner range keeps
/// the marker lines on their own lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    /// Region name from the begin marker
    pub name: String,
    /// Start of the begin-marker line
    pub full_start: usize,
    /// End of the end-marker line (its trailing newline excluded)
    pub full_end: usize,
    /// Start of the body text
    pub inner_start: usize,
    /// End of the body text
    pub inner_end: usize,
    /// The original body text
    pub inner: String,
}

impl Region {
    /// Byte range of the body text within the skeleton
    pub fn inner_range(&self) -> std::ops::Range<usize> {
        self.inner_start..self.inner_end
    }

    /// Byte range of the whole region, marker lines included
    pub fn full_range(&self) -> std::ops::Range<usize> {
        self.full_start..self.full_end
    }
}
