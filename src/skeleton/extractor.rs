//! Marker extraction
//!
//! A begin marker is any line containing `#patch <name>` (arbitrary leading
//! and trailing text, case-insensitive); an end marker is any line
//! containing `#endpatch`. Markers are authored inside host-language
//! comments so the reconstructed source stays parseable.
//!
//! An unclosed begin marker terminates extraction: its region and all
//! subsequent text produce no further regions. Stripping still removes the
//! dangling marker line, so the student never sees it.

use std::sync::OnceLock;

use regex::Regex;

use super::region::Region;

static BEGIN_MARKER: OnceLock<Regex> = OnceLock::new();
static END_MARKER: OnceLock<Regex> = OnceLock::new();
static MARKER_LINE: OnceLock<Regex> = OnceLock::new();

fn begin_marker_re() -> &'static Regex {
    BEGIN_MARKER.get_or_init(|| {
        Regex::new(r"(?im)^.*?#[ \t]*patch[ \t]+([A-Za-z0-9_\-]+).*$")
            .expect("begin marker pattern")
    })
}

fn end_marker_re() -> &'static Regex {
    END_MARKER.get_or_init(|| {
        Regex::new(r"(?im)^.*?#[ \t]*endpatch.*$").expect("end marker pattern")
    })
}

fn marker_line_re() -> &'static Regex {
    MARKER_LINE.get_or_init(|| {
        Regex::new(r"(?i)#[ \t]*(?:patch|endpatch)\b").expect("marker line pattern")
    })
}

/// Returns true if the line is a marker line (begin or end).
pub fn is_marker_line(line: &str) -> bool {
    marker_line_re().is_match(line)
}

/// Remove all marker lines. This is the student-visible form of a text.
pub fn strip_markers(source: &str) -> String {
    source
        .split('\n')
        .filter(|line| !is_marker_line(line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Extract ordered regions from a skeleton.
///
/// Scans repeatedly for the next begin marker, then the next end marker
/// after it, tracking absolute offsets across the shrinking remainder.
pub fn extract_regions(skeleton: &str) -> Vec<Region> {
    let mut regions = Vec::new();
    let mut offset = 0usize;
    let mut rest = skeleton;

    while let Some(caps) = begin_marker_re().captures(rest) {
        let begin_line = caps.get(0).expect("whole-line match");
        let name = caps.get(1).expect("region name").as_str().to_string();

        let full_start = offset + begin_line.start();

        // the begin line owns its trailing newline; the body starts after it
        let mut inner_start = begin_line.end();
        if rest[inner_start..].starts_with('\n') {
            inner_start += 1;
        }

        let Some(end_line) = end_marker_re().find(&rest[inner_start..]) else {
            break; // unclosed marker: drop the region and the remaining text
        };

        let end_start = inner_start + end_line.start();
        let end_end = inner_start + end_line.end();

        // the end line owns the newline separating it from the body
        let inner_end = if end_start > inner_start && rest.as_bytes()[end_start - 1] == b'\n' {
            end_start - 1
        } else {
            end_start
        };

        regions.push(Region {
            name,
            full_start,
            full_end: offset + end_end,
            inner_start: offset + inner_start,
            inner_end: offset + inner_end,
            inner: rest[inner_start..inner_end].to_string(),
        });

        offset += end_end;
        rest = &rest[end_end..];
    }

    regions
}

#[cfg(test)]
mod tests {
    use super::*;

    const SKELETON: &str = "a\n#patch x\nold\n#endpatch\nb";

    #[test]
    fn test_extract_single_region() {
        let regions = extract_regions(SKELETON);
        assert_eq!(regions.len(), 1);

        let r = &regions[0];
        assert_eq!(r.name, "x");
        assert_eq!(r.inner, "old");
        assert_eq!(&SKELETON[r.inner_range()], "old");
        assert_eq!(&SKELETON[r.full_range()], "#patch x\nold\n#endpatch");
    }

    #[test]
    fn test_extract_multiple_regions() {
        let src = "h\n// #patch a\n1\n// #endpatch\nm\n// #patch b\n2\n// #endpatch\nt";
        let regions = extract_regions(src);
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].name, "a");
        assert_eq!(regions[0].inner, "1");
        assert_eq!(regions[1].name, "b");
        assert_eq!(regions[1].inner, "2");
        assert!(regions[0].full_end <= regions[1].full_start);
    }

    #[test]
    fn test_extract_multiline_body() {
        let src = "x\n#patch p\nline1\nline2\n#endpatch\ny";
        let regions = extract_regions(src);
        assert_eq!(regions[0].inner, "line1\nline2");
    }

    #[test]
    fn test_markers_are_case_insensitive() {
        let src = "a\n# PATCH Loop-1\nbody\n# EndPatch\nb";
        let regions = extract_regions(src);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].name, "Loop-1");
    }

    #[test]
    fn test_marker_with_leading_comment_text() {
        let src = "a\n  // #patch x\nbody\n  // #endpatch\nb";
        let regions = extract_regions(src);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].inner, "body");
    }

    #[test]
    fn test_unclosed_marker_is_dropped() {
        let src = "a\n#patch x\nbody with no end";
        assert!(extract_regions(src).is_empty());
    }

    #[test]
    fn test_unclosed_marker_drops_tail_regions_only() {
        let src = "a\n#patch x\n1\n#endpatch\nb\n#patch y\ndangling";
        let regions = extract_regions(src);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].name, "x");
    }

    #[test]
    fn test_no_markers_no_regions() {
        assert!(extract_regions("plain\ntext").is_empty());
    }

    #[test]
    fn test_strip_markers_removes_marker_lines() {
        assert_eq!(strip_markers(SKELETON), "a\nold\nb");
    }

    #[test]
    fn test_strip_markers_removes_dangling_marker() {
        assert_eq!(strip_markers("a\n#patch x\nb"), "a\nb");
    }

    #[test]
    fn test_is_marker_line() {
        assert!(is_marker_line("// #patch name"));
        assert!(is_marker_line("#endpatch"));
        assert!(!is_marker_line("let patch = 1;"));
    }
}
