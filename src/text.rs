//! Shared text normalization helpers
//!
//! All engine components operate on LF-normalized text; callers normalize
//! once at the intake boundary. Right-trimming makes line-trailing blanks
//! insignificant for anchor matching on both the skeleton and the
//! submission side.

use std::sync::OnceLock;

use regex::Regex;

/// Cache the comment-stripping patterns (compiled once per process)
static LINE_COMMENT: OnceLock<Regex> = OnceLock::new();
static BLOCK_COMMENT: OnceLock<Regex> = OnceLock::new();

fn line_comment_re() -> &'static Regex {
    LINE_COMMENT.get_or_init(|| Regex::new(r"(?m)//.*$").expect("line comment pattern"))
}

fn block_comment_re() -> &'static Regex {
    BLOCK_COMMENT.get_or_init(|| Regex::new(r"(?s)/\*.*?\*/").expect("block comment pattern"))
}

/// Normalize line endings to LF.
pub fn normalize_newlines(s: &str) -> String {
    s.replace("\r\n", "\n").replace('\r', "\n")
}

/// Remove trailing spaces and tabs from every line.
pub fn rtrim_lines(s: &str) -> String {
    s.split('\n')
        .map(|line| line.trim_end_matches([' ', '\t']))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Normalize code prior to comparing a starter body against a student body.
///
/// Strips `//` line comments and `/* */` block comments, then removes all
/// whitespace. Two bodies that normalize identically are treated as
/// unchanged by `#mustChange`.
pub fn normalize_for_compare(s: &str) -> String {
    let without_blocks = block_comment_re().replace_all(s, "");
    let without_lines = line_comment_re().replace_all(&without_blocks, "");
    without_lines.split_whitespace().collect()
}
