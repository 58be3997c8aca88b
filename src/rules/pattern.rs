//! Rule pattern compilation
//!
//! `/body/flags` compiles the body natively with the given flags; any
//! other fragment is regex-escaped and compiled case-insensitive. The
//! original fragment text is kept for failure reasons.

use std::fmt;
use std::sync::OnceLock;

use regex::{Regex, RegexBuilder};
use thiserror::Error;

static REGEX_LITERAL: OnceLock<Regex> = OnceLock::new();

fn regex_literal_re() -> &'static Regex {
    REGEX_LITERAL.get_or_init(|| Regex::new(r"^/(.+)/([a-zA-Z]*)$").expect("literal pattern"))
}

/// Pattern compilation error
#[derive(Debug, Clone, Error)]
#[error("invalid pattern {fragment:?}: {message}")]
pub struct PatternError {
    /// The fragment as written in the rule line
    pub fragment: String,
    /// The underlying regex error
    pub message: String,
}

/// A compiled rule pattern that remembers how it was written.
#[derive(Debug, Clone)]
pub struct RulePattern {
    regex: Regex,
    source: String,
}

impl RulePattern {
    /// Compile a pattern fragment.
    pub fn compile(fragment: &str) -> Result<Self, PatternError> {
        let fragment = fragment.trim();

        let builder_result = match regex_literal_re().captures(fragment) {
            Some(caps) => {
                let body = caps.get(1).expect("regex body").as_str();
                let flags = caps.get(2).expect("regex flags").as_str();

                let mut builder = RegexBuilder::new(body);
                for flag in flags.chars() {
                    match flag {
                        'i' => {
                            builder.case_insensitive(true);
                        }
                        'm' => {
                            builder.multi_line(true);
                        }
                        's' => {
                            builder.dot_matches_new_line(true);
                        }
                        'x' => {
                            builder.ignore_whitespace(true);
                        }
                        // host-language flags with no meaning for a
                        // single-shot match are accepted and ignored
                        _ => {}
                    }
                }
                builder.build()
            }
            None => RegexBuilder::new(&regex::escape(fragment))
                .case_insensitive(true)
                .build(),
        };

        match builder_result {
            Ok(regex) => Ok(Self {
                regex,
                source: fragment.to_string(),
            }),
            Err(e) => Err(PatternError {
                fragment: fragment.to_string(),
                message: e.to_string(),
            }),
        }
    }

    /// Test the pattern against a text.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// The fragment as written in the rule line.
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl fmt::Display for RulePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}
