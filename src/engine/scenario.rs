//! Scenario record
//!
//! A scenario pairs a marker-annotated starter source with an optional
//! rule program. Persistence and transport belong to the caller; the
//! record is plain serde data.

use serde::{Deserialize, Serialize};

use crate::skeleton;
use crate::text;

/// An authored exercise: starter source plus rule DSL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Short stable identifier
    pub code: String,
    /// Human-readable title
    pub name: String,
    /// Free-form description shown to students
    #[serde(default)]
    pub description: String,
    /// Starter source containing `#patch` / `#endpatch` marker lines
    pub starter: String,
    /// Instructor-written rule DSL (one directive per line)
    #[serde(default)]
    pub rules_text: Option<String>,
}

impl Scenario {
    /// Create a scenario with no rules.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        starter: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            description: String::new(),
            starter: starter.into(),
            rules_text: None,
        }
    }

    /// Attach a rule program.
    pub fn with_rules(mut self, rules: impl Into<String>) -> Self {
        self.rules_text = Some(rules.into());
        self
    }

    /// The rule program, or empty when none was authored.
    pub fn rules(&self) -> &str {
        self.rules_text.as_deref().unwrap_or("")
    }

    /// The marker-free starter shown to the student initially.
    pub fn visible_starter(&self) -> String {
        skeleton::strip_markers(&text::normalize_newlines(&self.starter))
    }
}
