//! Typed rule directives

use serde_json::Value;

use super::pattern::RulePattern;

/// One compiled instruction from the rule DSL.
#[derive(Debug, Clone)]
pub enum Directive {
    /// The full reconstructed source must match the pattern
    Require(RulePattern),
    /// The full reconstructed source must not match the pattern
    Forbid(RulePattern),
    /// A call expression whose serialized result must equal the literal
    Test {
        call: String,
        expected: Value,
    },
    /// The region's body must differ from the starter (normalized)
    MustChange {
        region: String,
    },
    /// The region's body must match the pattern
    MustMatch {
        region: String,
        pattern: RulePattern,
    },
    /// The region's body must not match the pattern
    ForbidIn {
        region: String,
        pattern: RulePattern,
    },
}

impl Directive {
    /// The directive keyword as written in the DSL.
    pub fn keyword(&self) -> &'static str {
        match self {
            Directive::Require(_) => "#require",
            Directive::Forbid(_) => "#forbid",
            Directive::Test { .. } => "#test",
            Directive::MustChange { .. } => "#mustChange",
            Directive::MustMatch { .. } => "#mustMatch",
            Directive::ForbidIn { .. } => "#forbidIn",
        }
    }

    /// The referenced region name, for region-scoped directives.
    pub fn region(&self) -> Option<&str> {
        match self {
            Directive::MustChange { region }
            | Directive::MustMatch { region, .. }
            | Directive::ForbidIn { region, .. } => Some(region),
            _ => None,
        }
    }

    /// Returns true for directives evaluated against a single region body.
    pub fn is_region_scoped(&self) -> bool {
        self.region().is_some()
    }
}
