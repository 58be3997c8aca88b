//! Rule DSL compiler
//!
//! Line-oriented: the first whitespace-delimited token selects the
//! directive. Matching the whole token (not a prefix) keeps `#forbidIn`
//! from being read as `#forbid` with a mangled pattern.

use serde_json::Value;

use super::directive::Directive;
use super::pattern::RulePattern;

/// A dropped rule line, with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileWarning {
    pub line: usize,
    pub message: String,
}

impl CompileWarning {
    fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

/// Compilation output: directives in declaration order plus warnings for
/// every dropped line. Warnings never affect pass/fail semantics.
#[derive(Debug, Clone, Default)]
pub struct CompiledRules {
    pub directives: Vec<Directive>,
    pub warnings: Vec<CompileWarning>,
}

impl CompiledRules {
    /// Returns true when no directives were compiled.
    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }
}

/// Compile rule text into directives.
pub fn compile(text: &str) -> CompiledRules {
    let mut out = CompiledRules::default();

    for (index, raw_line) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = raw_line.trim();

        if line.is_empty() || !line.starts_with('#') {
            continue; // blank lines and free commentary
        }

        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((k, r)) => (k, r.trim()),
            None => (line, ""),
        };

        match keyword {
            "#require" => compile_global(&mut out, line_no, rest, Directive::Require),
            "#forbid" => compile_global(&mut out, line_no, rest, Directive::Forbid),
            "#test" => compile_test(&mut out, line_no, rest),
            "#mustChange" => {
                if rest.is_empty() {
                    out.warnings
                        .push(CompileWarning::new(line_no, "#mustChange is missing a region name"));
                } else {
                    out.directives.push(Directive::MustChange {
                        region: rest.to_string(),
                    });
                }
            }
            "#mustMatch" => compile_region_pattern(&mut out, line_no, rest, |region, pattern| {
                Directive::MustMatch { region, pattern }
            }),
            "#forbidIn" => compile_region_pattern(&mut out, line_no, rest, |region, pattern| {
                Directive::ForbidIn { region, pattern }
            }),
            other => {
                out.warnings
                    .push(CompileWarning::new(line_no, format!("unknown directive {other}")));
            }
        }
    }

    out
}

fn compile_global(
    out: &mut CompiledRules,
    line_no: usize,
    fragment: &str,
    build: fn(RulePattern) -> Directive,
) {
    if fragment.is_empty() {
        out.warnings
            .push(CompileWarning::new(line_no, "directive is missing a pattern"));
        return;
    }
    match RulePattern::compile(fragment) {
        Ok(pattern) => out.directives.push(build(pattern)),
        Err(e) => out.warnings.push(CompileWarning::new(line_no, e.to_string())),
    }
}

fn compile_region_pattern(
    out: &mut CompiledRules,
    line_no: usize,
    rest: &str,
    build: impl FnOnce(String, RulePattern) -> Directive,
) {
    let Some((region, fragment)) = rest.split_once(char::is_whitespace) else {
        out.warnings.push(CompileWarning::new(
            line_no,
            "expected a region name followed by a pattern",
        ));
        return;
    };
    match RulePattern::compile(fragment.trim()) {
        Ok(pattern) => out.directives.push(build(region.to_string(), pattern)),
        Err(e) => out.warnings.push(CompileWarning::new(line_no, e.to_string())),
    }
}

fn compile_test(out: &mut CompiledRules, line_no: usize, rest: &str) {
    let Some((call, literal)) = rest.rsplit_once("==") else {
        out.warnings.push(CompileWarning::new(
            line_no,
            "#test is missing an `== <literal>` clause",
        ));
        return;
    };

    let call = call.trim_end_matches('=').trim();
    let literal = literal.trim();
    if call.is_empty() {
        out.warnings
            .push(CompileWarning::new(line_no, "#test is missing a call expression"));
        return;
    }
    if literal.is_empty() {
        out.warnings
            .push(CompileWarning::new(line_no, "#test is missing an expected literal"));
        return;
    }

    out.directives.push(Directive::Test {
        call: call.to_string(),
        expected: parse_expected(literal),
    });
}

/// Expected literals parse as JSON first; failing that, quoted strings are
/// unquoted and anything else is a bare string.
fn parse_expected(raw: &str) -> Value {
    if let Ok(value) = serde_json::from_str::<Value>(raw) {
        return value;
    }
    let unquoted = raw
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .or_else(|| raw.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')));
    Value::String(unquoted.unwrap_or(raw).to_string())
}
