//! CLI command implementations
//!
//! Commands are thin wrappers: load the scenario, call the engine, emit a
//! JSON envelope. Student-caused failures are part of the `evaluate`
//! response data; only host-level problems become process errors.

use std::fs;
use std::path::Path;

use serde_json::json;

use crate::engine::{self, Scenario};
use crate::observability::Logger;
use crate::reconcile::AnchorMatcher;
use crate::rules;
use crate::skeleton::{extract_regions, split_anchors};
use crate::text;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::{read_submission, write_error, write_response};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Evaluate {
            scenario,
            submission,
        } => evaluate(&scenario, submission.as_deref()),
        Command::Regions {
            scenario,
            submission,
        } => regions(&scenario, submission.as_deref()),
        Command::Strip { scenario } => strip(&scenario),
        Command::Check { scenario } => check(&scenario),
    }
}

/// Load and validate a scenario file.
pub fn load_scenario(path: &Path) -> CliResult<Scenario> {
    let content = fs::read_to_string(path)
        .map_err(|e| CliError::scenario_error(format!("Failed to read scenario: {}", e)))?;

    let scenario: Scenario = serde_json::from_str(&content)
        .map_err(|e| CliError::scenario_error(format!("Invalid scenario JSON: {}", e)))?;

    if scenario.starter.trim().is_empty() {
        return Err(CliError::scenario_error("Scenario starter is empty"));
    }

    Ok(scenario)
}

/// Evaluate a submission and emit the report.
pub fn evaluate(scenario_path: &Path, submission_path: Option<&Path>) -> CliResult<()> {
    let scenario = load_scenario(scenario_path)?;
    let submission = read_submission(submission_path)?;

    warn_dropped_rule_lines(&scenario);

    let report = engine::evaluate(&scenario, &submission)?;

    Logger::info(
        "EVALUATE_COMPLETE",
        &[
            ("passed", if report.passed { "true" } else { "false" }),
            ("scenario", scenario.code.as_str()),
        ],
    );

    write_response(serde_json::to_value(&report)?)
}

/// Locate editable regions in a submission and emit their spans.
pub fn regions(scenario_path: &Path, submission_path: Option<&Path>) -> CliResult<()> {
    let scenario = load_scenario(scenario_path)?;
    let submission = match submission_path {
        Some(path) => read_submission(Some(path))?,
        None => scenario.visible_starter(),
    };

    match engine::locate_regions(&scenario.starter, &submission) {
        Some(spans) => write_response(json!({ "regions": spans })),
        None => {
            Logger::warn("REGIONS_NOT_LOCATED", &[("scenario", scenario.code.as_str())]);
            write_error(
                "DRILL_REGIONS_NOT_LOCATED",
                "Could not locate the editable regions in the submission",
            )
        }
    }
}

/// Emit the marker-free starter shown to students.
pub fn strip(scenario_path: &Path) -> CliResult<()> {
    let scenario = load_scenario(scenario_path)?;
    write_response(json!({ "visible": scenario.visible_starter() }))
}

/// Check a scenario for authoring mistakes without evaluating anything.
///
/// Reports region names, duplicate names, rule-compile warnings, and
/// whether the pristine starter reconciles against its own anchors.
pub fn check(scenario_path: &Path) -> CliResult<()> {
    let scenario = load_scenario(scenario_path)?;

    let skeleton_src = text::normalize_newlines(&scenario.starter);
    let regions = extract_regions(&skeleton_src);
    let anchors = split_anchors(&skeleton_src, &regions);
    let compiled = rules::compile(scenario.rules());

    let mut seen = std::collections::HashSet::new();
    let duplicates: Vec<&str> = regions
        .iter()
        .filter(|r| !seen.insert(r.name.as_str()))
        .map(|r| r.name.as_str())
        .collect();

    let pristine_reconciles = AnchorMatcher::build(&anchors)
        .and_then(|m| m.recover(&scenario.visible_starter()))
        .is_ok();

    let warnings: Vec<_> = compiled
        .warnings
        .iter()
        .map(|w| json!({ "line": w.line, "message": w.message }))
        .collect();

    write_response(json!({
        "regions": regions.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(),
        "anchor_count": anchors.len(),
        "duplicate_regions": duplicates,
        "directives": compiled.directives.len(),
        "warnings": warnings,
        "pristine_reconciles": pristine_reconciles,
    }))
}

fn warn_dropped_rule_lines(scenario: &Scenario) {
    let compiled = rules::compile(scenario.rules());
    for warning in &compiled.warnings {
        let line = warning.line.to_string();
        Logger::warn(
            "RULE_LINE_SKIPPED",
            &[
                ("line", line.as_str()),
                ("message", warning.message.as_str()),
                ("scenario", scenario.code.as_str()),
            ],
        );
    }
}
