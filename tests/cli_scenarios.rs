//! CLI Scenario Tests
//!
//! Exercises the CLI layer against scenario files on disk: loading,
//! validation, and command execution over real files.

use std::fs;

use serde_json::json;
use tempfile::TempDir;

use patchdrill::cli::{self, CliErrorCode};

// =============================================================================
// Helper Functions
// =============================================================================

fn scenario_file(dir: &TempDir, name: &str, body: serde_json::Value) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, body.to_string()).unwrap();
    path
}

fn demo_scenario(dir: &TempDir) -> std::path::PathBuf {
    scenario_file(
        dir,
        "demo.json",
        json!({
            "code": "demo",
            "name": "Demo exercise",
            "description": "change the add function",
            "starter": "fn add(a, b) {\n// #patch body\na + b\n// #endpatch\n}",
            "rules_text": "#mustChange body\n#test add(2,3) == 6",
        }),
    )
}

// =============================================================================
// Scenario Loading
// =============================================================================

#[test]
fn test_load_scenario_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = demo_scenario(&dir);

    let scenario = cli::load_scenario(&path).unwrap();
    assert_eq!(scenario.code, "demo");
    assert_eq!(scenario.visible_starter(), "fn add(a, b) {\na + b\n}");
}

#[test]
fn test_missing_file_is_scenario_error() {
    let dir = TempDir::new().unwrap();
    let err = cli::load_scenario(&dir.path().join("nope.json")).unwrap_err();
    assert_eq!(err.code(), &CliErrorCode::ScenarioError);
}

#[test]
fn test_malformed_json_is_scenario_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, "{\"code\": ").unwrap();

    let err = cli::load_scenario(&path).unwrap_err();
    assert_eq!(err.code(), &CliErrorCode::ScenarioError);
}

// =============================================================================
// Command Execution
// =============================================================================

#[test]
fn test_evaluate_command_with_passing_submission() {
    let dir = TempDir::new().unwrap();
    let scenario_path = demo_scenario(&dir);

    let submission_path = dir.path().join("submission.txt");
    fs::write(&submission_path, "fn add(a, b) {\na + b + 1\n}").unwrap();

    cli::evaluate(&scenario_path, Some(&submission_path)).unwrap();
}

#[test]
fn test_evaluate_command_with_failing_submission() {
    let dir = TempDir::new().unwrap();
    let scenario_path = demo_scenario(&dir);

    // unchanged starter: #mustChange fails, but the command still
    // succeeds - a failing report is data, not an error
    let submission_path = dir.path().join("submission.txt");
    fs::write(&submission_path, "fn add(a, b) {\na + b\n}").unwrap();

    cli::evaluate(&scenario_path, Some(&submission_path)).unwrap();
}

#[test]
fn test_regions_command_against_pristine_starter() {
    let dir = TempDir::new().unwrap();
    let scenario_path = demo_scenario(&dir);

    cli::regions(&scenario_path, None).unwrap();
}

#[test]
fn test_regions_command_with_broken_submission() {
    let dir = TempDir::new().unwrap();
    let scenario_path = demo_scenario(&dir);

    // anchors cannot be located; the command reports the sentinel
    // envelope rather than failing
    let submission_path = dir.path().join("broken.txt");
    fs::write(&submission_path, "completely unrelated text").unwrap();

    cli::regions(&scenario_path, Some(&submission_path)).unwrap();
}

#[test]
fn test_strip_command() {
    let dir = TempDir::new().unwrap();
    let scenario_path = demo_scenario(&dir);

    cli::strip(&scenario_path).unwrap();
}

#[test]
fn test_check_command_flags_authoring_mistakes() {
    let dir = TempDir::new().unwrap();
    let path = scenario_file(
        &dir,
        "flawed.json",
        json!({
            "code": "flawed",
            "name": "Flawed",
            "starter": "a\n#patch x\n1\n#endpatch\nb\n#patch x\n2\n#endpatch\nc",
            "rules_text": "#mustChange x\n#frobnicate y\n#require /unclosed(/",
        }),
    );

    // check never fails on authoring mistakes; it reports them
    cli::check(&path).unwrap();
}
