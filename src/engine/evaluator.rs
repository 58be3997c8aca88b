//! Rule evaluation pipeline
//!
//! Strict order per evaluation call:
//! 1. Extract regions from the skeleton; reject duplicate names
//! 2. Compile the rule program
//! 3. Reconcile the submission against the anchors
//! 4. Reconstruct the full source
//! 5. Apply region-scoped directives in declaration order
//! 6. Apply global directives
//! 7. Run behavioral tests
//!
//! The first violated directive produces the report; later directives are
//! not evaluated.

use std::collections::{HashMap, HashSet};

use crate::reconcile::{reconstruct, AnchorMatcher, ReconcileError};
use crate::rules::{self, Directive};
use crate::sandbox::{json_eq, SandboxError, TestRunner};
use crate::skeleton::{extract_regions, split_anchors, Region};
use crate::text;

use super::errors::{EngineError, EngineResult};
use super::report::EvaluationReport;
use super::scenario::Scenario;

/// Reason used when matching is abandoned rather than attempted.
const VERIFY_FAILED_REASON: &str =
    "The submission could not be verified against this exercise.";

/// Evaluate a submission against a scenario.
///
/// Student-caused conditions (out-of-region edits, rule violations, test
/// failures) return a failing report. Only invalid scenario data returns
/// an error.
pub fn evaluate(scenario: &Scenario, submission: &str) -> EngineResult<EvaluationReport> {
    let skeleton_src = text::normalize_newlines(&scenario.starter);
    let regions = extract_regions(&skeleton_src);
    check_unique_names(&regions)?;

    let compiled = rules::compile(scenario.rules());

    let anchors = split_anchors(&skeleton_src, &regions);
    let matcher = match AnchorMatcher::build(&anchors) {
        Ok(matcher) => matcher,
        Err(_) => return Ok(EvaluationReport::failed(VERIFY_FAILED_REASON)),
    };

    let bodies = match matcher.recover(submission) {
        Ok(bodies) => bodies,
        Err(e) => return Ok(EvaluationReport::failed(reconcile_reason(&e))),
    };

    let full_source = reconstruct(&skeleton_src, &regions, &bodies);

    let mut region_bodies: HashMap<&str, (&str, &str)> = HashMap::new();
    for (region, body) in regions.iter().zip(bodies.iter()) {
        region_bodies.insert(region.name.as_str(), (region.inner.as_str(), body.as_str()));
    }

    // region-scoped directives, declaration order
    for directive in &compiled.directives {
        let Some(region_name) = directive.region() else {
            continue;
        };
        let Some(&(starter_body, student_body)) = region_bodies.get(region_name) else {
            return Ok(EvaluationReport::failed(format!(
                "Missing editable region \"{region_name}\"."
            )));
        };

        match directive {
            Directive::MustChange { region } => {
                if text::normalize_for_compare(starter_body)
                    == text::normalize_for_compare(student_body)
                {
                    return Ok(EvaluationReport::failed(format!(
                        "You must modify the \"{region}\" section (it still matches the starter)."
                    )));
                }
            }
            Directive::MustMatch { region, pattern } => {
                if !pattern.is_match(student_body) {
                    return Ok(EvaluationReport::failed(format!(
                        "Section \"{region}\" does not match the expected pattern {pattern}."
                    )));
                }
            }
            Directive::ForbidIn { region, pattern } => {
                if pattern.is_match(student_body) {
                    return Ok(EvaluationReport::failed(format!(
                        "Forbidden pattern {pattern} found in \"{region}\"."
                    )));
                }
            }
            _ => {}
        }
    }

    // global directives against the full reconstructed source
    for directive in &compiled.directives {
        match directive {
            Directive::Require(pattern) => {
                if !pattern.is_match(&full_source) {
                    return Ok(EvaluationReport::failed(format!(
                        "Missing requirement: {pattern}"
                    )));
                }
            }
            Directive::Forbid(pattern) => {
                if pattern.is_match(&full_source) {
                    return Ok(EvaluationReport::failed(format!(
                        "Forbidden usage: {pattern}"
                    )));
                }
            }
            _ => {}
        }
    }

    // behavioral tests, one sandbox invocation each
    let runner = TestRunner::new();
    for directive in &compiled.directives {
        let Directive::Test { call, expected } = directive else {
            continue;
        };
        match runner.run(&full_source, call) {
            Ok(actual) => {
                if !json_eq(&actual, expected) {
                    return Ok(EvaluationReport::failed(format!(
                        "Test failed: {call} did not produce {expected}"
                    )));
                }
            }
            Err(SandboxError::BudgetExhausted) => {
                return Ok(EvaluationReport::failed(format!(
                    "Test aborted: {call} exceeded the evaluation budget"
                )));
            }
            Err(e) => {
                return Ok(EvaluationReport::failed(format!("Test raised an error: {e}")));
            }
        }
    }

    Ok(EvaluationReport::passed())
}

fn check_unique_names(regions: &[Region]) -> EngineResult<()> {
    let mut seen = HashSet::new();
    for region in regions {
        if !seen.insert(region.name.as_str()) {
            return Err(EngineError::DuplicateRegion(region.name.clone()));
        }
    }
    Ok(())
}

fn reconcile_reason(err: &ReconcileError) -> &'static str {
    match err {
        ReconcileError::EditedOutsideRegions => {
            "It looks like you modified text outside the editable regions. \
             Please only edit inside the highlighted blocks."
        }
        ReconcileError::RegionCountMismatch { .. } => {
            "Editable region mismatch. Please reload the exercise and edit \
             only inside the highlighted blocks."
        }
        ReconcileError::PatternBudget => VERIFY_FAILED_REASON,
    }
}
