//! Observability for the evaluation engine
//!
//! Structured JSON logging only. The engine itself is pure and silent;
//! the CLI layer emits lifecycle events (`EVALUATE_COMPLETE`,
//! `RULE_LINE_SKIPPED`, `REGIONS_NOT_LOCATED`, ...) around engine calls.
//!
//! Principles:
//! 1. Observability is read-only; no side effects on evaluation
//! 2. Synchronous, unbuffered, one log line per event
//! 3. Deterministic output (alphabetical field ordering)

mod logger;

pub use logger::{Logger, Severity};
