//! Test runner: one engine per invocation, hard budgets, no ambient access
//!
//! A fresh engine is built for every call so evaluations share no state.
//! The reconstructed source is evaluated first (top-level declarations
//! become visible), then the call expression as the script's final
//! expression; its value is the test result.

use rhai::module_resolvers::DummyModuleResolver;
use rhai::{Dynamic, Engine};
use serde_json::Value;

use super::errors::{SandboxError, SandboxResult};
use super::value::to_json;

/// Execution budgets for a single test invocation.
#[derive(Debug, Clone)]
pub struct SandboxConfig {
    /// Maximum abstract operations before evaluation aborts
    pub max_operations: u64,
    /// Maximum nested call levels
    pub max_call_levels: usize,
    /// Maximum expression nesting depth
    pub max_expr_depth: usize,
    /// Maximum string size in bytes
    pub max_string_size: usize,
    /// Maximum array length
    pub max_array_size: usize,
    /// Maximum object-map size
    pub max_map_size: usize,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            max_operations: 500_000,
            max_call_levels: 64,
            max_expr_depth: 64,
            max_string_size: 1024 * 1024,
            max_array_size: 10_000,
            max_map_size: 10_000,
        }
    }
}

/// Executes call expressions against reconstructed sources.
#[derive(Debug, Default)]
pub struct TestRunner {
    config: SandboxConfig,
}

impl TestRunner {
    /// Create a runner with default budgets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a runner with explicit budgets.
    pub fn with_config(config: SandboxConfig) -> Self {
        Self { config }
    }

    /// Evaluate `call` with the source's top-level declarations in scope.
    ///
    /// Returns the call's result serialized to JSON, or an error for any
    /// parse failure, raised error, or exhausted budget.
    pub fn run(&self, source: &str, call: &str) -> SandboxResult<Value> {
        let engine = self.build_engine();
        let script = format!("{source}\n({call})\n");

        let result = engine
            .eval::<Dynamic>(&script)
            .map_err(SandboxError::from_eval)?;

        to_json(&result)
    }

    fn build_engine(&self) -> Engine {
        let mut engine = Engine::new();

        // capability boundary: no imports, no eval
        engine.set_module_resolver(DummyModuleResolver::new());
        engine.disable_symbol("eval");

        // budgets: fail closed instead of hanging
        engine.set_max_operations(self.config.max_operations);
        engine.set_max_call_levels(self.config.max_call_levels);
        engine.set_max_expr_depths(self.config.max_expr_depth, self.config.max_expr_depth);
        engine.set_max_string_size(self.config.max_string_size);
        engine.set_max_array_size(self.config.max_array_size);
        engine.set_max_map_size(self.config.max_map_size);

        engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_call_sees_source_declarations() {
        let runner = TestRunner::new();
        let result = runner
            .run("fn add(a, b) { a + b }", "add(2, 3)")
            .unwrap();
        assert_eq!(result, json!(5));
    }

    #[test]
    fn test_string_result() {
        let runner = TestRunner::new();
        let result = runner
            .run("fn greet(name) { \"hi \" + name }", "greet(\"bo\")")
            .unwrap();
        assert_eq!(result, json!("hi bo"));
    }

    #[test]
    fn test_array_result() {
        let runner = TestRunner::new();
        let result = runner.run("fn pair() { [1, 2] }", "pair()").unwrap();
        assert_eq!(result, json!([1, 2]));
    }

    #[test]
    fn test_marker_comment_lines_are_harmless() {
        let source = "// #patch body\nfn double(x) { x * 2 }\n// #endpatch";
        let runner = TestRunner::new();
        assert_eq!(runner.run(source, "double(4)").unwrap(), json!(8));
    }

    #[test]
    fn test_unknown_function_is_an_eval_error() {
        let runner = TestRunner::new();
        let err = runner.run("fn f() { 1 }", "missing()").unwrap_err();
        assert!(matches!(err, SandboxError::Eval(_)));
    }

    #[test]
    fn test_raised_error_is_caught() {
        let runner = TestRunner::new();
        let err = runner
            .run("fn f() { throw \"broken\" }", "f()")
            .unwrap_err();
        match err {
            SandboxError::Eval(msg) => assert!(msg.contains("broken")),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_runaway_loop_exhausts_budget() {
        let runner = TestRunner::with_config(SandboxConfig {
            max_operations: 10_000,
            ..SandboxConfig::default()
        });
        let err = runner
            .run("fn spin() { let x = 0; while true { x += 1; } x }", "spin()")
            .unwrap_err();
        assert!(matches!(err, SandboxError::BudgetExhausted));
    }

    #[test]
    fn test_each_run_is_isolated() {
        let runner = TestRunner::new();
        // a top-level binding from one run must not leak into the next
        runner.run("let leak = 1;", "leak").unwrap();
        assert!(runner.run("fn f() { 1 }", "leak").is_err());
    }
}
