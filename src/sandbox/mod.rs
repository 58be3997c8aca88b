//! Sandboxed behavioral test execution
//!
//! Evaluates one call expression against the reconstructed source inside
//! an embedded scripting engine with an explicit capability set: no
//! filesystem, process, or network access, module imports disabled, `eval`
//! disabled, and hard budgets on operations, call depth, and collection
//! sizes. Budget exhaustion fails closed as a failing test.
//!
//! The runner treats the engine as a functional contract: the source's
//! top-level declarations are visible to the call expression and the
//! call's serialized result is compared against an expected value.

mod errors;
mod runner;
mod value;

pub use errors::{SandboxError, SandboxResult};
pub use runner::{SandboxConfig, TestRunner};
pub use value::{json_eq, to_json};
