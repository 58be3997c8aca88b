//! Rule DSL: compilation of instructor-written rules into typed directives
//!
//! One directive per non-blank line beginning with `#`:
//!
//! ```text
//! #require <pattern>
//! #forbid <pattern>
//! #test <expr> == <literal>
//! #mustChange <region>
//! #mustMatch <region> <pattern>
//! #forbidIn <region> <pattern>
//! ```
//!
//! A pattern is either a `/body/flags` regex literal or plain text compiled
//! as a case-insensitive literal match. Malformed or unknown `#` lines are
//! dropped, but each drop is recorded as a [`CompileWarning`] so authors
//! can see them; pass/fail semantics of well-formed rules never depend on
//! warnings. Non-`#` lines are free commentary.

mod compiler;
mod directive;
mod pattern;

pub use compiler::{compile, CompileWarning, CompiledRules};
pub use directive::Directive;
pub use pattern::{PatternError, RulePattern};
