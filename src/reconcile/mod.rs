//! Reconciliation: recovering edited bodies and rebuilding the full source
//!
//! The reconciler enforces a closed-world contract: the submitted document
//! must be exactly reproducible as literal anchors interleaved with one
//! free capture per region. Any character change outside a region breaks
//! the match. The reconstructor then splices the recovered bodies back
//! into the skeleton's region offsets, producing the full source used for
//! global checks and behavioral tests.

mod errors;
mod matcher;
mod reconstruct;

pub use errors::{ReconcileError, ReconcileResult};
pub use matcher::AnchorMatcher;
pub use reconstruct::reconstruct;
