//! Source reconstruction
//!
//! Splices recovered bodies back into the skeleton's region offsets,
//! marker lines retained. Splicing runs from the last region to the first
//! so earlier offsets stay valid while body lengths change.

use crate::skeleton::Region;

/// Rebuild the full source with each region's body replaced.
///
/// A body-count mismatch signals a caller-level bug, not a student
/// failure; the skeleton is returned unchanged in that case.
pub fn reconstruct(skeleton: &str, regions: &[Region], bodies: &[String]) -> String {
    if regions.len() != bodies.len() {
        return skeleton.to_string();
    }

    let mut source = skeleton.to_string();
    for (region, body) in regions.iter().zip(bodies.iter()).rev() {
        source.replace_range(region.inner_range(), body);
    }
    source
}
