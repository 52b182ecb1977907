//! Likert score aggregation
//!
//! Converts answers into an overall readiness percentage and a per-pillar
//! breakdown. Every function here is pure: no I/O, no shared state.

pub mod live;
pub mod overall;
pub mod pillars;

pub use live::LiveScore;
pub use overall::{compute_overall_score, live_score};
pub use pillars::{
    compute_declared_pillar_scores, compute_pillar_scores, partition_questions, PartitionStrategy,
};

use crate::likert::Likert;

/// Percentage of the maximum attainable total, rounded half up.
///
/// `sum / (answered * 5) * 100`; zero answered questions yields 0.
pub(crate) fn percentage(sum: u32, answered: usize) -> u8 {
    if answered == 0 {
        return 0;
    }
    let max = answered as f64 * Likert::MAX as f64;
    let pct = (sum as f64 / max * 100.0).round();
    pct.clamp(0.0, 100.0) as u8
}
