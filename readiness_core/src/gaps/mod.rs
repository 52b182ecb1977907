//! Gap analysis against the best-practice benchmark
//!
//! Compares each pillar score with the benchmark, tiers the shortfall into
//! a severity and priority, and derives recommendations for the results
//! report.

pub mod analyzer;
pub mod suggestions;

// Public exports
pub use analyzer::{
    compute_gap_analysis, severity_for, Gap, GapPriority, GapSeverity, BEST_PRACTICE_BENCHMARK,
};
pub use suggestions::{derive_recommendations, recommend, Recommendation};
