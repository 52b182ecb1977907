//! Readiness - AI readiness assessment scoring
//!
//! Turns Likert answers from the readiness questionnaire into the numbers
//! the results page and the backend need.
//!
//! # Overview
//!
//! - **Scoring**: overall percentage, positional or declared pillar
//!   breakdown, incremental live score
//! - **Gaps**: shortfall of each pillar against the best-practice
//!   benchmark, tiered by severity, with recommendations
//! - **Report**: backend submission payload and the results report
//!
//! # Quick Start
//!
//! ```rust
//! use readiness_core::{Likert, Question, Responses, ScoringEngine};
//!
//! let questions: Vec<Question> = (1..=16)
//!     .map(|i| Question::new(format!("q{}", i), "..."))
//!     .collect();
//! let mut responses = Responses::new();
//! responses.insert("q1", Likert::Agree);
//! responses.insert("q2", Likert::StronglyAgree);
//!
//! let engine = ScoringEngine::default();
//! let report = engine.report(&questions, &responses, None).unwrap();
//! assert_eq!(report.payload.overall_score, 90);
//! assert_eq!(report.payload.pillar_scores.len(), 8);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod gaps;
pub mod likert;
pub mod policy;
pub mod report;
pub mod scoring;
pub mod types;

// Re-export main types
pub use config::EngineConfig;
pub use engine::ScoringEngine;
pub use error::{Result, ScoringError};
pub use gaps::{
    compute_gap_analysis, derive_recommendations, Gap, GapPriority, GapSeverity, Recommendation,
    BEST_PRACTICE_BENCHMARK,
};
pub use likert::{Likert, LikertError};
pub use policy::{validate_responses, ResponsePolicy};
pub use report::{AssessmentReport, PillarScoreEntry, RadarChart, ReportId, SubmissionPayload};
pub use scoring::{
    compute_declared_pillar_scores, compute_overall_score, compute_pillar_scores, live_score,
    partition_questions, LiveScore, PartitionStrategy,
};
pub use types::{
    default_pillars, PillarScore, Question, QuestionId, RawResponses, Responses, DEFAULT_PILLARS,
};

/// Version of the scoring crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log the crate version once at startup
pub fn init() {
    tracing::info!("Readiness scoring engine v{}", VERSION);
}
