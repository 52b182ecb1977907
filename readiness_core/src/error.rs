//! Error types for the scoring engine.

use thiserror::Error;

use crate::likert::LikertError;
use crate::types::QuestionId;

/// Main error type for scoring operations.
///
/// Pure scoring functions never fail; errors only come from response
/// validation, declared pillar grouping and configuration loading.
#[derive(Error, Debug)]
pub enum ScoringError {
    /// A response value is outside the Likert scale and the policy rejects it.
    #[error("Invalid response for question {question}: {source}")]
    InvalidLikert {
        question: QuestionId,
        #[source]
        source: LikertError,
    },

    /// Completeness was required but some questions have no answer.
    #[error("Assessment incomplete: {} unanswered question(s)", .missing.len())]
    IncompleteAssessment { missing: Vec<QuestionId> },

    /// Declared grouping requested but the question carries no pillar.
    #[error("Question {0} has no declared pillar")]
    MissingPillar(QuestionId),

    /// Declared pillar is not one of the configured pillar names.
    #[error("Question {question} declares unknown pillar '{pillar}'")]
    UnknownPillar { question: QuestionId, pillar: String },

    /// The same question id appears twice in the question list.
    #[error("Duplicate question id: {0}")]
    DuplicateQuestion(QuestionId),

    /// Engine configuration failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Generic IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML configuration parse errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for scoring operations
pub type Result<T> = std::result::Result<T, ScoringError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ScoringError::UnknownPillar {
            question: QuestionId::from("q7"),
            pillar: "Marketing".to_string(),
        };
        assert_eq!(err.to_string(), "Question q7 declares unknown pillar 'Marketing'");
    }

    #[test]
    fn test_incomplete_counts_missing() {
        let err = ScoringError::IncompleteAssessment {
            missing: vec![QuestionId::from("q1"), QuestionId::from("q2")],
        };
        assert_eq!(err.to_string(), "Assessment incomplete: 2 unanswered question(s)");
    }

    #[test]
    fn test_invalid_likert_display() {
        let err = ScoringError::InvalidLikert {
            question: QuestionId::from("q3"),
            source: LikertError::OutOfRange(9),
        };
        assert_eq!(
            err.to_string(),
            "Invalid response for question q3: Likert value out of range: 9 (must be 1 to 5)"
        );
    }
}
