//! Response validation policy.
//!
//! Turns raw client answers into validated [`Responses`]. What happens to
//! values outside the Likert scale is decided by [`ResponsePolicy`], and
//! whether unanswered questions are acceptable by `require_complete`.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoringError};
use crate::likert::Likert;
use crate::types::{Question, QuestionId, RawResponses, Responses};

/// Handling of answers outside 1..=5.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponsePolicy {
    /// Fail validation on the first out-of-range value
    #[default]
    Reject,
    /// Saturate to the nearest end of the scale
    Clamp,
    /// Treat the value as unanswered
    Ignore,
}

impl std::fmt::Display for ResponsePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Reject => "reject",
            Self::Clamp => "clamp",
            Self::Ignore => "ignore",
        };
        f.write_str(name)
    }
}

/// Validate raw answers under `policy`.
///
/// When `require_complete` is set, every question in `questions` must have
/// an answer after the policy has been applied.
///
/// # Errors
/// - `ScoringError::InvalidLikert` for an out-of-range value under `Reject`
/// - `ScoringError::IncompleteAssessment` listing unanswered questions
pub fn validate_responses(
    questions: &[Question],
    raw: &RawResponses,
    policy: ResponsePolicy,
    require_complete: bool,
) -> Result<Responses> {
    let mut responses = Responses::new();

    for (id, &value) in raw {
        match Likert::new(value) {
            Ok(likert) => {
                responses.insert(id.clone(), likert);
            }
            Err(source) => match policy {
                ResponsePolicy::Reject => {
                    return Err(ScoringError::InvalidLikert {
                        question: id.clone(),
                        source,
                    });
                }
                ResponsePolicy::Clamp => {
                    let clamped = Likert::clamped(value);
                    tracing::warn!("Clamped response {} for question {} to {}", value, id, clamped);
                    responses.insert(id.clone(), clamped);
                }
                ResponsePolicy::Ignore => {
                    tracing::warn!("Ignoring out-of-range response {} for question {}", value, id);
                }
            },
        }
    }

    if require_complete {
        let missing: Vec<QuestionId> = questions
            .iter()
            .filter(|q| !responses.contains(&q.id))
            .map(|q| q.id.clone())
            .collect();
        if !missing.is_empty() {
            return Err(ScoringError::IncompleteAssessment { missing });
        }
    }

    Ok(responses)
}
