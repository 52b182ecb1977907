//! Per-pillar score breakdown
//!
//! Two ways of assigning questions to pillars:
//! - `Positional`: the ordered question list is cut into `ceil(N / P)`-sized
//!   contiguous chunks, chunk *i* going to pillar *i*. This is what the
//!   questionnaire has always done and stays the default.
//! - `Declared`: group by the pillar each question names. Only usable when
//!   the backend sends a pillar per question.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoringError};
use crate::types::{PillarScore, Question, Responses};

use super::percentage;

/// How questions are assigned to pillars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartitionStrategy {
    /// Contiguous ceiling-sized chunks in pillar order
    #[default]
    Positional,
    /// Group by `Question::pillar`
    Declared,
}

/// Split the ordered question list into `pillar_count` contiguous chunks.
///
/// Chunk size is `ceil(len / pillar_count)`. Always returns exactly
/// `pillar_count` slices; trailing chunks are empty when the list runs
/// out early. Concatenating the slices gives back `questions`.
pub fn partition_questions(questions: &[Question], pillar_count: usize) -> Vec<&[Question]> {
    if pillar_count == 0 {
        return Vec::new();
    }

    let len = questions.len();
    let chunk = len.div_ceil(pillar_count);

    (0..pillar_count)
        .map(|i| {
            let start = (i * chunk).min(len);
            let end = (start + chunk).min(len);
            &questions[start..end]
        })
        .collect()
}

/// Score pillars by positional chunking.
///
/// Output has exactly `pillar_names.len()` entries in pillar order. A
/// pillar whose chunk has no answered question scores 0.
pub fn compute_pillar_scores<S: AsRef<str>>(
    questions: &[Question],
    responses: &Responses,
    pillar_names: &[S],
) -> Vec<PillarScore> {
    let chunks = partition_questions(questions, pillar_names.len());

    pillar_names
        .iter()
        .zip(chunks)
        .map(|(name, chunk)| score_group(name.as_ref(), chunk.iter(), responses))
        .collect()
}

/// Score pillars by the pillar each question declares.
///
/// # Errors
/// - `ScoringError::MissingPillar` if a question declares no pillar
/// - `ScoringError::UnknownPillar` if the declared pillar is not in `pillar_names`
pub fn compute_declared_pillar_scores<S: AsRef<str>>(
    questions: &[Question],
    responses: &Responses,
    pillar_names: &[S],
) -> Result<Vec<PillarScore>> {
    let index: HashMap<&str, usize> = pillar_names
        .iter()
        .enumerate()
        .map(|(i, name)| (name.as_ref(), i))
        .collect();

    let mut groups: Vec<Vec<&Question>> = vec![Vec::new(); pillar_names.len()];
    for question in questions {
        let pillar = question
            .pillar
            .as_deref()
            .ok_or_else(|| ScoringError::MissingPillar(question.id.clone()))?;
        let slot = index.get(pillar).ok_or_else(|| ScoringError::UnknownPillar {
            question: question.id.clone(),
            pillar: pillar.to_string(),
        })?;
        groups[*slot].push(question);
    }

    Ok(pillar_names
        .iter()
        .zip(groups)
        .map(|(name, group)| score_group(name.as_ref(), group.into_iter(), responses))
        .collect())
}

fn score_group<'a>(
    pillar_name: &str,
    questions: impl Iterator<Item = &'a Question>,
    responses: &Responses,
) -> PillarScore {
    let mut total = 0;
    let mut answered = 0;
    let mut sum = 0u32;

    for question in questions {
        total += 1;
        if let Some(value) = responses.get(&question.id) {
            answered += 1;
            sum += value.value() as u32;
        }
    }

    PillarScore {
        pillar_name: pillar_name.to_string(),
        score: percentage(sum, answered),
        answered,
        total,
    }
}
