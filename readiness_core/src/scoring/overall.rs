//! Overall readiness score.

use crate::types::Responses;

use super::percentage;

/// Overall readiness percentage over every answered question.
///
/// Answers for ids outside the current question list still count; only
/// presence in `responses` matters. Empty input yields 0.
pub fn compute_overall_score(responses: &Responses) -> u8 {
    let sum: u32 = responses.values().map(|v| v.value() as u32).sum();
    let score = percentage(sum, responses.len());
    tracing::debug!("Overall score {} from {} answer(s)", score, responses.len());
    score
}

/// Running score shown while the assessment is still in progress.
///
/// Same computation as [`compute_overall_score`]. For per-answer updates
/// without rescanning, use [`super::LiveScore`].
pub fn live_score(responses: &Responses) -> u8 {
    compute_overall_score(responses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::likert::Likert;

    fn uniform(n: usize, value: Likert) -> Responses {
        (1..=n).map(|i| (format!("q{}", i), value)).collect()
    }

    #[test]
    fn test_all_fives_is_100() {
        for n in [1, 3, 8, 40, 97] {
            assert_eq!(compute_overall_score(&uniform(n, Likert::StronglyAgree)), 100);
        }
    }

    #[test]
    fn test_all_ones_is_20() {
        for n in [1, 5, 13, 40] {
            assert_eq!(compute_overall_score(&uniform(n, Likert::StronglyDisagree)), 20);
        }
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(compute_overall_score(&Responses::new()), 0);
    }

    #[test]
    fn test_mixed_answers() {
        let responses: Responses = [
            ("a", Likert::StronglyAgree),
            ("b", Likert::Agree),
            ("c", Likert::Neutral),
            ("d", Likert::Disagree),
        ]
        .into_iter()
        .collect();
        // 14 / 20 = 70%
        assert_eq!(compute_overall_score(&responses), 70);
    }

    #[test]
    fn test_live_score_matches_overall() {
        let responses = uniform(6, Likert::Agree);
        assert_eq!(live_score(&responses), compute_overall_score(&responses));
    }
}
