//! Scoring engine service object.
//!
//! Bundles the free scoring functions behind one configured, immutable
//! value. The engine holds no per-assessment state: callers own questions
//! and responses, so one engine can be shared across threads.

use std::collections::HashSet;

use chrono::Utc;

use crate::config::EngineConfig;
use crate::error::{Result, ScoringError};
use crate::gaps::{compute_gap_analysis, derive_recommendations, Gap};
use crate::policy::validate_responses;
use crate::report::{AssessmentReport, RadarChart, ReportId, SubmissionPayload};
use crate::scoring::{
    compute_declared_pillar_scores, compute_overall_score, compute_pillar_scores, PartitionStrategy,
};
use crate::types::{PillarScore, Question, RawResponses, Responses};

#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: EngineConfig,
}

impl ScoringEngine {
    /// Create an engine after validating `config`.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validate raw answers under the configured response policy.
    pub fn validate(&self, questions: &[Question], raw: &RawResponses) -> Result<Responses> {
        check_unique_ids(questions)?;
        validate_responses(
            questions,
            raw,
            self.config.response_policy,
            self.config.require_complete,
        )
    }

    pub fn overall_score(&self, responses: &Responses) -> u8 {
        compute_overall_score(responses)
    }

    /// Pillar breakdown using the configured partition strategy.
    pub fn pillar_scores(&self, questions: &[Question], responses: &Responses) -> Result<Vec<PillarScore>> {
        check_unique_ids(questions)?;
        match self.config.partition {
            PartitionStrategy::Positional => Ok(compute_pillar_scores(questions, responses, self.config.pillars.as_slice())),
            PartitionStrategy::Declared => compute_declared_pillar_scores(questions, responses, self.config.pillars.as_slice()),
        }
    }

    pub fn gap_analysis(&self, pillar_scores: &[PillarScore]) -> Vec<Gap> {
        compute_gap_analysis(pillar_scores, self.config.benchmark)
    }

    /// Build the backend submission body.
    pub fn payload(&self, questions: &[Question], responses: &Responses) -> Result<SubmissionPayload> {
        let pillar_scores = self.pillar_scores(questions, responses)?;
        let gaps = self.gap_analysis(&pillar_scores);
        Ok(SubmissionPayload::new(self.overall_score(responses), &pillar_scores, gaps))
    }

    /// Build the full results report from validated answers.
    pub fn report(
        &self,
        questions: &[Question],
        responses: &Responses,
        assessment_type: Option<&str>,
    ) -> Result<AssessmentReport> {
        let pillar_scores = self.pillar_scores(questions, responses)?;
        let gaps = self.gap_analysis(&pillar_scores);
        let recommendations = derive_recommendations(&gaps);
        let radar = RadarChart::new(&pillar_scores, self.config.benchmark);

        let answered = questions.iter().filter(|q| responses.contains(&q.id)).count();
        let orphaned = responses.len() - answered;
        if orphaned > 0 {
            tracing::debug!("{} response(s) do not match any question", orphaned);
        }

        let payload = SubmissionPayload::new(self.overall_score(responses), &pillar_scores, gaps);
        tracing::debug!(
            "Scored assessment: overall {}%, {} gap(s)",
            payload.overall_score,
            payload.gap_analysis.len()
        );

        Ok(AssessmentReport {
            id: ReportId::new(),
            generated_at: Utc::now(),
            assessment_type: assessment_type.map(str::to_string),
            answered,
            total_questions: questions.len(),
            benchmark: self.config.benchmark,
            payload,
            recommendations,
            radar,
        })
    }

    /// Validate raw answers and build the report in one step.
    pub fn assess(
        &self,
        questions: &[Question],
        raw: &RawResponses,
        assessment_type: Option<&str>,
    ) -> Result<AssessmentReport> {
        let responses = self.validate(questions, raw)?;
        self.report(questions, &responses, assessment_type)
    }
}

fn check_unique_ids(questions: &[Question]) -> Result<()> {
    let mut seen = HashSet::with_capacity(questions.len());
    for question in questions {
        if !seen.insert(&question.id) {
            return Err(ScoringError::DuplicateQuestion(question.id.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::likert::Likert;
    use crate::policy::ResponsePolicy;
    use crate::types::QuestionId;

    fn questions(n: usize) -> Vec<Question> {
        (1..=n).map(|i| Question::new(format!("q{}", i), "")).collect()
    }

    #[test]
    fn test_engine_rejects_invalid_config() {
        let config = EngineConfig::default().with_benchmark(101);
        assert!(ScoringEngine::new(config).is_err());
    }

    #[test]
    fn test_duplicate_questions_rejected() {
        let engine = ScoringEngine::default();
        let qs = vec![Question::new("q1", ""), Question::new("q1", "")];
        let result = engine.pillar_scores(&qs, &Responses::new());
        assert!(matches!(result, Err(ScoringError::DuplicateQuestion(_))));
    }

    #[test]
    fn test_engine_uses_configured_policy() {
        let engine = ScoringEngine::new(EngineConfig::default().with_response_policy(ResponsePolicy::Clamp)).unwrap();
        let raw: RawResponses = [(QuestionId::from("q1"), 9)].into_iter().collect();
        let responses = engine.validate(&questions(1), &raw).unwrap();
        assert_eq!(responses.get(&QuestionId::from("q1")), Some(Likert::StronglyAgree));
    }

    #[test]
    fn test_report_counts_answered_questions_only() {
        let engine = ScoringEngine::default();
        let responses: Responses = [("q1", Likert::Agree), ("other", Likert::StronglyAgree)]
            .into_iter()
            .collect();
        let report = engine.report(&questions(8), &responses, Some("Enterprise")).unwrap();

        assert_eq!(report.answered, 1);
        assert_eq!(report.total_questions, 8);
        // overall counts every answer, matched or not: 9 / 10
        assert_eq!(report.payload.overall_score, 90);
        assert_eq!(report.assessment_type.as_deref(), Some("Enterprise"));
    }

    #[test]
    fn test_engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ScoringEngine>();
    }
}
