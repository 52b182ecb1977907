//! Submission payload and results report
//!
//! [`SubmissionPayload`] is what the backend submission endpoint expects;
//! its field names are part of that contract. [`AssessmentReport`] wraps
//! the payload with what the results page renders: recommendations and
//! radar chart series.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::gaps::{Gap, Recommendation};
use crate::types::PillarScore;

/// Unique identifier for a generated report
///
/// UUID v4 wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportId(uuid::Uuid);

impl ReportId {
    /// Create a new random ReportId
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for ReportId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ReportId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pillar entry as the backend stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillarScoreEntry {
    pub pillar_name: String,
    /// Same value as `pillar_name`; the backend keeps both columns.
    pub dimension_name: String,
    pub score: u8,
}

impl From<&PillarScore> for PillarScoreEntry {
    fn from(p: &PillarScore) -> Self {
        Self {
            pillar_name: p.pillar_name.clone(),
            dimension_name: p.pillar_name.clone(),
            score: p.score,
        }
    }
}

/// Body of the assessment submission request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub overall_score: u8,
    pub pillar_scores: Vec<PillarScoreEntry>,
    /// Always empty; the backend still requires the field.
    pub risk_assessment: Vec<serde_json::Value>,
    pub gap_analysis: Vec<Gap>,
}

impl SubmissionPayload {
    pub fn new(overall_score: u8, pillar_scores: &[PillarScore], gap_analysis: Vec<Gap>) -> Self {
        Self {
            overall_score,
            pillar_scores: pillar_scores.iter().map(PillarScoreEntry::from).collect(),
            risk_assessment: Vec::new(),
            gap_analysis,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Series for the pillar radar chart: the user's scores against the benchmark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadarChart {
    pub labels: Vec<String>,
    pub scores: Vec<u8>,
    pub benchmark: Vec<u8>,
}

impl RadarChart {
    pub fn new(pillar_scores: &[PillarScore], benchmark: u8) -> Self {
        Self {
            labels: pillar_scores.iter().map(|p| p.pillar_name.clone()).collect(),
            scores: pillar_scores.iter().map(|p| p.score).collect(),
            benchmark: vec![benchmark; pillar_scores.len()],
        }
    }
}

/// Everything the results page needs for one completed assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub id: ReportId,
    pub generated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment_type: Option<String>,
    pub answered: usize,
    pub total_questions: usize,
    pub benchmark: u8,
    pub payload: SubmissionPayload,
    pub recommendations: Vec<Recommendation>,
    pub radar: RadarChart,
}

impl AssessmentReport {
    /// Pillars with no gap, in pillar order.
    pub fn strengths(&self) -> impl Iterator<Item = &PillarScoreEntry> {
        self.payload
            .pillar_scores
            .iter()
            .filter(move |p| p.score >= self.benchmark)
    }

    /// Human-readable summary for terminals and logs.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "Overall readiness: {}% ({} of {} questions answered)\n",
            self.payload.overall_score, self.answered, self.total_questions
        ));
        if let Some(kind) = &self.assessment_type {
            out.push_str(&format!("Assessment: {}\n", kind));
        }

        out.push_str("\nPillar scores:\n");
        for p in &self.payload.pillar_scores {
            out.push_str(&format!("  {:<14} {:>3}%\n", p.pillar_name, p.score));
        }

        out.push_str(&format!("\nGap analysis (benchmark {}%):\n", self.benchmark));
        if self.payload.gap_analysis.is_empty() {
            out.push_str("  No gaps: every pillar meets the benchmark.\n");
        }
        for gap in &self.payload.gap_analysis {
            out.push_str(&format!(
                "  {:<14} score {:>3}%  gap {:>3}  {} ({} priority)\n",
                gap.pillar, gap.score, gap.gap, gap.severity, gap.priority
            ));
        }

        if !self.recommendations.is_empty() {
            out.push_str("\nRecommendations:\n");
        }
        for rec in &self.recommendations {
            out.push_str(&format!("  * {}\n", rec.headline));
            for action in &rec.actions {
                out.push_str(&format!("      - {}\n", action));
            }
        }
        out
    }
}
