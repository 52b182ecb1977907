//! Pillar gap computation and tiering.

use serde::{Deserialize, Serialize};

use crate::types::PillarScore;

/// Best-practice target score every pillar is compared against.
pub const BEST_PRACTICE_BENCHMARK: u8 = 80;

/// Severity tier of a gap.
///
/// Serialized with the capitalization the report renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GapSeverity {
    /// Shortfall below 20 points
    Moderate,
    /// Shortfall of 20 to 39 points
    High,
    /// Shortfall of 40 points or more
    Critical,
}

/// Remediation priority paired with each severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GapPriority {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for GapSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::Critical => "Critical",
        };
        f.write_str(name)
    }
}

impl std::fmt::Display for GapPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        };
        f.write_str(name)
    }
}

/// Shortfall of one pillar below the benchmark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gap {
    pub pillar: String,
    pub score: u8,
    pub gap: u8,
    pub severity: GapSeverity,
    pub priority: GapPriority,
}

/// Tier a positive gap. Boundaries belong to the higher tier (`>=`).
pub fn severity_for(gap: u8) -> (GapSeverity, GapPriority) {
    if gap >= 40 {
        (GapSeverity::Critical, GapPriority::High)
    } else if gap >= 20 {
        (GapSeverity::High, GapPriority::Medium)
    } else {
        (GapSeverity::Moderate, GapPriority::Low)
    }
}

/// Gaps of every pillar scoring below `benchmark`.
///
/// Sorted by gap size, largest first. Equal gaps keep pillar order.
/// Returns an empty list when no pillar is below the benchmark.
pub fn compute_gap_analysis(pillar_scores: &[PillarScore], benchmark: u8) -> Vec<Gap> {
    let mut gaps: Vec<Gap> = pillar_scores
        .iter()
        .filter(|p| p.score < benchmark)
        .map(|p| {
            let gap = benchmark - p.score;
            let (severity, priority) = severity_for(gap);
            Gap {
                pillar: p.pillar_name.clone(),
                score: p.score,
                gap,
                severity,
                priority,
            }
        })
        .collect();

    // sort_by is stable, ties stay in pillar order
    gaps.sort_by(|a, b| b.gap.cmp(&a.gap));

    tracing::debug!("{} pillar(s) below benchmark {}", gaps.len(), benchmark);
    gaps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pillar(name: &str, score: u8) -> PillarScore {
        PillarScore {
            pillar_name: name.to_string(),
            score,
            answered: 1,
            total: 1,
        }
    }

    #[test]
    fn test_score_40_is_critical() {
        let gaps = compute_gap_analysis(&[pillar("Strategy", 40)], BEST_PRACTICE_BENCHMARK);
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].gap, 40);
        assert_eq!(gaps[0].severity, GapSeverity::Critical);
        assert_eq!(gaps[0].priority, GapPriority::High);
    }

    #[test]
    fn test_score_65_is_moderate() {
        let gaps = compute_gap_analysis(&[pillar("Culture", 65)], BEST_PRACTICE_BENCHMARK);
        assert_eq!(gaps[0].gap, 15);
        assert_eq!(gaps[0].severity, GapSeverity::Moderate);
        assert_eq!(gaps[0].priority, GapPriority::Low);
    }

    #[test]
    fn test_at_or_above_benchmark_has_no_gap() {
        let gaps = compute_gap_analysis(
            &[pillar("Strategy", 80), pillar("Ethics", 95), pillar("Culture", 100)],
            BEST_PRACTICE_BENCHMARK,
        );
        assert!(gaps.is_empty());
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(severity_for(1), (GapSeverity::Moderate, GapPriority::Low));
        assert_eq!(severity_for(19), (GapSeverity::Moderate, GapPriority::Low));
        assert_eq!(severity_for(20), (GapSeverity::High, GapPriority::Medium));
        assert_eq!(severity_for(39), (GapSeverity::High, GapPriority::Medium));
        assert_eq!(severity_for(40), (GapSeverity::Critical, GapPriority::High));
        assert_eq!(severity_for(80), (GapSeverity::Critical, GapPriority::High));
    }

    #[test]
    fn test_sorted_descending_and_stable() {
        let scores = vec![
            pillar("Strategy", 70),
            pillar("Architecture", 20),
            pillar("Foundation", 70),
            pillar("Ethics", 90),
            pillar("Culture", 50),
        ];
        let gaps = compute_gap_analysis(&scores, BEST_PRACTICE_BENCHMARK);
        let order: Vec<_> = gaps.iter().map(|g| g.pillar.as_str()).collect();
        assert_eq!(order, vec!["Architecture", "Culture", "Strategy", "Foundation"]);
    }

    #[test]
    fn test_custom_benchmark() {
        let gaps = compute_gap_analysis(&[pillar("Strategy", 50)], 60);
        assert_eq!(gaps[0].gap, 10);
        assert!(compute_gap_analysis(&[pillar("Strategy", 50)], 50).is_empty());
    }

    #[test]
    fn test_gap_serialization_field_names() {
        let gaps = compute_gap_analysis(&[pillar("Governance", 30)], BEST_PRACTICE_BENCHMARK);
        let json = serde_json::to_value(&gaps[0]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "pillar": "Governance",
                "score": 30,
                "gap": 50,
                "severity": "Critical",
                "priority": "high"
            })
        );
    }
}
