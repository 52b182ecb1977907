//! Recommendation generation for pillar gaps
//!
//! Each default pillar has a short catalogue of remediation actions. The
//! severity of the gap decides how many of them are surfaced.

use serde::{Deserialize, Serialize};

use super::analyzer::{Gap, GapPriority, GapSeverity};

/// Remediation advice for one pillar gap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Pillar the advice applies to
    pub pillar: String,
    pub severity: GapSeverity,
    pub priority: GapPriority,
    /// One-line summary shown as the card title
    pub headline: String,
    /// Concrete next steps, most important first
    pub actions: Vec<String>,
}

fn catalogue(pillar: &str) -> &'static [&'static str] {
    match pillar {
        "Strategy" => &[
            "Define an AI vision tied to measurable business outcomes",
            "Secure an executive sponsor and a funded multi-year roadmap",
            "Prioritize use cases by value and feasibility",
        ],
        "Architecture" => &[
            "Establish reference architecture for model serving and integration",
            "Adopt scalable compute and MLOps tooling",
            "Standardize APIs between data platforms and AI services",
        ],
        "Foundation" => &[
            "Consolidate data sources into governed, discoverable stores",
            "Introduce data quality monitoring and ownership",
            "Document lineage for data feeding AI workloads",
        ],
        "Ethics" => &[
            "Publish responsible AI principles and review checkpoints",
            "Assess models for bias and explainability before release",
            "Set up a channel for raising AI ethics concerns",
        ],
        "Culture" => &[
            "Run AI literacy sessions across business teams",
            "Reward experimentation and share lessons from pilots",
            "Pair domain experts with data teams on live projects",
        ],
        "Capability" => &[
            "Map current skills against the AI roadmap",
            "Fund targeted upskilling and key hires",
            "Create a center of excellence to spread practices",
        ],
        "Governance" => &[
            "Assign accountability for AI risk and compliance",
            "Maintain an inventory of models in production",
            "Define approval and monitoring policies for AI systems",
        ],
        "Performance" => &[
            "Define KPIs for every AI initiative before launch",
            "Track model performance and drift in production",
            "Review realized value against the business case quarterly",
        ],
        _ => &[
            "Review current practices against industry benchmarks",
            "Agree on an improvement plan with a named owner",
            "Reassess once the plan has been executed",
        ],
    }
}

/// Recommendation for a single gap.
///
/// Critical gaps surface the whole catalogue, High two actions, Moderate one.
pub fn recommend(gap: &Gap) -> Recommendation {
    let actions = catalogue(&gap.pillar);
    let take = match gap.severity {
        GapSeverity::Critical => actions.len(),
        GapSeverity::High => 2,
        GapSeverity::Moderate => 1,
    };

    let headline = match gap.severity {
        GapSeverity::Critical => format!(
            "{} needs immediate attention: {} points below best practice",
            gap.pillar, gap.gap
        ),
        GapSeverity::High => format!("Strengthen {}: {} points below best practice", gap.pillar, gap.gap),
        GapSeverity::Moderate => format!("Fine-tune {}: {} points below best practice", gap.pillar, gap.gap),
    };

    Recommendation {
        pillar: gap.pillar.clone(),
        severity: gap.severity,
        priority: gap.priority,
        headline,
        actions: actions.iter().take(take).map(|a| a.to_string()).collect(),
    }
}

/// Recommendations for all gaps, in gap order (largest gap first).
pub fn derive_recommendations(gaps: &[Gap]) -> Vec<Recommendation> {
    gaps.iter().map(recommend).collect()
}
