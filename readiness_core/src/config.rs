//! Engine configuration.
//!
//! Defaults reproduce the questionnaire's behavior: eight pillars,
//! benchmark 80, positional partitioning, strict Likert validation.
//! Configuration can be loaded from YAML:
//!
//! ```yaml
//! benchmark: 75
//! response_policy: clamp
//! require_complete: false
//! partition: positional
//! pillars: [Strategy, Data, People]
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoringError};
use crate::gaps::BEST_PRACTICE_BENCHMARK;
use crate::policy::ResponsePolicy;
use crate::scoring::PartitionStrategy;
use crate::types::default_pillars;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Pillar names in report order
    pub pillars: Vec<String>,
    /// Target score for gap analysis (0..=100)
    pub benchmark: u8,
    /// Handling of answers outside 1..=5
    pub response_policy: ResponsePolicy,
    /// Fail when any question is unanswered
    pub require_complete: bool,
    /// How questions are assigned to pillars
    pub partition: PartitionStrategy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            pillars: default_pillars(),
            benchmark: BEST_PRACTICE_BENCHMARK,
            response_policy: ResponsePolicy::default(),
            require_complete: false,
            partition: PartitionStrategy::default(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a YAML document. Missing keys take their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a YAML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_yaml_str(&content)?;
        tracing::debug!("Loaded engine config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check invariants the scoring functions rely on.
    pub fn validate(&self) -> Result<()> {
        if self.pillars.is_empty() {
            return Err(ScoringError::InvalidConfig("at least one pillar is required".to_string()));
        }
        if self.benchmark > 100 {
            return Err(ScoringError::InvalidConfig(format!(
                "benchmark must be between 0 and 100, got {}",
                self.benchmark
            )));
        }

        let mut seen = HashSet::new();
        for name in &self.pillars {
            if name.trim().is_empty() {
                return Err(ScoringError::InvalidConfig("pillar names must not be blank".to_string()));
            }
            if !seen.insert(name.as_str()) {
                return Err(ScoringError::InvalidConfig(format!("duplicate pillar '{}'", name)));
            }
        }
        Ok(())
    }

    pub fn with_benchmark(mut self, benchmark: u8) -> Self {
        self.benchmark = benchmark;
        self
    }

    pub fn with_response_policy(mut self, policy: ResponsePolicy) -> Self {
        self.response_policy = policy;
        self
    }

    pub fn with_partition(mut self, partition: PartitionStrategy) -> Self {
        self.partition = partition;
        self
    }

    pub fn with_pillars<S: Into<String>>(mut self, pillars: impl IntoIterator<Item = S>) -> Self {
        self.pillars = pillars.into_iter().map(Into::into).collect();
        self
    }

    pub fn require_complete(mut self, required: bool) -> Self {
        self.require_complete = required;
        self
    }
}
