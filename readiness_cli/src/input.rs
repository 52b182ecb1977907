//! Reading questionnaire files from disk.

use std::path::Path;

use anyhow::{Context, Result};
use readiness_core::{EngineConfig, Question, RawResponses};

/// Questions file: JSON array of `{"id", "text", "pillar"?}` in display order.
pub fn load_questions(path: &Path) -> Result<Vec<Question>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read questions from {}", path.display()))?;
    let questions: Vec<Question> = serde_json::from_str(&content)
        .with_context(|| format!("Invalid questions file {}", path.display()))?;
    tracing::debug!("Loaded {} question(s) from {}", questions.len(), path.display());
    Ok(questions)
}

/// Responses file: JSON object mapping question id to an integer answer.
pub fn load_responses(path: &Path) -> Result<RawResponses> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read responses from {}", path.display()))?;
    let raw: RawResponses = serde_json::from_str(&content)
        .with_context(|| format!("Invalid responses file {}", path.display()))?;
    tracing::debug!("Loaded {} response(s) from {}", raw.len(), path.display());
    Ok(raw)
}

/// Engine configuration from a YAML file, or the defaults.
pub fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    match path {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(EngineConfig::default()),
    }
}
