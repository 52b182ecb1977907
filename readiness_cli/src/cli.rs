//! Command-line interface for the readiness scoring engine.
//!
//! # Examples
//!
//! Score a completed assessment:
//!
//! ```bash
//! $ readiness score --questions questions.json --responses answers.json
//! ```
//!
//! Emit the body for the backend submission endpoint:
//!
//! ```bash
//! $ readiness score -q questions.json -r answers.json --format payload
//! ```
//!
//! Replay answers one at a time and show the running score:
//!
//! ```bash
//! $ readiness live -q questions.json -r answers.json
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use readiness_core::{validate_responses, LiveScore, ScoringEngine};

use crate::input::{load_config, load_questions, load_responses};

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "readiness", version, about = "Score AI readiness self-assessments")]
pub struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Score a set of responses and print the report
    Score {
        #[command(flatten)]
        files: InputFiles,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Assessment type shown in the report
        #[arg(short = 't', long = "type")]
        assessment_type: Option<String>,
    },

    /// Replay responses in order and print the running score after each
    Live {
        #[command(flatten)]
        files: InputFiles,
    },

    /// Print the default engine configuration as YAML
    Config,
}

#[derive(clap::Args, Debug)]
struct InputFiles {
    /// JSON array of questions in display order
    #[arg(short, long)]
    questions: PathBuf,

    /// JSON object mapping question id to answer (1-5)
    #[arg(short, long)]
    responses: PathBuf,

    /// YAML engine configuration
    #[arg(short, long, env = "READINESS_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable summary
    Text,
    /// Full report as JSON
    Json,
    /// Backend submission body only
    Payload,
}

/// Entry point for the CLI.
pub fn run(cli: Cli) -> Result<()> {
    match cli.action {
        Action::Score {
            files,
            format,
            assessment_type,
        } => {
            let engine = ScoringEngine::new(load_config(files.config.as_deref())?)?;
            let questions = load_questions(&files.questions)?;
            let raw = load_responses(&files.responses)?;

            let report = engine.assess(&questions, &raw, assessment_type.as_deref())?;
            tracing::info!("Generated report {}", report.id);

            match format {
                OutputFormat::Text => print!("{}", report.render_text()),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
                OutputFormat::Payload => println!("{}", report.payload.to_json()?),
            }
        }

        Action::Live { files } => {
            let config = load_config(files.config.as_deref())?;
            let questions = load_questions(&files.questions)?;
            let raw = load_responses(&files.responses)?;

            // An assessment in progress is incomplete by definition
            let responses = validate_responses(&questions, &raw, config.response_policy, false)?;

            let mut live = LiveScore::new();
            for (id, value) in responses.iter() {
                let score = live.set(id.clone(), value);
                println!("{:<8} {} ({:<17}) -> {:>3}%", id, value, value.label(), score);
            }
            println!("Answered {} of {} question(s)", live.answered(), questions.len());
        }

        Action::Config => {
            print!("{}", readiness_core::EngineConfig::default().to_yaml()?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_score_with_format() {
        let cli = Cli::try_parse_from([
            "readiness", "score", "-q", "q.json", "-r", "r.json", "--format", "payload", "--type", "SME",
        ])
        .unwrap();
        match cli.action {
            Action::Score { format, assessment_type, .. } => {
                assert_eq!(format, OutputFormat::Payload);
                assert_eq!(assessment_type.as_deref(), Some("SME"));
            }
            other => panic!("Expected Score, got {:?}", other),
        }
    }

    #[test]
    fn test_score_requires_inputs() {
        assert!(Cli::try_parse_from(["readiness", "score", "-q", "q.json"]).is_err());
    }
}
