//! CLI interface for the resume ATS analyzer

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-ats")]
#[command(about = "Resume ATS compatibility analyzer")]
#[command(
    long_about = "Score a resume against a job description: keyword matching, section detection, formatting heuristics and prioritized improvement suggestions"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a resume against a job description
    Analyze {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file (TXT, MD)
        #[arg(short, long)]
        job: PathBuf,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save the formatted report to a file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Show the full section/formatting/density breakdown
        #[arg(short, long)]
        detailed: bool,

        /// Skip writing the result to analysis history
        #[arg(long)]
        no_store: bool,
    },

    /// Browse stored analysis history
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },

    /// Score pasted resume and job-description text, skipping file extraction
    QuickScore {
        /// Resume text
        #[arg(long)]
        resume_text: String,

        /// Job description text
        #[arg(long)]
        job_text: String,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Print resume writing tips
    Tips,

    /// List common keywords by industry
    Industries {
        /// Show a single industry (e.g. software_engineering)
        #[arg(short, long)]
        key: Option<String>,
    },

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum HistoryAction {
    /// List recent analyses (most recent first)
    List {
        /// Maximum number of entries to show
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },

    /// Show a stored analysis summary by id
    Show { id: String },

    /// Delete a stored analysis by id
    Delete { id: String },

    /// Delete all stored analyses
    Clear,

    /// Score statistics across all stored analyses
    Stats,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("json").unwrap(), OutputFormat::Json);
        assert_eq!(parse_output_format("MD").unwrap(), OutputFormat::Markdown);
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_quick_score_and_industries_parse() {
        let cli = Cli::try_parse_from([
            "resume-ats",
            "quick-score",
            "--resume-text",
            "some resume",
            "--job-text",
            "some job",
            "--output",
            "json",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::QuickScore { ref output, .. } if output.as_deref() == Some("json")
        ));

        let cli = Cli::try_parse_from(["resume-ats", "industries", "--key", "finance"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Industries { ref key } if key.as_deref() == Some("finance")
        ));
    }

    #[test]
    fn test_validate_file_extension() {
        let path = PathBuf::from("resume.PDF");
        assert!(validate_file_extension(&path, &["pdf", "txt"]).is_ok());
        assert!(validate_file_extension(&path, &["txt"]).is_err());
        assert!(validate_file_extension(&PathBuf::from("noext"), &["txt"]).is_err());
    }
}
