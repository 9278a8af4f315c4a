//! Resume ATS analyzer: score a resume against a job description

use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;
use std::process;

use resume_ats_analyzer::analysis::engine::AnalysisEngine;
use resume_ats_analyzer::cli::{self, Cli, Commands, ConfigAction, HistoryAction};
use resume_ats_analyzer::config::Config;
use resume_ats_analyzer::error::{AtsAnalyzerError, Result};
use resume_ats_analyzer::industries::{self, Industry};
use resume_ats_analyzer::input::{self, manager::InputManager};
use resume_ats_analyzer::output::ReportGenerator;
use resume_ats_analyzer::store::{HistoryRecord, HistoryStore};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match load_config(cli.config.clone()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            output,
            save,
            detailed,
            no_store,
        } => {
            analyze(resume, job, output, save, detailed, no_store, &config).await
        }

        Commands::History { action } => {
            let mut store = HistoryStore::new(config.storage.history_path.clone());
            store.open().await?;
            run_history_action(action, &mut store).await
        }

        Commands::QuickScore {
            resume_text,
            job_text,
            output,
        } => quick_score(&resume_text, &job_text, output, &config),

        Commands::Tips => {
            print_tips();
            Ok(())
        }

        Commands::Industries { key } => print_industries(key.as_deref()),

        Commands::Config { action } => match action {
            Some(ConfigAction::Reset) => {
                let defaults = Config::default();
                defaults.save()?;
                println!("Configuration reset to defaults.");
                Ok(())
            }
            Some(ConfigAction::Show) | None => {
                let content = toml::to_string_pretty(&config).map_err(|e| {
                    AtsAnalyzerError::Configuration(format!("Failed to render config: {}", e))
                })?;
                println!("# {}", Config::config_path().display());
                println!("{}", content);
                Ok(())
            }
        },
    }
}

#[allow(clippy::too_many_arguments)]
async fn analyze(
    resume: PathBuf,
    job: PathBuf,
    output: Option<String>,
    save: Option<PathBuf>,
    detailed: bool,
    no_store: bool,
    config: &Config,
) -> Result<()> {
    cli::validate_file_extension(&resume, &["pdf", "txt", "md"])
        .map_err(|e| AtsAnalyzerError::InvalidInput(format!("Resume file: {}", e)))?;
    cli::validate_file_extension(&job, &["txt", "md"])
        .map_err(|e| AtsAnalyzerError::InvalidInput(format!("Job description file: {}", e)))?;

    let output_format = match output {
        Some(format) => cli::parse_output_format(&format).map_err(AtsAnalyzerError::InvalidInput)?,
        None => config.output.format.clone(),
    };

    info!("Starting resume analysis");

    let mut input_manager = InputManager::new();
    let resume_text = input_manager.extract_text(&resume).await?;
    let job_text = input_manager.extract_text(&job).await?;

    input::require_non_blank(&job_text, "Job description")?;

    let engine = AnalysisEngine::new()?;
    let report = engine.generate_full_analysis(&resume_text, &job_text);

    let generator = ReportGenerator::new(
        config.output.color_output,
        detailed || config.output.detailed,
    );
    let formatted = generator.format(&report, &output_format)?;

    match &save {
        Some(path) => {
            tokio::fs::write(path, &formatted).await?;
            println!("Report saved to {}", path.display());
        }
        None => println!("{}", formatted),
    }

    if !no_store {
        // A computed report is never lost to a storage failure.
        let filename = resume
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| resume.to_string_lossy().to_string());
        let record = HistoryRecord::from_report(&filename, &report);
        let mut store = HistoryStore::new(config.storage.history_path.clone());
        match store_record(&mut store, record).await {
            Ok(id) => info!("Analysis saved to history with id {}", id),
            Err(e) => warn!("Failed to save analysis to history: {}", e),
        }
    }

    Ok(())
}

/// Score raw text without touching the filesystem or the history store.
fn quick_score(
    resume_text: &str,
    job_text: &str,
    output: Option<String>,
    config: &Config,
) -> Result<()> {
    input::require_non_blank(resume_text, "Resume text")?;
    input::require_non_blank(job_text, "Job description")?;

    let output_format = match output {
        Some(format) => cli::parse_output_format(&format).map_err(AtsAnalyzerError::InvalidInput)?,
        None => config.output.format.clone(),
    };

    let engine = AnalysisEngine::new()?;
    let report = engine.generate_full_analysis(resume_text, job_text);

    let generator = ReportGenerator::new(config.output.color_output, config.output.detailed);
    println!("{}", generator.format(&report, &output_format)?);
    Ok(())
}

fn print_industries(key: Option<&str>) -> Result<()> {
    let selected: Vec<&Industry> = match key {
        Some(key) => match industries::by_key(key) {
            Some(industry) => vec![industry],
            None => {
                let known = industries::INDUSTRIES
                    .iter()
                    .map(|i| i.key)
                    .collect::<Vec<_>>()
                    .join(", ");
                return Err(AtsAnalyzerError::InvalidInput(format!(
                    "Unknown industry: {}. Known industries: {}",
                    key, known
                )));
            }
        },
        None => industries::INDUSTRIES.iter().collect(),
    };

    println!("Common keywords by industry:\n");
    for industry in selected {
        println!("{} ({})", industry.name, industry.key);
        println!("    {}\n", industry.keywords.join(", "));
    }
    Ok(())
}

async fn store_record(store: &mut HistoryStore, record: HistoryRecord) -> Result<String> {
    store.open().await?;
    store.save(record).await
}

async fn run_history_action(action: HistoryAction, store: &mut HistoryStore) -> Result<()> {
    match action {
        HistoryAction::List { limit } => {
            let records = store.recent(limit)?;
            if records.is_empty() {
                println!("No stored analyses.");
                return Ok(());
            }
            println!(
                "{:<20} {:<24} {:>8} {:>8}  {}",
                "ID", "DATE", "OVERALL", "ATS", "FILE"
            );
            for record in records {
                println!(
                    "{:<20} {:<24} {:>8.1} {:>8.1}  {}",
                    record.id,
                    record.created_at.format("%Y-%m-%d %H:%M:%S UTC"),
                    record.overall_score,
                    record.ats_score,
                    record.filename
                );
            }
            println!("\nTotal analyses: {}", store.count()?);
            Ok(())
        }

        HistoryAction::Show { id } => match store.by_id(&id)? {
            Some(record) => {
                let json = serde_json::to_string_pretty(&record)?;
                println!("{}", json);
                Ok(())
            }
            None => Err(AtsAnalyzerError::InvalidInput(format!(
                "No analysis with id {}",
                id
            ))),
        },

        HistoryAction::Delete { id } => {
            if store.delete(&id).await? {
                println!("Analysis {} deleted.", id);
                Ok(())
            } else {
                Err(AtsAnalyzerError::InvalidInput(format!(
                    "No analysis with id {}",
                    id
                )))
            }
        }

        HistoryAction::Clear => {
            let removed = store.clear().await?;
            println!("History cleared ({} analyses removed).", removed);
            Ok(())
        }

        HistoryAction::Stats => {
            let stats = store.stats()?;
            println!("Total analyses:     {}", stats.total_analyses);
            println!("Average overall:    {:.1}", stats.avg_overall_score);
            println!("Average ATS:        {:.1}", stats.avg_ats_score);
            println!("Best overall:       {:.1}", stats.max_overall_score);
            println!("Worst overall:      {:.1}", stats.min_overall_score);
            Ok(())
        }
    }
}

fn print_tips() {
    let tips: [(&str, &str, &str); 10] = [
        (
            "Keywords",
            "Mirror the Job Description",
            "Use exact phrases and keywords from the job posting in your resume.",
        ),
        (
            "Keywords",
            "Include Industry Buzzwords",
            "Research and include relevant industry-specific terminology.",
        ),
        (
            "Format",
            "Use Standard Section Headers",
            "Stick to traditional headers like 'Experience', 'Education', 'Skills' for ATS compatibility.",
        ),
        (
            "Format",
            "Avoid Tables and Graphics",
            "ATS systems often struggle with complex formatting. Keep it simple.",
        ),
        (
            "Format",
            "Use Standard Fonts",
            "Stick to Arial, Calibri, or Times New Roman for best ATS parsing.",
        ),
        (
            "Content",
            "Quantify Achievements",
            "Use numbers and percentages to demonstrate impact (e.g., 'Increased sales by 30%').",
        ),
        (
            "Content",
            "Start with Action Verbs",
            "Begin each bullet point with strong action verbs like Led, Developed, Achieved.",
        ),
        (
            "Content",
            "Tailor for Each Application",
            "Customize your resume for each job application to match specific requirements.",
        ),
        (
            "Length",
            "Keep It Concise",
            "1 page for early career, 2 pages for experienced professionals.",
        ),
        (
            "Technical",
            "Save as PDF",
            "PDF preserves formatting and is ATS-friendly.",
        ),
    ];

    println!("Resume writing tips:\n");
    for (category, title, description) in tips {
        println!("[{}] {}", category, title);
        println!("    {}\n", description);
    }
}
