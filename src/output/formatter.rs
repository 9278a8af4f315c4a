//! Console, JSON and markdown rendering of analysis reports

use crate::analysis::engine::AnalysisReport;
use crate::analysis::formatting::Severity;
use crate::analysis::suggestions::{Priority, Suggestion};
use crate::config::OutputFormat;
use crate::error::Result;
use colored::Colorize;
use std::fmt::Write as _;

/// Trait for formatting analysis reports
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
}

/// Console formatter with colors and score badges
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for piping into other tooling
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for saving shareable reports
pub struct MarkdownFormatter;

/// Dispatches to the formatter matching the configured output format.
pub struct ReportGenerator {
    console: ConsoleFormatter,
    json: JsonFormatter,
    markdown: MarkdownFormatter,
}

impl ReportGenerator {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            console: ConsoleFormatter {
                use_colors,
                detailed,
            },
            json: JsonFormatter { pretty: true },
            markdown: MarkdownFormatter,
        }
    }

    pub fn format(&self, report: &AnalysisReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console.format_report(report),
            OutputFormat::Json => self.json.format_report(report),
            OutputFormat::Markdown => self.markdown.format_report(report),
        }
    }
}

fn score_label(score: f64) -> &'static str {
    match score as u32 {
        80.. => "Excellent",
        60..=79 => "Good",
        40..=59 => "Fair",
        _ => "Needs Work",
    }
}

fn priority_tag(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "HIGH",
        Priority::Medium => "MEDIUM",
        Priority::Low => "LOW",
        Priority::Info => "INFO",
    }
}

impl ConsoleFormatter {
    fn colorize_score(&self, score: f64) -> String {
        let text = format!("{:.1} ({})", score, score_label(score));
        if !self.use_colors {
            return text;
        }
        match score as u32 {
            80.. => text.green().bold().to_string(),
            60..=79 => text.cyan().to_string(),
            40..=59 => text.yellow().to_string(),
            _ => text.red().to_string(),
        }
    }

    fn format_suggestion(&self, suggestion: &Suggestion) -> String {
        let tag = priority_tag(suggestion.priority);
        let tag = if self.use_colors {
            match suggestion.priority {
                Priority::High => tag.red().bold().to_string(),
                Priority::Medium => tag.yellow().to_string(),
                Priority::Low => tag.blue().to_string(),
                Priority::Info => tag.green().to_string(),
            }
        } else {
            tag.to_string()
        };
        format!(
            "  [{}] {}\n        {}",
            tag, suggestion.title, suggestion.description
        )
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut out = String::new();

        writeln!(out, "\n=== Resume ATS Analysis ===\n").ok();
        writeln!(out, "Overall score:    {}", self.colorize_score(report.overall_score)).ok();
        writeln!(out, "ATS match:        {}", self.colorize_score(report.ats_score)).ok();
        writeln!(out, "Sections:         {}", self.colorize_score(report.section_score)).ok();
        writeln!(out, "Formatting:       {}", self.colorize_score(report.formatting_score)).ok();
        writeln!(out, "Word count:       {}", report.word_count).ok();

        let stats = &report.keyword_match_stats;
        writeln!(
            out,
            "\nKeywords: {} of {} job-description keywords matched ({:.1}%)",
            stats.matched_count, stats.total_jd_keywords, stats.match_percentage
        )
        .ok();

        if !report.missing_keywords.is_empty() {
            writeln!(
                out,
                "Missing:  {}",
                report.missing_keywords.join(", ")
            )
            .ok();
        }

        if !report.top_priority_actions.is_empty() {
            writeln!(out, "\nTop priority actions:").ok();
            for suggestion in &report.top_priority_actions {
                writeln!(out, "{}", self.format_suggestion(suggestion)).ok();
            }
        }

        if self.detailed {
            writeln!(out, "\nSections:").ok();
            for section in &report.sections {
                let marker = if section.present { "present" } else { "MISSING" };
                writeln!(
                    out,
                    "  {:<16} {:<10} ({:?})",
                    section.name.display_name(),
                    marker,
                    section.importance
                )
                .ok();
            }

            writeln!(out, "\nFormatting issues:").ok();
            for issue in &report.formatting_issues {
                let tag = match issue.severity {
                    Severity::Error => "error",
                    Severity::Warning => "warning",
                    Severity::Success => "ok",
                };
                writeln!(out, "  [{:<7}] {}", tag, issue.message).ok();
            }

            if !report.keyword_density.is_empty() {
                writeln!(out, "\nKeyword density (job description vs resume):").ok();
                for entry in &report.keyword_density {
                    writeln!(
                        out,
                        "  {:<20} jd={:<3} resume={:<3} {:?}",
                        entry.keyword,
                        entry.job_frequency,
                        entry.resume_frequency,
                        entry.recommendation
                    )
                    .ok();
                }
            }

            writeln!(out, "\nAll suggestions:").ok();
            for suggestion in &report.suggestions {
                writeln!(out, "{}", self.format_suggestion(suggestion)).ok();
            }
        }

        Ok(out)
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut out = String::new();

        writeln!(out, "# Resume ATS Analysis\n").ok();
        writeln!(out, "| Score | Value |").ok();
        writeln!(out, "|-------|-------|").ok();
        writeln!(out, "| Overall | {:.1} |", report.overall_score).ok();
        writeln!(out, "| ATS match | {:.1} |", report.ats_score).ok();
        writeln!(out, "| Sections | {:.1} |", report.section_score).ok();
        writeln!(out, "| Formatting | {:.1} |", report.formatting_score).ok();

        writeln!(out, "\n## Keywords\n").ok();
        writeln!(
            out,
            "Matched {} of {} job-description keywords ({:.1}%).\n",
            report.keyword_match_stats.matched_count,
            report.keyword_match_stats.total_jd_keywords,
            report.keyword_match_stats.match_percentage
        )
        .ok();
        if !report.matched_keywords.is_empty() {
            writeln!(out, "- **Matched:** {}", report.matched_keywords.join(", ")).ok();
        }
        if !report.missing_keywords.is_empty() {
            writeln!(out, "- **Missing:** {}", report.missing_keywords.join(", ")).ok();
        }

        writeln!(out, "\n## Sections\n").ok();
        for section in &report.sections {
            let marker = if section.present { "x" } else { " " };
            writeln!(
                out,
                "- [{}] {} ({:?})",
                marker,
                section.name.display_name(),
                section.importance
            )
            .ok();
        }

        writeln!(out, "\n## Suggestions\n").ok();
        for suggestion in &report.suggestions {
            writeln!(
                out,
                "- **{}** ({:?}/{:?}): {}",
                suggestion.title, suggestion.priority, suggestion.category, suggestion.description
            )
            .ok();
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::engine::AnalysisEngine;

    fn sample_report() -> AnalysisReport {
        let engine = AnalysisEngine::new().unwrap();
        engine.generate_full_analysis(
            "Contact: a@b.com 0123456789 Experience Education Skills Python achieved 1 2 3 4 5",
            "Python developer with Docker experience needed. Python daily.",
        )
    }

    #[test]
    fn test_console_output_contains_scores() {
        let formatter = ReportGenerator::new(false, false);
        let output = formatter
            .format(&sample_report(), &OutputFormat::Console)
            .unwrap();
        assert!(output.contains("Overall score:"));
        assert!(output.contains("ATS match:"));
    }

    #[test]
    fn test_console_detailed_lists_sections() {
        let formatter = ReportGenerator::new(false, true);
        let output = formatter
            .format(&sample_report(), &OutputFormat::Console)
            .unwrap();
        assert!(output.contains("Sections:"));
        assert!(output.contains("Contact Info"));
        assert!(output.contains("Formatting issues:"));
    }

    #[test]
    fn test_json_output_round_trips() {
        let formatter = ReportGenerator::new(false, false);
        let output = formatter
            .format(&sample_report(), &OutputFormat::Json)
            .unwrap();
        let parsed: AnalysisReport = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.overall_score, sample_report().overall_score);
    }

    #[test]
    fn test_markdown_output_has_headings() {
        let formatter = ReportGenerator::new(false, false);
        let output = formatter
            .format(&sample_report(), &OutputFormat::Markdown)
            .unwrap();
        assert!(output.starts_with("# Resume ATS Analysis"));
        assert!(output.contains("## Suggestions"));
    }

    #[test]
    fn test_score_labels() {
        assert_eq!(score_label(95.0), "Excellent");
        assert_eq!(score_label(65.0), "Good");
        assert_eq!(score_label(45.0), "Fair");
        assert_eq!(score_label(10.0), "Needs Work");
    }
}
