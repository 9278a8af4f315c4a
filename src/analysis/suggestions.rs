//! Prioritized improvement suggestions

use crate::analysis::formatting::{FormattingAnalysis, Severity};
use crate::analysis::sections::{Importance, SectionAnalysis};
use serde::{Deserialize, Serialize};

const MISSING_KEYWORD_POOL: usize = 8;
const MISSING_KEYWORD_DISPLAY: usize = 5;

/// Verbs whose absence triggers the content-enhancement suggestion.
const CONTENT_VERBS: [&str; 5] = ["achieved", "improved", "increased", "reduced", "delivered"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Structure,
    Keywords,
    Formatting,
    Content,
    General,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    pub priority: Priority,
    pub category: Category,
    pub title: String,
    pub description: String,
}

/// Builds the suggestion list in strict priority-tier order. The emission
/// order IS the final order; the list is never re-sorted.
pub struct SuggestionGenerator;

impl SuggestionGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate(
        &self,
        resume_text: &str,
        jd_text: &str,
        missing_keywords: &[String],
        formatting: &FormattingAnalysis,
        sections: &SectionAnalysis,
    ) -> Vec<Suggestion> {
        let mut suggestions = Vec::new();
        let resume_lower = resume_text.to_lowercase();
        let jd_lower = jd_text.to_lowercase();

        // Tier 1: critical missing sections.
        for record in &sections.sections {
            if !record.present && record.importance == Importance::Critical {
                let display = record.name.display_name();
                suggestions.push(Suggestion {
                    priority: Priority::High,
                    category: Category::Structure,
                    title: format!("Add {} Section", display),
                    description: format!(
                        "Your resume appears to be missing a {} section. This is critical for ATS systems.",
                        display
                    ),
                });
            }
        }

        // Tier 2: most frequent missing keywords.
        let mut keyword_freq: Vec<(&String, usize)> = missing_keywords
            .iter()
            .map(|kw| (kw, jd_lower.matches(kw.as_str()).count()))
            .collect();
        keyword_freq.sort_by(|a, b| b.1.cmp(&a.1));
        keyword_freq.truncate(MISSING_KEYWORD_POOL);

        if !keyword_freq.is_empty() {
            let kw_list = keyword_freq
                .iter()
                .take(MISSING_KEYWORD_DISPLAY)
                .map(|(kw, _)| kw.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            suggestions.push(Suggestion {
                priority: Priority::High,
                category: Category::Keywords,
                title: "Add Key Skills From Job Description".to_string(),
                description: format!("Consider adding these important keywords: {}", kw_list),
            });
        }

        // Tier 3: formatting issues, one suggestion each, in issue order.
        for issue in &formatting.issues {
            match issue.severity {
                Severity::Error => suggestions.push(Suggestion {
                    priority: Priority::High,
                    category: Category::Formatting,
                    title: "Formatting Issue".to_string(),
                    description: issue.message.clone(),
                }),
                Severity::Warning => suggestions.push(Suggestion {
                    priority: Priority::Medium,
                    category: Category::Formatting,
                    title: "Improvement Suggestion".to_string(),
                    description: issue.message.clone(),
                }),
                Severity::Success => {}
            }
        }

        // Tier 4: content enhancement.
        if !CONTENT_VERBS.iter().any(|verb| resume_lower.contains(verb)) {
            suggestions.push(Suggestion {
                priority: Priority::Medium,
                category: Category::Content,
                title: "Use Strong Action Verbs".to_string(),
                description: "Start bullet points with action verbs like \"Achieved\", \"Developed\", \"Led\", \"Improved\", \"Delivered\".".to_string(),
            });
        }

        // Tier 5: recommended missing sections.
        for record in &sections.sections {
            if !record.present && record.importance == Importance::Recommended {
                let display = record.name.display_name();
                suggestions.push(Suggestion {
                    priority: Priority::Low,
                    category: Category::Structure,
                    title: format!("Consider Adding {}", display),
                    description: format!("A {} section can strengthen your resume.", display),
                });
            }
        }

        // Tier 6: positive feedback when nothing else came up.
        if suggestions.is_empty() {
            suggestions.push(Suggestion {
                priority: Priority::Info,
                category: Category::General,
                title: "Great Job!".to_string(),
                description: "Your resume covers all the basics. Focus on tailoring specific keywords to each job application.".to_string(),
            });
        }

        suggestions
    }
}

impl Default for SuggestionGenerator {
    fn default() -> Self {
        Self::new()
    }
}
