//! Formatting and structure heuristics

use crate::error::{AtsAnalyzerError, Result};
use aho_corasick::AhoCorasick;
use regex::Regex;
use serde::{Deserialize, Serialize};

const MIN_WORD_COUNT: usize = 150;
const MAX_WORD_COUNT: usize = 1200;

/// Verbs that signal achievement-oriented writing.
const ACTION_VERBS: [&str; 16] = [
    "achieved",
    "improved",
    "created",
    "developed",
    "led",
    "managed",
    "increased",
    "reduced",
    "designed",
    "implemented",
    "launched",
    "built",
    "optimized",
    "streamlined",
    "delivered",
    "executed",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Success,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattingIssue {
    pub severity: Severity,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattingAnalysis {
    pub formatting_score: f64,
    pub word_count: usize,
    pub issues: Vec<FormattingIssue>,
}

/// Applies a fixed battery of formatting checks to resume text.
///
/// Each rule contributes independently: the score starts at 100, takes the
/// deductions of every rule that fires, and is clamped to [0, 100] at the
/// end. Issue order follows rule-evaluation order.
pub struct FormattingAnalyzer {
    verb_matcher: AhoCorasick,
    number_regex: Regex,
    pronoun_regex: Regex,
    email_regex: Regex,
    phone_regex: Regex,
}

impl FormattingAnalyzer {
    pub fn new() -> Result<Self> {
        let verb_matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(ACTION_VERBS)
            .map_err(|e| {
                AtsAnalyzerError::AnalysisFailed(format!("Failed to build verb matcher: {}", e))
            })?;

        let number_regex = Regex::new(r"\d+%?").expect("Invalid number regex");
        let pronoun_regex = Regex::new(r"\b(i am|i have|i was)\b").expect("Invalid pronoun regex");
        let email_regex = Regex::new(r"[\w.-]+@[\w.-]+\.\w+").expect("Invalid email regex");
        let phone_regex = Regex::new(r"[\d()\-+\s]{10,}").expect("Invalid phone regex");

        Ok(Self {
            verb_matcher,
            number_regex,
            pronoun_regex,
            email_regex,
            phone_regex,
        })
    }

    pub fn analyze(&self, resume_text: &str) -> FormattingAnalysis {
        let mut issues = Vec::new();
        let mut score: i32 = 100;

        let resume_lower = resume_text.to_lowercase();
        let word_count = resume_text.split_whitespace().count();

        if word_count < MIN_WORD_COUNT {
            issues.push(FormattingIssue {
                severity: Severity::Warning,
                message: "Resume is too short. Aim for 400-700 words.".to_string(),
            });
            score -= 15;
        } else if word_count > MAX_WORD_COUNT {
            issues.push(FormattingIssue {
                severity: Severity::Warning,
                message: "Resume is very long. Consider condensing to 1-2 pages.".to_string(),
            });
            score -= 10;
        }

        // Distinct action verbs, not total occurrences.
        let verbs_found = self.count_action_verbs(resume_text);
        if verbs_found < 3 {
            issues.push(FormattingIssue {
                severity: Severity::Warning,
                message: "Use more action verbs to describe your achievements.".to_string(),
            });
            score -= 10;
        } else if verbs_found >= 5 {
            issues.push(FormattingIssue {
                severity: Severity::Success,
                message: "Good use of action verbs!".to_string(),
            });
        }

        let number_count = self.number_regex.find_iter(resume_text).count();
        if number_count < 3 {
            issues.push(FormattingIssue {
                severity: Severity::Warning,
                message: "Add more quantifiable achievements with numbers.".to_string(),
            });
            score -= 10;
        } else if number_count >= 5 {
            issues.push(FormattingIssue {
                severity: Severity::Success,
                message: "Good use of quantifiable metrics!".to_string(),
            });
        }

        if resume_lower.contains("references available") {
            issues.push(FormattingIssue {
                severity: Severity::Error,
                message: "Remove \"References available upon request\" - it's outdated."
                    .to_string(),
            });
            score -= 5;
        }

        if self.pronoun_regex.is_match(&resume_lower) {
            issues.push(FormattingIssue {
                severity: Severity::Warning,
                message: "Avoid first-person pronouns. Use action verbs instead.".to_string(),
            });
            score -= 5;
        }

        if !self.email_regex.is_match(resume_text) {
            issues.push(FormattingIssue {
                severity: Severity::Error,
                message: "No email address detected. Ensure contact info is included.".to_string(),
            });
            score -= 15;
        } else {
            issues.push(FormattingIssue {
                severity: Severity::Success,
                message: "Contact email detected.".to_string(),
            });
        }

        if !self.phone_regex.is_match(resume_text) {
            issues.push(FormattingIssue {
                severity: Severity::Warning,
                message: "Phone number may be missing or not detected.".to_string(),
            });
            score -= 5;
        }

        FormattingAnalysis {
            formatting_score: score.clamp(0, 100) as f64,
            word_count,
            issues,
        }
    }

    fn count_action_verbs(&self, text: &str) -> usize {
        let mut seen = [false; ACTION_VERBS.len()];
        for mat in self.verb_matcher.find_overlapping_iter(text) {
            seen[mat.pattern().as_usize()] = true;
        }
        seen.iter().filter(|s| **s).count()
    }
}
