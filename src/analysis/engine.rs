//! Analysis engine: aggregates all component scores into one report

use crate::analysis::ats::AtsScorer;
use crate::analysis::density::{DensityAnalysis, KeywordDensityAnalyzer, KeywordDensityEntry};
use crate::analysis::formatting::{FormattingAnalyzer, FormattingIssue};
use crate::analysis::round1;
use crate::analysis::sections::{SectionDetector, SectionRecord};
use crate::analysis::skills::SkillCategories;
use crate::analysis::suggestions::{Priority, Suggestion, SuggestionGenerator};
use crate::analysis::text::TextNormalizer;
use crate::error::Result;
use serde::{Deserialize, Serialize};

const PREVIEW_CHARS: usize = 500;
const TOP_HIGH_ACTIONS: usize = 2;
const TOP_MEDIUM_ACTIONS: usize = 1;

// Overall weighting: ATS keyword match carries half the score, section
// completeness and formatting a quarter each.
const ATS_WEIGHT: f64 = 0.5;
const SECTION_WEIGHT: f64 = 0.25;
const FORMATTING_WEIGHT: f64 = 0.25;

/// Matched/missing keyword counts for visualization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordMatchStats {
    pub total_jd_keywords: usize,
    pub matched_count: usize,
    pub missing_count: usize,
    pub match_percentage: f64,
}

/// The full analysis report. Field names and ordering are the wire contract
/// consumed by presentation layers; do not rename or drop fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub overall_score: f64,
    pub ats_score: f64,
    pub keyword_match_score: f64,
    pub content_similarity_score: f64,
    pub section_score: f64,
    pub formatting_score: f64,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub matched_phrases: Vec<String>,
    pub skill_categories: SkillCategories,
    pub sections: Vec<SectionRecord>,
    pub formatting_issues: Vec<FormattingIssue>,
    pub keyword_density: Vec<KeywordDensityEntry>,
    pub word_count: usize,
    pub suggestions: Vec<Suggestion>,
    pub resume_text_preview: String,
    pub top_priority_actions: Vec<Suggestion>,
    pub keyword_match_stats: KeywordMatchStats,
}

/// Coordinates the analysis components. Construction builds the static
/// matchers once; the engine is then read-only and `generate_full_analysis`
/// is a pure function of its two inputs.
pub struct AnalysisEngine {
    normalizer: TextNormalizer,
    ats_scorer: AtsScorer,
    section_detector: SectionDetector,
    formatting_analyzer: FormattingAnalyzer,
    density_analyzer: KeywordDensityAnalyzer,
    suggestion_generator: SuggestionGenerator,
}

impl AnalysisEngine {
    pub fn new() -> Result<Self> {
        Ok(Self {
            normalizer: TextNormalizer::new(),
            ats_scorer: AtsScorer::new(),
            section_detector: SectionDetector::new()?,
            formatting_analyzer: FormattingAnalyzer::new()?,
            density_analyzer: KeywordDensityAnalyzer::new(),
            suggestion_generator: SuggestionGenerator::new(),
        })
    }

    /// Run every analyzer over the input pair and aggregate the results.
    pub fn generate_full_analysis(&self, resume_text: &str, jd_text: &str) -> AnalysisReport {
        let ats = self.ats_scorer.score(resume_text, jd_text);
        let sections = self.section_detector.detect(resume_text);
        let formatting = self.formatting_analyzer.analyze(resume_text);
        let density: DensityAnalysis = self.density_analyzer.analyze(resume_text, jd_text);

        let suggestions = self.suggestion_generator.generate(
            resume_text,
            jd_text,
            &ats.missing_keywords,
            &formatting,
            &sections,
        );

        let overall_score = round1(
            ats.score * ATS_WEIGHT
                + sections.section_score * SECTION_WEIGHT
                + formatting.formatting_score * FORMATTING_WEIGHT,
        );

        let resume_text_preview = Self::preview(resume_text);
        let top_priority_actions = Self::top_priority_actions(&suggestions);

        let total_jd_keywords = self.normalizer.keywords(jd_text, 2).len();
        let keyword_match_stats = KeywordMatchStats {
            total_jd_keywords,
            matched_count: ats.matched_keywords.len(),
            missing_count: ats.missing_keywords.len(),
            match_percentage: round1(
                ats.matched_keywords.len() as f64 / total_jd_keywords.max(1) as f64 * 100.0,
            ),
        };

        AnalysisReport {
            overall_score,
            ats_score: ats.score,
            keyword_match_score: ats.keyword_score,
            content_similarity_score: ats.similarity_score,
            section_score: sections.section_score,
            formatting_score: formatting.formatting_score,
            matched_keywords: ats.matched_keywords,
            missing_keywords: ats.missing_keywords,
            matched_phrases: ats.matched_phrases,
            skill_categories: ats.skill_categories,
            sections: sections.sections,
            formatting_issues: formatting.issues,
            keyword_density: density.keyword_density,
            word_count: formatting.word_count,
            suggestions,
            resume_text_preview,
            top_priority_actions,
            keyword_match_stats,
        }
    }

    /// First 500 characters of the trimmed resume, with an ellipsis marker
    /// when the trimmed text is longer.
    fn preview(resume_text: &str) -> String {
        let trimmed = resume_text.trim();
        let mut preview: String = trimmed.chars().take(PREVIEW_CHARS).collect();
        if trimmed.chars().count() > PREVIEW_CHARS {
            preview.push_str("...");
        }
        preview
    }

    /// First two high-priority suggestions followed by the first
    /// medium-priority one, keeping original suggestion order.
    fn top_priority_actions(suggestions: &[Suggestion]) -> Vec<Suggestion> {
        let high = suggestions
            .iter()
            .filter(|s| s.priority == Priority::High)
            .take(TOP_HIGH_ACTIONS);
        let medium = suggestions
            .iter()
            .filter(|s| s.priority == Priority::Medium)
            .take(TOP_MEDIUM_ACTIONS);
        high.chain(medium).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESUME: &str = "\
John Smith
Email: john.smith@example.com | Phone: (555) 987-6543

Summary
Software engineer with 8 years of professional experience.

Experience
Achieved 35% latency reduction, improved deployment frequency by 4x,
increased test coverage to 90%, reduced incident count by 50%,
delivered 20 production releases using Python, Docker and Kubernetes.

Education
Bachelor of Science in Computer Science, State University.

Skills
Python, Rust, Docker, Kubernetes, PostgreSQL, AWS, Terraform, Leadership.
";

    const SAMPLE_JOB: &str = "\
We are hiring a backend engineer. Requirements: Python, Docker, Kubernetes,
PostgreSQL, AWS experience. Terraform and leadership skills preferred.
Python and Docker used daily.
";

    fn engine() -> AnalysisEngine {
        AnalysisEngine::new().unwrap()
    }

    #[test]
    fn test_scores_in_range() {
        let report = engine().generate_full_analysis(SAMPLE_RESUME, SAMPLE_JOB);
        for score in [
            report.overall_score,
            report.ats_score,
            report.section_score,
            report.formatting_score,
        ] {
            assert!((0.0..=100.0).contains(&score), "score out of range: {}", score);
        }
    }

    #[test]
    fn test_overall_score_invariant() {
        let report = engine().generate_full_analysis(SAMPLE_RESUME, SAMPLE_JOB);
        let expected = crate::analysis::round1(
            report.ats_score * 0.5 + report.section_score * 0.25 + report.formatting_score * 0.25,
        );
        assert_eq!(report.overall_score, expected);
    }

    #[test]
    fn test_idempotence() {
        let eng = engine();
        let first = eng.generate_full_analysis(SAMPLE_RESUME, SAMPLE_JOB);
        let second = eng.generate_full_analysis(SAMPLE_RESUME, SAMPLE_JOB);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_empty_resume_worst_case() {
        let report = engine().generate_full_analysis("", "Python developer needed");
        assert_eq!(report.ats_score, 0.0);
        assert_eq!(report.section_score, 0.0);
        assert!(report
            .formatting_issues
            .iter()
            .any(|i| i.message.contains("too short")));
        assert!(report
            .formatting_issues
            .iter()
            .any(|i| i.message.contains("No email address detected")));
    }

    #[test]
    fn test_empty_job_description_zero_ats() {
        let report = engine().generate_full_analysis(SAMPLE_RESUME, "  \n ");
        assert_eq!(report.ats_score, 0.0);
        assert!(report.matched_keywords.is_empty());
        assert!(report.missing_keywords.is_empty());
        assert_eq!(report.keyword_match_stats.total_jd_keywords, 0);
        assert_eq!(report.keyword_match_stats.match_percentage, 0.0);
    }

    #[test]
    fn test_matched_missing_cover_jd_keywords() {
        let report = engine().generate_full_analysis(SAMPLE_RESUME, SAMPLE_JOB);
        let stats = &report.keyword_match_stats;
        // Below the 50/30 truncation limits, matched + missing covers the
        // whole job-description keyword set.
        assert!(stats.matched_count <= 50 && stats.missing_count <= 30);
        assert_eq!(
            stats.matched_count + stats.missing_count,
            stats.total_jd_keywords
        );
    }

    #[test]
    fn test_preview_truncation() {
        let long_resume = "x".repeat(600);
        let report = engine().generate_full_analysis(&long_resume, SAMPLE_JOB);
        assert_eq!(report.resume_text_preview.chars().count(), 503);
        assert!(report.resume_text_preview.ends_with("..."));

        let short_report = engine().generate_full_analysis("short resume", SAMPLE_JOB);
        assert_eq!(short_report.resume_text_preview, "short resume");
    }

    #[test]
    fn test_top_priority_actions_slicing() {
        // Empty resume produces several high and medium priority items.
        let report = engine().generate_full_analysis("", SAMPLE_JOB);
        assert_eq!(report.top_priority_actions.len(), 3);
        assert_eq!(report.top_priority_actions[0].priority, Priority::High);
        assert_eq!(report.top_priority_actions[1].priority, Priority::High);
        assert_eq!(report.top_priority_actions[2].priority, Priority::Medium);
    }

    #[test]
    fn test_report_wire_shape() {
        let report = engine().generate_full_analysis(SAMPLE_RESUME, SAMPLE_JOB);
        let value = serde_json::to_value(&report).unwrap();
        for field in [
            "overall_score",
            "ats_score",
            "keyword_match_score",
            "content_similarity_score",
            "section_score",
            "formatting_score",
            "matched_keywords",
            "missing_keywords",
            "matched_phrases",
            "skill_categories",
            "sections",
            "formatting_issues",
            "keyword_density",
            "word_count",
            "suggestions",
            "resume_text_preview",
            "top_priority_actions",
            "keyword_match_stats",
        ] {
            assert!(value.get(field).is_some(), "missing field: {}", field);
        }
        assert_eq!(value["sections"].as_array().unwrap().len(), 8);
    }

    #[test]
    fn test_full_sections_score() {
        let report = engine()
            .generate_full_analysis("Contact: a@b.com Experience Education Skills", SAMPLE_JOB);
        assert_eq!(report.section_score, 100.0);
    }
}
