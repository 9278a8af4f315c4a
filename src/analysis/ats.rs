//! ATS keyword-overlap scoring

use crate::analysis::round1;
use crate::analysis::skills::{SkillCategorizer, SkillCategories};
use crate::analysis::text::TextNormalizer;
use serde::{Deserialize, Serialize};

const MIN_KEYWORD_LENGTH: usize = 2;
const MAX_MATCHED_KEYWORDS: usize = 50;
const MAX_MISSING_KEYWORDS: usize = 30;
const MAX_MATCHED_PHRASES: usize = 20;
const MAX_PHRASE_BONUS: f64 = 20.0;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AtsResult {
    pub score: f64,
    pub keyword_score: f64,
    pub similarity_score: f64,
    pub phrase_score: f64,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub matched_phrases: Vec<String>,
    pub skill_categories: SkillCategories,
}

/// Computes keyword overlap, Jaccard similarity and a phrase-overlap bonus
/// between a resume and a job description, combined into one 0-100 score.
pub struct AtsScorer {
    normalizer: TextNormalizer,
    categorizer: SkillCategorizer,
}

impl AtsScorer {
    pub fn new() -> Self {
        Self {
            normalizer: TextNormalizer::new(),
            categorizer: SkillCategorizer::new(),
        }
    }

    pub fn score(&self, resume_text: &str, jd_text: &str) -> AtsResult {
        let resume_keywords = self.normalizer.keywords(resume_text, MIN_KEYWORD_LENGTH);
        let jd_keywords = self.normalizer.keywords(jd_text, MIN_KEYWORD_LENGTH);

        // Degenerate case, not an error: nothing to match against.
        if jd_keywords.is_empty() {
            return AtsResult::default();
        }

        let resume_phrases = self.normalizer.phrases(resume_text);
        let jd_phrases = self.normalizer.phrases(jd_text);

        let mut matched: Vec<String> = jd_keywords.intersection(&resume_keywords).cloned().collect();
        matched.sort();
        let mut missing: Vec<String> = jd_keywords.difference(&resume_keywords).cloned().collect();
        missing.sort();
        let mut matched_phrases: Vec<String> =
            jd_phrases.intersection(&resume_phrases).cloned().collect();
        matched_phrases.sort();

        let keyword_score = matched.len() as f64 / jd_keywords.len() as f64 * 100.0;
        let phrase_score = (matched_phrases.len() as f64 * 2.0).min(MAX_PHRASE_BONUS);

        let union_size = resume_keywords.union(&jd_keywords).count();
        let jaccard = matched.len() as f64 / union_size as f64 * 100.0;

        // Weights intentionally sum to 1.4: the phrase bonus is headroom on
        // top of the weighted keyword/Jaccard base, and the clamp below keeps
        // the result in range.
        let base_score = keyword_score * 0.6 + jaccard * 0.3 + phrase_score * 0.5;
        let final_score = round1(base_score).min(100.0);

        // Categorize the full matched set in sorted order before truncating
        // the keyword list, so categories are complete and deterministic.
        let skill_categories = self.categorizer.categorize(matched.iter().map(|s| s.as_str()));

        matched.truncate(MAX_MATCHED_KEYWORDS);
        missing.truncate(MAX_MISSING_KEYWORDS);
        matched_phrases.truncate(MAX_MATCHED_PHRASES);

        AtsResult {
            score: final_score,
            keyword_score: round1(keyword_score),
            similarity_score: round1(jaccard),
            phrase_score: round1(phrase_score),
            matched_keywords: matched,
            missing_keywords: missing,
            matched_phrases,
            skill_categories,
        }
    }
}

impl Default for AtsScorer {
    fn default() -> Self {
        Self::new()
    }
}
