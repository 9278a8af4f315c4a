//! Keyword frequency comparison between job description and resume

use crate::analysis::text::TextNormalizer;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

const TOP_KEYWORDS: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Add,
    Increase,
    Good,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordDensityEntry {
    pub keyword: String,
    pub job_frequency: usize,
    pub resume_frequency: usize,
    pub present: bool,
    pub recommendation: Recommendation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DensityAnalysis {
    pub keyword_density: Vec<KeywordDensityEntry>,
    pub total_jd_words: usize,
    pub total_resume_words: usize,
}

/// Ranks job-description keywords by frequency and reports how often the
/// resume uses each one.
pub struct KeywordDensityAnalyzer {
    normalizer: TextNormalizer,
    stopwords: HashSet<String>,
}

impl KeywordDensityAnalyzer {
    pub fn new() -> Self {
        Self {
            normalizer: TextNormalizer::new(),
            stopwords: Self::default_stopwords(),
        }
    }

    /// Top job-description keywords (stopwords excluded, length > 2,
    /// frequency > 1) ranked by frequency. Ties keep first-occurrence order
    /// in the job description, so the ranking is stable across runs.
    pub fn analyze(&self, resume_text: &str, jd_text: &str) -> DensityAnalysis {
        let resume_tokens = self.normalizer.tokens(resume_text);
        let jd_tokens = self.normalizer.tokens(jd_text);

        let mut resume_freq: HashMap<&str, usize> = HashMap::new();
        for token in &resume_tokens {
            *resume_freq.entry(token).or_insert(0) += 1;
        }

        let mut jd_freq: HashMap<&str, usize> = HashMap::new();
        let mut jd_order: Vec<&str> = Vec::new();
        for token in &jd_tokens {
            let count = jd_freq.entry(token).or_insert(0);
            if *count == 0 {
                jd_order.push(token);
            }
            *count += 1;
        }

        let mut ranked: Vec<(&str, usize)> = jd_order
            .into_iter()
            .filter(|word| !self.stopwords.contains(*word) && word.len() > 2)
            .map(|word| (word, jd_freq[word]))
            .filter(|(_, count)| *count > 1)
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(TOP_KEYWORDS);

        let keyword_density = ranked
            .into_iter()
            .map(|(keyword, jd_count)| {
                let resume_count = resume_freq.get(keyword).copied().unwrap_or(0);
                let recommendation = if resume_count == 0 {
                    Recommendation::Add
                } else if resume_count < jd_count {
                    Recommendation::Increase
                } else {
                    Recommendation::Good
                };
                KeywordDensityEntry {
                    keyword: keyword.to_string(),
                    job_frequency: jd_count,
                    resume_frequency: resume_count,
                    present: resume_count > 0,
                    recommendation,
                }
            })
            .collect();

        DensityAnalysis {
            keyword_density,
            total_jd_words: jd_tokens.len(),
            total_resume_words: resume_tokens.len(),
        }
    }

    fn default_stopwords() -> HashSet<String> {
        [
            "the", "a", "an", "and", "or", "but", "is", "are", "was", "were", "be", "been",
            "being", "have", "has", "had", "do", "does", "did", "will", "would", "could",
            "should", "may", "might", "must", "can", "to", "for", "of", "in", "on", "at", "by",
            "with", "from", "as", "this", "that", "these", "those", "it", "its", "they", "their",
            "we", "our", "you", "your", "he", "she", "him", "her", "his", "who", "what", "when",
            "where", "why", "how", "which", "all", "each", "every", "both", "few", "more",
            "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so",
            "than", "too", "very", "just", "also", "now", "well", "about", "after", "before",
            "between", "into", "through", "during", "above", "below",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }
}

impl Default for KeywordDensityAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendations() {
        let analyzer = KeywordDensityAnalyzer::new();
        let jd = "python python python docker docker kubernetes kubernetes kubernetes";
        let resume = "python docker docker docker";
        let analysis = analyzer.analyze(resume, jd);

        let by_keyword = |kw: &str| {
            analysis
                .keyword_density
                .iter()
                .find(|e| e.keyword == kw)
                .unwrap()
        };

        assert_eq!(by_keyword("python").recommendation, Recommendation::Increase);
        assert_eq!(by_keyword("docker").recommendation, Recommendation::Good);
        assert_eq!(by_keyword("kubernetes").recommendation, Recommendation::Add);
        assert!(!by_keyword("kubernetes").present);
    }

    #[test]
    fn test_stopwords_and_rare_words_excluded() {
        let analyzer = KeywordDensityAnalyzer::new();
        let jd = "the the the rust rust singleton";
        let analysis = analyzer.analyze("", jd);

        assert_eq!(analysis.keyword_density.len(), 1);
        assert_eq!(analysis.keyword_density[0].keyword, "rust");
        assert_eq!(analysis.keyword_density[0].job_frequency, 2);
    }

    #[test]
    fn test_short_words_excluded() {
        let analyzer = KeywordDensityAnalyzer::new();
        // "go" is two characters, below the length threshold.
        let analysis = analyzer.analyze("", "go go go go");
        assert!(analysis.keyword_density.is_empty());
    }

    #[test]
    fn test_sorted_by_frequency_descending() {
        let analyzer = KeywordDensityAnalyzer::new();
        let jd = "docker docker python python python rust rust";
        let analysis = analyzer.analyze("", jd);

        let freqs: Vec<usize> = analysis
            .keyword_density
            .iter()
            .map(|e| e.job_frequency)
            .collect();
        assert_eq!(freqs, vec![3, 2, 2]);
        // Tie between docker and rust keeps job-description order.
        assert_eq!(analysis.keyword_density[1].keyword, "docker");
        assert_eq!(analysis.keyword_density[2].keyword, "rust");
    }

    #[test]
    fn test_word_totals() {
        let analyzer = KeywordDensityAnalyzer::new();
        let analysis = analyzer.analyze("one two three", "four five");
        assert_eq!(analysis.total_resume_words, 3);
        assert_eq!(analysis.total_jd_words, 2);
    }

    #[test]
    fn test_top_keyword_cap() {
        let analyzer = KeywordDensityAnalyzer::new();
        let mut jd = String::new();
        for i in 0..20 {
            let word = format!("keyword{:02} ", i);
            jd.push_str(&word.repeat(2));
        }
        let analysis = analyzer.analyze("", &jd);
        assert_eq!(analysis.keyword_density.len(), TOP_KEYWORDS);
    }
}
