//! Text normalization and tokenization

use regex::Regex;
use std::collections::HashSet;

/// Normalizes raw text and derives keyword/phrase sets from it.
///
/// Normalization is ASCII-oriented on purpose: ATS systems match lowercased
/// alphanumeric tokens, with `+`, `#` and `.` kept so terms like "c++", "c#"
/// and "node.js" survive intact.
pub struct TextNormalizer {
    strip_regex: Regex,
    whitespace_regex: Regex,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextNormalizer {
    pub fn new() -> Self {
        let strip_regex = Regex::new(r"[^a-z0-9\s+#.]").expect("Invalid strip regex");
        let whitespace_regex = Regex::new(r"\s+").expect("Invalid whitespace regex");

        Self {
            strip_regex,
            whitespace_regex,
        }
    }

    /// Lowercase, strip characters outside `[a-z0-9\s+#.]`, collapse
    /// whitespace runs and trim.
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let stripped = self.strip_regex.replace_all(&lowered, " ");
        self.whitespace_regex
            .replace_all(&stripped, " ")
            .trim()
            .to_string()
    }

    /// Normalized tokens in document order, duplicates included.
    pub fn tokens(&self, text: &str) -> Vec<String> {
        self.normalize(text)
            .split_whitespace()
            .map(|w| w.to_string())
            .collect()
    }

    /// Unique keywords of at least `min_length` characters.
    pub fn keywords(&self, text: &str, min_length: usize) -> HashSet<String> {
        self.normalize(text)
            .split_whitespace()
            .filter(|w| w.len() >= min_length)
            .map(|w| w.to_string())
            .collect()
    }

    /// Every adjacent two-word pair, for phrase-level overlap scoring.
    pub fn phrases(&self, text: &str) -> HashSet<String> {
        let normalized = self.normalize(text);
        let words: Vec<&str> = normalized.split_whitespace().collect();
        words
            .windows(2)
            .map(|pair| format!("{} {}", pair[0], pair[1]))
            .collect()
    }
}
