//! Input processing module
//! Handles file detection, text extraction, and input management

pub mod file_detector;
pub mod text_extractor;
pub mod manager;

use crate::error::{AtsAnalyzerError, Result};

/// Reject blank analysis inputs before the scoring engine runs.
pub fn require_non_blank(text: &str, label: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(AtsAnalyzerError::InvalidInput(format!(
            "{} cannot be empty.",
            label
        )));
    }
    Ok(())
}
