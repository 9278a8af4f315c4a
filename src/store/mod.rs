//! Analysis history store
//!
//! A small JSON-file-backed document store for analysis summaries. The store
//! is an explicitly constructed handle with an open/close lifecycle; every
//! operation on a closed handle fails with `StoreNotConnected` rather than
//! panicking, and missing records surface as `Option`, not errors.

use crate::analysis::engine::AnalysisReport;
use crate::analysis::round1;
use crate::error::{AtsAnalyzerError, Result};
use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

/// The persisted per-analysis summary. Mirrors the score fields of the
/// report plus bookkeeping; the full report is not stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: String,
    pub filename: String,
    pub created_at: DateTime<Utc>,
    pub overall_score: f64,
    pub ats_score: f64,
    pub section_score: f64,
    pub formatting_score: f64,
    pub content_similarity_score: f64,
    pub matched_keywords_count: usize,
    pub missing_keywords_count: usize,
}

impl HistoryRecord {
    /// Build a record from a finished report. The timestamp is assigned
    /// here, never inside the scoring engine.
    pub fn from_report(filename: &str, report: &AnalysisReport) -> Self {
        let created_at = Utc::now();
        Self {
            id: format!("{:x}", created_at.timestamp_nanos_opt().unwrap_or_default()),
            filename: filename.to_string(),
            created_at,
            overall_score: report.overall_score,
            ats_score: report.ats_score,
            section_score: report.section_score,
            formatting_score: report.formatting_score,
            content_similarity_score: report.content_similarity_score,
            matched_keywords_count: report.matched_keywords.len(),
            missing_keywords_count: report.missing_keywords.len(),
        }
    }
}

/// Aggregate statistics over all stored analyses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryStats {
    pub total_analyses: usize,
    pub avg_overall_score: f64,
    pub avg_ats_score: f64,
    pub max_overall_score: f64,
    pub min_overall_score: f64,
}

pub struct HistoryStore {
    path: PathBuf,
    records: Option<Vec<HistoryRecord>>,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: None,
        }
    }

    /// Load the history file, creating an empty store on first use.
    pub async fn open(&mut self) -> Result<()> {
        let records = if self.path.exists() {
            let content = fs::read_to_string(&self.path)
                .await
                .map_err(AtsAnalyzerError::Io)?;
            serde_json::from_str(&content)
                .map_err(|e| AtsAnalyzerError::Store(format!("Corrupt history file: {}", e)))?
        } else {
            Vec::new()
        };
        info!(
            "History store opened at {} ({} records)",
            self.path.display(),
            records.len()
        );
        self.records = Some(records);
        Ok(())
    }

    pub fn close(&mut self) {
        self.records = None;
    }

    pub fn is_connected(&self) -> bool {
        self.records.is_some()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist one record; returns its id.
    pub async fn save(&mut self, record: HistoryRecord) -> Result<String> {
        let id = record.id.clone();
        let records = self.records_mut()?;
        records.push(record);
        self.flush().await?;
        Ok(id)
    }

    /// Most recent records first, up to `limit`.
    pub fn recent(&self, limit: usize) -> Result<Vec<HistoryRecord>> {
        let records = self.records_ref()?;
        let mut sorted: Vec<HistoryRecord> = records.to_vec();
        sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        sorted.truncate(limit);
        Ok(sorted)
    }

    pub fn by_id(&self, id: &str) -> Result<Option<HistoryRecord>> {
        let records = self.records_ref()?;
        Ok(records.iter().find(|r| r.id == id).cloned())
    }

    /// Returns whether a record with this id was deleted.
    pub async fn delete(&mut self, id: &str) -> Result<bool> {
        let records = self.records_mut()?;
        let before = records.len();
        records.retain(|r| r.id != id);
        let deleted = records.len() < before;
        if deleted {
            self.flush().await?;
        }
        Ok(deleted)
    }

    /// Deletes everything; returns the number of removed records.
    pub async fn clear(&mut self) -> Result<usize> {
        let records = self.records_mut()?;
        let removed = records.len();
        records.clear();
        self.flush().await?;
        Ok(removed)
    }

    pub fn count(&self) -> Result<usize> {
        Ok(self.records_ref()?.len())
    }

    pub fn stats(&self) -> Result<HistoryStats> {
        let records = self.records_ref()?;
        if records.is_empty() {
            return Ok(HistoryStats {
                total_analyses: 0,
                avg_overall_score: 0.0,
                avg_ats_score: 0.0,
                max_overall_score: 0.0,
                min_overall_score: 0.0,
            });
        }

        let total = records.len();
        let sum_overall: f64 = records.iter().map(|r| r.overall_score).sum();
        let sum_ats: f64 = records.iter().map(|r| r.ats_score).sum();
        let max_overall = records
            .iter()
            .map(|r| r.overall_score)
            .fold(f64::MIN, f64::max);
        let min_overall = records
            .iter()
            .map(|r| r.overall_score)
            .fold(f64::MAX, f64::min);

        Ok(HistoryStats {
            total_analyses: total,
            avg_overall_score: round1(sum_overall / total as f64),
            avg_ats_score: round1(sum_ats / total as f64),
            max_overall_score: max_overall,
            min_overall_score: min_overall,
        })
    }

    fn records_ref(&self) -> Result<&Vec<HistoryRecord>> {
        self.records.as_ref().ok_or(AtsAnalyzerError::StoreNotConnected)
    }

    fn records_mut(&mut self) -> Result<&mut Vec<HistoryRecord>> {
        self.records.as_mut().ok_or(AtsAnalyzerError::StoreNotConnected)
    }

    async fn flush(&self) -> Result<()> {
        let records = self.records_ref()?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await.map_err(AtsAnalyzerError::Io)?;
        }
        let content = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, content)
            .await
            .map_err(AtsAnalyzerError::Io)?;
        Ok(())
    }
}
