//! Integration tests for the resume ATS analyzer

use resume_ats_analyzer::analysis::engine::AnalysisEngine;
use resume_ats_analyzer::analysis::suggestions::{Category, Priority};
use resume_ats_analyzer::input::manager::InputManager;
use resume_ats_analyzer::store::{HistoryRecord, HistoryStore};
use std::path::Path;

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("Kubernetes"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    // Markdown formatting is stripped.
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/unsupported.xyz");

    let result = manager.extract_text(path).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_docx_rejected_by_name() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.docx");

    let err = manager.extract_text(path).await.unwrap_err();
    let message = err.to_string();
    assert!(message.contains("DOCX"));
    assert!(message.contains("Convert"));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/nonexistent.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_full_analysis_over_fixtures() {
    let mut manager = InputManager::new();
    let resume = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let job = manager
        .extract_text(Path::new("tests/fixtures/sample_job.txt"))
        .await
        .unwrap();

    let engine = AnalysisEngine::new().unwrap();
    let report = engine.generate_full_analysis(&resume, &job);

    // The fixture resume follows every best practice the analyzer checks.
    assert_eq!(report.section_score, 100.0);
    assert_eq!(report.formatting_score, 100.0);
    assert!(report.ats_score > 30.0);
    assert!(report.overall_score > 50.0);

    assert!(report.matched_keywords.contains(&"python".to_string()));
    assert!(report.matched_keywords.contains(&"kubernetes".to_string()));
    assert!(report
        .skill_categories
        .technical
        .contains(&"python".to_string()));

    // A strong resume still gets the missing-keyword nudge, never a
    // structure complaint.
    assert!(!report
        .suggestions
        .iter()
        .any(|s| s.category == Category::Structure && s.priority == Priority::High));
}

#[tokio::test]
async fn test_analysis_report_survives_history_round_trip() {
    let mut manager = InputManager::new();
    let resume = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let job = manager
        .extract_text(Path::new("tests/fixtures/sample_job.txt"))
        .await
        .unwrap();

    let engine = AnalysisEngine::new().unwrap();
    let report = engine.generate_full_analysis(&resume, &job);

    let dir = tempfile::tempdir().unwrap();
    let mut store = HistoryStore::new(dir.path().join("history.json"));
    store.open().await.unwrap();

    let record = HistoryRecord::from_report("sample_resume.txt", &report);
    let id = store.save(record).await.unwrap();

    let stored = store.by_id(&id).unwrap().unwrap();
    assert_eq!(stored.overall_score, report.overall_score);
    assert_eq!(stored.matched_keywords_count, report.matched_keywords.len());

    let stats = store.stats().unwrap();
    assert_eq!(stats.total_analyses, 1);
    assert_eq!(stats.max_overall_score, report.overall_score);
}
