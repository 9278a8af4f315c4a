//! Resume section detection and completeness scoring

use crate::error::{AtsAnalyzerError, Result};
use aho_corasick::AhoCorasick;
use serde::{Deserialize, Serialize};

/// The eight section types an ATS expects to find in a resume, in report
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    ContactInfo,
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
    Achievements,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    Critical,
    Recommended,
    Optional,
}

/// Presence record for one section. Importance is fixed per section kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionRecord {
    pub name: SectionKind,
    pub present: bool,
    pub importance: Importance,
}

/// Section detection result with the critical-section completeness score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionAnalysis {
    pub sections: Vec<SectionRecord>,
    pub section_score: f64,
}

impl SectionKind {
    pub const ALL: [SectionKind; 8] = [
        SectionKind::ContactInfo,
        SectionKind::Summary,
        SectionKind::Experience,
        SectionKind::Education,
        SectionKind::Skills,
        SectionKind::Projects,
        SectionKind::Certifications,
        SectionKind::Achievements,
    ];

    /// Substrings whose presence marks the section as detected.
    pub fn indicators(&self) -> &'static [&'static str] {
        match self {
            SectionKind::ContactInfo => &["email", "phone", "linkedin", "github", "address", "@"],
            SectionKind::Summary => &["summary", "objective", "profile", "about me"],
            SectionKind::Experience => &[
                "experience",
                "work history",
                "employment",
                "professional experience",
            ],
            SectionKind::Education => &[
                "education", "academic", "degree", "university", "college", "bachelor", "master",
                "phd",
            ],
            SectionKind::Skills => &["skills", "technical skills", "competencies", "technologies"],
            SectionKind::Projects => &["project", "portfolio", "personal project", "team project"],
            SectionKind::Certifications => {
                &["certification", "certificate", "licensed", "accredited"]
            }
            SectionKind::Achievements => &[
                "achievement",
                "award",
                "honor",
                "recognition",
                "accomplishment",
            ],
        }
    }

    pub fn importance(&self) -> Importance {
        match self {
            SectionKind::ContactInfo
            | SectionKind::Experience
            | SectionKind::Education
            | SectionKind::Skills => Importance::Critical,
            SectionKind::Summary | SectionKind::Projects => Importance::Recommended,
            SectionKind::Certifications | SectionKind::Achievements => Importance::Optional,
        }
    }

    /// Human-readable name for suggestion titles, e.g. "Contact Info".
    pub fn display_name(&self) -> &'static str {
        match self {
            SectionKind::ContactInfo => "Contact Info",
            SectionKind::Summary => "Summary",
            SectionKind::Experience => "Experience",
            SectionKind::Education => "Education",
            SectionKind::Skills => "Skills",
            SectionKind::Projects => "Projects",
            SectionKind::Certifications => "Certifications",
            SectionKind::Achievements => "Achievements",
        }
    }
}

/// Scans resume text for section-indicator substrings with a single
/// case-insensitive Aho-Corasick pass.
pub struct SectionDetector {
    matcher: AhoCorasick,
    pattern_sections: Vec<usize>,
}

impl SectionDetector {
    pub fn new() -> Result<Self> {
        let mut patterns = Vec::new();
        let mut pattern_sections = Vec::new();

        for (idx, kind) in SectionKind::ALL.iter().enumerate() {
            for indicator in kind.indicators() {
                patterns.push(*indicator);
                pattern_sections.push(idx);
            }
        }

        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&patterns)
            .map_err(|e| {
                AtsAnalyzerError::AnalysisFailed(format!("Failed to build section matcher: {}", e))
            })?;

        Ok(Self {
            matcher,
            pattern_sections,
        })
    }

    /// Detect all eight sections and compute the completeness score from the
    /// critical ones only.
    pub fn detect(&self, resume_text: &str) -> SectionAnalysis {
        let mut present = [false; SectionKind::ALL.len()];

        for mat in self.matcher.find_overlapping_iter(resume_text) {
            present[self.pattern_sections[mat.pattern().as_usize()]] = true;
        }

        let sections: Vec<SectionRecord> = SectionKind::ALL
            .iter()
            .enumerate()
            .map(|(idx, kind)| SectionRecord {
                name: *kind,
                present: present[idx],
                importance: kind.importance(),
            })
            .collect();

        let critical_total = sections
            .iter()
            .filter(|s| s.importance == Importance::Critical)
            .count();
        let critical_present = sections
            .iter()
            .filter(|s| s.present && s.importance == Importance::Critical)
            .count();

        let section_score = if critical_total > 0 {
            (critical_present as f64 / critical_total as f64 * 100.0).round()
        } else {
            0.0
        };

        SectionAnalysis {
            sections,
            section_score,
        }
    }
}
