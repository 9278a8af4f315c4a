//! Skill categorization against static vocabulary sets

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Matched keywords grouped by skill category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillCategories {
    pub technical: Vec<String>,
    pub soft_skills: Vec<String>,
    pub tools: Vec<String>,
    pub certifications: Vec<String>,
    pub other: Vec<String>,
}

/// Classifies keywords into technical / soft-skill / tool / certification
/// buckets using fixed vocabulary sets.
pub struct SkillCategorizer {
    technical_skills: HashSet<String>,
    soft_skills: HashSet<String>,
    tools_platforms: HashSet<String>,
    certification_keywords: Vec<String>,
}

impl Default for SkillCategorizer {
    fn default() -> Self {
        Self::new()
    }
}

impl SkillCategorizer {
    pub fn new() -> Self {
        Self {
            technical_skills: Self::default_technical_skills(),
            soft_skills: Self::default_soft_skills(),
            tools_platforms: Self::default_tools_platforms(),
            certification_keywords: Self::default_certification_keywords(),
        }
    }

    /// Assign each keyword to its first matching category. Exact membership
    /// is checked for technical, soft and tool sets in that order;
    /// certifications match by substring containment ("aws certified" carries
    /// "certified"); everything else lands in `other`.
    pub fn categorize<'a, I>(&self, keywords: I) -> SkillCategories
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut categories = SkillCategories::default();

        for keyword in keywords {
            let lower = keyword.to_lowercase();
            if self.technical_skills.contains(&lower) {
                categories.technical.push(keyword.to_string());
            } else if self.soft_skills.contains(&lower) {
                categories.soft_skills.push(keyword.to_string());
            } else if self.tools_platforms.contains(&lower) {
                categories.tools.push(keyword.to_string());
            } else if self
                .certification_keywords
                .iter()
                .any(|cert| lower.contains(cert))
            {
                categories.certifications.push(keyword.to_string());
            } else {
                categories.other.push(keyword.to_string());
            }
        }

        categories
    }

    fn default_technical_skills() -> HashSet<String> {
        [
            "python", "java", "javascript", "typescript", "react", "angular", "vue", "nodejs",
            "sql", "mysql", "postgresql", "mongodb", "redis", "docker", "kubernetes", "aws",
            "azure", "gcp", "linux", "git", "jenkins", "terraform", "ansible", "html", "css",
            "api", "rest", "graphql", "microservices", "machine learning", "ai", "tensorflow",
            "pytorch", "pandas", "numpy", "scikit", "spark", "hadoop", "kafka", "elasticsearch",
            "c++", "golang", "rust", "swift", "kotlin", "flutter", "react native", "django",
            "flask", "spring", "express", "fastapi", "devops", "cicd", "agile", "scrum",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    fn default_soft_skills() -> HashSet<String> {
        [
            "communication", "leadership", "teamwork", "problem solving", "analytical",
            "critical thinking", "creativity", "adaptability", "collaboration", "management",
            "mentoring", "presentation", "negotiation", "decision making", "time management",
            "organization", "attention to detail", "multitasking", "interpersonal", "strategic",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    fn default_tools_platforms() -> HashSet<String> {
        [
            "jira", "confluence", "slack", "trello", "asana", "github", "gitlab", "bitbucket",
            "figma", "sketch", "adobe", "photoshop", "illustrator", "excel", "powerpoint",
            "tableau", "power bi", "salesforce", "hubspot", "zendesk", "notion", "monday",
            "postman", "swagger", "vs code", "intellij", "pycharm", "android studio", "xcode",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    fn default_certification_keywords() -> Vec<String> {
        [
            "certified", "certification", "certificate", "aws certified", "azure certified",
            "pmp", "scrum master", "csm", "cka", "ckad", "comptia", "cisco", "ccna", "ccnp",
            "google certified", "meta certified", "six sigma", "itil", "prince2",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_technical_keyword() {
        let categorizer = SkillCategorizer::new();
        let categories = categorizer.categorize(["python"]);
        assert_eq!(categories.technical, vec!["python"]);
    }

    #[test]
    fn test_certification_substring_match() {
        let categorizer = SkillCategorizer::new();
        let categories = categorizer.categorize(["aws certified"]);
        assert_eq!(categories.certifications, vec!["aws certified"]);
    }

    #[test]
    fn test_priority_order_first_match_wins() {
        // "scrum" is a technical-set member even though "scrum master" is a
        // certification keyword; exact technical membership wins.
        let categorizer = SkillCategorizer::new();
        let categories = categorizer.categorize(["scrum"]);
        assert_eq!(categories.technical, vec!["scrum"]);
        assert!(categories.certifications.is_empty());
    }

    #[test]
    fn test_unknown_keyword_is_other() {
        let categorizer = SkillCategorizer::new();
        let categories = categorizer.categorize(["basketweaving"]);
        assert_eq!(categories.other, vec!["basketweaving"]);
    }

    #[test]
    fn test_soft_and_tool_buckets() {
        let categorizer = SkillCategorizer::new();
        let categories = categorizer.categorize(["leadership", "jira"]);
        assert_eq!(categories.soft_skills, vec!["leadership"]);
        assert_eq!(categories.tools, vec!["jira"]);
    }
}
