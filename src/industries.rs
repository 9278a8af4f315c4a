//! Industry keyword reference data
//!
//! A fixed catalog of common keywords per industry, for tailoring a resume
//! before running an analysis. Read-only data, loaded once.

pub struct Industry {
    pub key: &'static str,
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

pub static INDUSTRIES: [Industry; 6] = [
    Industry {
        key: "software_engineering",
        name: "Software Engineering",
        keywords: &[
            "Python", "JavaScript", "React", "Node.js", "AWS", "Docker", "Kubernetes",
            "CI/CD", "Agile", "Scrum", "Git", "REST API", "Microservices", "SQL",
            "System Design", "Testing", "DevOps", "Cloud", "Full Stack", "Backend",
        ],
    },
    Industry {
        key: "data_science",
        name: "Data Science & Analytics",
        keywords: &[
            "Python", "R", "SQL", "Machine Learning", "Deep Learning", "TensorFlow",
            "PyTorch", "Pandas", "NumPy", "Data Visualization", "Tableau", "Power BI",
            "Statistics", "A/B Testing", "NLP", "Computer Vision", "Big Data", "Spark",
        ],
    },
    Industry {
        key: "product_management",
        name: "Product Management",
        keywords: &[
            "Product Strategy", "Roadmap", "User Research", "A/B Testing", "Agile",
            "Scrum", "JIRA", "Cross-functional", "Stakeholder Management", "KPIs",
            "MVP", "User Stories", "Sprint Planning", "Product Discovery", "Analytics",
        ],
    },
    Industry {
        key: "marketing",
        name: "Marketing",
        keywords: &[
            "Digital Marketing", "SEO", "SEM", "Content Marketing", "Social Media",
            "Analytics", "Google Analytics", "Campaign Management", "Brand Strategy",
            "Email Marketing", "PPC", "Conversion Rate", "ROI", "Marketing Automation",
        ],
    },
    Industry {
        key: "design",
        name: "UX/UI Design",
        keywords: &[
            "Figma", "Sketch", "Adobe XD", "User Research", "Wireframing", "Prototyping",
            "Design Systems", "Usability Testing", "Information Architecture",
            "Interaction Design", "Visual Design", "Accessibility", "Responsive Design",
            "Design Thinking",
        ],
    },
    Industry {
        key: "finance",
        name: "Finance & Accounting",
        keywords: &[
            "Financial Analysis", "Budgeting", "Forecasting", "Excel", "Financial Modeling",
            "GAAP", "Auditing", "Compliance", "Risk Management", "SAP", "QuickBooks",
            "Account Reconciliation", "Financial Reporting", "Variance Analysis", "Taxation",
        ],
    },
];

/// Look up one industry by its key.
pub fn by_key(key: &str) -> Option<&'static Industry> {
    INDUSTRIES.iter().find(|i| i.key == key)
}
