//! File type detection

#[derive(Debug, Clone, PartialEq)]
pub enum FileType {
    Pdf,
    Text,
    Markdown,
    /// Recognized but unsupported; callers reject it with a format-specific
    /// message instead of the generic unknown-extension one.
    Docx,
    Unknown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => FileType::Pdf,
            "txt" => FileType::Text,
            "md" | "markdown" => FileType::Markdown,
            "docx" | "doc" => FileType::Docx,
            _ => FileType::Unknown,
        }
    }
}
