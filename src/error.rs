//! Error types for tagmark

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the tagmark application
#[derive(Debug, Error)]
pub enum TagmarkError {
    #[error("No readme.md found starting from: {0}")]
    ReadmeNotFound(PathBuf),

    #[error("Section not found: {0}")]
    SectionNotFound(String),

    #[error("Malformed section '{section}': {reason}")]
    MalformedSection { section: String, reason: String },

    #[error("Tag not found: {0}")]
    TagNotFound(String),

    #[error("Not a fenced code block")]
    NotFenced,

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Base64 error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Content is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TagmarkError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TagmarkError::ReadmeNotFound(_) => 2,
            TagmarkError::SectionNotFound(_) | TagmarkError::MalformedSection { .. } => 3,
            TagmarkError::TagNotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TagmarkError::ReadmeNotFound(path) => {
                format!(
                    "No readme.md found starting from: {}\n\n\
                    Suggestions:\n\
                    • Pass the readme file path directly\n\
                    • Run against a directory that has a readme.md in it or above it",
                    path.display()
                )
            }
            TagmarkError::SectionNotFound(section) => {
                format!(
                    "Section not found: '{}'\n\n\
                    Suggestions:\n\
                    • Heading text must match exactly, including case\n\
                    • The section needs a fenced code block below its heading",
                    section
                )
            }
            TagmarkError::TagNotFound(tag) => {
                format!(
                    "Tag not found: '{}'\n\n\
                    Suggestions:\n\
                    • Run 'tagmark tags <readme>' to see which tags a readme defines\n\
                    • Tag sections carry a yaml $(tag) == '<name>' fence annotation",
                    tag
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TagmarkError
pub type Result<T> = std::result::Result<T, TagmarkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readme_not_found_suggestions() {
        let err = TagmarkError::ReadmeNotFound(PathBuf::from("/tmp/specs"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("/tmp/specs"));
        assert!(msg.contains("Suggestions"));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_section_not_found_suggestions() {
        let err = TagmarkError::SectionNotFound("Basic Information".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("Basic Information"));
        assert!(msg.contains("including case"));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_tag_not_found_suggestions() {
        let err = TagmarkError::TagNotFound("package-2099-01".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("tagmark tags"));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = TagmarkError::NotFenced;
        assert_eq!(err.display_with_suggestions(), "Not a fenced code block");
        assert_eq!(err.exit_code(), 1);
    }
}
