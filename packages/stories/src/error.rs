//! Error types for the story parser.
//!
//! Most parse faults never reach the caller: a malformed story or item is
//! logged and dropped. `StoryError` describes those faults internally and is
//! returned directly only by the operations that read raw input (XML text,
//! files) or write output.

use thiserror::Error;

/// Main error type for the story parser library.
#[derive(Debug, Error)]
pub enum StoryError {
    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// Missing required XML attribute.
    #[error("Missing required attribute '{attribute}' on <{element}>")]
    MissingAttribute { attribute: String, element: String },

    /// Attribute that should hold an integer holds something else.
    #[error("Invalid number in attribute '{attribute}': '{value}'")]
    InvalidNumber { attribute: String, value: String },

    /// Grouping kind name not recognized.
    #[error("Unknown grouping kind: '{0}'. Expected one of: topic, program, bio, music, column, series, blog")]
    UnknownGroupingKind(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),
}

/// Result type alias for story parser operations.
pub type Result<T> = std::result::Result<T, StoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_attribute_display() {
        let err = StoryError::MissingAttribute {
            attribute: "id".to_string(),
            element: "story".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Missing required attribute 'id' on <story>"
        );
    }

    #[test]
    fn test_invalid_number_display() {
        let err = StoryError::InvalidNumber {
            attribute: "num".to_string(),
            value: "two".to_string(),
        };
        assert!(err.to_string().contains("'num'"));
        assert!(err.to_string().contains("'two'"));
    }

    #[test]
    fn test_unknown_grouping_kind_display() {
        let err = StoryError::UnknownGroupingKind("weather".to_string());
        assert!(err.to_string().contains("weather"));
        assert!(err.to_string().contains("topic"));
    }

    #[test]
    fn test_xml_parse_from() {
        let parse_err = roxmltree::Document::parse("<open>").unwrap_err();
        let err: StoryError = parse_err.into();
        assert!(err.to_string().starts_with("XML parsing failed"));
    }
}
