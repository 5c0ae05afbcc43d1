//! Error types for the commencements library.
//!
//! Only the outer surfaces fail: reading and parsing documents, validating
//! user input, and serializing output. The merge engine, the expander and the
//! beautifier never return errors; stray ids simply match nothing.

use thiserror::Error;

/// Main error type for the commencements library.
#[derive(Debug, Error)]
pub enum CommencementsError {
    /// Invalid date format.
    #[error("Invalid date format: '{0}'. Expected YYYY-MM-DD (e.g., 2021-03-01)")]
    InvalidDate(String),

    /// Invalid country code.
    #[error("Invalid country code: '{0}'. Expected two lowercase letters (e.g., za)")]
    InvalidCountry(String),

    /// Invalid point-in-time argument.
    #[error("Invalid point in time: '{0}'. Expected DATE=FILE (e.g., 2021-03-01=act.xml)")]
    InvalidPointInTime(String),

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// Missing required XML element.
    #[error("Missing required XML element: {element} in {context}")]
    MissingElement { element: String, context: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),
}

/// Result type alias for commencements operations.
pub type Result<T> = std::result::Result<T, CommencementsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CommencementsError::InvalidDate("01-03-2021".to_string());
        assert!(err.to_string().contains("01-03-2021"));
        assert!(err.to_string().contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_missing_element_display() {
        let err = CommencementsError::MissingElement {
            element: "act".to_string(),
            context: "akomaNtoso".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Missing required XML element: act in akomaNtoso"
        );
    }

    #[test]
    fn test_invalid_point_in_time_display() {
        let err = CommencementsError::InvalidPointInTime("act.xml".to_string());
        assert!(err.to_string().contains("DATE=FILE"));
    }
}
