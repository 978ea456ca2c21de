//! Error types for crosswalk loading and citation lookups.

use thiserror::Error;

/// Main error type for crosswalk operations.
#[derive(Debug, Error)]
pub enum IucrError {
    /// No offense is filed under the citation, even after subsection backoff.
    #[error("No offense found for ILCS reference: {reference}")]
    NotFound {
        /// The citation as originally requested, before any backoff.
        reference: String,
    },

    /// No offense has the requested IUCR code.
    #[error("No offense found for IUCR code: {code}")]
    CodeNotFound { code: String },

    /// A structured lookup was given a partial component set.
    #[error("Invalid lookup arguments: {0}")]
    InvalidArgument(String),

    /// A citation string does not have the `chapter-act/section` shape.
    #[error("Invalid ILCS citation: '{0}'. Expected chapter-act/section, e.g. 720-5/9-1(a)")]
    InvalidCitation(String),

    /// The crosswalk file could not be opened.
    #[error("Failed to load crosswalk from {path}: {source}")]
    Load {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The crosswalk data is malformed (bad row or missing required column).
    #[error("Malformed crosswalk data: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for crosswalk operations.
pub type Result<T> = std::result::Result<T, IucrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = IucrError::NotFound {
            reference: "720-5/99-9".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "No offense found for ILCS reference: 720-5/99-9"
        );
    }

    #[test]
    fn test_code_not_found_display() {
        let err = IucrError::CodeNotFound {
            code: "9999".to_string(),
        };
        assert_eq!(err.to_string(), "No offense found for IUCR code: 9999");
    }

    #[test]
    fn test_invalid_citation_display() {
        let err = IucrError::InvalidCitation("garbage".to_string());
        assert!(err.to_string().contains("garbage"));
        assert!(err.to_string().contains("chapter-act/section"));
    }
}
