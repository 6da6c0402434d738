//! Error types for the annotation pipeline
//!
//! This module provides structured error handling using thiserror for
//! error definitions and anyhow for propagation at the binary boundary.
//!
//! The taxonomy deliberately keeps "the query executed but matched nothing"
//! out of the error space: an empty result set is `Ok(None)` at the resolver,
//! while transport and protocol failures are distinct `Err` values.

use thiserror::Error;

/// Main error type for annotation operations
#[derive(Error, Debug)]
pub enum NerError {
    /// The constituency parser could not produce a tree for the input
    #[error("Parse failure: {0}")]
    Parse(String),

    /// A tree pattern specification could not be compiled
    #[error("Invalid tree pattern: {0}")]
    Pattern(String),

    /// The SPARQL endpoint was unreachable or the request could not be sent
    #[error("Query transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The SPARQL endpoint rejected the query or answered with an error status
    #[error("Query endpoint error: {0}")]
    Endpoint(String),

    /// The endpoint answered, but not with valid SPARQL JSON results
    #[error("Malformed query response: {0}")]
    MalformedResponse(String),

    /// Configuration error (invalid endpoint/graph URI, missing setting)
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

/// Result type alias for annotation operations
pub type Result<T> = std::result::Result<T, NerError>;

/// Convert anyhow::Error to NerError
impl From<anyhow::Error> for NerError {
    fn from(err: anyhow::Error) -> Self {
        NerError::Other(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NerError::Parse("unbalanced brackets".to_string());
        assert_eq!(err.to_string(), "Parse failure: unbalanced brackets");
    }

    #[test]
    fn test_endpoint_and_empty_result_are_distinct() {
        // A failed query must never be representable as "no type found";
        // "no type found" is Ok(None) at the resolver, not an error value.
        let err = NerError::Endpoint("503 Service Unavailable".to_string());
        assert!(matches!(err, NerError::Endpoint(_)));
    }
}
