//! Centralized error handling for Folio.
//!
//! Library-style errors use `thiserror`; application-level composition in the
//! frontend uses `anyhow` with `?` propagation. Effect initializers are
//! failure-isolated: an error here degrades one component to its default and
//! is surfaced as a developer diagnostic, never as user-visible UI.

use thiserror::Error;

/// Core errors that can occur in Folio.
#[derive(Error, Debug)]
pub enum FolioError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result alias for Folio operations.
pub type FolioResult<T> = Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert_into_folio_errors() {
        fn read_missing() -> FolioResult<String> {
            Ok(std::fs::read_to_string("/nonexistent/folio/path")?)
        }
        let err = read_missing().unwrap_err();
        assert!(matches!(err, FolioError::Io(_)));
        assert!(err.to_string().starts_with("IO error"));
    }

    #[test]
    fn config_errors_carry_their_message() {
        let err = FolioError::Config("missing theme".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing theme");
    }
}
