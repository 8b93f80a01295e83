//! Error types for the catalog core.
//!
//! None of these ever reach the visitor. Controllers catch them, log a warning
//! and keep the default behaviour.

use thiserror::Error;

/// Failures of the key-value preference store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Storage is disabled or inaccessible (private mode, sandboxed iframe, ...)
    #[error("preference store unavailable: {0}")]
    Unavailable(String),
    /// The store exists but refused the write (quota, security policy)
    #[error("preference store rejected write of `{key}`: {reason}")]
    Rejected { key: String, reason: String },
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config payload is not valid JSON for [`crate::CatalogConfig`]
    #[error("failed to parse catalog config: {0}")]
    Parse(#[from] serde_json::Error),
    /// Parsed fine but a value is out of range
    #[error("invalid catalog config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_messages() {
        let err = StoreError::Unavailable("SecurityError".into());
        assert_eq!(err.to_string(), "preference store unavailable: SecurityError");

        let err = StoreError::Rejected {
            key: "theme".into(),
            reason: "QuotaExceededError".into(),
        };
        assert!(err.to_string().contains("`theme`"));
        assert!(err.to_string().contains("QuotaExceededError"));
    }

    #[test]
    fn config_error_from_json() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ConfigError = parse.into();
        assert!(err.to_string().starts_with("failed to parse catalog config"));
    }
}
