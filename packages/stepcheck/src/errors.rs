//! Error types for stepcheck
//!
//! Provides unified error handling across the crate.
//!
//! Only precondition failures live here: unreadable files, unparseable Go
//! source, undecodable manifests. A malformed struct tag or a mismatched
//! input key is data, not an error.

use thiserror::Error;

/// Main error type for step input checking
#[derive(Debug, Error)]
pub enum CheckError {
    /// Go source parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// step.yml decode error
    #[error("Manifest error: {0}")]
    Manifest(String),
}

impl CheckError {
    /// Create a parse error
    pub fn parse_error(msg: impl Into<String>) -> Self {
        CheckError::Parse(msg.into())
    }

    /// Create a manifest decode error
    pub fn manifest_error(msg: impl Into<String>) -> Self {
        CheckError::Manifest(msg.into())
    }
}

/// Result type alias for check operations
pub type Result<T> = std::result::Result<T, CheckError>;
