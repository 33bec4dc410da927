use thiserror::Error;

use crate::core::client::database::DatabaseError;

/// Result type for bootstrap operations
pub type BootstrapResult<T> = Result<T, BootstrapError>;

/// Error types for the bootstrap tool
#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] DatabaseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Collection indexes differ from the declared schema
    #[error(
        "Collection {collection} does not match its schema (missing: [{}], unexpected: [{}])",
        .missing.join(", "),
        .unexpected.join(", ")
    )]
    SchemaMismatch { collection: String, missing: Vec<String>, unexpected: Vec<String> },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
