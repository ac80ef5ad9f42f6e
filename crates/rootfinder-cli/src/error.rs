//! Error types for the CLI application.

use rootfinder_engine::EngineError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reading error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A corpus row could not be turned into a policy
    #[error("Malformed record at row {row}: {reason}")]
    MalformedRecord {
        /// 1-based data row number (header excluded)
        row: usize,
        /// What was wrong with the row
        reason: String,
    },

    /// Lineage or scoring error
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
