//! Error types for lineage and scoring operations

use rootfinder_store::GraphError;
use thiserror::Error;

/// Errors that can occur while tracing or scoring
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Queried identifier is absent from the policy store
    #[error("Policy not found: {0}")]
    PolicyNotFound(String),

    /// Genealogy graph query failed
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
