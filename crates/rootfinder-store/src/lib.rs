//! RootFinder Storage Layer
//!
//! Implements the PolicyStore trait in memory and provides the genealogy graph
//! built from the same records.
//!
//! # Architecture
//!
//! - `InMemoryPolicyStore` exclusively owns policy records
//! - `GenealogyGraph` holds identifiers only (parent → child edges)
//! - `Corpus` bundles both, built once per load
//!
//! # Examples
//!
//! ```
//! use rootfinder_domain::{Policy, PolicyId};
//! use rootfinder_store::Corpus;
//!
//! let corpus = Corpus::from_policies(vec![
//!     Policy::new("A", "Root", 1945),
//!     Policy::new("B", "Child", 1960).with_parent("A"),
//!     Policy::new("C", "Grandchild", 1980).with_parent("B"),
//! ]);
//!
//! let ancestors = corpus.graph().ancestors_of(&PolicyId::new("C")).unwrap();
//! assert_eq!(ancestors.len(), 2);
//! ```

#![warn(missing_docs)]

mod corpus;
mod graph;
mod store;

pub use corpus::Corpus;
pub use graph::GenealogyGraph;
pub use store::InMemoryPolicyStore;

use thiserror::Error;

/// Errors that can occur during store operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Policy not found
    #[error("Policy not found: {0}")]
    NotFound(String),
}

/// Errors that can occur during graph queries
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Identifier is not a node of the graph
    #[error("Node not found in genealogy graph: {0}")]
    NodeNotFound(String),
}
