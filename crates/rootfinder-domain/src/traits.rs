//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::{Policy, PolicyId};

/// Trait for storing and retrieving policies
///
/// Implemented by the infrastructure layer (rootfinder-store)
pub trait PolicyStore {
    /// Error type for store operations
    type Error;

    /// Insert a policy, replacing any policy with the same identifier
    fn add(&mut self, policy: Policy);

    /// Get a policy by ID
    fn get(&self, id: &PolicyId) -> Result<&Policy, Self::Error>;

    /// Iterate over every policy in insertion order
    fn all(&self) -> Box<dyn Iterator<Item = &Policy> + '_>;

    /// Number of stored policies
    fn len(&self) -> usize;

    /// Whether the store is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether a policy with this ID is stored
    fn contains(&self, id: &PolicyId) -> bool {
        self.get(id).is_ok()
    }
}
