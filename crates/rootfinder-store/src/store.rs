//! In-memory policy store

use crate::StoreError;
use rootfinder_domain::traits::PolicyStore;
use rootfinder_domain::{Policy, PolicyId};
use std::collections::HashMap;

/// In-memory implementation of [`PolicyStore`]
///
/// Keeps policies in insertion order. Re-adding an identifier overwrites the
/// record in place (last write wins) without moving it.
///
/// # Thread Safety
///
/// The store is plain data: shared references can be read from many threads at
/// once. Mutation needs `&mut`, which cannot coexist with a borrowed lineage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPolicyStore {
    policies: Vec<Policy>,
    index: HashMap<PolicyId, usize>,
}

impl InMemoryPolicyStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a sequence of policies
    pub fn from_policies<I>(policies: I) -> Self
    where
        I: IntoIterator<Item = Policy>,
    {
        let mut store = Self::new();
        for policy in policies {
            store.add(policy);
        }
        store
    }
}

impl PolicyStore for InMemoryPolicyStore {
    type Error = StoreError;

    fn add(&mut self, policy: Policy) {
        match self.index.get(&policy.id) {
            Some(&slot) => self.policies[slot] = policy,
            None => {
                self.index.insert(policy.id.clone(), self.policies.len());
                self.policies.push(policy);
            }
        }
    }

    fn get(&self, id: &PolicyId) -> Result<&Policy, Self::Error> {
        self.index
            .get(id)
            .map(|&slot| &self.policies[slot])
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn all(&self) -> Box<dyn Iterator<Item = &Policy> + '_> {
        Box::new(self.policies.iter())
    }

    fn len(&self) -> usize {
        self.policies.len()
    }

    fn contains(&self, id: &PolicyId) -> bool {
        self.index.contains_key(id)
    }
}
