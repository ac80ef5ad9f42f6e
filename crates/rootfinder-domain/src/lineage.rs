//! Lineage module - the per-query genealogical view of one policy

use crate::{Policy, PolicyId};
use std::collections::HashMap;

/// The complete genealogical neighbourhood of a root policy
///
/// Built fresh by each trace and never cached. Every policy reference borrows
/// from the store that produced it, so the store cannot be mutated while a
/// lineage is alive.
#[derive(Debug, Clone)]
pub struct Lineage<'a> {
    /// The policy the lineage was traced from
    pub root: &'a Policy,

    /// All policies reachable backwards from the root
    pub ancestors: Vec<&'a Policy>,

    /// All policies reachable forwards from the root
    pub descendants: Vec<&'a Policy>,

    /// Policies sharing the root's direct parent (root excluded)
    pub siblings: Vec<&'a Policy>,

    /// Inheritance score of each descendant with respect to the root
    pub inheritance_scores: HashMap<PolicyId, f64>,
}

impl<'a> Lineage<'a> {
    /// Create an empty lineage for `root`
    pub fn new(root: &'a Policy) -> Self {
        Self {
            root,
            ancestors: Vec::new(),
            descendants: Vec::new(),
            siblings: Vec::new(),
            inheritance_scores: HashMap::new(),
        }
    }

    /// Number of descendants
    pub fn total_descendants(&self) -> usize {
        self.descendants.len()
    }

    /// Number of ancestors
    pub fn total_ancestors(&self) -> usize {
        self.ancestors.len()
    }

    /// Inheritance score for a descendant, if it is one
    pub fn inheritance_of(&self, id: &PolicyId) -> Option<f64> {
        self.inheritance_scores.get(id).copied()
    }

    /// Raw inheritance values, in descendant order
    ///
    /// Exposed for callers computing their own statistics (variance, mutation rate).
    pub fn inheritance_values(&self) -> Vec<f64> {
        self.descendants
            .iter()
            .filter_map(|d| self.inheritance_of(&d.id))
            .collect()
    }

    /// Mean inheritance score (0.0 when there are no descendants)
    pub fn mean_inheritance(&self) -> f64 {
        let values = self.inheritance_values();
        if values.is_empty() {
            return 0.0;
        }
        values.iter().sum::<f64>() / values.len() as f64
    }

    /// Highest inheritance score (0.0 when there are no descendants)
    pub fn max_inheritance(&self) -> f64 {
        self.inheritance_values().into_iter().fold(0.0, f64::max)
    }
}
