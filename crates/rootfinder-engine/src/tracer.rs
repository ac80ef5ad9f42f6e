//! Lineage tracing over a policy store and its genealogy graph

use crate::EngineError;
use rootfinder_domain::traits::PolicyStore;
use rootfinder_domain::{inheritance_score, InheritanceWeights, Lineage, Policy, PolicyId};
use rootfinder_store::GenealogyGraph;
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, warn};

/// Builds [`Lineage`] views for individual policies
///
/// Borrows the store and graph; every policy in a returned lineage borrows
/// from the same store.
///
/// # Examples
///
/// ```
/// use rootfinder_domain::{InheritanceWeights, Policy, PolicyId};
/// use rootfinder_engine::LineageTracer;
/// use rootfinder_store::Corpus;
///
/// let corpus = Corpus::from_policies(vec![
///     Policy::new("P1", "Aguinaldo", 1945).with_type("Labor").with_ideology("Populist"),
///     Policy::new("P2", "Aguinaldo reform", 1995)
///         .with_parent("P1")
///         .with_type("Labor")
///         .with_ideology("Populist"),
/// ]);
/// let tracer = LineageTracer::new(corpus.store(), corpus.graph(), InheritanceWeights::default());
///
/// let lineage = tracer.trace_lineage(&PolicyId::new("P1")).unwrap();
/// assert_eq!(lineage.total_descendants(), 1);
/// assert!((lineage.inheritance_of(&PolicyId::new("P2")).unwrap() - 0.7).abs() < 1e-9);
/// ```
pub struct LineageTracer<'a, S: PolicyStore> {
    store: &'a S,
    graph: &'a GenealogyGraph,
    weights: InheritanceWeights,
}

impl<'a, S: PolicyStore> LineageTracer<'a, S> {
    /// Create a tracer over `store` and `graph`
    pub fn new(store: &'a S, graph: &'a GenealogyGraph, weights: InheritanceWeights) -> Self {
        Self {
            store,
            graph,
            weights,
        }
    }

    /// Inheritance weights in use
    pub fn weights(&self) -> &InheritanceWeights {
        &self.weights
    }

    /// Trace the complete lineage of a policy
    ///
    /// Ancestors and descendants are returned in identifier order. Graph nodes
    /// without a store record are skipped.
    pub fn trace_lineage(&self, id: &PolicyId) -> Result<Lineage<'a>, EngineError> {
        let root = self
            .store
            .get(id)
            .map_err(|_| EngineError::PolicyNotFound(id.to_string()))?;

        let mut lineage = Lineage::new(root);
        if !self.graph.contains(id) {
            warn!(policy = %id, "Policy is in the store but not in the genealogy graph");
            return Ok(lineage);
        }

        lineage.ancestors = self.resolve(self.graph.ancestors_of(id)?);
        lineage.descendants = self.resolve(self.graph.descendants_of(id)?);
        lineage.siblings = self.siblings_of(root)?;
        lineage.inheritance_scores = lineage
            .descendants
            .iter()
            .map(|d| (d.id.clone(), inheritance_score(root, d, &self.weights)))
            .collect::<HashMap<_, _>>();

        debug!(
            policy = %id,
            ancestors = lineage.total_ancestors(),
            descendants = lineage.total_descendants(),
            siblings = lineage.siblings.len(),
            "Traced lineage"
        );

        Ok(lineage)
    }

    /// Policies sharing `root`'s direct parent, excluding `root`
    fn siblings_of(&self, root: &Policy) -> Result<Vec<&'a Policy>, EngineError> {
        let Some(parent) = &root.parent_id else {
            return Ok(Vec::new());
        };
        if !self.graph.contains(parent) {
            return Ok(Vec::new());
        }

        let siblings = self
            .graph
            .direct_successors_of(parent)?
            .into_iter()
            .filter(|&child| child != &root.id)
            .filter_map(|child| self.lookup(child))
            .collect();
        Ok(siblings)
    }

    fn resolve(&self, ids: BTreeSet<PolicyId>) -> Vec<&'a Policy> {
        ids.iter().filter_map(|id| self.lookup(id)).collect()
    }

    fn lookup(&self, id: &PolicyId) -> Option<&'a Policy> {
        match self.store.get(id) {
            Ok(policy) => Some(policy),
            Err(_) => {
                warn!(policy = %id, "Skipping genealogy reference with no policy record");
                None
            }
        }
    }
}
