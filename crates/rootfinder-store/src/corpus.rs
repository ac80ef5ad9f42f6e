//! A loaded corpus: policy store plus genealogy graph

use crate::{GenealogyGraph, InMemoryPolicyStore};
use rootfinder_domain::traits::PolicyStore;
use rootfinder_domain::Policy;

/// Policy store and genealogy graph built from the same records
///
/// Constructed once per corpus load and owned by the caller; the tracer and
/// scoring engine borrow it.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    store: InMemoryPolicyStore,
    graph: GenealogyGraph,
}

impl Corpus {
    /// Create an empty corpus
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a corpus from loaded records
    ///
    /// # Examples
    ///
    /// ```
    /// use rootfinder_domain::Policy;
    /// use rootfinder_domain::traits::PolicyStore;
    /// use rootfinder_store::Corpus;
    ///
    /// let corpus = Corpus::from_policies(vec![
    ///     Policy::new("A", "Root", 1945),
    ///     Policy::new("B", "Child", 1960).with_parent("A"),
    /// ]);
    /// assert_eq!(corpus.store().len(), 2);
    /// assert_eq!(corpus.graph().edge_count(), 1);
    /// ```
    pub fn from_policies<I>(policies: I) -> Self
    where
        I: IntoIterator<Item = Policy>,
    {
        let mut corpus = Self::new();
        for policy in policies {
            corpus.add(policy);
        }
        corpus
    }

    /// Insert or overwrite a policy, keeping the graph consistent
    ///
    /// Overwriting a policy with a different parent drops the stale edge so
    /// that edge (p, c) exists iff `c.parent_id == p`. The old parent stays a
    /// node.
    pub fn add(&mut self, policy: Policy) {
        let stale_parent = self
            .store
            .get(&policy.id)
            .ok()
            .filter(|existing| existing.parent_id != policy.parent_id)
            .and_then(|existing| existing.parent_id.clone());

        if let Some(parent) = stale_parent {
            self.graph.remove_edge(&parent, &policy.id);
        }
        self.graph.add_policy(&policy);
        self.store.add(policy);
    }

    /// The policy store
    pub fn store(&self) -> &InMemoryPolicyStore {
        &self.store
    }

    /// The genealogy graph
    pub fn graph(&self) -> &GenealogyGraph {
        &self.graph
    }

    /// Number of policies
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether the corpus holds no policies
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rootfinder_domain::PolicyId;

    #[test]
    fn test_reparenting_moves_edge() {
        let mut corpus = Corpus::from_policies(vec![
            Policy::new("A", "A", 1900),
            Policy::new("B", "B", 1910),
            Policy::new("C", "C", 1920).with_parent("A"),
        ]);
        corpus.add(Policy::new("C", "C", 1920).with_parent("B"));

        let graph = corpus.graph();
        assert!(graph.direct_successors_of(&PolicyId::new("A")).unwrap().is_empty());
        assert_eq!(graph.direct_successors_of(&PolicyId::new("B")).unwrap(), vec![&PolicyId::new("C")]);
        assert_eq!(graph.direct_predecessors_of(&PolicyId::new("C")).unwrap(), vec![&PolicyId::new("B")]);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.node_count(), 3);
    }

    #[test]
    fn test_reparenting_to_root_and_back() {
        let mut corpus = Corpus::from_policies(vec![
            Policy::new("A", "A", 1900),
            Policy::new("C", "C", 1920).with_parent("A"),
            Policy::new("D", "D", 1930).with_parent("A"),
        ]);
        corpus.add(Policy::new("C", "C", 1920));
        assert_eq!(corpus.graph().edge_count(), 1);
        assert!(corpus.graph().ancestors_of(&PolicyId::new("C")).unwrap().is_empty());

        corpus.add(Policy::new("C", "C", 1920).with_parent("A"));
        assert_eq!(corpus.graph().edge_count(), 2);
        assert_eq!(
            corpus.graph().direct_successors_of(&PolicyId::new("A")).unwrap(),
            vec![&PolicyId::new("D"), &PolicyId::new("C")]
        );
    }

    #[test]
    fn test_shared_types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Corpus>();
        assert_send_sync::<crate::InMemoryPolicyStore>();
        assert_send_sync::<GenealogyGraph>();
        assert_send_sync::<rootfinder_domain::Lineage<'static>>();
    }

    #[test]
    fn test_overwrite_same_parent_keeps_graph() {
        let mut corpus = Corpus::from_policies(vec![
            Policy::new("A", "A", 1900),
            Policy::new("B", "B", 1910).with_parent("A"),
        ]);
        corpus.add(Policy::new("B", "B renamed", 1910).with_parent("A"));

        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.graph().edge_count(), 1);
        assert_eq!(corpus.store().get(&PolicyId::new("B")).unwrap().name, "B renamed");
    }
}
