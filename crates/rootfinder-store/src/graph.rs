//! Genealogy graph over policy identifiers
//!
//! Edges run from parent to child. The graph holds identifiers only and defers
//! to the policy store for full records.

use crate::GraphError;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::{Bfs, Reversed};
use petgraph::Direction;
use rootfinder_domain::{Policy, PolicyId};
use std::collections::{BTreeSet, HashMap};

/// Directed parent → child graph
///
/// Well-formed corpora produce a forest or DAG. Cycles only come from corrupt
/// data; the closure queries still terminate because every node is visited at
/// most once.
#[derive(Debug, Clone, Default)]
pub struct GenealogyGraph {
    graph: DiGraph<PolicyId, ()>,
    index: HashMap<PolicyId, NodeIndex>,
}

impl GenealogyGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph with one node per policy and one edge per non-null parent
    ///
    /// # Examples
    ///
    /// ```
    /// use rootfinder_domain::{Policy, PolicyId};
    /// use rootfinder_store::GenealogyGraph;
    ///
    /// let policies = vec![
    ///     Policy::new("A", "Root", 1945),
    ///     Policy::new("B", "Child", 1960).with_parent("A"),
    /// ];
    /// let graph = GenealogyGraph::from_policies(&policies);
    ///
    /// assert_eq!(graph.edge_count(), 1);
    /// assert!(graph.descendants_of(&PolicyId::new("A")).unwrap().contains(&PolicyId::new("B")));
    /// ```
    pub fn from_policies<'a, I>(policies: I) -> Self
    where
        I: IntoIterator<Item = &'a Policy>,
    {
        let mut graph = Self::new();
        for policy in policies {
            graph.add_policy(policy);
        }
        graph
    }

    /// Add the node for `policy` and the edge from its parent, if any
    pub fn add_policy(&mut self, policy: &Policy) {
        self.add_node(policy.id.clone());
        if let Some(parent) = &policy.parent_id {
            self.add_edge(parent.clone(), policy.id.clone());
        }
    }

    /// Add a node (idempotent)
    pub fn add_node(&mut self, id: PolicyId) {
        self.node_or_insert(id);
    }

    fn node_or_insert(&mut self, id: PolicyId) -> NodeIndex {
        if let Some(&idx) = self.index.get(&id) {
            return idx;
        }
        let idx = self.graph.add_node(id.clone());
        self.index.insert(id, idx);
        idx
    }

    /// Add a parent → child edge
    ///
    /// Missing endpoints are created as nodes. A parent referenced by a child
    /// but absent from the corpus therefore appears in the graph without a
    /// matching store record. Repeated edges are ignored.
    pub fn add_edge(&mut self, parent: PolicyId, child: PolicyId) {
        let from = self.node_or_insert(parent);
        let to = self.node_or_insert(child);
        if self.graph.find_edge(from, to).is_none() {
            self.graph.add_edge(from, to, ());
        }
    }

    /// Remove the parent → child edge, if present. Both nodes stay.
    pub fn remove_edge(&mut self, parent: &PolicyId, child: &PolicyId) -> bool {
        let (Some(&from), Some(&to)) = (self.index.get(parent), self.index.get(child)) else {
            return false;
        };
        match self.graph.find_edge(from, to) {
            Some(edge) => self.graph.remove_edge(edge).is_some(),
            None => false,
        }
    }

    /// Whether `id` is a node
    pub fn contains(&self, id: &PolicyId) -> bool {
        self.index.contains_key(id)
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of distinct edges
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Node identifiers in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &PolicyId> {
        self.graph.node_weights()
    }

    fn node(&self, id: &PolicyId) -> Result<NodeIndex, GraphError> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| GraphError::NodeNotFound(id.to_string()))
    }

    /// Neighbours in edge-insertion order
    fn neighbours(&self, id: &PolicyId, direction: Direction) -> Result<Vec<&PolicyId>, GraphError> {
        let idx = self.node(id)?;
        // petgraph yields the most recently added edge first
        let mut neighbours: Vec<&PolicyId> = self
            .graph
            .neighbors_directed(idx, direction)
            .map(|n| &self.graph[n])
            .collect();
        neighbours.reverse();
        Ok(neighbours)
    }

    /// Immediate children of `id`
    pub fn direct_successors_of(&self, id: &PolicyId) -> Result<Vec<&PolicyId>, GraphError> {
        self.neighbours(id, Direction::Outgoing)
    }

    /// Immediate parents of `id`
    pub fn direct_predecessors_of(&self, id: &PolicyId) -> Result<Vec<&PolicyId>, GraphError> {
        self.neighbours(id, Direction::Incoming)
    }

    /// Total number of connections (in-degree + out-degree)
    pub fn degree(&self, id: &PolicyId) -> Result<usize, GraphError> {
        let idx = self.node(id)?;
        Ok(self.graph.neighbors_directed(idx, Direction::Outgoing).count()
            + self.graph.neighbors_directed(idx, Direction::Incoming).count())
    }

    /// Every node reachable forwards from `id`, excluding `id`
    pub fn descendants_of(&self, id: &PolicyId) -> Result<BTreeSet<PolicyId>, GraphError> {
        let start = self.node(id)?;
        let mut bfs = Bfs::new(&self.graph, start);
        let mut reached = BTreeSet::new();
        while let Some(idx) = bfs.next(&self.graph) {
            if idx != start {
                reached.insert(self.graph[idx].clone());
            }
        }
        Ok(reached)
    }

    /// Every node reachable backwards from `id`, excluding `id`
    pub fn ancestors_of(&self, id: &PolicyId) -> Result<BTreeSet<PolicyId>, GraphError> {
        let start = self.node(id)?;
        let reversed = Reversed(&self.graph);
        let mut bfs = Bfs::new(reversed, start);
        let mut reached = BTreeSet::new();
        while let Some(idx) = bfs.next(reversed) {
            if idx != start {
                reached.insert(self.graph[idx].clone());
            }
        }
        Ok(reached)
    }
}
