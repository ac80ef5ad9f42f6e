//! Integration tests for rootfinder-store
//!
//! These tests verify store and graph behaviour on a corpus shaped like the
//! Argentine labour-benefit genealogy.

use rootfinder_domain::traits::PolicyStore;
use rootfinder_domain::{Policy, PolicyId};
use rootfinder_store::{Corpus, GraphError, InMemoryPolicyStore, StoreError};
use std::collections::BTreeSet;

fn id(s: &str) -> PolicyId {
    PolicyId::new(s)
}

fn ids(values: &[&str]) -> BTreeSet<PolicyId> {
    values.iter().map(|s| id(s)).collect()
}

fn aguinaldo_corpus() -> Corpus {
    Corpus::from_policies(vec![
        Policy::new("ARG_AGUINALDO_1945", "Aguinaldo", 1945)
            .with_type("Labor")
            .with_ideology("Populist"),
        Policy::new("ARG_AGUINALDO_1967", "Aguinaldo en dos cuotas", 1967)
            .with_parent("ARG_AGUINALDO_1945")
            .with_type("Labor")
            .with_ideology("Populist"),
        Policy::new("ARG_SAC_1976", "SAC reform", 1976)
            .with_parent("ARG_AGUINALDO_1967")
            .terminated_in(1983)
            .with_type("Labor")
            .with_ideology("Military"),
        Policy::new("URU_SALARIO_VACACIONAL", "Salario vacacional", 1958)
            .with_parent("ARG_AGUINALDO_1945")
            .with_type("Labor")
            .with_ideology("Social_Democratic"),
        Policy::new("CHI_AFP_1981", "AFP", 1981)
            .with_type("Pension")
            .with_ideology("Liberal"),
    ])
}

#[test]
fn test_corpus_counts() {
    let corpus = aguinaldo_corpus();

    assert_eq!(corpus.len(), 5);
    assert_eq!(corpus.graph().node_count(), 5);
    assert_eq!(corpus.graph().edge_count(), 3);
}

#[test]
fn test_edge_iff_parent_reference() {
    let corpus = aguinaldo_corpus();
    let graph = corpus.graph();

    for policy in corpus.store().all() {
        let predecessors = graph.direct_predecessors_of(&policy.id).unwrap();
        match &policy.parent_id {
            Some(parent) => assert_eq!(predecessors, vec![parent]),
            None => assert!(predecessors.is_empty()),
        }
    }
}

#[test]
fn test_transitive_closures() {
    let corpus = aguinaldo_corpus();
    let graph = corpus.graph();

    assert_eq!(
        graph.descendants_of(&id("ARG_AGUINALDO_1945")).unwrap(),
        ids(&["ARG_AGUINALDO_1967", "ARG_SAC_1976", "URU_SALARIO_VACACIONAL"])
    );
    assert_eq!(
        graph.ancestors_of(&id("ARG_SAC_1976")).unwrap(),
        ids(&["ARG_AGUINALDO_1945", "ARG_AGUINALDO_1967"])
    );
    assert!(graph.descendants_of(&id("CHI_AFP_1981")).unwrap().is_empty());
}

#[test]
fn test_never_contains_self() {
    let corpus = aguinaldo_corpus();
    let graph = corpus.graph();

    for node in graph.nodes() {
        assert!(!graph.ancestors_of(node).unwrap().contains(node));
        assert!(!graph.descendants_of(node).unwrap().contains(node));
    }
}

#[test]
fn test_network_degree() {
    let corpus = aguinaldo_corpus();
    let graph = corpus.graph();

    assert_eq!(graph.degree(&id("ARG_AGUINALDO_1945")).unwrap(), 2);
    assert_eq!(graph.degree(&id("ARG_AGUINALDO_1967")).unwrap(), 2);
    assert_eq!(graph.degree(&id("CHI_AFP_1981")).unwrap(), 0);
}

#[test]
fn test_missing_identifiers() {
    let corpus = aguinaldo_corpus();

    assert_eq!(
        corpus.store().get(&id("ARG_UNKNOWN")),
        Err(StoreError::NotFound("ARG_UNKNOWN".to_string()))
    );
    assert_eq!(
        corpus.graph().ancestors_of(&id("ARG_UNKNOWN")),
        Err(GraphError::NodeNotFound("ARG_UNKNOWN".to_string()))
    );
}

#[test]
fn test_corrupt_cycle_is_traversable() {
    let corpus = Corpus::from_policies(vec![
        Policy::new("A", "A", 1900).with_parent("C"),
        Policy::new("B", "B", 1910).with_parent("A"),
        Policy::new("C", "C", 1920).with_parent("B"),
    ]);

    assert_eq!(corpus.graph().descendants_of(&id("A")).unwrap(), ids(&["B", "C"]));
    assert_eq!(corpus.graph().ancestors_of(&id("A")).unwrap(), ids(&["B", "C"]));
}

#[test]
fn test_store_iteration_order() {
    let store = InMemoryPolicyStore::from_policies(vec![
        Policy::new("Z", "Last alphabetically", 2000),
        Policy::new("A", "First alphabetically", 2001),
    ]);

    let order: Vec<&str> = store.all().map(|p| p.id.as_str()).collect();
    assert_eq!(order, vec!["Z", "A"]);
}
