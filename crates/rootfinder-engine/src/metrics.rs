//! Per-policy metric rows produced by the scoring engine

use rootfinder_domain::Policy;
use serde::Serialize;

/// One extended-phenotype classification result
#[derive(Debug, Clone, PartialEq)]
pub struct PhenotypeMatch<'a> {
    /// The qualifying policy
    pub policy: &'a Policy,

    /// Its extended-phenotype score
    pub score: f64,

    /// Survival years at the engine's reference year (sort key)
    pub survival_years: i32,
}

/// Metrics collected for a single policy
///
/// Flat and serializable so exporters can emit it as a table row or JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolicyMetrics {
    /// Policy identifier
    pub policy_id: String,

    /// Display name
    pub name: String,

    /// Year the policy was enacted
    pub year_created: i32,

    /// Years in force at the reference year
    pub survival_years: i32,

    /// Whether the policy is still in force
    pub active: bool,

    /// Number of descendants
    pub descendants: usize,

    /// Number of ancestors
    pub ancestors: usize,

    /// Number of siblings
    pub siblings: usize,

    /// Mean inheritance score over descendants
    pub mean_inheritance: f64,

    /// Highest inheritance score over descendants
    pub max_inheritance: f64,

    /// Extended-phenotype score
    pub phenotype_score: f64,

    /// Lineage-based memetic fitness
    pub memetic_fitness: f64,

    /// Network degree (parents + children)
    pub degree: usize,
}

impl PolicyMetrics {
    /// Whether the policy qualifies as an extended phenotype at `threshold`
    pub fn is_extended_phenotype(&self, threshold: f64) -> bool {
        self.phenotype_score >= threshold
    }

    /// Generate a one-policy summary report
    pub fn summary(&self) -> String {
        let status = if self.active { "active" } else { "terminated" };
        let lines = vec![
            format!("{} ({})", self.name, self.policy_id),
            format!("  Created: {} ({}, {} years)", self.year_created, status, self.survival_years),
            format!(
                "  Lineage: {} ancestors, {} descendants, {} siblings",
                self.ancestors, self.descendants, self.siblings
            ),
            format!(
                "  Inheritance: mean {:.3}, max {:.3}",
                self.mean_inheritance, self.max_inheritance
            ),
            format!("  Extended phenotype score: {:.3}", self.phenotype_score),
            format!("  Memetic fitness: {:.3}", self.memetic_fitness),
            format!("  Network degree: {}", self.degree),
        ];
        lines.join("\n")
    }
}
