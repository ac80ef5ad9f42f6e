//! Composite scores layered on traced lineages

use crate::config::{MemeticConfig, PhenotypeConfig};
use crate::metrics::{PhenotypeMatch, PolicyMetrics};
use crate::{EngineError, LineageTracer, ScoringConfig};
use rootfinder_domain::policy::current_year;
use rootfinder_domain::traits::PolicyStore;
use rootfinder_domain::{Lineage, Policy, PolicyId};
use rootfinder_store::GenealogyGraph;
use std::cmp::Reverse;
use tracing::{debug, info};

/// `value / saturation`, clamped to [0, 1]
fn saturating_ratio(value: f64, saturation: f64) -> f64 {
    (value / saturation).clamp(0.0, 1.0)
}

/// Extended-phenotype score of a traced lineage
///
/// Equal-weighted mean of environmental modification (descendant count),
/// persistence (survival years), heritability (mean inheritance) and
/// reproductive enhancement (ideology lookup). Negative survival spans from
/// defective data score zero persistence.
///
/// # Examples
///
/// ```
/// use rootfinder_domain::{Lineage, Policy};
/// use rootfinder_engine::scoring::phenotype_score;
/// use rootfinder_engine::ScoringConfig;
///
/// let policy = Policy::new("P1", "Short-lived", 2000).terminated_in(2010);
/// let lineage = Lineage::new(&policy);
/// let score = phenotype_score(&lineage, &ScoringConfig::default().phenotype, 2025);
///
/// assert!((score - 0.125).abs() < 1e-9);
/// ```
pub fn phenotype_score(lineage: &Lineage<'_>, config: &PhenotypeConfig, reference_year: i32) -> f64 {
    let root = lineage.root;
    let environmental = saturating_ratio(lineage.total_descendants() as f64, config.descendant_saturation);
    let persistence = saturating_ratio(
        f64::from(root.survival_years_at(reference_year)),
        config.persistence_horizon_years,
    );
    let heritability = lineage.mean_inheritance();
    let reproductive = config.reproductive.lookup(&root.ideology);

    (environmental + persistence + heritability + reproductive) * 0.25
}

/// Lineage-based memetic fitness
///
/// Weighted sum of transmission, persistence, fidelity, cultural fit and
/// simplicity. Distinct from the factor-based
/// [`MemeticFitnessCalculator`](rootfinder_domain::MemeticFitnessCalculator).
pub fn lineage_memetic_fitness(lineage: &Lineage<'_>, config: &MemeticConfig, reference_year: i32) -> f64 {
    let root = lineage.root;
    let w = &config.weights;

    let transmission = saturating_ratio(lineage.total_descendants() as f64, config.descendant_saturation);
    let persistence = saturating_ratio(
        f64::from(root.survival_years_at(reference_year)),
        config.persistence_horizon_years,
    );
    let fidelity = if lineage.descendants.is_empty() {
        config.empty_fidelity
    } else {
        lineage.mean_inheritance()
    };
    let cultural_fit = config.cultural_fit.lookup(&root.ideology);
    let simplicity = config.simplicity.lookup(&root.name);

    w.transmission * transmission
        + w.persistence * persistence
        + w.fidelity * fidelity
        + w.cultural_fit * cultural_fit
        + w.simplicity * simplicity
}

/// Scoring engine over a policy store and genealogy graph
///
/// # Examples
///
/// ```
/// use rootfinder_domain::{Policy, PolicyId};
/// use rootfinder_engine::{ScoringConfig, ScoringEngine};
/// use rootfinder_store::Corpus;
///
/// let corpus = Corpus::from_policies(vec![
///     Policy::new("P1", "Aguinaldo", 1945).with_ideology("Populist"),
///     Policy::new("P2", "Aguinaldo reform", 1995).with_parent("P1"),
/// ]);
/// let config = ScoringConfig {
///     reference_year: Some(2025),
///     ..ScoringConfig::default()
/// };
/// let engine = ScoringEngine::new(corpus.store(), corpus.graph(), config).unwrap();
///
/// let everything = engine.find_extended_phenotypes(0.0).unwrap();
/// assert_eq!(everything.len(), 2);
/// assert_eq!(everything[0].policy.id, PolicyId::new("P1"));
/// ```
pub struct ScoringEngine<'a, S: PolicyStore> {
    store: &'a S,
    graph: &'a GenealogyGraph,
    tracer: LineageTracer<'a, S>,
    config: ScoringConfig,
}

impl<'a, S: PolicyStore> ScoringEngine<'a, S> {
    /// Create an engine, validating `config`
    pub fn new(store: &'a S, graph: &'a GenealogyGraph, config: ScoringConfig) -> Result<Self, EngineError> {
        config.validate().map_err(EngineError::Config)?;
        let tracer = LineageTracer::new(store, graph, config.inheritance_weights());
        Ok(Self {
            store,
            graph,
            tracer,
            config,
        })
    }

    /// Configuration in use
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// The underlying lineage tracer
    pub fn tracer(&self) -> &LineageTracer<'a, S> {
        &self.tracer
    }

    /// Year against which active policies are measured
    pub fn reference_year(&self) -> i32 {
        self.config.reference_year.unwrap_or_else(current_year)
    }

    /// Trace the lineage of `id`
    pub fn trace_lineage(&self, id: &PolicyId) -> Result<Lineage<'a>, EngineError> {
        self.tracer.trace_lineage(id)
    }

    /// Extended-phenotype score of `policy`
    pub fn extended_phenotype_score(&self, policy: &Policy) -> Result<f64, EngineError> {
        let lineage = self.tracer.trace_lineage(&policy.id)?;
        Ok(phenotype_score(&lineage, &self.config.phenotype, self.reference_year()))
    }

    /// Every policy scoring at least `threshold`, longest-surviving first
    ///
    /// Policies are scored in store iteration order; ties in survival keep
    /// that order.
    pub fn find_extended_phenotypes(&self, threshold: f64) -> Result<Vec<PhenotypeMatch<'a>>, EngineError> {
        let year = self.reference_year();
        let mut matches = Vec::new();

        for policy in self.store.all() {
            let lineage = self.tracer.trace_lineage(&policy.id)?;
            let score = phenotype_score(&lineage, &self.config.phenotype, year);
            if score >= threshold {
                matches.push(PhenotypeMatch {
                    policy: lineage.root,
                    score,
                    survival_years: lineage.root.survival_years_at(year),
                });
            }
        }

        matches.sort_by_key(|m| Reverse(m.survival_years));

        info!(
            threshold,
            scanned = self.store.len(),
            matched = matches.len(),
            "Classified extended phenotypes"
        );
        Ok(matches)
    }

    /// Extended phenotypes at the configured threshold
    pub fn extended_phenotypes(&self) -> Result<Vec<PhenotypeMatch<'a>>, EngineError> {
        self.find_extended_phenotypes(self.config.phenotype.threshold)
    }

    /// Lineage-based memetic fitness of `policy`
    pub fn memetic_fitness(&self, policy: &Policy) -> Result<f64, EngineError> {
        let lineage = self.tracer.trace_lineage(&policy.id)?;
        Ok(lineage_memetic_fitness(&lineage, &self.config.memetic, self.reference_year()))
    }

    /// Full metric row for one policy
    pub fn analyze(&self, id: &PolicyId) -> Result<PolicyMetrics, EngineError> {
        let year = self.reference_year();
        let lineage = self.tracer.trace_lineage(id)?;
        let root = lineage.root;
        let degree = if self.graph.contains(id) {
            self.graph.degree(id)?
        } else {
            0
        };

        let metrics = PolicyMetrics {
            policy_id: root.id.to_string(),
            name: root.name.clone(),
            year_created: root.year_created,
            survival_years: root.survival_years_at(year),
            active: root.is_active(),
            descendants: lineage.total_descendants(),
            ancestors: lineage.total_ancestors(),
            siblings: lineage.siblings.len(),
            mean_inheritance: lineage.mean_inheritance(),
            max_inheritance: lineage.max_inheritance(),
            phenotype_score: phenotype_score(&lineage, &self.config.phenotype, year),
            memetic_fitness: lineage_memetic_fitness(&lineage, &self.config.memetic, year),
            degree,
        };
        debug!(policy = %id, phenotype = metrics.phenotype_score, fitness = metrics.memetic_fitness, "Analyzed policy");
        Ok(metrics)
    }

    /// Metric rows for every policy in store order
    pub fn analyze_all(&self) -> Result<Vec<PolicyMetrics>, EngineError> {
        let rows = self
            .store
            .all()
            .map(|policy| self.analyze(&policy.id))
            .collect::<Result<Vec<_>, _>>()?;
        info!(policies = rows.len(), "Analyzed corpus");
        Ok(rows)
    }
}
