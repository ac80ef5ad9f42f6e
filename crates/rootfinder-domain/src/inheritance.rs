//! Inheritance scoring module
//!
//! Implements the pairwise resemblance heuristic between a root policy and one
//! of its descendants. The score measures how much of the root survives in the
//! descendant; it is not a decayed multi-hop product, so every descendant is
//! compared against the root directly.

use crate::Policy;

/// Weight of the temporal proximity signal (default: 0.3)
pub const TEMPORAL_WEIGHT: f64 = 0.3;

/// Flat contribution of a matching policy type (default: 0.3)
pub const TYPE_MATCH_WEIGHT: f64 = 0.3;

/// Flat contribution of a matching ideology (default: 0.3)
pub const IDEOLOGY_MATCH_WEIGHT: f64 = 0.3;

/// Flat bonus when the descendant is a direct child of the root (default: 0.1)
pub const DIRECT_LINEAGE_BONUS: f64 = 0.1;

/// Years apart at which temporal proximity reaches zero (default: 50)
pub const TEMPORAL_HORIZON_YEARS: f64 = 50.0;

/// Weights for the inheritance heuristic
#[derive(Debug, Clone, PartialEq)]
pub struct InheritanceWeights {
    /// Weight applied to temporal proximity in [0, 1]
    pub temporal: f64,
    /// Flat contribution for equal policy types
    pub type_match: f64,
    /// Flat contribution for equal ideologies
    pub ideology_match: f64,
    /// Flat contribution for a direct parent/child pair
    pub direct_lineage: f64,
    /// Year gap at which temporal proximity vanishes
    pub temporal_horizon_years: f64,
}

impl Default for InheritanceWeights {
    fn default() -> Self {
        Self {
            temporal: TEMPORAL_WEIGHT,
            type_match: TYPE_MATCH_WEIGHT,
            ideology_match: IDEOLOGY_MATCH_WEIGHT,
            direct_lineage: DIRECT_LINEAGE_BONUS,
            temporal_horizon_years: TEMPORAL_HORIZON_YEARS,
        }
    }
}

impl InheritanceWeights {
    /// Validate the weights
    pub fn validate(&self) -> Result<(), String> {
        let weights = [
            ("temporal", self.temporal),
            ("type_match", self.type_match),
            ("ideology_match", self.ideology_match),
            ("direct_lineage", self.direct_lineage),
        ];
        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("inheritance weight '{}' must be a non-negative number", name));
            }
        }
        if !(self.temporal_horizon_years > 0.0) {
            return Err("temporal_horizon_years must be greater than 0".to_string());
        }
        Ok(())
    }
}

/// Temporal proximity in [0, 1]: 1 for same-year policies, 0 at the horizon
pub fn temporal_proximity(root: &Policy, descendant: &Policy, horizon_years: f64) -> f64 {
    let gap = (i64::from(descendant.year_created) - i64::from(root.year_created)).abs() as f64;
    (1.0 - gap / horizon_years).max(0.0)
}

/// Compute the inheritance score of `descendant` with respect to `root`
///
/// Sums four signals:
/// 1. Temporal proximity × temporal weight
/// 2. Type match (flat)
/// 3. Ideology match (flat)
/// 4. Direct-lineage bonus (flat)
///
/// The result is clamped to [0, 1] whatever the weights are.
///
/// # Examples
///
/// ```
/// use rootfinder_domain::Policy;
/// use rootfinder_domain::inheritance::{inheritance_score, InheritanceWeights};
///
/// let root = Policy::new("P1", "Aguinaldo", 1945).with_type("Labor").with_ideology("Populist");
/// let child = Policy::new("P2", "Aguinaldo II", 1995)
///     .with_parent("P1")
///     .with_type("Labor")
///     .with_ideology("Populist");
///
/// let score = inheritance_score(&root, &child, &InheritanceWeights::default());
/// assert!((score - 0.7).abs() < 1e-9);
/// ```
pub fn inheritance_score(root: &Policy, descendant: &Policy, weights: &InheritanceWeights) -> f64 {
    let mut score = temporal_proximity(root, descendant, weights.temporal_horizon_years) * weights.temporal;

    if root.policy_type == descendant.policy_type {
        score += weights.type_match;
    }

    if root.ideology == descendant.ideology {
        score += weights.ideology_match;
    }

    if descendant.is_child_of(&root.id) {
        score += weights.direct_lineage;
    }

    score.clamp(0.0, 1.0)
}
