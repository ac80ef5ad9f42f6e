//! Configuration for lineage tracing and scoring
//!
//! Every weight, normalizer and lookup table used by the scoring formulas
//! lives here, including the ideology- and name-keyed tables.

use rootfinder_domain::inheritance::{
    InheritanceWeights, DIRECT_LINEAGE_BONUS, IDEOLOGY_MATCH_WEIGHT, TEMPORAL_HORIZON_YEARS,
    TEMPORAL_WEIGHT, TYPE_MATCH_WEIGHT,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default extended-phenotype threshold
pub const DEFAULT_PHENOTYPE_THRESHOLD: f64 = 0.7;

/// Configuration for the scoring engine
///
/// # Examples
///
/// ```
/// use rootfinder_engine::ScoringConfig;
///
/// let config = ScoringConfig::default();
/// assert_eq!(config.phenotype.threshold, 0.7);
/// assert_eq!(config.phenotype.reproductive.lookup("Populist"), 0.8);
/// assert_eq!(config.phenotype.reproductive.lookup("Liberal"), 0.3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Year used to measure survival of active policies (None = current year)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_year: Option<i32>,

    /// Inheritance heuristic weights
    pub inheritance: InheritanceConfig,

    /// Extended-phenotype score parameters
    pub phenotype: PhenotypeConfig,

    /// Lineage-based memetic fitness parameters
    pub memetic: MemeticConfig,
}

/// Weights of the pairwise inheritance heuristic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InheritanceConfig {
    /// Weight of temporal proximity
    pub temporal: f64,
    /// Contribution of a matching policy type
    pub type_match: f64,
    /// Contribution of a matching ideology
    pub ideology_match: f64,
    /// Bonus for a direct parent/child pair
    pub direct_lineage: f64,
    /// Year gap at which temporal proximity vanishes
    pub temporal_horizon_years: f64,
}

impl Default for InheritanceConfig {
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

impl From<&InheritanceConfig> for InheritanceWeights {
    fn from(config: &InheritanceConfig) -> Self {
        Self {
            temporal: config.temporal,
            type_match: config.type_match,
            ideology_match: config.ideology_match,
            direct_lineage: config.direct_lineage,
            temporal_horizon_years: config.temporal_horizon_years,
        }
    }
}

/// A string-keyed table of scores with a fallback for unknown keys
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTable {
    /// Score for keys not in the table
    pub fallback: f64,
    /// Score per exact key
    #[serde(default)]
    pub values: BTreeMap<String, f64>,
}

impl CategoryTable {
    /// Create a table from (key, score) pairs
    pub fn new<I, K>(values: I, fallback: f64) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        Self {
            fallback,
            values: values.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Score for `key`, or the fallback
    pub fn lookup(&self, key: &str) -> f64 {
        self.values.get(key).copied().unwrap_or(self.fallback)
    }

    fn validate(&self, name: &str) -> Result<(), String> {
        let out_of_range = self
            .values
            .iter()
            .map(|(k, v)| (k.as_str(), *v))
            .chain(std::iter::once(("fallback", self.fallback)))
            .find(|(_, v)| !(0.0..=1.0).contains(v));

        match out_of_range {
            Some((key, value)) => Err(format!("{} value for '{}' must be in [0, 1], got {}", name, key, value)),
            None => Ok(()),
        }
    }
}

/// One simplicity rule: any keyword found in the lower-cased name assigns `value`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplicityRule {
    /// Lower-case substrings to look for
    pub keywords: Vec<String>,
    /// Simplicity score when a keyword matches
    pub value: f64,
}

/// Ordered name-keyword rules; the first matching rule wins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplicityTable {
    /// Score when no rule matches
    pub fallback: f64,
    /// Rules in priority order
    #[serde(default)]
    pub rules: Vec<SimplicityRule>,
}

impl SimplicityTable {
    /// Simplicity score for a policy name (case-insensitive)
    pub fn lookup(&self, name: &str) -> f64 {
        let name = name.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.keywords.iter().any(|k| name.contains(&k.to_lowercase())))
            .map(|rule| rule.value)
            .unwrap_or(self.fallback)
    }
}

impl Default for SimplicityTable {
    fn default() -> Self {
        Self {
            fallback: 0.6,
            rules: vec![
                SimplicityRule {
                    keywords: vec!["aguinaldo".to_string(), "salario".to_string()],
                    value: 0.9,
                },
                SimplicityRule {
                    keywords: vec!["convertibilidad".to_string(), "afjp".to_string()],
                    value: 0.3,
                },
            ],
        }
    }
}

/// Parameters of the extended-phenotype score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhenotypeConfig {
    /// Minimum score to qualify as an extended phenotype
    pub threshold: f64,
    /// Descendant count at which environmental modification saturates
    pub descendant_saturation: f64,
    /// Survival years at which persistence saturates
    pub persistence_horizon_years: f64,
    /// Reproductive enhancement by ideology
    pub reproductive: CategoryTable,
}

impl Default for PhenotypeConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_PHENOTYPE_THRESHOLD,
            descendant_saturation: 10.0,
            persistence_horizon_years: 50.0,
            reproductive: CategoryTable::new([("Populist", 0.8)], 0.3),
        }
    }
}

/// Weights of the lineage-based memetic fitness sum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemeticWeights {
    /// Weight of transmission (descendant count)
    pub transmission: f64,
    /// Weight of persistence (survival years)
    pub persistence: f64,
    /// Weight of fidelity (mean inheritance)
    pub fidelity: f64,
    /// Weight of cultural fit
    pub cultural_fit: f64,
    /// Weight of simplicity
    pub simplicity: f64,
}

impl Default for MemeticWeights {
    fn default() -> Self {
        Self {
            transmission: 0.25,
            persistence: 0.25,
            fidelity: 0.2,
            cultural_fit: 0.2,
            simplicity: 0.1,
        }
    }
}

/// Parameters of the lineage-based memetic fitness
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemeticConfig {
    /// Descendant count at which transmission saturates
    pub descendant_saturation: f64,
    /// Survival years at which persistence saturates
    pub persistence_horizon_years: f64,
    /// Fidelity assumed for a policy with no descendants
    pub empty_fidelity: f64,
    /// Term weights
    pub weights: MemeticWeights,
    /// Cultural fit by ideology
    pub cultural_fit: CategoryTable,
    /// Simplicity by name keywords
    pub simplicity: SimplicityTable,
}

impl Default for MemeticConfig {
    fn default() -> Self {
        Self {
            descendant_saturation: 10.0,
            persistence_horizon_years: 80.0,
            empty_fidelity: 0.5,
            weights: MemeticWeights::default(),
            cultural_fit: CategoryTable::new([("Populist", 0.8), ("Liberal", 0.3)], 0.5),
            simplicity: SimplicityTable::default(),
        }
    }
}

impl ScoringConfig {
    /// Inheritance weights in domain form
    pub fn inheritance_weights(&self) -> InheritanceWeights {
        InheritanceWeights::from(&self.inheritance)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        self.inheritance_weights().validate()?;

        let positives = [
            ("phenotype.descendant_saturation", self.phenotype.descendant_saturation),
            ("phenotype.persistence_horizon_years", self.phenotype.persistence_horizon_years),
            ("memetic.descendant_saturation", self.memetic.descendant_saturation),
            ("memetic.persistence_horizon_years", self.memetic.persistence_horizon_years),
        ];
        for (name, value) in positives {
            if value.is_nan() || value <= 0.0 {
                return Err(format!("{} must be greater than 0", name));
            }
        }

        let w = &self.memetic.weights;
        for (name, value) in [
            ("transmission", w.transmission),
            ("persistence", w.persistence),
            ("fidelity", w.fidelity),
            ("cultural_fit", w.cultural_fit),
            ("simplicity", w.simplicity),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("memetic weight '{}' must be a non-negative number", name));
            }
        }

        if !(0.0..=1.0).contains(&self.memetic.empty_fidelity) {
            return Err("memetic.empty_fidelity must be in [0, 1]".to_string());
        }

        self.phenotype.reproductive.validate("phenotype.reproductive")?;
        self.memetic.cultural_fit.validate("memetic.cultural_fit")?;

        let simplicity = &self.memetic.simplicity;
        if let Some(rule) = simplicity.rules.iter().find(|r| !(0.0..=1.0).contains(&r.value)) {
            return Err(format!("memetic.simplicity rule value must be in [0, 1], got {}", rule.value));
        }
        if !(0.0..=1.0).contains(&simplicity.fallback) {
            return Err("memetic.simplicity fallback must be in [0, 1]".to_string());
        }

        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str)
            .map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ScoringConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.reference_year, None);
        assert_eq!(config.memetic.empty_fidelity, 0.5);
    }

    #[test]
    fn test_memetic_weights_sum_to_one() {
        let w = MemeticWeights::default();
        let sum = w.transmission + w.persistence + w.fidelity + w.cultural_fit + w.simplicity;
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_category_lookup() {
        let table = MemeticConfig::default().cultural_fit;
        assert_eq!(table.lookup("Populist"), 0.8);
        assert_eq!(table.lookup("Liberal"), 0.3);
        assert_eq!(table.lookup("Social_Democratic"), 0.5);
        assert_eq!(table.lookup(""), 0.5);
    }

    #[test]
    fn test_simplicity_lookup() {
        let table = SimplicityTable::default();
        assert_eq!(table.lookup("Aguinaldo (SAC)"), 0.9);
        assert_eq!(table.lookup("Salario vacacional"), 0.9);
        assert_eq!(table.lookup("Ley de Convertibilidad"), 0.3);
        assert_eq!(table.lookup("Régimen AFJP"), 0.3);
        assert_eq!(table.lookup("Obras Sociales"), 0.6);
    }

    #[test]
    fn test_first_simplicity_rule_wins() {
        let table = SimplicityTable::default();
        // Matches both rules; the first listed applies
        assert_eq!(table.lookup("Aguinaldo y AFJP"), 0.9);
    }

    #[test]
    fn test_invalid_table_value() {
        let mut config = ScoringConfig::default();
        config.phenotype.reproductive.values.insert("Populist".to_string(), 1.5);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_saturation() {
        let mut config = ScoringConfig::default();
        config.memetic.persistence_horizon_years = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_weight() {
        let mut config = ScoringConfig::default();
        config.inheritance.ideology_match = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = ScoringConfig::default();
        config.reference_year = Some(2025);
        let toml_str = config.to_toml().unwrap();
        let parsed = ScoringConfig::from_toml(&toml_str).unwrap();

        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed = ScoringConfig::from_toml(
            r#"
            reference_year = 2025

            [phenotype]
            threshold = 0.5

            [phenotype.reproductive]
            fallback = 0.2
            values = { Populist = 0.9, Peronist = 0.85 }
            "#,
        )
        .unwrap();

        assert_eq!(parsed.reference_year, Some(2025));
        assert_eq!(parsed.phenotype.threshold, 0.5);
        assert_eq!(parsed.phenotype.persistence_horizon_years, 50.0);
        assert_eq!(parsed.phenotype.reproductive.lookup("Peronist"), 0.85);
        assert_eq!(parsed.phenotype.reproductive.lookup("Liberal"), 0.2);
        assert_eq!(parsed.memetic, MemeticConfig::default());
    }

    #[test]
    fn test_serde_json_roundtrip() {
        let config = ScoringConfig::default();
        let serialized = serde_json::to_string(&config).unwrap();
        let deserialized: ScoringConfig = serde_json::from_str(&serialized).unwrap();

        assert_eq!(config, deserialized);
    }
}
