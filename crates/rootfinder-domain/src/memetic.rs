//! Standalone memetic fitness calculator for political messages
//!
//! Scores a message from five hand-scored factors on a 0-10 scale. The base
//! fitness is a weighted geometric mean of the factors, scaled by a cultural
//! compatibility derived from Hofstede dimensions and by a replication
//! fidelity constant.
//!
//! This is independent of the lineage-based memetic fitness computed by the
//! scoring engine: that one is a weighted sum over corpus-derived signals,
//! this one is a product of powers over hand-scored factors.

use std::collections::BTreeMap;

/// Upper bound of every factor scale
pub const FACTOR_SCALE_MAX: f64 = 10.0;

/// Default replication fidelity for a single message
pub const DEFAULT_REPLICATION_FIDELITY: f64 = 0.95;

/// Replication fidelity used for populist messages in [`MemeticFitnessCalculator::compare_memes`]
pub const POPULIST_FIDELITY: f64 = 0.95;

/// Replication fidelity used for liberal messages in [`MemeticFitnessCalculator::compare_memes`]
pub const LIBERAL_FIDELITY: f64 = 0.60;

/// Country profile used when none is specified
pub const DEFAULT_COUNTRY: &str = "Argentina";

/// The five hand-scored factors of a message, each in [0, 10]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemeticFactors {
    /// How easy the message is to understand
    pub cognitive_simplicity: f64,
    /// How quickly the promised benefit arrives
    pub gratification_speed: f64,
    /// How strongly the message engages emotion and identity
    pub emotional_activation: f64,
    /// How observable the benefit is
    pub tangibility: f64,
    /// Inverted cost of adopting the message (10 = free)
    pub entry_cost: f64,
}

impl MemeticFactors {
    /// Factors as (name, value) pairs in weight order
    pub fn components(&self) -> [(&'static str, f64); 5] {
        [
            ("cognitive_simplicity", self.cognitive_simplicity),
            ("gratification_speed", self.gratification_speed),
            ("emotional_activation", self.emotional_activation),
            ("tangibility", self.tangibility),
            ("entry_cost", self.entry_cost),
        ]
    }

    /// Validate every factor lies in [0, 10]
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in self.components() {
            if !(0.0..=FACTOR_SCALE_MAX).contains(&value) {
                return Err(format!("Factor '{}' must be in [0, 10], got {}", name, value));
            }
        }
        Ok(())
    }
}

/// Exponents of the weighted geometric mean (sum to 1.0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorWeights {
    /// Exponent for cognitive simplicity
    pub cognitive_simplicity: f64,
    /// Exponent for gratification speed
    pub gratification_speed: f64,
    /// Exponent for emotional activation
    pub emotional_activation: f64,
    /// Exponent for tangibility
    pub tangibility: f64,
    /// Exponent for entry cost
    pub entry_cost: f64,
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            cognitive_simplicity: 0.25,
            gratification_speed: 0.25,
            emotional_activation: 0.20,
            tangibility: 0.20,
            entry_cost: 0.10,
        }
    }
}

impl FactorWeights {
    fn as_array(&self) -> [f64; 5] {
        [
            self.cognitive_simplicity,
            self.gratification_speed,
            self.emotional_activation,
            self.tangibility,
            self.entry_cost,
        ]
    }
}

/// Hofstede cultural dimensions (0-100 scale)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CulturalProfile {
    /// Individualism (IDV)
    pub individualism: f64,
    /// Power distance (PDI)
    pub power_distance: f64,
    /// Uncertainty avoidance (UAI)
    pub uncertainty_avoidance: f64,
    /// Masculinity (MAS); carried for completeness, unused by the formula
    pub masculinity: f64,
    /// Long-term orientation (LTO)
    pub long_term_orientation: f64,
}

impl CulturalProfile {
    /// Argentina's published Hofstede scores
    pub fn argentina() -> Self {
        Self {
            individualism: 46.0,
            power_distance: 49.0,
            uncertainty_avoidance: 86.0,
            masculinity: 56.0,
            long_term_orientation: 20.0,
        }
    }
}

/// Kind of message being scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemeKind {
    /// Collectivist, immediate-benefit messages
    Populist,
    /// Individualist, long-horizon messages
    Liberal,
}

impl MemeKind {
    /// Get the kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            MemeKind::Populist => "populist",
            MemeKind::Liberal => "liberal",
        }
    }
}

impl std::str::FromStr for MemeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "populist" => Ok(MemeKind::Populist),
            "liberal" => Ok(MemeKind::Liberal),
            _ => Err(format!("Invalid meme kind: {}", s)),
        }
    }
}

/// Full breakdown of a fitness computation
#[derive(Debug, Clone, PartialEq)]
pub struct FitnessBreakdown {
    /// The scored factors
    pub components: MemeticFactors,
    /// Weighted geometric mean of the factors
    pub fitness_base: f64,
    /// Cultural compatibility multiplier
    pub cultural_compatibility: f64,
    /// Replication fidelity multiplier
    pub replication_fidelity: f64,
    /// fitness_base × replication_fidelity × cultural_compatibility
    pub total_fitness: f64,
}

/// Populist vs liberal comparison
#[derive(Debug, Clone, PartialEq)]
pub struct MemeComparison {
    /// Populist message breakdown
    pub populist: FitnessBreakdown,
    /// Liberal message breakdown
    pub liberal: FitnessBreakdown,
    /// populist total / liberal total (infinite when liberal total is 0)
    pub fitness_ratio: f64,
    /// Whether the populist message is fitter
    pub populist_advantage: bool,
}

/// Calculator bound to one country's cultural profile
#[derive(Debug, Clone)]
pub struct MemeticFitnessCalculator {
    country: String,
    weights: FactorWeights,
    profiles: BTreeMap<String, CulturalProfile>,
}

impl MemeticFitnessCalculator {
    /// Create a calculator for `country` using the built-in profiles
    ///
    /// # Errors
    /// Returns error if no cultural profile exists for the country
    ///
    /// # Examples
    ///
    /// ```
    /// use rootfinder_domain::memetic::MemeticFitnessCalculator;
    ///
    /// assert!(MemeticFitnessCalculator::new("Argentina").is_ok());
    /// assert!(MemeticFitnessCalculator::new("Atlantis").is_err());
    /// ```
    pub fn new(country: &str) -> Result<Self, String> {
        let mut profiles = BTreeMap::new();
        profiles.insert(DEFAULT_COUNTRY.to_string(), CulturalProfile::argentina());
        Self::with_profiles(country, profiles, FactorWeights::default())
    }

    /// Create a calculator with explicit profiles and weights
    pub fn with_profiles(
        country: &str,
        profiles: BTreeMap<String, CulturalProfile>,
        weights: FactorWeights,
    ) -> Result<Self, String> {
        if !profiles.contains_key(country) {
            return Err(format!("No cultural profile for country: {}", country));
        }
        Ok(Self {
            country: country.to_string(),
            weights,
            profiles,
        })
    }

    /// The country this calculator is calibrated for
    pub fn country(&self) -> &str {
        &self.country
    }

    fn profile(&self) -> &CulturalProfile {
        // Presence checked at construction
        &self.profiles[&self.country]
    }

    /// Cognitive simplicity from readability and structure
    ///
    /// Mean of the Flesch score rescaled to 0-10, a proposition penalty, and a
    /// conditional penalty (each conditional costs two points).
    pub fn cognitive_simplicity(flesch_score: f64, propositions: u32, conditionals: u32) -> f64 {
        let flesch_component = flesch_score / 10.0;
        let prop_penalty = (10.0 - f64::from(propositions)).max(0.0);
        let cond_penalty = (10.0 - f64::from(conditionals) * 2.0).max(0.0);
        (flesch_component + prop_penalty + cond_penalty) / 3.0
    }

    /// Gratification speed from days until the benefit is felt
    pub fn gratification_speed(days_to_benefit: f64) -> f64 {
        match days_to_benefit {
            d if d <= 1.0 => 10.0,
            d if d <= 7.0 => 8.0,
            d if d <= 30.0 => 6.0,
            d if d <= 365.0 => 4.0,
            d if d <= 1825.0 => 2.0,
            _ => 1.0,
        }
    }

    /// Emotional activation as the mean of valence, arousal and identity
    pub fn emotional_activation(valence: f64, arousal: f64, identity: f64) -> f64 {
        (valence + arousal + identity) / 3.0
    }

    /// Tangibility checklist: observable +4, not counterfactual +3, photogenic +3
    pub fn tangibility(observable: bool, counterfactual: bool, photogenic: bool) -> f64 {
        let mut score = 0.0;
        if observable {
            score += 4.0;
        }
        if !counterfactual {
            score += 3.0;
        }
        if photogenic {
            score += 3.0;
        }
        score
    }

    /// Entry cost, inverted so that a free message scores 10
    pub fn entry_cost(requires_education: bool, requires_effort: bool, requires_sacrifice: bool) -> f64 {
        let mut cost = 0.0;
        if requires_education {
            cost += 3.0;
        }
        if requires_effort {
            cost += 3.0;
        }
        if requires_sacrifice {
            cost += 4.0;
        }
        FACTOR_SCALE_MAX - cost
    }

    /// Cultural compatibility of a message kind with this country, in [0, 1]
    pub fn cultural_compatibility(&self, kind: MemeKind) -> f64 {
        let h = self.profile();
        match kind {
            MemeKind::Populist => {
                (100.0 - h.individualism) / 100.0 * 0.3
                    + h.uncertainty_avoidance / 100.0 * 0.3
                    + h.power_distance / 100.0 * 0.2
                    + (100.0 - h.long_term_orientation) / 100.0 * 0.2
            }
            MemeKind::Liberal => {
                h.individualism / 100.0 * 0.3
                    + (100.0 - h.uncertainty_avoidance) / 100.0 * 0.3
                    + (100.0 - h.power_distance) / 100.0 * 0.2
                    + h.long_term_orientation / 100.0 * 0.2
            }
        }
    }

    /// Weighted geometric mean of the factors: ∏ factorᵢ^weightᵢ
    pub fn fitness_base(&self, factors: &MemeticFactors) -> f64 {
        factors
            .components()
            .iter()
            .zip(self.weights.as_array())
            .map(|((_, value), weight)| value.powf(weight))
            .product()
    }

    /// Total memetic fitness of a message
    ///
    /// # Errors
    /// Returns error if a factor lies outside [0, 10]
    pub fn total_fitness(
        &self,
        factors: &MemeticFactors,
        kind: MemeKind,
        replication_fidelity: f64,
    ) -> Result<FitnessBreakdown, String> {
        factors.validate()?;

        let fitness_base = self.fitness_base(factors);
        let cultural_compatibility = self.cultural_compatibility(kind);

        Ok(FitnessBreakdown {
            components: *factors,
            fitness_base,
            cultural_compatibility,
            replication_fidelity,
            total_fitness: fitness_base * replication_fidelity * cultural_compatibility,
        })
    }

    /// Compare a populist and a liberal message
    ///
    /// Populist messages replicate with fidelity 0.95, liberal ones with 0.60.
    pub fn compare_memes(
        &self,
        populist: &MemeticFactors,
        liberal: &MemeticFactors,
    ) -> Result<MemeComparison, String> {
        let populist = self.total_fitness(populist, MemeKind::Populist, POPULIST_FIDELITY)?;
        let liberal = self.total_fitness(liberal, MemeKind::Liberal, LIBERAL_FIDELITY)?;

        let fitness_ratio = populist.total_fitness / liberal.total_fitness;

        Ok(MemeComparison {
            populist_advantage: fitness_ratio > 1.0,
            fitness_ratio,
            populist,
            liberal,
        })
    }
}
