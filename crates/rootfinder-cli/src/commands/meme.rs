//! Meme command implementation.

use crate::cli::MemeArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use rootfinder_domain::memetic::DEFAULT_REPLICATION_FIDELITY;
use rootfinder_domain::{MemeKind, MemeticFactors, MemeticFitnessCalculator};

/// Reference populist message (immediate cash benefit)
pub const POPULIST_REFERENCE: MemeticFactors = MemeticFactors {
    cognitive_simplicity: 8.5,
    gratification_speed: 9.0,
    emotional_activation: 9.0,
    tangibility: 8.0,
    entry_cost: 10.0,
};

/// Reference liberal message (long-horizon structural reform)
pub const LIBERAL_REFERENCE: MemeticFactors = MemeticFactors {
    cognitive_simplicity: 2.0,
    gratification_speed: 1.5,
    emotional_activation: 2.5,
    tangibility: 3.0,
    entry_cost: 2.0,
};

/// Execute the meme command.
pub fn execute_meme(args: MemeArgs, formatter: &Formatter) -> Result<String> {
    let calculator = MemeticFitnessCalculator::new(&args.country).map_err(CliError::InvalidInput)?;

    if args.compare {
        let comparison = calculator
            .compare_memes(&POPULIST_REFERENCE, &LIBERAL_REFERENCE)
            .map_err(CliError::InvalidInput)?;
        return formatter.format_comparison(&comparison, calculator.country());
    }

    let fidelity = args.fidelity.unwrap_or(DEFAULT_REPLICATION_FIDELITY);
    if !(0.0..=1.0).contains(&fidelity) {
        return Err(CliError::InvalidInput(
            "Replication fidelity must be between 0.0 and 1.0".to_string(),
        ));
    }

    let factors = MemeticFactors {
        cognitive_simplicity: args.simplicity,
        gratification_speed: args
            .days_to_benefit
            .map(MemeticFitnessCalculator::gratification_speed)
            .unwrap_or(args.gratification),
        emotional_activation: args.emotion,
        tangibility: args.tangibility,
        entry_cost: args.entry_cost,
    };

    let kind = MemeKind::from(args.kind);
    let breakdown = calculator
        .total_fitness(&factors, kind, fidelity)
        .map_err(CliError::InvalidInput)?;

    formatter.format_fitness(&breakdown, kind, calculator.country())
}
