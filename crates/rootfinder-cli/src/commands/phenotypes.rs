//! Phenotypes command implementation.

use crate::cli::PhenotypesArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use rootfinder_engine::{ScoringConfig, ScoringEngine};
use rootfinder_store::Corpus;

/// Execute the phenotypes command.
pub fn execute_phenotypes(
    args: PhenotypesArgs,
    corpus: &Corpus,
    scoring: &ScoringConfig,
    formatter: &Formatter,
) -> Result<String> {
    let engine = ScoringEngine::new(corpus.store(), corpus.graph(), scoring.clone())?;

    let matches = match args.threshold {
        Some(threshold) if !threshold.is_finite() => {
            return Err(CliError::InvalidInput(format!("Threshold must be a number, got {}", threshold)));
        }
        Some(threshold) => engine.find_extended_phenotypes(threshold)?,
        None => engine.extended_phenotypes()?,
    };

    formatter.format_phenotypes(&matches)
}
