//! Analyze command implementation.

use crate::cli::AnalyzeArgs;
use crate::error::Result;
use crate::output::Formatter;
use rootfinder_domain::PolicyId;
use rootfinder_engine::{ScoringConfig, ScoringEngine};
use rootfinder_store::Corpus;

/// Execute the analyze command.
///
/// With no IDs every policy is analyzed in corpus order.
pub fn execute_analyze(
    args: AnalyzeArgs,
    corpus: &Corpus,
    scoring: &ScoringConfig,
    formatter: &Formatter,
) -> Result<String> {
    let engine = ScoringEngine::new(corpus.store(), corpus.graph(), scoring.clone())?;

    let rows = if args.ids.is_empty() {
        engine.analyze_all()?
    } else {
        args.ids
            .into_iter()
            .map(|id| engine.analyze(&PolicyId::new(id)))
            .collect::<std::result::Result<Vec<_>, _>>()?
    };

    formatter.format_metrics(&rows)
}
