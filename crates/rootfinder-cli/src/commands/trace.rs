//! Trace command implementation.

use crate::cli::TraceArgs;
use crate::error::Result;
use crate::output::{Formatter, LineageReport};
use rootfinder_domain::PolicyId;
use rootfinder_engine::{ScoringConfig, ScoringEngine};
use rootfinder_store::Corpus;

/// Execute the trace command.
pub fn execute_trace(
    args: TraceArgs,
    corpus: &Corpus,
    scoring: &ScoringConfig,
    formatter: &Formatter,
) -> Result<String> {
    let engine = ScoringEngine::new(corpus.store(), corpus.graph(), scoring.clone())?;
    let lineage = engine.trace_lineage(&PolicyId::new(args.id))?;
    let report = LineageReport::new(&lineage, engine.reference_year());

    formatter.format_lineage(&report)
}
