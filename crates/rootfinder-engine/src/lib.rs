//! RootFinder Engine
//!
//! Lineage tracing and composite scoring over a loaded policy corpus.
//!
//! # Overview
//!
//! The engine is responsible for:
//! - **Lineage tracing**: Ancestors, descendants, siblings and inheritance scores of one policy
//! - **Extended phenotypes**: Scoring every policy and keeping those above a threshold
//! - **Memetic fitness**: The lineage-based weighted sum used by batch analysis
//! - **Metrics**: One flat row per analyzed policy
//!
//! # Architecture
//!
//! The engine owns nothing but its configuration. It borrows a store and a
//! genealogy graph (usually from a `Corpus`), so every [`Lineage`] it returns
//! borrows the same records.
//!
//! ## Score Components
//!
//! | Score | Term | Normalizer | Weight |
//! |-------|------|------------|--------|
//! | **Extended phenotype** | descendants | 10 | 0.25 |
//! | | survival years | 50 | 0.25 |
//! | | mean inheritance | | 0.25 |
//! | | reproductive (ideology) | | 0.25 |
//! | **Memetic fitness** | descendants | 10 | 0.25 |
//! | | survival years | 80 | 0.25 |
//! | | fidelity (mean inheritance) | | 0.20 |
//! | | cultural fit (ideology) | | 0.20 |
//! | | simplicity (name) | | 0.10 |
//!
//! # Usage
//!
//! ```
//! use rootfinder_domain::{Policy, PolicyId};
//! use rootfinder_engine::{ScoringConfig, ScoringEngine};
//! use rootfinder_store::Corpus;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let corpus = Corpus::from_policies(vec![
//!     Policy::new("ARG_AGUINALDO_1945", "Aguinaldo", 1945)
//!         .with_type("Labor")
//!         .with_ideology("Populist"),
//!     Policy::new("ARG_SAC_1967", "Sueldo Anual Complementario", 1967)
//!         .with_parent("ARG_AGUINALDO_1945")
//!         .with_type("Labor")
//!         .with_ideology("Populist"),
//! ]);
//!
//! let engine = ScoringEngine::new(corpus.store(), corpus.graph(), ScoringConfig::default())?;
//! let lineage = engine.trace_lineage(&PolicyId::new("ARG_AGUINALDO_1945"))?;
//! assert_eq!(lineage.total_descendants(), 1);
//!
//! let metrics = engine.analyze(&PolicyId::new("ARG_AGUINALDO_1945"))?;
//! println!("{}", metrics.summary());
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! Every weight and lookup table can be set via TOML:
//!
//! ```toml
//! reference_year = 2025
//!
//! [phenotype]
//! threshold = 0.7
//!
//! [phenotype.reproductive]
//! fallback = 0.3
//! values = { Populist = 0.8 }
//!
//! [memetic]
//! empty_fidelity = 0.5
//! ```

#![warn(missing_docs)]

mod error;
pub mod config;
mod metrics;
pub mod scoring;
mod tracer;

pub use config::ScoringConfig;
pub use error::EngineError;
pub use metrics::{PhenotypeMatch, PolicyMetrics};
pub use scoring::ScoringEngine;
pub use tracer::LineageTracer;

pub use rootfinder_domain::Lineage;
