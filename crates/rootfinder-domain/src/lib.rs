//! RootFinder Domain Layer
//!
//! This crate contains the core data model and pure scoring formulas for
//! RootFinder, a policy genealogy tracker. It defines the fundamental
//! concepts, value objects, and trait interfaces that all other layers
//! depend upon.
//!
//! ## Key Concepts
//!
//! - **Policy**: A law or programme with a creation year, an optional end, and an optional parent
//! - **Lineage**: Ancestors, descendants, siblings and inheritance scores of one root policy
//! - **Inheritance score**: [0, 1] resemblance between a root and one of its descendants
//! - **Memetic fitness**: Propensity of a message to persist and propagate
//!
//! ## Architecture
//!
//! - No I/O and no global state
//! - Pure computation only
//! - Storage and graph implementations live in `rootfinder-store`
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod inheritance;
pub mod lineage;
pub mod memetic;
pub mod policy;
pub mod traits;

// Re-exports for convenience
pub use inheritance::{inheritance_score, InheritanceWeights};
pub use lineage::Lineage;
pub use memetic::{MemeKind, MemeticFactors, MemeticFitnessCalculator};
pub use policy::{Policy, PolicyId};
