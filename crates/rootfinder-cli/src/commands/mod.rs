//! Command implementations.
//!
//! Each command returns its rendered output; `main` prints it.

pub mod analyze;
pub mod config;
pub mod meme;
pub mod phenotypes;
pub mod trace;

pub use self::analyze::execute_analyze;
pub use self::config::execute_config;
pub use self::meme::execute_meme;
pub use self::phenotypes::execute_phenotypes;
pub use self::trace::execute_trace;
