//! RootFinder CLI library.
//!
//! This library provides the core functionality for the RootFinder command-line interface,
//! including corpus loading, configuration management, command execution, and output formatting.

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod loader;
pub mod output;

pub use app::run;
pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
