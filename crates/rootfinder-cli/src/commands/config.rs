//! Config command implementation.

use crate::cli::ConfigArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
///
/// Prints the effective configuration as TOML, optionally saving it to `path`.
pub fn execute_config(args: ConfigArgs, config: &Config, path: &Path, formatter: &Formatter) -> Result<String> {
    let contents = config.to_toml()?;
    if !args.save {
        return Ok(contents);
    }

    config.save_to(path)?;
    Ok(format!(
        "{}\n{}",
        contents,
        formatter.success(&format!("Configuration saved to {}", path.display()))
    ))
}
