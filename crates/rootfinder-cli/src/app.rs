//! Command dispatch.

use crate::cli::{Cli, Command};
use crate::commands;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::loader;
use crate::output::Formatter;
use rootfinder_store::Corpus;

/// Run a parsed command line and return the rendered output.
pub fn run(cli: Cli) -> Result<String> {
    let Cli {
        corpus,
        config: config_path,
        format,
        no_color,
        skip_malformed,
        command,
        ..
    } = cli;

    let config = match &config_path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let format = format.map(Into::into).unwrap_or(config.settings.format);
    let color_enabled = !no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    let corpus_path = corpus.or_else(|| config.settings.corpus.clone());
    let load = || -> Result<Corpus> {
        let path = corpus_path.as_ref().ok_or_else(|| {
            CliError::Config("No corpus given. Use --corpus or set ROOTFINDER_CORPUS".to_string())
        })?;
        loader::load_corpus(path, skip_malformed)
    };

    match command {
        Command::Trace(args) => commands::execute_trace(args, &load()?, &config.scoring, &formatter),
        Command::Phenotypes(args) => commands::execute_phenotypes(args, &load()?, &config.scoring, &formatter),
        Command::Analyze(args) => commands::execute_analyze(args, &load()?, &config.scoring, &formatter),
        Command::Meme(args) => commands::execute_meme(args, &formatter),
        Command::Config(args) => {
            let path = match config_path {
                Some(path) => path,
                None => Config::path()?,
            };
            commands::execute_config(args, &config, &path, &formatter)
        }
    }
}

/// Default log filter for a `-v` count.
pub fn default_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}
