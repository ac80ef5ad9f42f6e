//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// RootFinder - Trace policy genealogies and score their persistence.
#[derive(Debug, Parser)]
#[command(name = "rootfinder")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Policy corpus (CSV)
    #[arg(long, env = "ROOTFINDER_CORPUS", global = true)]
    pub corpus: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Skip malformed corpus rows instead of failing
    #[arg(long, global = true)]
    pub skip_malformed: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Trace the lineage of one policy
    Trace(TraceArgs),

    /// List extended phenotypes
    Phenotypes(PhenotypesArgs),

    /// Compute metrics for policies
    Analyze(AnalyzeArgs),

    /// Score a message with the memetic fitness calculator
    Meme(MemeArgs),

    /// Show the effective configuration
    Config(ConfigArgs),
}

/// Arguments for the trace command.
#[derive(Debug, Parser)]
pub struct TraceArgs {
    /// Policy ID
    pub id: String,
}

/// Arguments for the phenotypes command.
#[derive(Debug, Parser)]
pub struct PhenotypesArgs {
    /// Minimum score (defaults to the configured threshold)
    #[arg(short, long)]
    pub threshold: Option<f64>,
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// Policy IDs (all policies when omitted)
    pub ids: Vec<String>,
}

/// Arguments for the meme command.
#[derive(Debug, Parser)]
pub struct MemeArgs {
    /// Compare the built-in populist and liberal messages
    #[arg(
        long,
        conflicts_with_all = [
            "kind",
            "fidelity",
            "simplicity",
            "gratification",
            "days_to_benefit",
            "emotion",
            "tangibility",
            "entry_cost",
        ]
    )]
    pub compare: bool,

    /// Message kind
    #[arg(short, long, value_enum, default_value = "populist")]
    pub kind: KindArg,

    /// Replication fidelity (0.0-1.0)
    #[arg(long)]
    pub fidelity: Option<f64>,

    /// Country whose cultural profile is used
    #[arg(long, default_value = rootfinder_domain::memetic::DEFAULT_COUNTRY)]
    pub country: String,

    /// Cognitive simplicity (0-10)
    #[arg(long, default_value = "5.0")]
    pub simplicity: f64,

    /// Gratification speed (0-10)
    #[arg(long, default_value = "5.0", conflicts_with = "days_to_benefit")]
    pub gratification: f64,

    /// Derive gratification speed from days until the benefit arrives
    #[arg(long)]
    pub days_to_benefit: Option<f64>,

    /// Emotional activation (0-10)
    #[arg(long, default_value = "5.0")]
    pub emotion: f64,

    /// Tangibility (0-10)
    #[arg(long, default_value = "5.0")]
    pub tangibility: f64,

    /// Inverted entry cost (0-10, 10 = free)
    #[arg(long, default_value = "5.0")]
    pub entry_cost: f64,
}

/// Message kind argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum KindArg {
    /// Collectivist, immediate-benefit message
    Populist,
    /// Individualist, long-horizon message
    Liberal,
}

/// Arguments for the config command.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    /// Write the effective configuration to the config file
    #[arg(long)]
    pub save: bool,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}

impl From<KindArg> for rootfinder_domain::MemeKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Populist => rootfinder_domain::MemeKind::Populist,
            KindArg::Liberal => rootfinder_domain::MemeKind::Liberal,
        }
    }
}
