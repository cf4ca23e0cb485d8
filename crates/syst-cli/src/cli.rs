use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "syst",
    about = "Validate, inspect, and merge systematic parameter metadata",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check a metadata file for internal consistency
    Validate(ValidateArgs),
    /// List the parameter headers in a metadata file
    Show(ShowArgs),
    /// Merge metadata files, refusing id collisions
    Merge(MergeArgs),
}

#[derive(Args)]
pub struct ValidateArgs {
    /// Metadata file (.json or .toml)
    pub file: PathBuf,
    /// Configuration file with [validation] and [merge] sections
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Metadata file (.json or .toml)
    pub file: PathBuf,
}

#[derive(Args)]
pub struct MergeArgs {
    /// Collection the sources are appended to
    pub target: PathBuf,
    /// Collections to append, in order
    #[arg(required = true)]
    pub sources: Vec<PathBuf>,
    /// Write the result here instead of standard output
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Configuration file with [validation] and [merge] sections
    #[arg(long)]
    pub config: Option<PathBuf>,
}
