//! # CLI Argument Definitions
//!
//! Command-line structure of the `bkit` tool, parsed with `clap`.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "bkit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Check, format and preview Slack Block Kit payloads")]
pub struct Cli {
    /// Configuration file (TOML, JSON or YAML); `BKIT__*` variables override it
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Enumeration of available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Decode a payload and validate it against the configured limits
    Check {
        /// Payload file, or `-` for stdin
        file: PathBuf,
    },
    /// Decode a payload and print it in canonical form
    Fmt {
        /// Payload file, or `-` for stdin
        file: PathBuf,
        /// Print compact JSON regardless of configuration
        #[arg(long)]
        compact: bool,
    },
    /// List element types and the containers that accept them
    Kinds {},
    /// Print a sample payload assembled with the builders
    Demo {
        /// Build a modal view instead of a message
        #[arg(long)]
        modal: bool,
    },
}
