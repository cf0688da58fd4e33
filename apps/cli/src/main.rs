#![allow(clippy::print_stderr, clippy::print_stdout)]

pub mod handlers;
pub mod models;

use crate::handlers::{check, demo, fmt, kinds};
use crate::models::args::{Cli, Commands};

use anyhow::Result;
use bkit::domain::config::BkitConfig;
use bkit::kernel::config::load_config;
use bkit_logger::Logger;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _logger = Logger::builder().name(env!("CARGO_BIN_NAME")).verbosity(cli.verbose).init()?;
    let config: BkitConfig = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Check { file } => check::check_file(&file, &config)?,
        Commands::Fmt { file, compact } => fmt::format_file(&file, compact, &config)?,
        Commands::Kinds {} => kinds::list_kinds(),
        Commands::Demo { modal } => demo::print_demo(modal, &config)?,
    }

    Ok(())
}
