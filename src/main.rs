//! monohtml - inline stylesheets and scripts into single-file HTML bundles.

mod asset;
mod cli;
mod compose;
mod config;
mod embed;
mod error;
mod logger;
mod output;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::BundlerConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let command = cli.resolved_command();
    if let Commands::Build { build_args, .. } = &command {
        // Before loading so config discovery is logged too
        logger::set_verbose(build_args.verbose);
    }

    let mut config = BundlerConfig::load(cli.config.as_deref())?;

    match command {
        Commands::Build { names, build_args } => {
            config.apply_build_args(&build_args);
            cli::build::build_bundles(&config, &names)
        }
        Commands::List => {
            cli::list::list_bundles(&config);
            Ok(())
        }
    }
}
