//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Inline stylesheets and scripts into single-file HTML bundles
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory [default: monohtml.toml]
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// subcommands (default: build every bundle)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Build bundles (all of them when no name is given)
    #[command(visible_alias = "b")]
    Build {
        /// Bundle names to build
        #[arg(value_name = "NAME")]
        names: Vec<String>,

        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// List configured bundles
    #[command(visible_alias = "l")]
    List,
}

/// Build options
#[derive(clap::Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// Minify inlined stylesheets and scripts (best-effort, not literal-aware)
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = true)]
    pub minify: Option<bool>,

    /// Skip artifacts whose marker is missing from the template instead of failing
    #[arg(short, long)]
    pub lenient_markers: bool,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve the command, defaulting to building everything.
    pub fn resolved_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Build {
            names: Vec::new(),
            build_args: BuildArgs::default(),
        })
    }
}
