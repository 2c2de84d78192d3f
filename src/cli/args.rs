//! Command-line interface definitions.

use crate::config::BuilderKind;
use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// docredir redirect stub generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: docredir.toml)
    #[arg(short = 'C', long, default_value = "docredir.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write redirect stubs into the build output directory
    #[command(visible_alias = "g")]
    Generate {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Resolve the mapping file and print each redirect without writing
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        build_args: BuildArgs,
    },
}

/// Shared build arguments for Generate and Check commands
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Documentation source root (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub source: Option<PathBuf>,

    /// Build output directory (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Mapping file name (relative to the source root)
    #[arg(short, long = "redirects-file", value_hint = clap::ValueHint::FilePath)]
    pub redirects_file: Option<PathBuf>,

    /// Active output builder; stubs are only generated for html
    #[arg(short, long, value_enum)]
    pub builder: Option<BuilderKind>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

impl Cli {
    /// Shared arguments of the active subcommand.
    pub const fn build_args(&self) -> &BuildArgs {
        match &self.command {
            Commands::Generate { build_args } | Commands::Check { build_args } => build_args,
        }
    }
}
