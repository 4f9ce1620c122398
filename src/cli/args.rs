//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `migrate`: Convert a localization dump into i18n keys and rewire the content patch
//! - `sort`: Recursively sort the keys of JSON files
//! - `init`: Initialize a loctool configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Project root to search for the config file from (default: current directory)
    #[arg(long, env = "LOCTOOL_ROOT")]
    pub root: Option<PathBuf>,

    /// Localization dump to read raw keys from (overrides config file)
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Content patch to rewire (overrides config file)
    #[arg(long)]
    pub content: Option<PathBuf>,

    /// i18n file to add translations to (overrides config file)
    #[arg(long)]
    pub i18n: Option<PathBuf>,

    /// Report what would change without writing any file
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct SortArgs {
    /// JSON file(s) to sort
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Overwrite input file(s) instead of printing to stdout
    #[arg(long)]
    pub inplace: bool,

    /// Save a .bak copy before overwriting (only with --inplace)
    #[arg(long)]
    pub backup: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert localization dump keys into i18n keys and update the content patch
    Migrate(MigrateArgs),
    /// Sort JSON object keys recursively
    Sort(SortArgs),
    /// Initialize a new .loctoolrc.json configuration file
    Init,
}
