//! CLI argument definitions for Packer.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "packer",
    version,
    about = "Resolve module graphs and compute bundle load order",
    long_about = "Packer reads the modules declared in Packer.toml, resolves their \
                  include/import/exclude relations and reports the order in which \
                  each entry bundle loads its modules."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the bundle order of entry modules
    Order {
        /// Only report this module (path as written in Packer.toml)
        #[arg(short, long)]
        entry: Option<String>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Display the relation tree of entry modules
    Tree {
        /// Only show this module's tree
        #[arg(short, long)]
        entry: Option<String>,
        /// Maximum depth to display
        #[arg(short, long)]
        depth: Option<u32>,
        /// List recorded file dependencies instead
        #[arg(long)]
        files: bool,
    },
}

/// Parse command-line arguments.
pub fn parse() -> Cli {
    Cli::parse()
}
