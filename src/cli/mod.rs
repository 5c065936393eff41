pub mod check;
pub mod completions;
pub mod expand;
pub mod init;
pub mod list;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// shorthand - Expand CSS shorthand properties into longhands
#[derive(Parser, Debug)]
#[command(name = "shorthand")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ./shorthand.yaml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Expand shorthand declarations and print the longhands
    Expand(expand::ExpandArgs),

    /// Check stylesheets for declarations that fail to expand
    Check(check::CheckArgs),

    /// List the supported shorthands and their longhands
    List(list::ListArgs),

    /// Write a default shorthand.yaml
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
