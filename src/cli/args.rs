//! CLI argument definitions using clap
//!
//! Commands:
//! - recordbox serve [--config <path>] [--port <port>]
//! - recordbox check-config [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// recordbox - record management over a key-value table
#[derive(Parser, Debug)]
#[command(name = "recordbox")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port to listen on, overriding config and environment
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print the resolved configuration and exit
    CheckConfig {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
