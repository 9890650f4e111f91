//! CLI module for recordbox
//!
//! Provides command-line interface for:
//! - serve: Start the HTTP server
//! - check-config: Print the resolved configuration

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{check_config, run, run_command, serve};
pub use errors::{CliError, CliResult};
