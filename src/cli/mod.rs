//! CLI module for flightdb
//!
//! Provides the command-line surface:
//! - `-i`: ingest a CSV file into the document store
//! - `-q`: run a query document against the ingested or stored records

mod args;
mod commands;
mod config;
mod errors;

pub use args::Cli;
pub use commands::{ingest, query, run, run_command, RunReport};
pub use config::RunConfig;
pub use errors::{CliError, CliErrorCode, CliResult};
