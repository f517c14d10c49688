// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! Running without any flag keeps the classic behaviour: use
//! `Bootstrap.toml` from the current directory if there is one, otherwise the
//! built-in backend/frontend groups.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `bootstrap`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "bootstrap",
    version,
    about = "Install dependencies and write env files for each subproject.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to a config file (TOML) describing the task groups.
    ///
    /// Default: `Bootstrap.toml` in the project root, falling back to the
    /// built-in groups when that file does not exist.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Project root that group paths are resolved against.
    ///
    /// Default: the current working directory.
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `BOOTSTRAP_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Load and validate the groups, print them, but don't run anything.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
