// src/errors.rs

//! Crate-wide error type and `Result` alias.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("group '{group}': directory {path:?} does not exist")]
    MissingDirectory { group: String, path: PathBuf },

    #[error("could not launch `{command}`: {source}")]
    CommandLaunch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` {}", exit_description(.code))]
    CommandFailed { command: String, code: Option<i32> },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BootstrapError {
    /// The command text, if this error came from running a command.
    pub fn failed_command(&self) -> Option<&str> {
        match self {
            BootstrapError::CommandLaunch { command, .. }
            | BootstrapError::CommandFailed { command, .. } => Some(command),
            _ => None,
        }
    }
}

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with code {code}"),
        None => "was terminated by a signal".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, BootstrapError>;
