// src/exec/backend.rs

//! Pluggable executor abstraction.

use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;

use crate::errors::Result;

/// One command line to run, and where to run it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    pub command: String,
    /// Absolute directory used as the child's working directory.
    pub dir: PathBuf,
}

/// How a command that did launch finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutcome {
    Success,
    /// Non-zero exit; `None` when the process was killed by a signal.
    Failed(Option<i32>),
}

/// Trait abstracting how a single command is executed.
///
/// Production code uses [`super::ShellExecutor`]; tests can provide their own
/// implementation that doesn't spawn real processes.
pub trait CommandExecutor: Send {
    /// Run the command to completion.
    ///
    /// Returns `Err(BootstrapError::CommandLaunch { .. })` if the process could
    /// not be started, and `Ok(outcome)` once it has exited.
    fn execute(
        &mut self,
        invocation: CommandInvocation,
    ) -> Pin<Box<dyn Future<Output = Result<ExitOutcome>> + Send + '_>>;
}
