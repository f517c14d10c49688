use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::io;
use std::path::PathBuf;
use std::pin::Pin;

use bootstrap_runner::errors::{BootstrapError, Result};
use bootstrap_runner::exec::{CommandExecutor, CommandInvocation, ExitOutcome};

/// A command the fake executor was asked to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutedCommand {
    pub command: String,
    pub dir: PathBuf,
}

/// A fake executor that:
/// - records every invocation, in order
/// - reports success unless the command was scripted to fail.
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    executed: Vec<ExecutedCommand>,
    failures: HashMap<String, i32>,
    launch_failures: HashSet<String>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `command` exit with `code`.
    pub fn fail_with(mut self, command: &str, code: i32) -> Self {
        self.failures.insert(command.to_string(), code);
        self
    }

    /// Make `command` fail to launch, as if the program were missing.
    pub fn fail_to_launch(mut self, command: &str) -> Self {
        self.launch_failures.insert(command.to_string());
        self
    }

    pub fn executed(&self) -> &[ExecutedCommand] {
        &self.executed
    }

    pub fn commands(&self) -> Vec<String> {
        self.executed.iter().map(|e| e.command.clone()).collect()
    }
}

impl CommandExecutor for RecordingExecutor {
    fn execute(
        &mut self,
        invocation: CommandInvocation,
    ) -> Pin<Box<dyn Future<Output = Result<ExitOutcome>> + Send + '_>> {
        self.executed.push(ExecutedCommand {
            command: invocation.command.clone(),
            dir: invocation.dir.clone(),
        });

        let result = if self.launch_failures.contains(&invocation.command) {
            Err(BootstrapError::CommandLaunch {
                command: invocation.command,
                source: io::Error::new(io::ErrorKind::NotFound, "program not found"),
            })
        } else {
            match self.failures.get(&invocation.command) {
                Some(&code) => Ok(ExitOutcome::Failed(Some(code))),
                None => Ok(ExitOutcome::Success),
            }
        };

        Box::pin(async move { result })
    }
}
