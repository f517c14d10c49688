// src/exec/shell.rs

//! Real command executor.

use std::future::Future;
use std::pin::Pin;
use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use crate::errors::{BootstrapError, Result};
use crate::exec::{CommandExecutor, CommandInvocation, ExitOutcome};

/// Runs each command through a shell, blocking until it exits.
///
/// All three standard streams are inherited, so the child's output shows up
/// live on the console, in order with the runner's own notices.
#[derive(Debug, Clone, Default)]
pub struct ShellExecutor {
    shell: Option<String>,
}

impl ShellExecutor {
    /// `shell` overrides the platform default (`sh -c`, or `cmd /C` on
    /// Windows); it is invoked as `<shell> -c <command>`.
    pub fn new(shell: Option<String>) -> Self {
        Self { shell }
    }

    fn build_command(&self, line: &str) -> Command {
        match &self.shell {
            Some(shell) => {
                let mut c = Command::new(shell);
                c.arg("-c").arg(line);
                c
            }
            None if cfg!(windows) => {
                let mut c = Command::new("cmd");
                c.arg("/C").arg(line);
                c
            }
            None => {
                let mut c = Command::new("sh");
                c.arg("-c").arg(line);
                c
            }
        }
    }
}

impl CommandExecutor for ShellExecutor {
    fn execute(
        &mut self,
        invocation: CommandInvocation,
    ) -> Pin<Box<dyn Future<Output = Result<ExitOutcome>> + Send + '_>> {
        Box::pin(async move {
            let mut cmd = self.build_command(&invocation.command);
            cmd.current_dir(&invocation.dir)
                .stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit());

            debug!(
                command = %invocation.command,
                dir = ?invocation.dir,
                "spawning command"
            );

            let status = cmd
                .status()
                .await
                .map_err(|source| BootstrapError::CommandLaunch {
                    command: invocation.command.clone(),
                    source,
                })?;

            let outcome = if status.success() {
                ExitOutcome::Success
            } else {
                ExitOutcome::Failed(status.code())
            };

            debug!(
                command = %invocation.command,
                exit_code = ?status.code(),
                success = status.success(),
                "command exited"
            );

            Ok(outcome)
        })
    }
}
