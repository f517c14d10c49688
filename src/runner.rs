// src/runner.rs

//! The bootstrap runner: walks the task groups in order and runs every
//! command, stopping at the first failure.
//!
//! Each command gets its group directory passed explicitly; the process-wide
//! working directory is never touched. Failures are returned, not turned into
//! an exit here, so `main` stays the single place that decides the exit code.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::{BootstrapPlan, TaskGroup};
use crate::errors::{BootstrapError, Result};
use crate::exec::{CommandExecutor, CommandInvocation, ExitOutcome};

/// What a successful run did, group by group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub groups: Vec<GroupReport>,
}

impl RunReport {
    pub fn commands_run(&self) -> usize {
        self.groups.iter().map(|g| g.commands_run).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupReport {
    pub name: String,
    pub dir: PathBuf,
    pub commands_run: usize,
}

/// Sequential, fail-fast runner.
///
/// `out` receives the human-facing notices (stdout in production). It is
/// flushed before every command so the notices stay ahead of the child's
/// inherited output.
pub struct Runner<E: CommandExecutor, W: Write> {
    root: PathBuf,
    executor: E,
    out: W,
}

impl<E: CommandExecutor, W: Write> Runner<E, W> {
    /// `root` should be absolute; relative group paths are joined onto it.
    pub fn new(root: impl Into<PathBuf>, executor: E, out: W) -> Self {
        Self {
            root: root.into(),
            executor,
            out,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Run every group in order.
    pub async fn run(&mut self, plan: &BootstrapPlan) -> Result<RunReport> {
        debug!(
            root = ?self.root,
            groups = plan.groups.len(),
            commands = plan.command_count(),
            "starting bootstrap run"
        );
        writeln!(self.out, "Starting project setup...\n")?;

        let mut report = RunReport::default();
        for group in &plan.groups {
            let group_report = self.run_group(group).await?;
            report.groups.push(group_report);
        }

        writeln!(self.out, "Setup complete! You can now start your project.")?;
        self.out.flush()?;

        debug!(commands = report.commands_run(), "bootstrap run finished");
        Ok(report)
    }

    async fn run_group(&mut self, group: &TaskGroup) -> Result<GroupReport> {
        writeln!(self.out, "Setting up {}...", group.name)?;

        let dir = self.group_dir(group)?;
        debug!(group = %group.name, dir = ?dir, "entering group directory");

        for command in &group.commands {
            self.run_command(group, command, &dir).await?;
        }

        writeln!(self.out, "{} setup complete!\n", group.name)?;
        debug!(group = %group.name, commands = group.commands.len(), "group complete");

        Ok(GroupReport {
            name: group.name.clone(),
            dir,
            commands_run: group.commands.len(),
        })
    }

    async fn run_command(&mut self, group: &TaskGroup, command: &str, dir: &Path) -> Result<()> {
        writeln!(self.out, "Running: {command}")?;
        self.out.flush()?;

        let outcome = self
            .executor
            .execute(CommandInvocation {
                command: command.to_string(),
                dir: dir.to_path_buf(),
            })
            .await?;

        match outcome {
            ExitOutcome::Success => Ok(()),
            ExitOutcome::Failed(code) => {
                warn!(group = %group.name, command, exit_code = ?code, "command failed");
                Err(BootstrapError::CommandFailed {
                    command: command.to_string(),
                    code,
                })
            }
        }
    }

    /// Absolute directory for a group; it must already exist.
    fn group_dir(&self, group: &TaskGroup) -> Result<PathBuf> {
        let dir = self.root.join(&group.path);
        if !dir.is_dir() {
            return Err(BootstrapError::MissingDirectory {
                group: group.name.clone(),
                path: dir,
            });
        }
        Ok(dir)
    }
}
