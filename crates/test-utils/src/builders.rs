#![allow(dead_code)]

use std::path::PathBuf;

use bootstrap_runner::config::{BootstrapPlan, ConfigSection, RawBootstrapFile, TaskGroup};

/// Builder for `BootstrapPlan` to simplify test setup.
pub struct PlanBuilder {
    raw: RawBootstrapFile,
}

impl PlanBuilder {
    pub fn new() -> Self {
        Self {
            raw: RawBootstrapFile {
                config: ConfigSection::default(),
                groups: Vec::new(),
            },
        }
    }

    pub fn with_group(mut self, group: TaskGroup) -> Self {
        self.raw.groups.push(group);
        self
    }

    pub fn shell(mut self, shell: &str) -> Self {
        self.raw.config.shell = Some(shell.to_string());
        self
    }

    pub fn build(self) -> BootstrapPlan {
        BootstrapPlan::try_from(self.raw).expect("Failed to build valid plan from builder")
    }
}

impl Default for PlanBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `TaskGroup`.
pub struct GroupBuilder {
    group: TaskGroup,
}

impl GroupBuilder {
    pub fn new(name: &str, path: impl Into<PathBuf>) -> Self {
        Self {
            group: TaskGroup {
                name: name.to_string(),
                path: path.into(),
                commands: vec![],
            },
        }
    }

    pub fn command(mut self, cmd: &str) -> Self {
        self.group.commands.push(cmd.to_string());
        self
    }

    pub fn build(self) -> TaskGroup {
        self.group
    }
}
