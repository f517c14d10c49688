// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

/// Top-level configuration as read from a TOML file, before validation.
///
/// ```toml
/// [config]
/// shell = "bash"
///
/// [[group]]
/// name = "Backend Setup"
/// path = "backend"
/// commands = ["npm install"]
/// ```
///
/// Groups run in the order they appear in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawBootstrapFile {
    /// Global behaviour config from `[config]`.
    #[serde(default)]
    pub config: ConfigSection,

    /// All `[[group]]` entries, in file order.
    #[serde(default, rename = "group")]
    pub groups: Vec<TaskGroup>,
}

/// `[config]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigSection {
    /// POSIX-compatible shell used as `<shell> -c <command>`.
    ///
    /// If `None`, commands run through `sh -c` (or `cmd /C` on Windows).
    #[serde(default)]
    pub shell: Option<String>,
}

/// A named directory plus the shell commands to run inside it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskGroup {
    /// Label used in the console notices.
    pub name: String,

    /// Directory the commands run in. Relative paths are resolved against
    /// the project root.
    pub path: PathBuf,

    /// Shell command lines, run in order.
    #[serde(default)]
    pub commands: Vec<String>,
}

impl TaskGroup {
    pub fn new(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        commands: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            commands: commands.into_iter().map(Into::into).collect(),
        }
    }
}

/// Validated, ordered list of task groups.
///
/// Build one through `BootstrapPlan::try_from(raw)` (see `validate.rs`) or
/// [`BootstrapPlan::builtin`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapPlan {
    pub config: ConfigSection,
    pub groups: Vec<TaskGroup>,
}

impl BootstrapPlan {
    /// Internal constructor used after validation has succeeded.
    pub(crate) fn new_unchecked(config: ConfigSection, groups: Vec<TaskGroup>) -> Self {
        Self { config, groups }
    }

    pub fn command_count(&self) -> usize {
        self.groups.iter().map(|g| g.commands.len()).sum()
    }
}
