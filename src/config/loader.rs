// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{BootstrapPlan, RawBootstrapFile};
use crate::errors::Result;

/// File looked up in the project root when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "Bootstrap.toml";

/// Load a configuration file from a given path and return the raw file.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawBootstrapFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let raw: RawBootstrapFile = toml::from_str(&contents)?;

    Ok(raw)
}

/// Load a configuration file from path and validate it into a plan.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<BootstrapPlan> {
    let raw = load_from_path(&path)?;
    let plan = BootstrapPlan::try_from(raw)?;
    Ok(plan)
}

/// Decide which plan to run.
///
/// - An explicit `--config` path is always loaded (a missing file is an error).
/// - Otherwise `<root>/Bootstrap.toml` is used if it exists.
/// - Otherwise the built-in groups.
pub fn resolve_plan(root: &Path, explicit: Option<&Path>) -> Result<BootstrapPlan> {
    if let Some(path) = explicit {
        debug!(config = ?path, "loading task groups from config file");
        return load_and_validate(path);
    }

    let candidate = default_config_path(root);
    if candidate.is_file() {
        debug!(config = ?candidate, "loading task groups from project config");
        load_and_validate(&candidate)
    } else {
        debug!(config = ?candidate, "no project config found; using built-in groups");
        Ok(BootstrapPlan::builtin())
    }
}

/// `Bootstrap.toml` inside the given project root.
pub fn default_config_path(root: &Path) -> PathBuf {
    root.join(DEFAULT_CONFIG_FILE)
}
