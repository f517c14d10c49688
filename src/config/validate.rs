// src/config/validate.rs

use std::collections::HashSet;

use tracing::warn;

use crate::config::model::{BootstrapPlan, RawBootstrapFile};
use crate::errors::{BootstrapError, Result};

impl TryFrom<RawBootstrapFile> for BootstrapPlan {
    type Error = crate::errors::BootstrapError;

    fn try_from(raw: RawBootstrapFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(BootstrapPlan::new_unchecked(raw.config, raw.groups))
    }
}

fn validate_raw_config(raw: &RawBootstrapFile) -> Result<()> {
    ensure_has_groups(raw)?;
    validate_global_config(raw)?;
    validate_groups(raw)?;
    Ok(())
}

fn ensure_has_groups(raw: &RawBootstrapFile) -> Result<()> {
    if raw.groups.is_empty() {
        return Err(BootstrapError::ConfigError(
            "config must contain at least one [[group]] section".to_string(),
        ));
    }
    Ok(())
}

fn validate_global_config(raw: &RawBootstrapFile) -> Result<()> {
    if let Some(shell) = &raw.config.shell {
        if shell.trim().is_empty() {
            return Err(BootstrapError::ConfigError(
                "[config].shell must not be blank".to_string(),
            ));
        }
    }
    Ok(())
}

fn validate_groups(raw: &RawBootstrapFile) -> Result<()> {
    let mut seen = HashSet::new();

    for (idx, group) in raw.groups.iter().enumerate() {
        if group.name.trim().is_empty() {
            return Err(BootstrapError::ConfigError(format!(
                "group #{} has a blank `name`",
                idx + 1
            )));
        }
        if !seen.insert(group.name.as_str()) {
            return Err(BootstrapError::ConfigError(format!(
                "duplicate group name '{}'",
                group.name
            )));
        }
        if group.path.as_os_str().is_empty() {
            return Err(BootstrapError::ConfigError(format!(
                "group '{}' has an empty `path`",
                group.name
            )));
        }
        if let Some(pos) = group.commands.iter().position(|c| c.trim().is_empty()) {
            return Err(BootstrapError::ConfigError(format!(
                "group '{}' has a blank command at position {}",
                group.name,
                pos + 1
            )));
        }
        if group.commands.is_empty() {
            warn!(group = %group.name, "group has no commands; it will only be announced");
        }
    }

    Ok(())
}
