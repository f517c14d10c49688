// src/config/mod.rs

//! Task group configuration.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Provide the built-in backend/frontend groups (`defaults.rs`).
//! - Load a config file from disk, or fall back to the defaults (`loader.rs`).
//! - Validate the groups before anything runs (`validate.rs`).

pub mod defaults;
pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{DEFAULT_CONFIG_FILE, load_and_validate, load_from_path, resolve_plan};
pub use model::{BootstrapPlan, ConfigSection, RawBootstrapFile, TaskGroup};
