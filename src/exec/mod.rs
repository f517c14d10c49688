// src/exec/mod.rs

//! Process execution layer.
//!
//! The runner never spawns processes itself; it hands each command to a
//! [`CommandExecutor`].
//!
//! - [`backend`] defines the `CommandExecutor` trait and the types flowing
//!   through it.
//! - [`shell`] provides `ShellExecutor`, the production implementation built
//!   on `tokio::process::Command` with inherited stdio. Tests replace it with
//!   a recording fake.

pub mod backend;
pub mod shell;

pub use backend::{CommandExecutor, CommandInvocation, ExitOutcome};
pub use shell::ShellExecutor;
