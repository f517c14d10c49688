// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod runner;

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::CliArgs;
use crate::config::{BootstrapPlan, resolve_plan};
use crate::errors::Result;
use crate::exec::ShellExecutor;
use crate::runner::Runner;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - project root resolution
/// - config loading (file or built-in groups)
/// - the shell executor
/// - the runner, writing its notices to stdout
pub async fn run(args: CliArgs) -> Result<()> {
    let root = resolve_root(args.root.as_deref())?;
    let plan = resolve_plan(&root, args.config.as_deref())?;

    if args.dry_run {
        print_dry_run(&plan, &root);
        return Ok(());
    }

    let executor = ShellExecutor::new(plan.config.shell.clone());
    let mut runner = Runner::new(root, executor, std::io::stdout());
    runner.run(&plan).await?;
    Ok(())
}

/// Absolute project root.
///
/// Group paths are joined onto this once at startup, so the outcome does not
/// depend on where later commands leave the shell.
pub fn resolve_root(root: Option<&Path>) -> Result<PathBuf> {
    let root = match root {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir()?,
    };
    Ok(root.canonicalize()?)
}

/// Dry-run output: print groups, directories and commands.
fn print_dry_run(plan: &BootstrapPlan, root: &Path) {
    println!("bootstrap dry-run");
    println!("  root = {}", root.display());
    match plan.config.shell {
        Some(ref shell) => println!("  config.shell = {shell}"),
        None => println!("  config.shell = (platform default)"),
    }
    println!();

    println!("groups ({}):", plan.groups.len());
    for group in &plan.groups {
        println!("  - {}", group.name);
        println!("      dir: {}", root.join(&group.path).display());
        for command in &group.commands {
            println!("      run: {command}");
        }
    }

    debug!("dry-run complete (no execution)");
}
