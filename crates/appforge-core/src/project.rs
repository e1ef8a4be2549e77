//! Commands operating on an existing scaffolded project

use crate::flavor::MARKER_DIR;
use crate::fsx::fs_exists;
use crate::outcome::CommandOutcome;
use crate::runtime::PackageManager;
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

const NOT_A_PROJECT: &str =
    "This is not an appforge project. Are you sure you are in the right directory?";

/// Run the project's `dev` script, installing dependencies first when the
/// `node_modules` tree is missing.
pub async fn start(root: &Path) -> Result<CommandOutcome> {
    run_project_script(root, "dev", "running project...").await
}

/// Run the project's `test` script, installing dependencies first when
/// needed.
pub async fn test(root: &Path) -> Result<CommandOutcome> {
    run_project_script(root, "test", "testing project...").await
}

async fn run_project_script(root: &Path, script: &str, banner: &str) -> Result<CommandOutcome> {
    if !fs_exists(root.join(MARKER_DIR)).await {
        return Ok(CommandOutcome::failure(NOT_A_PROJECT));
    }

    let pm = PackageManager::detect();

    if !fs_exists(root.join("node_modules")).await {
        println!("{}", "installing dependencies...".cyan());
        pm.install(root).await?;
    }

    println!("{}", banner.cyan());
    pm.run_script(root, script).await?;

    Ok(CommandOutcome::success())
}
