//! Package manager invocation
//!
//! Dependency installs and project scripts run through whichever package
//! manager is available, yarn preferred. Output goes straight to the user's
//! terminal; these commands are long-running and interactive by nature.

use super::check;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::process::Command;

/// The package manager driving installs and scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Yarn,
    Npm,
}

impl PackageManager {
    /// Prefer yarn when installed, fall back to npm.
    pub fn detect() -> Self {
        if check::check_yarn().available {
            PackageManager::Yarn
        } else {
            PackageManager::Npm
        }
    }

    pub fn program(&self) -> &'static str {
        match self {
            PackageManager::Yarn => "yarn",
            PackageManager::Npm => "npm",
        }
    }

    /// Install the project's dependencies in `dir`.
    pub async fn install(&self, dir: &Path) -> Result<()> {
        let status = Command::new(self.program())
            .arg("install")
            .current_dir(dir)
            .status()
            .await
            .with_context(|| format!("Failed to run {} install", self.program()))?;

        if !status.success() {
            anyhow::bail!(
                "{} install failed with exit code {}. Please try again with {} install.",
                self.program(),
                status.code().unwrap_or(-1),
                self.program()
            );
        }
        Ok(())
    }

    /// Run a package.json script (e.g. "dev", "test") in `dir`.
    pub async fn run_script(&self, dir: &Path, script: &str) -> Result<()> {
        let status = Command::new(self.program())
            .arg("run")
            .arg(script)
            .current_dir(dir)
            .status()
            .await
            .with_context(|| format!("Failed to run {} run {}", self.program(), script))?;

        if !status.success() {
            anyhow::bail!(
                "{} run {} failed with exit code {}",
                self.program(),
                script,
                status.code().unwrap_or(-1)
            );
        }
        Ok(())
    }
}
