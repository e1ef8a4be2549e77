//! Scaffold pipeline steps
//!
//! Scaffolding is a sequence of explicit async steps composed with ordinary
//! control flow: stage the native project, unpack the boilerplate, strip the
//! archive's VCS directory, overlay native trees, brand the project, write
//! the flavor markers. Each step returns a `Result`; the caller stops at the
//! first failure.

use crate::flavor::{Flavor, Framework};
use crate::fsx::fs_exists;
use crate::name::CanonicalNames;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::process::Command;
use walkdir::WalkDir;

/// Package-name placeholder every boilerplate carries in its package.json.
pub const PACKAGE_PLACEHOLDER: &str = "appforge-starter";

/// App registration placeholder in a React Native boilerplate's index.js.
pub const APP_PLACEHOLDER: &str = "appforge";

/// Run `react-native init` inside the target directory. The toolchain
/// creates a nested `<UpperCamel>` project holding the ios/ and android/
/// trees; its path is returned for the overlay step.
pub async fn init_native_project(names: &CanonicalNames, target: &Path) -> Result<PathBuf> {
    let status = Command::new("react-native")
        .arg("init")
        .arg(&names.upper_camel)
        .current_dir(target)
        .status()
        .await
        .context("Failed to run react-native init. Is react-native-cli installed?")?;

    if !status.success() {
        anyhow::bail!(
            "react-native init exited with code {}",
            status.code().unwrap_or(-1)
        );
    }

    Ok(target.join(&names.upper_camel))
}

/// Remove the `.git` directory a repository export may ship with.
pub async fn remove_vcs_dir(target: &Path) -> Result<()> {
    let git_dir = target.join(".git");
    if fs_exists(&git_dir).await {
        tokio::fs::remove_dir_all(&git_dir)
            .await
            .with_context(|| format!("Failed to remove {}", git_dir.display()))?;
    }
    Ok(())
}

/// Move the native `ios/` and `android/` trees from the nested project
/// produced by `react-native init` up into the target, then drop the
/// nested project.
pub async fn overlay_native_dirs(nested: &Path, target: &Path) -> Result<()> {
    for dir in ["ios", "android"] {
        let source = nested.join(dir);
        if !fs_exists(&source).await {
            continue;
        }
        let destination = target.join(dir);
        if fs_exists(&destination).await {
            tokio::fs::remove_dir_all(&destination).await?;
        }
        copy_dir_recursive(&source, &destination)?;
    }

    tokio::fs::remove_dir_all(nested)
        .await
        .with_context(|| format!("Failed to remove {}", nested.display()))?;
    Ok(())
}

/// Substitute the boilerplate placeholders with the app's canonical names:
/// the package-descriptor name becomes the dash-case form, and a React
/// Native entry point registers under the UpperCamelCase form.
pub async fn brand_project(target: &Path, names: &CanonicalNames, flavor: &Flavor) -> Result<()> {
    let package_json = target.join("package.json");
    substitute_in_file(&package_json, PACKAGE_PLACEHOLDER, &names.dash)
        .await
        .with_context(|| format!("Failed to brand {}", package_json.display()))?;

    if flavor.framework == Framework::ReactNative {
        let entry = target.join("index.js");
        if fs_exists(&entry).await {
            substitute_in_file(&entry, APP_PLACEHOLDER, &names.upper_camel).await?;
        }
    }

    Ok(())
}

/// Replace every occurrence of `from` with `to` in a text file. Returns
/// whether anything changed.
pub async fn substitute_in_file(path: &Path, from: &str, to: &str) -> Result<bool> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    if !content.contains(from) {
        return Ok(false);
    }

    let replaced = content.replace(from, to);
    tokio::fs::write(path, replaced)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(true)
}

/// Copy a directory tree, preserving relative layout.
fn copy_dir_recursive(source: &Path, destination: &Path) -> Result<()> {
    for entry in WalkDir::new(source) {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .expect("walkdir yields paths under its root");
        let target_path = destination.join(relative);

        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&target_path)
                .with_context(|| format!("Failed to create {}", target_path.display()))?;
        } else {
            if let Some(parent) = target_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::copy(entry.path(), &target_path).with_context(|| {
                format!(
                    "Failed to copy {} to {}",
                    entry.path().display(),
                    target_path.display()
                )
            })?;
        }
    }
    Ok(())
}
