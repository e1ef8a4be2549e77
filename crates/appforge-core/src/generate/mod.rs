//! Source file generation inside a scaffolded project
//!
//! Every generation command follows the same shape: detect the project
//! flavor once, derive the canonical name forms, gate on the target not
//! existing yet, render the embedded blueprint, write the file(s).

pub mod blueprint;

use crate::flavor::Flavor;
use crate::fsx::fs_exists;
use crate::name::CanonicalNames;
use crate::outcome::CommandOutcome;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// The kinds of source files the generator can add to a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Screen,
    Shared,
    Model,
    Store,
    Api,
}

impl ComponentKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            ComponentKind::Screen => "screen",
            ComponentKind::Shared => "shared component",
            ComponentKind::Model => "model",
            ComponentKind::Store => "store",
            ComponentKind::Api => "api",
        }
    }

    /// Directory the generated file lands in, relative to the project root.
    fn target_dir(&self) -> &'static str {
        match self {
            ComponentKind::Screen => "src/components/screen",
            ComponentKind::Shared => "src/components/shared",
            ComponentKind::Model => "src/models",
            ComponentKind::Store => "src/stores",
            ComponentKind::Api => "src/apis",
        }
    }

    /// Screens and shared components use the UpperCamelCase file name;
    /// stores and api stubs use the camelCase identifier form.
    fn file_stem<'a>(&self, names: &'a CanonicalNames) -> &'a str {
        match self {
            ComponentKind::Screen | ComponentKind::Shared | ComponentKind::Model => {
                &names.upper_camel
            }
            ComponentKind::Store | ComponentKind::Api => &names.camel,
        }
    }

    fn has_test(&self) -> bool {
        matches!(self, ComponentKind::Screen | ComponentKind::Shared)
    }
}

/// Paths written by one generation command, relative to the project root.
#[derive(Debug, Clone)]
pub struct GeneratedFiles {
    pub source: PathBuf,
    pub test: Option<PathBuf>,
}

/// Generate a component of `kind` named after `raw_name` in the project at
/// `root`.
pub async fn generate(root: &Path, kind: ComponentKind, raw_name: &str) -> Result<CommandOutcome> {
    let flavor = match Flavor::detect(root).await {
        Ok(flavor) => flavor,
        Err(e) => return Ok(CommandOutcome::failure(e.to_string())),
    };

    let names = CanonicalNames::derive(raw_name);
    if names.upper_camel.is_empty() {
        return Ok(CommandOutcome::failure(format!(
            "'{}' does not contain any usable identifier characters.",
            raw_name
        )));
    }

    let ext = flavor.source_ext();
    let stem = kind.file_stem(&names);
    let source_rel = PathBuf::from(kind.target_dir()).join(format!("{stem}.{ext}"));
    let source_path = root.join(&source_rel);

    if fs_exists(&source_path).await {
        return Ok(CommandOutcome::failure(format!(
            "{} {} already exists. Delete or rename the existing file first.",
            stem,
            kind.display_name()
        )));
    }

    let blueprint = blueprint::for_kind(kind, &flavor);

    let files = write_files(root, &source_rel, kind, &blueprint, &names, ext).await?;

    let mut message = format!("generated: {}", files.source.display());
    if let Some(test) = &files.test {
        message.push_str(&format!("\ntestFile: {}", test.display()));
    }
    Ok(CommandOutcome::success_with(message))
}

async fn write_files(
    root: &Path,
    source_rel: &Path,
    kind: ComponentKind,
    blueprint: &blueprint::Blueprint,
    names: &CanonicalNames,
    ext: &str,
) -> Result<GeneratedFiles> {
    let source_path = root.join(source_rel);
    if let Some(parent) = source_path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    tokio::fs::write(&source_path, blueprint.render_source(&names.upper_camel))
        .await
        .with_context(|| format!("Failed to write {}", source_path.display()))?;

    let mut test_rel = None;
    if kind.has_test() {
        if let Some(rendered) = blueprint.render_test(&names.upper_camel) {
            let rel = PathBuf::from(kind.target_dir())
                .join("__tests__")
                .join(format!("{}.test.{ext}", names.upper_camel));
            let test_path = root.join(&rel);
            if let Some(parent) = test_path.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(&test_path, rendered)
                .await
                .with_context(|| format!("Failed to write {}", test_path.display()))?;
            test_rel = Some(rel);
        }
    }

    Ok(GeneratedFiles {
        source: source_rel.to_path_buf(),
        test: test_rel,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flavor::{Framework, SourceLang};

    async fn typescript_react_project() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        Flavor::new(Framework::React, SourceLang::TypeScript)
            .write_markers(dir.path())
            .await
            .unwrap();
        dir
    }

    #[tokio::test]
    async fn generates_a_screen_with_its_test() {
        let dir = typescript_react_project().await;

        let outcome = generate(dir.path(), ComponentKind::Screen, "user-profile")
            .await
            .unwrap();
        assert!(outcome.is_success());

        let source = dir.path().join("src/components/screen/UserProfile.tsx");
        let test = dir
            .path()
            .join("src/components/screen/__tests__/UserProfile.test.tsx");
        assert!(source.exists());
        assert!(test.exists());

        let content = tokio::fs::read_to_string(&source).await.unwrap();
        assert!(content.contains("function UserProfile()"));
        let test_content = tokio::fs::read_to_string(&test).await.unwrap();
        assert!(test_content.contains("from '../UserProfile'"));
    }

    #[tokio::test]
    async fn refuses_to_overwrite_an_existing_component() {
        let dir = typescript_react_project().await;

        let first = generate(dir.path(), ComponentKind::Screen, "intro")
            .await
            .unwrap();
        assert!(first.is_success());

        let second = generate(dir.path(), ComponentKind::Screen, "intro")
            .await
            .unwrap();
        assert!(!second.is_success());
        assert!(second.message.unwrap().contains("already exists"));
    }

    #[tokio::test]
    async fn stores_and_apis_use_camel_case_file_names() {
        let dir = typescript_react_project().await;

        generate(dir.path(), ComponentKind::Store, "user-session")
            .await
            .unwrap();
        let store = dir.path().join("src/stores/userSession.tsx");
        assert!(store.exists());
        // class inside is still UpperCamelCase
        let content = tokio::fs::read_to_string(&store).await.unwrap();
        assert!(content.contains("class UserSession"));

        generate(dir.path(), ComponentKind::Api, "user-session")
            .await
            .unwrap();
        assert!(dir.path().join("src/apis/userSession.tsx").exists());
    }

    #[tokio::test]
    async fn models_use_upper_camel_file_names() {
        let dir = typescript_react_project().await;

        generate(dir.path(), ComponentKind::Model, "line-item")
            .await
            .unwrap();
        assert!(dir.path().join("src/models/LineItem.tsx").exists());
    }

    #[tokio::test]
    async fn plain_source_projects_get_js_files() {
        let dir = tempfile::tempdir().unwrap();
        Flavor::new(Framework::ReactNative, SourceLang::PlainSource)
            .write_markers(dir.path())
            .await
            .unwrap();

        generate(dir.path(), ComponentKind::Screen, "intro")
            .await
            .unwrap();
        assert!(dir
            .path()
            .join("src/components/screen/Intro.js")
            .exists());
        assert!(dir
            .path()
            .join("src/components/screen/__tests__/Intro.test.js")
            .exists());
    }

    #[tokio::test]
    async fn fails_outside_a_project() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = generate(dir.path(), ComponentKind::Screen, "intro")
            .await
            .unwrap();
        assert!(!outcome.is_success());
        assert!(outcome.message.unwrap().contains("not an appforge project"));
    }

    #[tokio::test]
    async fn rejects_names_with_no_identifier_characters() {
        let dir = typescript_react_project().await;
        let outcome = generate(dir.path(), ComponentKind::Screen, "---")
            .await
            .unwrap();
        assert!(!outcome.is_success());
    }
}
