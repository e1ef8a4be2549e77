//! Project flavor detection via sentinel marker paths
//!
//! A scaffolded project carries a `.appforge/` directory whose contents
//! classify it: a `react` or `react-native` marker selects the framework,
//! and a `typescript` marker selects the source language. The flavor is
//! detected once per command and threaded through every generation step.

use crate::fsx::fs_exists;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the project marker directory.
pub const MARKER_DIR: &str = ".appforge";

const REACT_MARKER: &str = "react";
const REACT_NATIVE_MARKER: &str = "react-native";
const TYPESCRIPT_MARKER: &str = "typescript";

/// UI framework the project was scaffolded for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Framework {
    React,
    ReactNative,
}

impl Framework {
    pub fn display_name(&self) -> &'static str {
        match self {
            Framework::React => "React",
            Framework::ReactNative => "React Native",
        }
    }

    fn marker(&self) -> &'static str {
        match self {
            Framework::React => REACT_MARKER,
            Framework::ReactNative => REACT_NATIVE_MARKER,
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Source language of the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceLang {
    TypeScript,
    PlainSource,
}

impl SourceLang {
    pub fn display_name(&self) -> &'static str {
        match self {
            SourceLang::TypeScript => "TypeScript",
            SourceLang::PlainSource => "JavaScript",
        }
    }
}

impl fmt::Display for SourceLang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Detection failure for a project directory.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlavorError {
    #[error("not an appforge project (no {MARKER_DIR} directory). Are you in the right directory?")]
    NotAProject,

    #[error(
        "corrupted {MARKER_DIR} markers: neither a react nor a react-native marker is present. \
         Restore the marker files to keep using the generator."
    )]
    MissingFrameworkMarker,
}

/// The detected project flavor: framework x source language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Flavor {
    pub framework: Framework,
    pub lang: SourceLang,
}

impl Flavor {
    pub fn new(framework: Framework, lang: SourceLang) -> Self {
        Self { framework, lang }
    }

    /// Detect the flavor of the project rooted at `root`.
    pub async fn detect(root: &Path) -> Result<Flavor, FlavorError> {
        let markers = root.join(MARKER_DIR);
        if !fs_exists(&markers).await {
            return Err(FlavorError::NotAProject);
        }

        let framework = if fs_exists(markers.join(REACT_MARKER)).await {
            Framework::React
        } else if fs_exists(markers.join(REACT_NATIVE_MARKER)).await {
            Framework::ReactNative
        } else {
            return Err(FlavorError::MissingFrameworkMarker);
        };

        let lang = if fs_exists(markers.join(TYPESCRIPT_MARKER)).await {
            SourceLang::TypeScript
        } else {
            SourceLang::PlainSource
        };

        Ok(Flavor::new(framework, lang))
    }

    /// Source file extension for generated files in this flavor.
    pub fn source_ext(&self) -> &'static str {
        match self.lang {
            SourceLang::TypeScript => "tsx",
            SourceLang::PlainSource => "js",
        }
    }

    /// Marker file paths, relative to the project root, that record this
    /// flavor on disk. Written by the scaffold pipeline.
    pub fn marker_paths(&self) -> Vec<PathBuf> {
        let base = PathBuf::from(MARKER_DIR);
        let mut paths = vec![base.join(self.framework.marker())];
        if self.lang == SourceLang::TypeScript {
            paths.push(base.join(TYPESCRIPT_MARKER));
        }
        paths
    }

    /// Write the marker directory and files into `root`.
    pub async fn write_markers(&self, root: &Path) -> anyhow::Result<()> {
        tokio::fs::create_dir_all(root.join(MARKER_DIR)).await?;
        for rel in self.marker_paths() {
            tokio::fs::write(root.join(rel), b"").await?;
        }
        Ok(())
    }

    pub fn display_name(&self) -> String {
        format!("{} ({})", self.framework, self.lang)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn project_with_markers(markers: &[&str]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join(MARKER_DIR);
        tokio::fs::create_dir_all(&base).await.unwrap();
        for m in markers {
            tokio::fs::write(base.join(m), b"").await.unwrap();
        }
        dir
    }

    #[tokio::test]
    async fn detects_react_typescript() {
        let dir = project_with_markers(&["react", "typescript"]).await;
        let flavor = Flavor::detect(dir.path()).await.unwrap();
        assert_eq!(flavor.framework, Framework::React);
        assert_eq!(flavor.lang, SourceLang::TypeScript);
        assert_eq!(flavor.source_ext(), "tsx");
    }

    #[tokio::test]
    async fn detects_react_native_plain() {
        let dir = project_with_markers(&["react-native"]).await;
        let flavor = Flavor::detect(dir.path()).await.unwrap();
        assert_eq!(flavor.framework, Framework::ReactNative);
        assert_eq!(flavor.lang, SourceLang::PlainSource);
        assert_eq!(flavor.source_ext(), "js");
    }

    #[tokio::test]
    async fn missing_marker_dir_is_not_a_project() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            Flavor::detect(dir.path()).await.unwrap_err(),
            FlavorError::NotAProject
        );
    }

    #[tokio::test]
    async fn marker_dir_without_framework_is_corrupted() {
        let dir = project_with_markers(&["typescript"]).await;
        assert_eq!(
            Flavor::detect(dir.path()).await.unwrap_err(),
            FlavorError::MissingFrameworkMarker
        );
    }

    #[tokio::test]
    async fn write_markers_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let flavor = Flavor::new(Framework::ReactNative, SourceLang::TypeScript);
        flavor.write_markers(dir.path()).await.unwrap();

        let detected = Flavor::detect(dir.path()).await.unwrap();
        assert_eq!(detected, flavor);
    }
}
