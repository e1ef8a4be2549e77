//! Boilerplate fetching from remote URLs or local paths
//!
//! The index and the archives it points at can live on a remote host or on
//! the local filesystem (development mode). Archives are zip files; remote
//! repositories export them with a single top-level directory, which is
//! stripped on unpack so the project lands directly in the target directory.

use super::index::{BoilerplateIndex, BoilerplateSpec, INDEX_URL_ENV};
use anyhow::{Context, Result};
use std::io::{Cursor, Read};
use std::path::Path;
use url::Url;
use zip::ZipArchive;

/// Fetches index documents and boilerplate archives.
pub struct BoilerplateFetcher {
    client: reqwest::Client,
}

impl BoilerplateFetcher {
    pub fn new(user_agent: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(user_agent)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    /// Load the boilerplate index.
    ///
    /// Precedence: explicit local file, then the `APPFORGE_INDEX_URL`
    /// environment variable (remote YAML), then the built-in index.
    pub async fn load_index(&self, local_index: Option<&Path>) -> Result<BoilerplateIndex> {
        if let Some(path) = local_index {
            let content = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read index {}", path.display()))?;
            return serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse index {}", path.display()));
        }

        if let Ok(url_str) = std::env::var(INDEX_URL_ENV) {
            let url = Url::parse(&url_str)
                .with_context(|| format!("Invalid {INDEX_URL_ENV}: {url_str}"))?;
            let response = self
                .client
                .get(url.clone())
                .send()
                .await
                .with_context(|| format!("Failed to fetch boilerplate index from {url}"))?;

            if !response.status().is_success() {
                anyhow::bail!(
                    "Failed to fetch boilerplate index from {}: HTTP {}",
                    url,
                    response.status()
                );
            }

            let content = response.text().await?;
            return serde_yaml::from_str(&content).context("Failed to parse boilerplate index");
        }

        Ok(BoilerplateIndex::builtin())
    }

    /// Fetch a boilerplate's zip archive as bytes. `archive` values that do
    /// not parse as http(s) URLs are read from the local filesystem.
    pub async fn fetch_archive(&self, spec: &BoilerplateSpec) -> Result<Vec<u8>> {
        match Url::parse(&spec.archive) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {
                let response = self
                    .client
                    .get(url.clone())
                    .send()
                    .await
                    .with_context(|| format!("Failed to fetch boilerplate '{}'", spec.name))?;

                if !response.status().is_success() {
                    anyhow::bail!(
                        "Failed to fetch boilerplate '{}' from {}: HTTP {}",
                        spec.name,
                        url,
                        response.status()
                    );
                }

                Ok(response.bytes().await?.to_vec())
            }
            _ => tokio::fs::read(&spec.archive)
                .await
                .with_context(|| format!("Failed to read archive {}", spec.archive)),
        }
    }
}

/// Unpack a zip archive into `target_dir`, stripping the single top-level
/// directory repository exports carry. Returns the number of files written.
pub fn unpack_archive(zip_bytes: &[u8], target_dir: &Path) -> Result<usize> {
    let cursor = Cursor::new(zip_bytes);
    let mut archive = ZipArchive::new(cursor).context("Failed to read boilerplate archive")?;

    let prefix = shared_prefix(&mut archive)?;
    let mut written = 0;

    for i in 0..archive.len() {
        let mut file = archive.by_index(i)?;
        if file.is_dir() {
            continue;
        }

        // Reject entries escaping the target directory
        let Some(enclosed) = file.enclosed_name() else {
            continue;
        };

        let relative = match &prefix {
            Some(p) => match enclosed.strip_prefix(p) {
                Ok(stripped) => stripped.to_path_buf(),
                Err(_) => enclosed,
            },
            None => enclosed,
        };

        if relative.as_os_str().is_empty() {
            continue;
        }

        let target_path = target_dir.join(&relative);
        if let Some(parent) = target_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let mut contents = Vec::new();
        file.read_to_end(&mut contents)?;
        std::fs::write(&target_path, &contents)
            .with_context(|| format!("Failed to write file: {}", target_path.display()))?;
        written += 1;
    }

    Ok(written)
}

/// Top-level directory shared by every entry in the archive, if any.
fn shared_prefix(archive: &mut ZipArchive<Cursor<&[u8]>>) -> Result<Option<String>> {
    let mut prefix: Option<String> = None;

    for i in 0..archive.len() {
        let file = archive.by_index(i)?;
        let name = file.name();
        let Some((first, rest)) = name.split_once('/') else {
            // A top-level file means there is no shared directory
            return Ok(None);
        };
        // Directory entry for the prefix itself
        if rest.is_empty() && prefix.as_deref().map_or(true, |p| p == first) {
            prefix = Some(first.to_string());
            continue;
        }
        match &prefix {
            Some(p) if p == first => {}
            Some(_) => return Ok(None),
            None => prefix = Some(first.to_string()),
        }
    }

    Ok(prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn zip_of(entries: &[(&str, &str)]) -> Vec<u8> {
        let mut buffer = Vec::new();
        {
            let mut zip = ZipWriter::new(Cursor::new(&mut buffer));
            let options =
                SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
            for (name, content) in entries {
                zip.start_file(*name, options).unwrap();
                zip.write_all(content.as_bytes()).unwrap();
            }
            zip.finish().unwrap();
        }
        buffer
    }

    #[test]
    fn unpack_strips_shared_top_level_directory() {
        let bytes = zip_of(&[
            ("starter-main/package.json", "{}"),
            ("starter-main/src/index.js", "// entry"),
        ]);
        let dir = tempfile::tempdir().unwrap();

        let written = unpack_archive(&bytes, dir.path()).unwrap();
        assert_eq!(written, 2);
        assert!(dir.path().join("package.json").exists());
        assert!(dir.path().join("src/index.js").exists());
        assert!(!dir.path().join("starter-main").exists());
    }

    #[test]
    fn unpack_keeps_layout_without_shared_prefix() {
        let bytes = zip_of(&[("package.json", "{}"), ("src/index.js", "// entry")]);
        let dir = tempfile::tempdir().unwrap();

        let written = unpack_archive(&bytes, dir.path()).unwrap();
        assert_eq!(written, 2);
        assert!(dir.path().join("package.json").exists());
        assert!(dir.path().join("src/index.js").exists());
    }

    #[test]
    fn unpack_preserves_file_contents() {
        let bytes = zip_of(&[("repo/readme.md", "hello appforge")]);
        let dir = tempfile::tempdir().unwrap();

        unpack_archive(&bytes, dir.path()).unwrap();
        let content = std::fs::read_to_string(dir.path().join("readme.md")).unwrap();
        assert_eq!(content, "hello appforge");
    }
}
