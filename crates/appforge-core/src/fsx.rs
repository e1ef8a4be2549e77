//! Filesystem existence gate
//!
//! Generation and scaffolding commands branch on whether a path is present
//! (sentinel markers, target files about to be written). Callers only ever
//! see a boolean: an unreadable path is reported the same as an absent one,
//! so the check can never fail.

use std::path::Path;

/// Returns true iff a filesystem entry (file or directory) exists at `path`
/// at the moment of the check. I/O errors collapse to `false`.
pub async fn fs_exists(path: impl AsRef<Path>) -> bool {
    tokio::fs::try_exists(path.as_ref()).await.unwrap_or(false)
}
