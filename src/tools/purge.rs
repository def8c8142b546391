//! Scoped purging of cache folders.
//!
//! Only direct children of the cache root can be purged. The folder itself
//! stays in place; everything inside it is removed without following
//! symlinks, and every path is checked against the canonical cache root
//! before it is deleted.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use super::CacheTools;
use crate::error::{CacheControlError, Result};

/// Cache folder holding the template render cache.
pub const PAGE_RENDER_CACHE_DIR: &str = "Page";

/// Result of purging a cache folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurgeOutcome {
    /// The folder does not exist; nothing was done.
    Skipped,
    /// The folder was emptied.
    Cleared {
        /// Number of direct entries removed.
        removed: usize,
    },
}

/// Check that `subdirectory` names exactly one child of the root.
fn validate_subdirectory(root: &Path, subdirectory: &str) -> Result<()> {
    let mut components = Path::new(subdirectory).components();
    let single_normal = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    if single_normal && !subdirectory.contains(['/', '\\']) {
        return Ok(());
    }
    Err(CacheControlError::PathEscape {
        path: root.join(subdirectory),
        root: root.to_path_buf(),
    })
}

fn canonicalize(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).map_err(|e| CacheControlError::file_system(path, e))
}

/// Where an entry itself lives, without following it if it is a symlink.
fn entry_location(path: &Path) -> Result<PathBuf> {
    let parent = path.parent().unwrap_or(path);
    let parent = canonicalize(parent)?;
    Ok(match path.file_name() {
        Some(name) => parent.join(name),
        None => parent,
    })
}

fn ensure_within(path: &Path, root: &Path) -> Result<()> {
    if path != root && path.starts_with(root) {
        return Ok(());
    }
    Err(CacheControlError::PathEscape {
        path: path.to_path_buf(),
        root: root.to_path_buf(),
    })
}

/// Remove a single entry, recursing into real directories.
fn remove_entry(path: &Path, root: &Path) -> Result<()> {
    let location = entry_location(path)?;
    ensure_within(&location, root)?;

    let meta = fs::symlink_metadata(&location)
        .map_err(|e| CacheControlError::file_system(&location, e))?;

    if meta.is_dir() {
        for child in fs::read_dir(&location).map_err(|e| CacheControlError::file_system(&location, e))? {
            let child = child.map_err(|e| CacheControlError::file_system(&location, e))?;
            remove_entry(&child.path(), root)?;
        }
        fs::remove_dir(&location).map_err(|e| CacheControlError::file_system(&location, e))
    } else {
        fs::remove_file(&location).map_err(|e| CacheControlError::file_system(&location, e))
    }
}

/// Remove everything inside `root/subdirectory`, keeping the folder itself.
///
/// A missing folder, or a dangling symlink in its place, is not an error.
/// Paths that resolve outside `root` abort with
/// [`CacheControlError::PathEscape`]; filesystem errors abort with whatever
/// was already deleted staying deleted.
pub fn purge_directory(root: &Path, subdirectory: &str) -> Result<PurgeOutcome> {
    validate_subdirectory(root, subdirectory)?;

    let target = root.join(subdirectory);
    match fs::symlink_metadata(&target) {
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(PurgeOutcome::Skipped),
        Err(e) => return Err(CacheControlError::file_system(&target, e)),
    }

    let root = canonicalize(root)?;
    let target = match fs::canonicalize(&target) {
        Ok(path) => path,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("{} is a dangling symlink, nothing to purge", target.display());
            return Ok(PurgeOutcome::Skipped);
        }
        Err(e) => return Err(CacheControlError::file_system(&target, e)),
    };
    ensure_within(&target, &root)?;

    if !target.is_dir() {
        return Err(CacheControlError::file_system(
            &target,
            io::Error::new(io::ErrorKind::InvalidInput, "not a directory"),
        ));
    }

    let mut removed = 0;
    for entry in fs::read_dir(&target).map_err(|e| CacheControlError::file_system(&target, e))? {
        let entry = entry.map_err(|e| CacheControlError::file_system(&target, e))?;
        remove_entry(&entry.path(), &root)?;
        removed += 1;
    }

    Ok(PurgeOutcome::Cleared { removed })
}

/// List writable folders directly under the cache root, sorted by name.
///
/// Symlinks are followed, so a link to a folder is listed under the link's
/// name. Files, dangling links and read-only folders are left out. A
/// missing root yields an empty list.
pub fn list_cache_directories(root: &Path) -> Result<Vec<String>> {
    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(CacheControlError::file_system(root, e)),
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| CacheControlError::file_system(root, e))?;
        let path = entry.path();
        let meta = match fs::metadata(&path) {
            Ok(meta) => meta,
            Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
            Err(e) => return Err(CacheControlError::file_system(path, e)),
        };
        if !meta.is_dir() || meta.permissions().readonly() {
            continue;
        }
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

impl CacheTools<'_> {
    /// Purge a folder under the cache root and log the result.
    pub fn purge_directory(&self, subdirectory: &str) -> Result<PurgeOutcome> {
        let outcome = purge_directory(self.cache_root, subdirectory)?;
        match outcome {
            PurgeOutcome::Skipped => {
                self.note(format!(
                    "Skipped cache folder `{}` (does not exist)",
                    subdirectory
                ))?;
            }
            PurgeOutcome::Cleared { removed } => {
                tracing::debug!("removed {} entries from {}", removed, subdirectory);
                if subdirectory == PAGE_RENDER_CACHE_DIR {
                    self.note("Cleared the template render cache")?;
                } else {
                    self.note(format!("Removed files from cache folder `{}`", subdirectory))?;
                }
            }
        }
        Ok(outcome)
    }

    /// List writable folders under the cache root.
    pub fn cache_directories(&self) -> Result<Vec<String>> {
        list_cache_directories(self.cache_root)
    }
}
