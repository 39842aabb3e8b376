//! File system utilities for packaging.
//!
//! Provides staging-friendly file operations with automatic directory
//! creation, metadata preservation, and path-annotated errors.

use crate::bundler::error::{Error, ErrorExt, Result};
use std::{
    io,
    path::{Path, PathBuf},
};
use tokio::fs;

/// Creates all of the directories of the specified path, erasing it first if specified.
pub async fn create_dir_all(path: &Path, erase: bool) -> Result<()> {
    if erase {
        // Try removal, ignore NotFound (idempotent)
        match fs::remove_dir_all(path).await {
            Ok(()) => log::debug!("Removed {}", path.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e).fs_context("removing directory", path),
        }
    }

    // create_dir_all is already idempotent - succeeds even if dir exists
    fs::create_dir_all(path)
        .await
        .fs_context("creating directory", path)
}

/// Copies a regular file, preserving permissions and modification time.
///
/// Creates parent directories of the destination as needed and overwrites an
/// existing destination file. Fails if the source is not a file.
pub async fn copy_file(from: &Path, to: &Path) -> Result<()> {
    let metadata = fs::metadata(from)
        .await
        .fs_context("reading metadata of", from)?;
    if !metadata.is_file() {
        return Err(Error::GenericError(format!(
            "{} is not a file",
            from.display()
        )));
    }

    let (from, to) = (from.to_path_buf(), to.to_path_buf());
    blocking(move || {
        if let Some(dest_dir) = to.parent() {
            std::fs::create_dir_all(dest_dir).fs_context("creating directory", dest_dir)?;
        }
        copy_with_metadata(&from, &to)
    })
    .await
}

/// Recursively copies a directory into `to`, merging with existing content.
///
/// Files already present at the destination are overwritten; other existing
/// entries are left alone. Symlinks are followed and their targets copied.
pub async fn copy_dir(from: &Path, to: &Path) -> Result<()> {
    if !fs::metadata(from)
        .await
        .fs_context("reading metadata of", from)?
        .is_dir()
    {
        return Err(Error::GenericError(format!(
            "{} is not a directory",
            from.display()
        )));
    }

    let (from, to) = (from.to_path_buf(), to.to_path_buf());
    blocking(move || {
        for entry in walkdir::WalkDir::new(&from).follow_links(true) {
            let entry = entry?;
            let rel_path = entry.path().strip_prefix(&from)?;
            let dest_path = to.join(rel_path);

            if entry.file_type().is_dir() {
                std::fs::create_dir_all(&dest_path)
                    .fs_context("creating directory", &dest_path)?;
            } else {
                copy_with_metadata(entry.path(), &dest_path)?;
            }
        }
        Ok(())
    })
    .await
}

/// Makes `path` executable if it is not already.
///
/// Returns `true` when the permissions were changed. A no-op on non-Unix hosts.
#[cfg(unix)]
pub async fn ensure_executable(path: &Path) -> Result<bool> {
    use std::os::unix::fs::PermissionsExt;

    let mode = fs::metadata(path)
        .await
        .fs_context("reading metadata of", path)?
        .permissions()
        .mode();
    if mode & 0o111 != 0 {
        return Ok(false);
    }

    fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
        .await
        .fs_context("setting execute permission on", path)?;
    Ok(true)
}

/// Makes `path` executable if it is not already.
///
/// Returns `true` when the permissions were changed. A no-op on non-Unix hosts.
#[cfg(not(unix))]
pub async fn ensure_executable(_path: &Path) -> Result<bool> {
    Ok(false)
}

/// Runs blocking filesystem work on the blocking pool and awaits it.
pub(crate) async fn blocking<T, F>(work: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| Error::GenericError(format!("filesystem task panicked: {e}")))?
}

/// `std::fs::copy` plus the modification time, which `copy` does not carry.
fn copy_with_metadata(from: &Path, to: &Path) -> Result<()> {
    std::fs::copy(from, to).fs_context("copying file to", to)?;

    let modified = std::fs::metadata(from)
        .and_then(|m| m.modified())
        .fs_context("reading modification time of", from)?;
    // Content and mode are already in place; a lost mtime is not fatal.
    if let Err(e) = std::fs::File::open(to).and_then(|dest| dest.set_modified(modified)) {
        log::debug!("Could not preserve mtime on {}: {e}", to.display());
    }
    Ok(())
}

/// Lists every regular file below `root`, sorted by path.
pub fn walk_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in walkdir::WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}
