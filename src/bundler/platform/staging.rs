//! Staging directory preparation.

use crate::{
    bundler::{Result, Settings, error::ErrorExt, utils::fs},
    cli::OutputManager,
};
use std::path::Path;

/// Recreates `path` as an empty directory.
///
/// Anything left from a previous run is removed first, so the staging tree
/// only ever holds what this run copies into it.
pub async fn prepare_staging_dir(path: &Path, output: &OutputManager) -> Result<()> {
    if tokio::fs::try_exists(path)
        .await
        .fs_context("probing staging directory", path)?
    {
        output.info(&format!("Cleaning directory: {}", path.display()));
    }
    fs::create_dir_all(path, true).await?;
    output.success(&format!("Created directory: {}", path.display()));
    Ok(())
}

/// Copies every shared asset into the staging directory.
///
/// Directories merge into any existing subtree; files land in the staging
/// root with their permissions and modification time.
pub async fn populate_common(
    settings: &Settings,
    staging: &Path,
    output: &OutputManager,
) -> Result<()> {
    output.info("Copying common files...");
    for name in settings.required_assets() {
        let src = settings.asset_path(name);
        let dst = staging.join(name);
        let metadata = tokio::fs::metadata(&src)
            .await
            .fs_context("reading metadata of", &src)?;

        if metadata.is_dir() {
            log::debug!("Copying directory {} -> {}", src.display(), dst.display());
            fs::copy_dir(&src, &dst).await?;
        } else {
            log::debug!("Copying file {} -> {}", src.display(), dst.display());
            fs::copy_file(&src, &dst).await?;
        }
    }
    output.success("Common files copied");
    Ok(())
}
