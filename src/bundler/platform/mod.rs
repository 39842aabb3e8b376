//! Platform package creation.
//!
//! Every platform goes through the same steps; only the [`PlatformTarget`]
//! differs.
//!
//! # Module Organization
//!
//! - `staging` - Staging directory reset and shared asset copy
//! - `archive` - ZIP writing from a staging tree

mod archive;
mod staging;

pub use archive::write_zip;
pub use staging::{populate_common, prepare_staging_dir};

use crate::{
    bundler::{
        BundledArtifact, PlatformTarget, Result, Settings,
        builder::calculate_sha256,
        error::ErrorExt,
        utils::fs,
    },
    cli::OutputManager,
};

/// Bundle one platform package.
///
/// # Process
///
/// 1. Look up the platform executable; skip the platform if it is absent
/// 2. Grant execute permission if the target requires it
/// 3. Recreate the staging directory and copy shared assets into it
/// 4. Copy the executable under its install name
/// 5. Write the ZIP archive and record its size and checksum
///
/// # Returns
///
/// `None` when the executable was not found, otherwise the created artifact.
pub async fn bundle_project(
    settings: &Settings,
    target: &PlatformTarget,
    output: &OutputManager,
) -> Result<Option<BundledArtifact>> {
    let executable = settings.executable_path(target);
    if !tokio::fs::try_exists(&executable)
        .await
        .fs_context("probing executable", &executable)?
    {
        output.warn(&format!(
            "{} ({}) not found, skipping {} build",
            target.executable, target.name, target.name
        ));
        return Ok(None);
    }

    log::info!("Building {} package from {}", target.name, executable.display());

    if target.make_executable && fs::ensure_executable(&executable).await? {
        output.info(&format!("Made {} executable", target.executable));
    }

    let staging = settings.staging_dir(target);
    prepare_staging_dir(&staging, output).await?;
    populate_common(settings, &staging, output).await?;
    fs::copy_file(&executable, &staging.join(target.install_name())).await?;

    let archive_path = settings.archive_path(target);
    let entries = write_zip(&staging, &archive_path, output).await?;

    let size = tokio::fs::metadata(&archive_path)
        .await
        .fs_context("reading artifact metadata", &archive_path)?
        .len();
    let checksum = calculate_sha256(&archive_path).await?;

    output.success(&format!(
        "ZIP created: {} ({:.1} KB)",
        archive_path.display(),
        size as f64 / 1024.0
    ));

    Ok(Some(BundledArtifact {
        platform: target.name.clone(),
        path: archive_path,
        entries,
        size,
        checksum,
    }))
}
