//! Release root prerequisite checks.

use crate::bundler::{Error, Result, Settings, error::ErrorExt};

/// Checks that every required shared asset exists under the release root.
///
/// Read-only. All assets are checked before failing, so the error names
/// every missing item at once.
pub async fn validate_inputs(settings: &Settings) -> Result<()> {
    let mut missing = Vec::new();

    for name in settings.required_assets() {
        let path = settings.asset_path(name);
        let exists = tokio::fs::try_exists(&path)
            .await
            .fs_context("checking required asset", &path)?;
        if !exists {
            log::debug!("Required asset missing: {}", path.display());
            missing.push(name.clone());
        }
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::MissingAssets(missing))
    }
}
