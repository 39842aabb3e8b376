//! Builder for constructing Settings.

use super::{DeployConfig, Settings};
use crate::bundler::error::{Context, Result};
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Builder for constructing [`Settings`].
///
/// # Examples
///
/// ```no_run
/// use patchserver_deploy::bundler::{DeployConfig, SettingsBuilder};
///
/// # fn example() -> patchserver_deploy::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .release_root("/srv/patchserver")
///     .config(DeployConfig::default())
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    release_root: Option<PathBuf>,
    config: Option<DeployConfig>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the release root.
    ///
    /// Relative paths are resolved against the current directory.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn release_root<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.release_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the deploy layout.
    ///
    /// Default: [`DeployConfig::default`]
    pub fn config(mut self, config: DeployConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `release_root` is missing or cannot be made
    /// absolute, or if the layout fails validation.
    pub fn build(self) -> Result<Settings> {
        let root = self.release_root.context("release_root is required")?;
        let root = root
            .absolutize()
            .context("resolving release root")?
            .into_owned();

        let config = self.config.unwrap_or_default();
        config.validate()?;

        Ok(Settings::new(root, config))
    }
}
