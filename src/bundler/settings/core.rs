//! Core Settings struct and path resolution.

use super::{DeployConfig, PlatformTarget};
use std::path::{Path, PathBuf};

/// Main settings for a deploy run.
///
/// Binds a [`DeployConfig`] to an absolute release root, and resolves every
/// input and output path the packager touches. Constructed via
/// [`SettingsBuilder`](super::SettingsBuilder).
///
/// # Examples
///
/// ```no_run
/// use patchserver_deploy::bundler::SettingsBuilder;
///
/// # fn example() -> patchserver_deploy::bundler::Result<()> {
/// let settings = SettingsBuilder::new().release_root(".").build()?;
/// println!("archives go to {}", settings.release_dir().display());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Settings {
    /// Absolute release root.
    release_root: PathBuf,

    /// Deploy layout.
    config: DeployConfig,
}

impl Settings {
    /// Returns the release root.
    pub fn release_root(&self) -> &Path {
        &self.release_root
    }

    /// Returns the deploy layout.
    pub fn config(&self) -> &DeployConfig {
        &self.config
    }

    /// Returns the platform targets in build order.
    pub fn platforms(&self) -> &[PlatformTarget] {
        &self.config.platforms
    }

    /// Returns the shared assets every package contains.
    pub fn required_assets(&self) -> &[String] {
        &self.config.required
    }

    /// Returns the path of a shared asset under the release root.
    pub fn asset_path(&self, name: &str) -> PathBuf {
        self.release_root.join(name)
    }

    /// Returns the releases output directory.
    pub fn release_dir(&self) -> PathBuf {
        self.release_root.join(&self.config.release_dir)
    }

    /// Returns where a target's executable is expected.
    pub fn executable_path(&self, target: &PlatformTarget) -> PathBuf {
        self.release_root.join(&target.executable)
    }

    /// Returns a target's staging directory.
    ///
    /// This is the directory that gets archived; its last component is the
    /// prefix of every archive entry.
    pub fn staging_dir(&self, target: &PlatformTarget) -> PathBuf {
        self.release_dir()
            .join(&target.staging_dir)
            .join(&self.config.package_dir)
    }

    /// Returns a target's archive path.
    pub fn archive_path(&self, target: &PlatformTarget) -> PathBuf {
        self.release_dir().join(&target.archive)
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    pub(super) fn new(release_root: PathBuf, config: DeployConfig) -> Self {
        Self {
            release_root,
            config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_paths() {
        let settings = Settings::new(PathBuf::from("/srv/mhf"), DeployConfig::default());
        let linux = &settings.platforms()[0];
        let windows = &settings.platforms()[1];

        assert_eq!(settings.release_dir(), Path::new("/srv/mhf/releases"));
        assert_eq!(
            settings.staging_dir(linux),
            Path::new("/srv/mhf/releases/Linux/patchserver")
        );
        assert_eq!(
            settings.staging_dir(windows),
            Path::new("/srv/mhf/releases/Windows/patchserver")
        );
        assert_eq!(
            settings.archive_path(windows),
            Path::new("/srv/mhf/releases/Windows-amd64.zip")
        );
        assert_eq!(
            settings.executable_path(windows),
            Path::new("/srv/mhf/patchserver.exe")
        );
    }
}
