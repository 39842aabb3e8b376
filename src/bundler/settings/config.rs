//! Deploy layout configuration and its TOML loader.

use super::PlatformTarget;
use crate::{
    bail,
    bundler::{
        Error,
        error::{ErrorExt, Result},
    },
};
use serde::Deserialize;
use std::{
    collections::HashSet,
    path::{Component, Path},
};

/// File looked up in the release root when no configuration path is given.
pub const CONFIG_FILE_NAME: &str = "deploy.toml";

/// Layout of a deploy run.
///
/// Every field has a default matching the patch server release layout, so a
/// configuration file only needs to name what it changes.
///
/// # Configuration
///
/// ```toml
/// release_dir = "releases"
/// package_dir = "patchserver"
/// required = ["game", "images", "launcher.json", "patch_config.json"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeployConfig {
    /// Output directory, relative to the release root.
    pub release_dir: String,

    /// Top-level directory name of every archive.
    ///
    /// Staging trees live at `<release_dir>/<staging_dir>/<package_dir>`.
    pub package_dir: String,

    /// Shared assets that must exist under the release root.
    ///
    /// Directories are copied recursively, files are copied with metadata.
    pub required: Vec<String>,

    /// Platform packages, built in order.
    pub platforms: Vec<PlatformTarget>,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            release_dir: "releases".into(),
            package_dir: "patchserver".into(),
            required: vec![
                "game".into(),
                "images".into(),
                "launcher.json".into(),
                "patch_config.json".into(),
            ],
            platforms: vec![PlatformTarget::linux(), PlatformTarget::windows()],
        }
    }
}

impl DeployConfig {
    /// Parses a configuration from TOML text.
    ///
    /// `origin` is only used in error messages.
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|source| Error::Config {
            path: origin.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration file from disk.
    pub async fn load(path: &Path) -> Result<Self> {
        let text = tokio::fs::read_to_string(path)
            .await
            .fs_context("reading deploy configuration", path)?;
        Self::from_toml_str(&text, path)
    }

    /// Loads `<root>/deploy.toml` if it exists, otherwise returns the defaults.
    pub async fn discover(root: &Path) -> Result<Self> {
        let candidate = root.join(CONFIG_FILE_NAME);
        if tokio::fs::try_exists(&candidate)
            .await
            .fs_context("probing deploy configuration", &candidate)?
        {
            log::debug!("Using deploy configuration {}", candidate.display());
            Self::load(&candidate).await
        } else {
            Ok(Self::default())
        }
    }

    /// Checks that the layout can be packaged without outputs colliding.
    ///
    /// Output names must be plain relative names, and no staging tree or
    /// archive may overlap a required asset or an executable, since staging
    /// trees are deleted at the start of every platform build.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("release_dir", &self.release_dir),
            ("package_dir", &self.package_dir),
        ] {
            if !is_plain_name(value) {
                bail!("{field} must be a single relative name, got {value:?}");
            }
        }
        if self.platforms.is_empty() {
            bail!("at least one platform must be configured");
        }
        for name in &self.required {
            if !is_relative_path(name) {
                bail!("required asset {name:?} must be a relative path without . or ..");
            }
        }

        let release_dir = Path::new(&self.release_dir);
        let mut archives = HashSet::new();
        let mut staging = HashSet::new();
        for target in &self.platforms {
            for (field, value) in [
                ("staging_dir", target.staging_dir.as_str()),
                ("archive", target.archive.as_str()),
                ("install_name", target.install_name()),
            ] {
                if !is_plain_name(value) {
                    bail!(
                        "platform {}: {field} must be a single relative name, got {value:?}",
                        target.name
                    );
                }
            }
            if !is_relative_path(&target.executable) {
                bail!(
                    "platform {}: executable {:?} must be a relative path without . or ..",
                    target.name,
                    target.executable
                );
            }
            if !archives.insert(target.archive.as_str()) {
                bail!("archive {} is configured more than once", target.archive);
            }
            if !staging.insert(target.staging_dir.as_str()) {
                bail!(
                    "staging directory {} is configured more than once",
                    target.staging_dir
                );
            }

            let staging_path = release_dir.join(&target.staging_dir).join(&self.package_dir);
            let archive_path = release_dir.join(&target.archive);
            let inputs = self
                .required
                .iter()
                .map(String::as_str)
                .chain(self.platforms.iter().map(|p| p.executable.as_str()));
            for input in inputs.map(Path::new) {
                let clash = [&staging_path, &archive_path]
                    .into_iter()
                    .find(|output| overlaps(output, input));
                if let Some(output) = clash {
                    bail!(
                        "platform {} writes to {}, which overlaps input {}",
                        target.name,
                        output.display(),
                        input.display()
                    );
                }
            }
        }
        Ok(())
    }
}

/// A single normal path component: no separators, `.`, `..` or roots.
fn is_plain_name(value: &str) -> bool {
    let mut components = Path::new(value).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// One or more normal components, so the path stays below its base.
fn is_relative_path(value: &str) -> bool {
    let path = Path::new(value);
    path.components().next().is_some()
        && path.components().all(|c| matches!(c, Component::Normal(_)))
}

/// Either path contains the other.
fn overlaps(a: &Path, b: &Path) -> bool {
    a.starts_with(b) || b.starts_with(a)
}
