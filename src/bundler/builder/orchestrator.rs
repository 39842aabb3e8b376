//! Deploy run orchestration.
//!
//! This module provides the [`Bundler`] orchestrator that runs validation and
//! then every configured platform package in order.

use super::validation::validate_inputs;
use crate::{
    bundler::{BundledArtifact, Result, Settings, platform, utils::fs},
    cli::OutputManager,
};

/// Main bundler orchestrator.
///
/// Runs `validate → ensure output dir → build each platform`. A platform
/// whose executable is missing is skipped; any other failure stops the run.
///
/// # Examples
///
/// ```no_run
/// use patchserver_deploy::bundler::{Bundler, SettingsBuilder};
/// use patchserver_deploy::cli::OutputManager;
///
/// # async fn example() -> patchserver_deploy::bundler::Result<()> {
/// let settings = SettingsBuilder::new().release_root(".").build()?;
/// let bundler = Bundler::new(settings, OutputManager::new(true, false));
///
/// for artifact in bundler.bundle().await? {
///     println!("{}: {}", artifact.platform, artifact.path.display());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Bundler {
    settings: Settings,
    output: OutputManager,
}

impl Bundler {
    /// Creates a new bundler with the given settings.
    pub fn new(settings: Settings, output: OutputManager) -> Self {
        Self { settings, output }
    }

    /// Checks that every shared asset is present.
    ///
    /// Creates nothing; a failure names all missing assets.
    pub async fn validate(&self) -> Result<()> {
        validate_inputs(&self.settings).await?;
        self.output.success("All common files present");
        Ok(())
    }

    /// Validates inputs, then builds every configured platform package.
    ///
    /// The releases directory is created if absent but never cleaned.
    ///
    /// # Returns
    ///
    /// One [`BundledArtifact`] per platform whose executable was found, in
    /// configuration order. Empty when no executable was found.
    pub async fn bundle(&self) -> Result<Vec<BundledArtifact>> {
        self.validate().await?;

        fs::create_dir_all(&self.settings.release_dir(), false).await?;

        let mut artifacts = Vec::new();
        for target in self.settings.platforms() {
            if let Some(artifact) =
                platform::bundle_project(&self.settings, target, &self.output).await?
            {
                artifacts.push(artifact);
            }
        }

        Ok(artifacts)
    }

    /// Returns a reference to the bundler settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
