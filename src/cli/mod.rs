//! Command line interface for the deploy packager.
//!
//! Parses arguments, resolves the deploy layout, runs the [`Bundler`] and
//! prints the final summary.

mod args;
mod output;

pub use args::{Args, RuntimeConfig};
pub use output::{Level, OutputManager, write_line};

use crate::{
    bundler::{self, Bundler, DeployConfig, SettingsBuilder},
    error::{CliError, Result},
};

/// Main CLI entry point
///
/// Returns the process exit code. Missing shared assets and an empty run
/// under `--require-package` are reported here and yield `1`; every other
/// failure is returned as an error.
pub async fn run(args: &Args, runtime_config: &RuntimeConfig) -> Result<i32> {
    let output = runtime_config.output();
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    output.success("Starting patch server deploy");

    let config = match &args.config {
        Some(path) => DeployConfig::load(path).await?,
        None => DeployConfig::discover(&args.root).await?,
    };
    let settings = SettingsBuilder::new()
        .release_root(&args.root)
        .config(config)
        .build()?;
    let release_dir = settings.release_dir();
    log::debug!("Release root: {}", settings.release_root().display());

    let artifacts = match Bundler::new(settings, output.clone()).bundle().await {
        Ok(artifacts) => artifacts,
        Err(e @ bundler::Error::MissingAssets(_)) => {
            output.error(&e.to_string());
            return Ok(1);
        }
        Err(e) => return Err(e.into()),
    };

    output.success("Deploy complete!");
    for artifact in &artifacts {
        let name = artifact
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        output.success(&format!("{name}: {}", artifact.path.display()));
        output.info(&format!(
            "  {} files, {} bytes, sha256 {}",
            artifact.entries.len(),
            artifact.size,
            artifact.checksum
        ));
    }
    output.info(&format!("Releases directory: {}", release_dir.display()));

    if artifacts.is_empty() {
        output.warn("No platform package was produced (0 archives)");
        if runtime_config.require_package() {
            return Ok(1);
        }
    }

    Ok(0)
}

/// Parse arguments without executing (for testing)
pub fn parse_args() -> Args {
    Args::parse_args()
}
