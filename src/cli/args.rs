//! Command line argument parsing and validation.

use clap::Parser;
use std::path::PathBuf;

/// Patch server release packager
#[derive(Parser, Debug)]
#[command(
    name = "patchserver-deploy",
    version,
    about = "Packages the patch server into per-platform ZIP releases",
    long_about = "Packages the patch server executables and shared assets into ZIP archives.

Reads game/, images/, launcher.json and patch_config.json from the release root,
plus patchserver (Linux) and/or patchserver.exe (Windows). Writes
releases/Linux-amd64.zip and releases/Windows-amd64.zip for each executable found.

The layout can be changed with a deploy.toml in the release root or --config.

Usage:
  patchserver-deploy
  patchserver-deploy --root /srv/mhf-release
  patchserver-deploy --config deploy.toml --require-package"
)]
pub struct Args {
    /// Release root containing the shared assets and executables
    #[arg(
        short = 'r',
        long,
        value_name = "DIR",
        env = "PATCHSERVER_DEPLOY_ROOT",
        default_value = "."
    )]
    pub root: PathBuf,

    /// Deploy configuration file (defaults to <ROOT>/deploy.toml when present)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Exit with status 1 when no platform package was produced
    #[arg(long)]
    pub require_package: bool,

    /// Only print warnings, errors and results
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if !self.root.is_dir() {
            return Err(format!(
                "Release root is not a directory: {}",
                self.root.display()
            ));
        }

        match &self.config {
            Some(config) if !config.is_file() => Err(format!(
                "Configuration file not found: {}",
                config.display()
            )),
            _ => Ok(()),
        }
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for colored terminal output
    output: super::OutputManager,

    /// Whether zero produced packages is a failure
    require_package: bool,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        let output = super::OutputManager::new(
            true, // Always list archive entries
            args.quiet,
        );

        Self {
            output,
            require_package: args.require_package,
        }
    }
}

impl RuntimeConfig {
    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }

    /// Whether a run that produced no package should fail
    pub fn require_package(&self) -> bool {
        self.require_package
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_targets_current_directory() {
        let args = Args::try_parse_from(["patchserver-deploy"]).unwrap();
        assert_eq!(args.root, PathBuf::from("."));
        assert!(args.config.is_none());
        assert!(!args.require_package);
        assert!(!args.quiet);
    }

    #[test]
    fn flags_are_parsed() {
        let args = Args::try_parse_from([
            "patchserver-deploy",
            "--root",
            "/srv/release",
            "--config",
            "deploy.toml",
            "--require-package",
            "-q",
        ])
        .unwrap();
        assert_eq!(args.root, PathBuf::from("/srv/release"));
        assert_eq!(args.config, Some(PathBuf::from("deploy.toml")));
        assert!(args.require_package);
        assert!(args.quiet);
        assert!(RuntimeConfig::from(&args).require_package());
    }

    #[test]
    fn validate_rejects_missing_root() {
        let args = Args::try_parse_from(["patchserver-deploy", "--root", "/nonexistent/release"])
            .unwrap();
        assert!(args.validate().unwrap_err().contains("/nonexistent/release"));
    }

    #[test]
    fn version_flag_prints_package_version() {
        let err = Args::try_parse_from(["patchserver-deploy", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
        assert!(err.to_string().contains(env!("CARGO_PKG_VERSION")));
    }
}
