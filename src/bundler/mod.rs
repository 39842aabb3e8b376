//! Platform package bundling.
//!
//! Turns a release root (server executables plus shared assets) into one ZIP
//! archive per platform:
//!
//! ```text
//! releases/
//! ├── Linux/patchserver/…      staging tree, recreated each run
//! ├── Linux-amd64.zip
//! ├── Windows/patchserver/…
//! └── Windows-amd64.zip
//! ```

pub mod builder;
pub mod error;
pub mod platform;
pub mod settings;
pub mod utils;

use std::path::PathBuf;

pub use builder::Bundler;
pub use error::{Error, Result};
pub use settings::{DeployConfig, PlatformTarget, Settings, SettingsBuilder};

/// A platform package written by a deploy run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundledArtifact {
    /// Platform identifier from the target definition.
    pub platform: String,
    /// Archive location.
    pub path: PathBuf,
    /// Archive entry names, in write order.
    pub entries: Vec<String>,
    /// Archive size in bytes.
    pub size: u64,
    /// Hex-encoded SHA-256 of the archive.
    pub checksum: String,
}
