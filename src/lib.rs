//! Release packager for the patch server.
//!
//! This library bundles a pre-built server executable plus shared assets
//! into platform-specific ZIP archives:
//! - Linux (`Linux-amd64.zip` from `patchserver`)
//! - Windows (`Windows-amd64.zip` from `patchserver.exe`)
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;

// Re-export commonly used types
pub use error::{CliError, DeployError, Result};
