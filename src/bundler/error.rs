//! Error types for packaging operations.
//!
//! Filesystem failures carry the path and the step that failed, so the
//! top-level handler can print a single actionable line.

use std::{
    fmt::Display,
    io,
    path::{Path, PathBuf},
};
use thiserror::Error as DeriveError;

/// Result type alias for packaging operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while validating inputs and building platform packages.
#[derive(Debug, DeriveError)]
#[non_exhaustive]
pub enum Error {
    /// Required shared assets are absent from the release root.
    #[error("missing required files: {}", .0.join(", "))]
    MissingAssets(Vec<String>),

    /// Filesystem operation failed on a known path.
    #[error("{context} {}: {source}", path.display())]
    Fs {
        /// Step that was being performed
        context: &'static str,
        /// Path the step operated on
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Deploy configuration could not be parsed.
    #[error("invalid deploy configuration {}: {source}", path.display())]
    Config {
        /// Configuration file path
        path: PathBuf,
        /// Parser error
        source: toml::de::Error,
    },

    /// IO errors without path context
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// Directory traversal errors
    #[error("directory walk failed: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// Path relativization errors
    #[error("path prefix error: {0}")]
    StripPrefix(#[from] std::path::StripPrefixError),

    /// Archive writer errors
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Everything else
    #[error("{0}")]
    GenericError(String),
}

/// Attaches path context to I/O results.
pub trait ErrorExt<T> {
    /// Wraps an I/O error with the step being performed and the path involved.
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|source| Error::Fs {
            context,
            path: path.as_ref().to_path_buf(),
            source,
        })
    }
}

/// Converts options and foreign errors into [`Error::GenericError`] with a message.
pub trait Context<T> {
    /// Adds a message describing what was expected.
    fn context<C: Display>(self, context: C) -> Result<T>;
}

impl<T> Context<T> for Option<T> {
    fn context<C: Display>(self, context: C) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(context.to_string()))
    }
}

impl<T, E: std::error::Error> Context<T> for std::result::Result<T, E> {
    fn context<C: Display>(self, context: C) -> Result<T> {
        self.map_err(|e| Error::GenericError(format!("{context}: {e}")))
    }
}

/// Returns early with an [`Error::GenericError`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::bundler::Error::GenericError(format!($msg)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::bundler::Error::GenericError(format!($fmt, $($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_assets_lists_every_item() {
        let err = Error::MissingAssets(vec!["game".into(), "launcher.json".into()]);
        assert_eq!(err.to_string(), "missing required files: game, launcher.json");
    }

    #[test]
    fn fs_context_keeps_path() {
        let res: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        let err = res.fs_context("copying", "/tmp/x").unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("copying /tmp/x"), "{msg}");
        assert!(msg.contains("denied"));
    }

    #[test]
    fn option_context_becomes_generic_error() {
        let value: Option<u8> = None;
        let err = value.context("no parent directory").unwrap_err();
        assert!(matches!(err, Error::GenericError(ref m) if m == "no parent directory"));
    }
}
