//! Configuration structures for packaging operations.
//!
//! The deploy layout (required assets, platform targets, output names) lives
//! in [`DeployConfig`]; [`Settings`] binds it to a concrete release root.

mod builder;
mod config;
mod core;
mod target;

pub use builder::SettingsBuilder;
pub use config::{CONFIG_FILE_NAME, DeployConfig};
pub use self::core::Settings;
pub use target::PlatformTarget;
