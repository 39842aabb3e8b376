//! Per-platform package definitions.

use serde::Deserialize;

/// One platform package the deploy run may produce.
///
/// A target is skipped at run time when its executable is absent from the
/// release root.
///
/// # Example
///
/// ```toml
/// [[platforms]]
/// name = "linux"
/// executable = "patchserver"
/// staging_dir = "Linux"
/// archive = "Linux-amd64.zip"
/// make_executable = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlatformTarget {
    /// Platform identifier used in log lines (e.g. "linux").
    pub name: String,

    /// Executable file name, relative to the release root.
    pub executable: String,

    /// Name of the executable inside the package.
    ///
    /// Default: same as `executable`
    #[serde(default)]
    pub install_name: Option<String>,

    /// Directory under the releases directory holding this platform's staging tree.
    pub staging_dir: String,

    /// Archive file name, written to the releases directory.
    pub archive: String,

    /// Whether the executable must carry execute permission before packaging.
    ///
    /// Only has an effect on Unix hosts.
    #[serde(default)]
    pub make_executable: bool,
}

impl PlatformTarget {
    /// Linux amd64 package built from `patchserver`.
    pub fn linux() -> Self {
        Self {
            name: "linux".into(),
            executable: "patchserver".into(),
            install_name: None,
            staging_dir: "Linux".into(),
            archive: "Linux-amd64.zip".into(),
            make_executable: true,
        }
    }

    /// Windows amd64 package built from `patchserver.exe`.
    pub fn windows() -> Self {
        Self {
            name: "windows".into(),
            executable: "patchserver.exe".into(),
            install_name: None,
            staging_dir: "Windows".into(),
            archive: "Windows-amd64.zip".into(),
            make_executable: false,
        }
    }

    /// File name the executable gets inside the staging directory.
    pub fn install_name(&self) -> &str {
        self.install_name.as_deref().unwrap_or(&self.executable)
    }
}
