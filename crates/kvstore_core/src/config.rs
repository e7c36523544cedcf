//! File layout configuration.

use std::path::PathBuf;

/// Default external storage root on the device.
pub const DEFAULT_EXTERNAL_ROOT: &str = "/storage/emulated/0";

/// Default name of the folder holding every application's data.
pub const DEFAULT_ODK_FOLDER_NAME: &str = "opendatakit";

/// Configuration for resolving application paths.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory under which the ODK folder lives.
    pub external_root: PathBuf,

    /// Name of the folder holding every application's data.
    pub odk_folder_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            external_root: PathBuf::from(DEFAULT_EXTERNAL_ROOT),
            odk_folder_name: DEFAULT_ODK_FOLDER_NAME.to_string(),
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the external storage root.
    #[must_use]
    pub fn external_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.external_root = root.into();
        self
    }

    /// Sets the ODK folder name.
    #[must_use]
    pub fn odk_folder_name(mut self, name: impl Into<String>) -> Self {
        self.odk_folder_name = name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.external_root, PathBuf::from("/storage/emulated/0"));
        assert_eq!(config.odk_folder_name, "opendatakit");
    }

    #[test]
    fn builder_pattern() {
        let config = Config::new()
            .external_root("/tmp/device")
            .odk_folder_name("odk");

        assert_eq!(config.external_root, PathBuf::from("/tmp/device"));
        assert_eq!(config.odk_folder_name, "odk");
    }
}
