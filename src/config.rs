//! Runtime configuration.
//!
//! Settings that are not part of a mix request: where exports go, which local
//! track library backs catalog sources, and an optional fixed seed.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Runtime configuration for the command line and the RPC server.
///
/// Typically loaded from environment variables at startup and then
/// overridden by command-line flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory for default-named exports.
    /// If None, uses the platform-specific data location.
    pub output_dir: Option<PathBuf>,

    /// JSON track library serving playlist, genre and artist sources.
    /// If None, catalog sources return no tracks.
    pub catalog_path: Option<PathBuf>,

    /// Seed for generative sources. If None, each build draws a random seed.
    pub seed: Option<u64>,
}

impl AppConfig {
    /// Creates a new AppConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an AppConfig from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `AUTOMIX_OUTPUT_DIR` - Directory for exported files
    /// - `AUTOMIX_CATALOG` - Path to a JSON track library
    /// - `AUTOMIX_SEED` - Seed for generative sources
    ///
    /// Falls back to defaults for unset or unparsable variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = std::env::var("AUTOMIX_OUTPUT_DIR") {
            if !path.is_empty() {
                config.output_dir = Some(PathBuf::from(path));
            }
        }

        if let Ok(path) = std::env::var("AUTOMIX_CATALOG") {
            if !path.is_empty() {
                config.catalog_path = Some(PathBuf::from(path));
            }
        }

        if let Ok(seed_str) = std::env::var("AUTOMIX_SEED") {
            if let Ok(seed) = seed_str.trim().parse::<u64>() {
                config.seed = Some(seed);
            }
        }

        config
    }

    /// Returns the effective output directory, using platform defaults if not specified.
    pub fn effective_output_dir(&self) -> PathBuf {
        if let Some(ref path) = self.output_dir {
            path.clone()
        } else {
            default_output_dir()
        }
    }

    /// Validates the configuration.
    ///
    /// Returns an error message if validation fails, None otherwise.
    pub fn validate(&self) -> Option<String> {
        if let Some(ref path) = self.catalog_path {
            if path.as_os_str().is_empty() {
                return Some("catalog path cannot be empty".to_string());
            }
        }

        if let Some(ref path) = self.output_dir {
            if path.as_os_str().is_empty() {
                return Some("output directory cannot be empty".to_string());
            }
        }

        None
    }
}

/// Returns the platform-specific default export directory.
///
/// Uses the `directories` crate to find appropriate locations:
/// - macOS: ~/Library/Application Support/automix/mixes
/// - Linux: ~/.local/share/automix/mixes
/// - Windows: C:\Users\<user>\AppData\Roaming\automix\data\mixes
fn default_output_dir() -> PathBuf {
    if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "automix") {
        proj_dirs.data_dir().join("mixes")
    } else {
        // Fallback to current directory
        PathBuf::from("./mixes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::new();
        assert!(config.output_dir.is_none());
        assert!(config.catalog_path.is_none());
        assert!(config.seed.is_none());
        assert!(config.validate().is_none());
    }

    #[test]
    fn effective_output_dir_prefers_explicit() {
        let config = AppConfig {
            output_dir: Some(PathBuf::from("/tmp/mixes")),
            ..AppConfig::default()
        };
        assert_eq!(config.effective_output_dir(), PathBuf::from("/tmp/mixes"));
    }

    #[test]
    fn default_output_dir_is_valid() {
        let path = AppConfig::new().effective_output_dir();
        assert!(!path.as_os_str().is_empty());
        assert!(path.ends_with("mixes"));
    }

    #[test]
    fn config_validation() {
        let mut config = AppConfig::new();
        config.catalog_path = Some(PathBuf::new());
        assert!(config.validate().is_some());

        config.catalog_path = Some(PathBuf::from("library.json"));
        assert!(config.validate().is_none());
    }
}
