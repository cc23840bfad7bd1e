//! # Configuration
//!
//! Optional TOML file with defaults for the CLI.
//!
//! Lookup order:
//! 1. `--config <PATH>` (must exist)
//! 2. `meetup.toml` in the working directory, if present
//! 3. Built-in defaults
//!
//! ```toml
//! [roster]
//! format = "json"
//! rounds = 1
//!
//! [morse]
//! input = "lorem.txt"
//! output = "lorem_morse.txt"
//! ```
//!
//! Command-line flags always win over the file.

use meetup_core::MeetupError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "meetup.toml";

/// Maximum config file size (1 MB).
const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;

// =============================================================================
// CONFIG STRUCTURE
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MeetupConfig {
    pub roster: RosterConfig,
    pub morse: MorseConfig,
}

/// Defaults for `meet` and `summary`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RosterConfig {
    /// Roster file format: "json" or "text".
    pub format: String,
    /// Number of rounds `meet` runs.
    pub rounds: usize,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            format: "json".to_string(),
            rounds: 1,
        }
    }
}

/// Defaults for `morse`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MorseConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Default for MorseConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("lorem.txt"),
            output: PathBuf::from("lorem_morse.txt"),
        }
    }
}

// =============================================================================
// LOADING
// =============================================================================

impl MeetupConfig {
    /// Parse a config from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, MeetupError> {
        toml::from_str(text).map_err(|e| MeetupError::ConfigError(e.to_string()))
    }

    /// Load the config following the lookup order above.
    pub fn load(explicit: Option<&Path>) -> Result<Self, MeetupError> {
        Self::load_in(explicit, Path::new("."))
    }

    /// Same as [`MeetupConfig::load`], looking for `meetup.toml` in `dir`.
    pub fn load_in(explicit: Option<&Path>, dir: &Path) -> Result<Self, MeetupError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let fallback = dir.join(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::from_file(&fallback)
                } else {
                    tracing::debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self, MeetupError> {
        let metadata = std::fs::metadata(path).map_err(|e| {
            MeetupError::ConfigError(format!("Cannot read config '{}': {}", path.display(), e))
        })?;

        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(MeetupError::ConfigError(format!(
                "Config '{}' is {} bytes, maximum is {}",
                path.display(),
                metadata.len(),
                MAX_CONFIG_FILE_SIZE
            )));
        }

        let text = std::fs::read_to_string(path).map_err(|e| {
            MeetupError::ConfigError(format!("Cannot read config '{}': {}", path.display(), e))
        })?;

        tracing::info!("Loaded config from {:?}", path);
        Self::from_toml(&text)
    }
}
