//! Picker settings loaded from TOML.
//!
//! Every field is optional in the file; missing fields take their defaults.
//!
//! ```toml
//! default_color = "#0080ff"
//! max_saved = 10
//! long_press_ms = 600
//! store_path = "/home/me/.local/share/colorizer/store.json"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::DEFAULT_COLOR;
use crate::collection::SavePolicy;
use crate::gesture::DEFAULT_LONG_PRESS_MS;
use crate::hex::{Hex, normalize_hex};
use crate::types::ColorError;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Invalid(String),
}

/// Picker settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Color shown when nothing has been used yet.
    pub default_color: String,

    /// Cap on saved colors; unlimited when absent.
    pub max_saved: Option<usize>,

    /// Hold time before a press on a saved color deletes it.
    pub long_press_ms: u64,

    /// Where the file store lives; the CLI picks a data directory when absent.
    pub store_path: Option<PathBuf>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            default_color: DEFAULT_COLOR.to_owned(),
            max_saved: None,
            long_press_ms: DEFAULT_LONG_PRESS_MS,
            store_path: None,
        }
    }
}

impl PickerConfig {
    /// Loads settings from `path`, using defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("no config found at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let config = Self::from_toml_str(&text)?;
        info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parses and validates settings from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the default color is a hex color and the hold time is non-zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_hex().is_err() {
            return Err(ConfigError::Invalid(format!(
                "default_color {:?} is not a hex color",
                self.default_color
            )));
        }
        if self.long_press_ms == 0 {
            return Err(ConfigError::Invalid("long_press_ms must be greater than 0".into()));
        }
        Ok(())
    }

    /// The default color, normalized.
    pub fn default_hex(&self) -> Result<Hex, ColorError> {
        normalize_hex(&self.default_color)
    }

    /// Size policy for the saved palette.
    pub fn save_policy(&self) -> SavePolicy {
        match self.max_saved {
            Some(max_len) => SavePolicy::capped(max_len),
            None => SavePolicy::unlimited(),
        }
    }

    /// Long-press hold threshold.
    pub fn long_press(&self) -> Duration {
        Duration::from_millis(self.long_press_ms)
    }
}
