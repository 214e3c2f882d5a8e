//! Strategy config loading.
//!
//! The config is a small JSON sidecar file:
//!
//! ```json
//! { "strategy": "minor" }
//! ```

use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use tracing::{debug, warn};

use crate::error::ConfigError;
use crate::version::Strategy;

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "version-config.json";

/// Bump configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(deserialize_with = "lenient_strategy")]
    pub strategy: Strategy,
}

/// Accept any JSON value for `strategy`; anything other than the exact
/// strings `major`, `minor` or `patch` means a patch bump.
fn lenient_strategy<'de, D>(deserializer: D) -> Result<Strategy, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;

    let strategy: Option<Strategy> = match &value {
        serde_json::Value::String(name) => name.parse().ok(),
        _ => None,
    };

    Ok(strategy.unwrap_or_else(|| {
        warn!("Unrecognized strategy {}, falling back to patch", value);
        Strategy::Patch
    }))
}

/// Load the config at `path`.
///
/// A missing file yields the default config (patch strategy). A file that
/// exists but is not valid JSON is an error.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No config at {}, using default strategy", path.display());
            return Ok(Config::default());
        }
        Err(source) => {
            return Err(ConfigError::ReadFailed {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let config: Config =
        serde_json::from_str(&content).map_err(|source| ConfigError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    debug!("Loaded config from {}: strategy={}", path.display(), config.strategy);
    Ok(config)
}
