//! Optional `floe.toml` configuration.
//!
//! An absent file yields defaults; a malformed file is a config error.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::core::error::FloeError;
use crate::reasoning::decision::MIN_ROUTING_CONFIDENCE;

pub const CONFIG_FILE: &str = "floe.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FloeConfig {
    pub policy: PolicyConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PolicyConfig {
    /// Routing decisions below this confidence are denied.
    pub min_confidence: f64,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            min_confidence: MIN_ROUTING_CONFIDENCE,
        }
    }
}

pub fn load(root: &Path) -> Result<FloeConfig, FloeError> {
    let path = root.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(FloeConfig::default());
    }
    let raw = fs::read_to_string(&path).map_err(FloeError::IoError)?;
    toml::from_str(&raw)
        .map_err(|e| FloeError::ConfigError(format!("invalid {}: {e}", path.display())))
}
