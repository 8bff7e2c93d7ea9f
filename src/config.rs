use serde::{Deserialize, Serialize};
use anyhow::Result;
use tracing::debug;

use crate::config_manager::utils::{read_config_value, validate_config};
use crate::config_manager::{ClientConfig, SystemConfig, TTSConfig, TranslateConfig};

/// Main configuration. Every section is optional in the file and falls back to defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(rename = "@context")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<serde_json::Value>,

    #[serde(default)]
    pub system_config: SystemConfig,

    #[serde(default)]
    pub translate_config: TranslateConfig,

    #[serde(default)]
    pub tts_config: TTSConfig,

    #[serde(default)]
    pub client_config: ClientConfig,
}

impl Config {
    /// Load configuration from a JSON, JSON-LD or YAML file
    pub fn load(path: &str) -> Result<Self> {
        let value = read_config_value(path)?;
        validate_config(value)
    }

    /// Candidate configuration files, most specific first
    pub fn search_paths(explicit: Option<&str>) -> Vec<String> {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()));

        vec![
            explicit.map(|p| p.to_string()),
            std::env::var("CONFIG_PATH").ok(),
            Some("conf.jsonld".to_string()),
            Some("conf.yaml".to_string()),
            exe_dir
                .as_ref()
                .and_then(|dir| dir.join("conf.jsonld").to_str().map(|s| s.to_string())),
            exe_dir
                .as_ref()
                .and_then(|dir| dir.join("conf.yaml").to_str().map(|s| s.to_string())),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Load the first readable configuration from `search_paths`.
    ///
    /// An explicitly requested file must load; otherwise missing files fall
    /// through to the built-in defaults. Returns the path that was used, if any.
    pub fn discover(explicit: Option<&str>) -> Result<(Self, Option<String>)> {
        if let Some(path) = explicit {
            return Ok((Self::load(path)?, Some(path.to_string())));
        }

        for path in Self::search_paths(None) {
            match Self::load(&path) {
                Ok(cfg) => return Ok((cfg, Some(path))),
                Err(e) => {
                    debug!("Failed to load config from {}: {}", path, e);
                    continue;
                }
            }
        }

        Ok((Self::default(), None))
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
