use crate::error::{AgentSpecError, Result};
use crate::share::DEFAULT_MAX_URL_LEN;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_SHARE_BASE_URL: &str = "http://localhost:3000/";

pub const CONFIG_KEYS: [&str; 3] = ["share-base-url", "max-url-length", "catalog-path"];

/// Configuration for agentspec, stored in .agentspec/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AgentSpecConfig {
    /// Page that share links point at; the token is added as `?s=`
    #[serde(default = "default_share_base_url")]
    pub share_base_url: String,

    /// Share links longer than this get a warning
    #[serde(default = "default_max_url_length")]
    pub max_url_length: usize,

    /// JSON preset catalog to use instead of the built-in presets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
}

fn default_share_base_url() -> String {
    DEFAULT_SHARE_BASE_URL.to_string()
}

fn default_max_url_length() -> usize {
    DEFAULT_MAX_URL_LEN
}

impl Default for AgentSpecConfig {
    fn default() -> Self {
        Self {
            share_base_url: default_share_base_url(),
            max_url_length: default_max_url_length(),
            catalog_path: None,
        }
    }
}

impl AgentSpecConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(AgentSpecError::Io)?;
        let config: AgentSpecConfig =
            serde_json::from_str(&content).map_err(AgentSpecError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(AgentSpecError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(AgentSpecError::Serialization)?;
        fs::write(config_path, content).map_err(AgentSpecError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "share-base-url" => Some(self.share_base_url.clone()),
            "max-url-length" => Some(self.max_url_length.to_string()),
            "catalog-path" => Some(
                self.catalog_path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "share-base-url" => {
                let value = value.trim();
                if !(value.starts_with("http://") || value.starts_with("https://")) {
                    return Err(format!(
                        "share-base-url must start with http:// or https://, got {}",
                        value
                    ));
                }
                self.share_base_url = value.to_string();
                Ok(())
            }
            "max-url-length" => {
                let parsed: usize = value
                    .trim()
                    .parse()
                    .map_err(|_| format!("max-url-length must be a whole number, got {}", value))?;
                if parsed == 0 {
                    return Err("max-url-length must be greater than zero".to_string());
                }
                self.max_url_length = parsed;
                Ok(())
            }
            "catalog-path" => {
                // An empty value switches back to the built-in presets
                self.catalog_path = match value.trim() {
                    "" => None,
                    path => Some(PathBuf::from(path)),
                };
                Ok(())
            }
            other => Err(format!("Unknown config key: {}", other)),
        }
    }
}
