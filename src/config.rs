use crate::error::{HelpRxError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    pub model: String,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-3-flash-preview".into(),
            timeout_seconds: 120,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| HelpRxError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("helprx").join("config.json"))
    }

    /// Resolve the API key at the CLI boundary. The environment variable
    /// wins over the config file; everything below this layer receives the
    /// key explicitly and never reads ambient process state.
    pub fn resolve_api_key(&self) -> Result<String> {
        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            if !key.trim().is_empty() {
                return Ok(key);
            }
        }

        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or(HelpRxError::MissingApiKey)
    }

    pub fn set_api_key(&mut self, key: String) -> Result<()> {
        self.api_key = Some(key);
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.api_key.is_none());
        assert_eq!(config.model, "gemini-3-flash-preview");
        assert_eq!(config.timeout_seconds, 120);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config {
            api_key: Some("test-key".into()),
            model: "gemini-3-flash-preview".into(),
            timeout_seconds: 60,
        };

        let json = serde_json::to_string(&config).expect("serialize failed");
        let restored: Config = serde_json::from_str(&json).expect("deserialize failed");
        assert_eq!(restored.api_key.as_deref(), Some("test-key"));
        assert_eq!(restored.timeout_seconds, 60);
    }

    #[test]
    fn test_config_deserialize_missing_fields() {
        let config: Config = serde_json::from_str("{}").expect("deserialize failed");
        assert_eq!(config.model, "gemini-3-flash-preview");
    }
}
