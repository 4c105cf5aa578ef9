//! Config management use case

use crate::error::{MoodlogError, Result};
use crate::infrastructure::{Config, FileSystemRepository, MoodlogRepository};

const VALID_KEYS: &str = "storage_key, recent_limit, moods, created";

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "storage_key" => Ok(config.storage_key.clone()),
            "recent_limit" => Ok(config.recent_limit.to_string()),
            "moods" => Ok(config.moods.join(" ")),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(MoodlogError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}",
                key, VALID_KEYS
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "storage_key" => {
                let value = value.trim();
                let valid = !value.is_empty()
                    && value
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
                if !valid {
                    return Err(MoodlogError::Config(format!(
                        "Invalid storage_key: '{}' (letters, digits, '_' and '-' only)",
                        value
                    )));
                }
                config.storage_key = value.to_string();
            }
            "recent_limit" => {
                config.recent_limit = value
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .filter(|n| *n > 0)
                    .ok_or_else(|| {
                        MoodlogError::Config(format!("Invalid recent_limit: '{}'", value))
                    })?;
            }
            "moods" => {
                let moods: Vec<String> = value.split_whitespace().map(str::to_string).collect();
                if moods.is_empty() {
                    return Err(MoodlogError::Config(
                        "moods must contain at least one mood".to_string(),
                    ));
                }
                config.moods = moods;
            }
            "created" => {
                return Err(MoodlogError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(MoodlogError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: storage_key, recent_limit, moods",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
