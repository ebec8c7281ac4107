use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub data_file: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let values: HashMap<String, String> = env::vars().collect();
        Self::from_lookup(|name| values.get(name).cloned())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = value_or_default(&lookup, "RANCHO_BIND_HOST", "0.0.0.0");

        let port = value_or_default(&lookup, "PORT", "3000")
            .parse::<u16>()
            .map_err(|_| {
                ConfigError::Invalid("PORT must be an integer in [1, 65535]".to_string())
            })?;
        if port == 0 {
            return Err(ConfigError::Invalid(
                "PORT must be in [1, 65535]".to_string(),
            ));
        }

        let data_file = PathBuf::from(value_or_default(&lookup, "RANCHO_DATA_FILE", "data.json"));

        Ok(Self {
            bind_addr: format!("{host}:{port}"),
            data_file,
        })
    }
}

fn value_or_default(lookup: impl Fn(&str) -> Option<String>, name: &str, default: &str) -> String {
    optional_trimmed(lookup, name).unwrap_or_else(|| default.to_string())
}

fn optional_trimmed(lookup: impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    lookup(name).and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
