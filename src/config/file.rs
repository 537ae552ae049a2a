use crate::config::FightConfig;
use crate::utils::error::{FightError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// TOML file layout. Every field is optional; missing values fall back to the
/// defaults carried by the CLI flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub port: Option<u16>,
    pub hero_service_url: Option<String>,
    pub villain_service_url: Option<String>,
    pub process_delay_millis: Option<u64>,
    pub request_timeout_millis: Option<u64>,
}

impl FileConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| FightError::ConfigError {
            message: format!("failed to parse {}: {}", path.display(), e),
        })
    }

    /// Overlays the file values on top of a base config.
    pub fn apply_to(self, base: FightConfig) -> FightConfig {
        FightConfig {
            port: self.port.unwrap_or(base.port),
            hero_service_url: self.hero_service_url.unwrap_or(base.hero_service_url),
            villain_service_url: self.villain_service_url.unwrap_or(base.villain_service_url),
            process_delay_millis: self.process_delay_millis.unwrap_or(base.process_delay_millis),
            request_timeout_millis: self
                .request_timeout_millis
                .unwrap_or(base.request_timeout_millis),
        }
    }
}
