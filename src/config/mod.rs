pub mod cli;
pub mod file;

use crate::utils::error::Result;
use crate::utils::validation::{validate_range, validate_url, Validate};
use cli::CliConfig;
use file::FileConfig;
use serde::{Deserialize, Serialize};

/// Resolved runtime configuration. Delay and timeout are external settings,
/// never hardcoded in the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FightConfig {
    pub port: u16,
    pub hero_service_url: String,
    pub villain_service_url: String,
    pub process_delay_millis: u64,
    pub request_timeout_millis: u64,
}

impl FightConfig {
    /// Resolves the effective config: CLI flags first, then the optional TOML
    /// file on top.
    pub fn load(cli: &CliConfig) -> Result<Self> {
        let base = Self::from_cli_flags(cli);
        match &cli.config {
            Some(path) => Ok(FileConfig::from_file(path)?.apply_to(base)),
            None => Ok(base),
        }
    }

    pub fn from_cli_flags(cli: &CliConfig) -> Self {
        Self {
            port: cli.port,
            hero_service_url: cli.hero_service_url.clone(),
            villain_service_url: cli.villain_service_url.clone(),
            process_delay_millis: cli.process_delay_ms,
            request_timeout_millis: cli.request_timeout_ms,
        }
    }
}

impl Validate for FightConfig {
    fn validate(&self) -> Result<()> {
        validate_url("hero_service_url", &self.hero_service_url)?;
        validate_url("villain_service_url", &self.villain_service_url)?;
        validate_range("request_timeout_millis", self.request_timeout_millis, 1, 60_000)?;
        validate_range("process_delay_millis", self.process_delay_millis, 0, 60_000)?;
        Ok(())
    }
}
