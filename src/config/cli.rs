use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "fights-service")]
#[command(about = "Fight orchestration service over the hero and villain services")]
pub struct CliConfig {
    #[arg(long, default_value = "8082")]
    pub port: u16,

    #[arg(long, default_value = "http://localhost:8083")]
    pub hero_service_url: String,

    #[arg(long, default_value = "http://localhost:8084")]
    pub villain_service_url: String,

    #[arg(long, default_value = "0", help = "Artificial processing delay in milliseconds")]
    pub process_delay_ms: u64,

    #[arg(long, default_value = "500", help = "Timeout ceiling for random fighters in milliseconds")]
    pub request_timeout_ms: u64,

    #[arg(long, help = "Optional TOML config file; overrides the flags above")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
