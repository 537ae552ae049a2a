pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{clients::RandomFighterClient, store::InMemoryFightStore};
pub use config::{cli::CliConfig, FightConfig};
pub use crate::core::{
    assembler::FighterAssembler, pipeline::ResponsePipeline, service::FightService,
};
pub use utils::error::{FightError, Result};
