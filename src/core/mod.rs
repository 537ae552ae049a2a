pub mod assembler;
pub mod pipeline;
pub mod service;

pub use crate::domain::model::{Fight, FightOutcome, Fighter, Fighters};
pub use crate::domain::ports::{FightStore, FighterClient};
pub use crate::utils::error::Result;
