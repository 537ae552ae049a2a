use crate::config::FightConfig;
use crate::core::assembler::FighterAssembler;
use crate::core::pipeline::ResponsePipeline;
use crate::domain::model::{Fight, FightOutcome, Fighter, Fighters};
use crate::domain::ports::{FighterClient, FightStore};
use crate::utils::error::{FightError, Result};
use crate::utils::validation::Validate;
use chrono::Utc;
use rand::Rng;
use std::sync::Arc;

/// Orchestrates the fight use cases: assembling random fighters through the
/// delayed/timed pipeline, running a fight and delegating reads and writes to
/// the store.
pub struct FightService {
    assembler: FighterAssembler,
    pipeline: ResponsePipeline,
    store: Arc<dyn FightStore>,
}

impl FightService {
    pub fn new(
        hero_client: Arc<dyn FighterClient>,
        villain_client: Arc<dyn FighterClient>,
        store: Arc<dyn FightStore>,
        config: &FightConfig,
    ) -> Self {
        Self {
            assembler: FighterAssembler::new(hero_client, villain_client),
            pipeline: ResponsePipeline::new(
                config.process_delay_millis,
                config.request_timeout_millis,
            ),
            store,
        }
    }

    pub async fn find_random_fighters(&self) -> Result<Fighters> {
        self.pipeline.run(self.assembler.assemble_random()).await
    }

    pub async fn find_all_fights(&self) -> Result<Vec<Fight>> {
        let fights = self.store.find_all().await?;
        tracing::debug!("Total number of fights: {}", fights.len());
        Ok(fights)
    }

    pub async fn find_fight_by_id(&self, id: i64) -> Result<Option<Fight>> {
        let fight = self.store.find_by_id(id).await?;
        match &fight {
            Some(f) => tracing::debug!("Found fight: {}", f.id),
            None => tracing::debug!("No fight found with id {}", id),
        }
        Ok(fight)
    }

    pub async fn perform_fight(&self, fighters: &Fighters) -> Result<Fight> {
        fighters.validate()?;

        let (hero, villain) = match (fighters.hero.clone(), fighters.villain.clone()) {
            (Some(hero), Some(villain)) => (hero, villain),
            _ => {
                return Err(FightError::ValidationError {
                    message: "fighters must include both a hero and a villain".to_string(),
                })
            }
        };

        let outcome = determine_outcome(hero, villain);
        let fight = self.store.save(outcome).await?;

        tracing::info!("Fight {} won by {}", fight.id, fight.winner_name);
        Ok(fight)
    }

    pub fn hello(&self) -> &'static str {
        "Hello Fight Resource"
    }
}

/// Higher level wins; equal levels come down to a coin flip.
fn determine_outcome(hero: Fighter, villain: Fighter) -> FightOutcome {
    let hero_wins = match hero.level.cmp(&villain.level) {
        std::cmp::Ordering::Greater => true,
        std::cmp::Ordering::Less => false,
        std::cmp::Ordering::Equal => rand::thread_rng().gen_bool(0.5),
    };

    let (winner, loser, winner_team, loser_team) = if hero_wins {
        (hero, villain, "heroes", "villains")
    } else {
        (villain, hero, "villains", "heroes")
    };

    FightOutcome {
        fight_date: Utc::now(),
        winner_name: winner.name,
        winner_level: winner.level,
        winner_picture: winner.picture,
        loser_name: loser.name,
        loser_level: loser.level,
        loser_picture: loser.picture,
        winner_team: winner_team.to_string(),
        loser_team: loser_team.to_string(),
    }
}
