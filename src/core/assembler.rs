use crate::domain::model::Fighters;
use crate::domain::ports::FighterClient;
use crate::utils::error::Result;
use std::sync::Arc;

/// Combines the hero and villain fetches into one composite result. Both
/// fetches run concurrently; a `Fighters` value is only ever emitted complete.
pub struct FighterAssembler {
    hero_client: Arc<dyn FighterClient>,
    villain_client: Arc<dyn FighterClient>,
}

impl FighterAssembler {
    pub fn new(hero_client: Arc<dyn FighterClient>, villain_client: Arc<dyn FighterClient>) -> Self {
        Self {
            hero_client,
            villain_client,
        }
    }

    /// First failure wins: if either fetch fails, the composite fails with
    /// that error without waiting for the other side.
    pub async fn assemble_random(&self) -> Result<Fighters> {
        let (hero, villain) = tokio::try_join!(
            self.hero_client.fetch_random(),
            self.villain_client.fetch_random()
        )?;

        tracing::debug!("Got random fighters: {} vs {}", hero.name, villain.name);
        Ok(Fighters::new(hero, villain))
    }
}
