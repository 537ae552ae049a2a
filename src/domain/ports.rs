use crate::domain::model::{Fight, FightOutcome, Fighter};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Fetches one random combatant from a downstream service. No retry logic
/// lives at this layer; failures propagate to the caller.
#[async_trait]
pub trait FighterClient: Send + Sync {
    async fn fetch_random(&self) -> Result<Fighter>;

    /// Short label used in error messages and logs ("hero", "villain").
    fn service_name(&self) -> &str;
}

/// Persistence collaborator for fight records. Fights are created once and
/// thereafter only read.
#[async_trait]
pub trait FightStore: Send + Sync {
    async fn save(&self, outcome: FightOutcome) -> Result<Fight>;
    async fn find_all(&self) -> Result<Vec<Fight>>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Fight>>;
}
