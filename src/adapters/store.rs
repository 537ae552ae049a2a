use crate::domain::model::{Fight, FightOutcome};
use crate::domain::ports::FightStore;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

/// In-memory fight store. Stands in for the real persistence engine behind
/// the `FightStore` port; identifiers are unique and increasing.
#[derive(Debug, Default)]
pub struct InMemoryFightStore {
    fights: RwLock<Vec<Fight>>,
    next_id: AtomicI64,
}

impl InMemoryFightStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FightStore for InMemoryFightStore {
    async fn save(&self, outcome: FightOutcome) -> Result<Fight> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let fight = outcome.into_fight(id);
        self.fights.write().await.push(fight.clone());
        Ok(fight)
    }

    async fn find_all(&self) -> Result<Vec<Fight>> {
        Ok(self.fights.read().await.clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Fight>> {
        Ok(self
            .fights
            .read()
            .await
            .iter()
            .find(|fight| fight.id == id)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn outcome(winner: &str, loser: &str) -> FightOutcome {
        FightOutcome {
            fight_date: Utc::now(),
            winner_name: winner.to_string(),
            winner_level: 10,
            winner_picture: format!("https://example.com/{}.png", winner),
            loser_name: loser.to_string(),
            loser_level: 3,
            loser_picture: format!("https://example.com/{}.png", loser),
            winner_team: "heroes".to_string(),
            loser_team: "villains".to_string(),
        }
    }

    #[tokio::test]
    async fn test_save_assigns_unique_increasing_ids() {
        let store = InMemoryFightStore::new();
        let first = store.save(outcome("Superman", "Joker")).await.unwrap();
        let second = store.save(outcome("Batman", "Bane")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let store = InMemoryFightStore::new();
        let saved = store.save(outcome("Superman", "Joker")).await.unwrap();

        let found = store.find_by_id(saved.id).await.unwrap();
        assert_eq!(found.unwrap().winner_name, "Superman");

        let missing = store.find_by_id(999).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_find_all_empty_store() {
        let store = InMemoryFightStore::new();
        assert!(store.find_all().await.unwrap().is_empty());
    }
}
