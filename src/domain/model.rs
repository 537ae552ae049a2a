use crate::utils::error::{FightError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One combatant, as returned by the hero or villain service. Both origins
/// share the same shape; unknown fields from the remote payload are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fighter {
    pub name: String,
    pub level: i32,
    pub picture: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub powers: Option<String>,
}

/// A hero/villain pair for a single contest. Sides are optional on the wire
/// and must be validated as both-present before a fight can run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fighters {
    pub hero: Option<Fighter>,
    pub villain: Option<Fighter>,
}

impl Fighters {
    pub fn new(hero: Fighter, villain: Fighter) -> Self {
        Self {
            hero: Some(hero),
            villain: Some(villain),
        }
    }
}

impl Validate for Fighters {
    fn validate(&self) -> Result<()> {
        let hero = self.hero.as_ref().ok_or_else(|| FightError::ValidationError {
            message: "fighters is missing the hero side".to_string(),
        })?;
        let villain = self
            .villain
            .as_ref()
            .ok_or_else(|| FightError::ValidationError {
                message: "fighters is missing the villain side".to_string(),
            })?;

        validate_non_empty_string("hero.name", &hero.name)?;
        validate_non_empty_string("villain.name", &villain.name)?;
        Ok(())
    }
}

/// Persisted outcome of a contest. Immutable once created; the identifier is
/// assigned by the store at persistence time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fight {
    pub id: i64,
    pub fight_date: DateTime<Utc>,
    pub winner_name: String,
    pub winner_level: i32,
    pub winner_picture: String,
    pub loser_name: String,
    pub loser_level: i32,
    pub loser_picture: String,
    pub winner_team: String,
    pub loser_team: String,
}

/// A fight result before persistence; the store turns it into a `Fight` by
/// assigning the identifier.
#[derive(Debug, Clone)]
pub struct FightOutcome {
    pub fight_date: DateTime<Utc>,
    pub winner_name: String,
    pub winner_level: i32,
    pub winner_picture: String,
    pub loser_name: String,
    pub loser_level: i32,
    pub loser_picture: String,
    pub winner_team: String,
    pub loser_team: String,
}

impl FightOutcome {
    pub fn into_fight(self, id: i64) -> Fight {
        Fight {
            id,
            fight_date: self.fight_date,
            winner_name: self.winner_name,
            winner_level: self.winner_level,
            winner_picture: self.winner_picture,
            loser_name: self.loser_name,
            loser_level: self.loser_level,
            loser_picture: self.loser_picture,
            winner_team: self.winner_team,
            loser_team: self.loser_team,
        }
    }
}
