//! Tunable rules for a game of Athena's Towers.

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// What a failed attack costs the player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailurePenalty {
    /// Lose health equal to the surviving tower's rank.
    #[default]
    TowerRank,
    /// Lose a fixed amount of health.
    Fixed(u32),
    /// Failed attacks are free.
    None,
}

impl FailurePenalty {
    /// Health lost when an attack on a tower of `tower_rank` fails.
    #[must_use]
    pub fn amount(self, tower_rank: u8) -> u32 {
        match self {
            FailurePenalty::TowerRank => u32::from(tower_rank),
            FailurePenalty::Fixed(n) => n,
            FailurePenalty::None => 0,
        }
    }
}

/// Game configuration.
///
/// ```
/// use athena_towers::games::athena::TowersConfig;
///
/// let config = TowersConfig::default().with_hand_size(5);
/// assert_eq!(config.starting_health, 30);
/// assert_eq!(config.cards_per_round(), 11);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TowersConfig {
    /// Health at the start of every round.
    pub starting_health: u32,

    /// Number of towers dealt per round.
    pub tower_count: usize,

    /// Cards dealt to the player per round.
    pub hand_size: usize,

    /// Rank bonus granted by type advantage.
    pub type_advantage_bonus: u8,

    pub failure_penalty: FailurePenalty,
}

impl Default for TowersConfig {
    fn default() -> Self {
        Self {
            starting_health: 30,
            tower_count: 6,
            hand_size: 7,
            type_advantage_bonus: 2,
            failure_penalty: FailurePenalty::default(),
        }
    }
}

/// Cards in the single deck a game is played with.
pub const DECK_SIZE: usize = 52;

impl TowersConfig {
    #[must_use]
    pub fn with_starting_health(mut self, health: u32) -> Self {
        self.starting_health = health;
        self
    }

    #[must_use]
    pub fn with_tower_count(mut self, count: usize) -> Self {
        self.tower_count = count;
        self
    }

    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    #[must_use]
    pub fn with_type_advantage_bonus(mut self, bonus: u8) -> Self {
        self.type_advantage_bonus = bonus;
        self
    }

    #[must_use]
    pub fn with_failure_penalty(mut self, penalty: FailurePenalty) -> Self {
        self.failure_penalty = penalty;
        self
    }

    /// Cards a round takes from the deck.
    #[must_use]
    pub fn cards_per_round(&self) -> usize {
        self.tower_count + self.hand_size
    }

    /// Check that a round can be dealt from a full deck.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.tower_count == 0 {
            return Err(GameError::InvalidConfig("at least one tower is required".into()));
        }
        if self.hand_size == 0 {
            return Err(GameError::InvalidConfig("hand size must be positive".into()));
        }
        if self.starting_health == 0 {
            return Err(GameError::InvalidConfig("starting health must be positive".into()));
        }
        if self.cards_per_round() > DECK_SIZE {
            return Err(GameError::InvalidConfig(format!(
                "{} towers and {} hand cards need more than {DECK_SIZE} cards",
                self.tower_count, self.hand_size
            )));
        }
        Ok(())
    }
}
