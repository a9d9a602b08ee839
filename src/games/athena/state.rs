//! Towers, status and the per-round state aggregate.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;

/// Where the game is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Created, no round dealt yet.
    #[default]
    Waiting,
    Playing,
    /// Every tower of the round is destroyed.
    Won,
    /// Out of health, or out of cards with towers still standing.
    Lost,
}

impl GameStatus {
    #[must_use]
    pub fn is_finished(self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Lost)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            GameStatus::Waiting => "waiting",
            GameStatus::Playing => "playing",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        })
    }
}

/// One combat slot.
///
/// The tower's card is held directly, outside any container, so it never
/// shows up in the deck, the hand or the discard pile while the round lasts.
/// This is the one place a dealt card sits with `owner == None` for longer
/// than a move: from the deal until the next round sends it to the discard
/// pile. Card conservation counts towers alongside the containers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tower {
    pub destroyed: bool,
    pub hidden: bool,
    pub card: Card,
}

impl Tower {
    /// A fresh face-down tower.
    #[must_use]
    pub fn new(card: Card) -> Self {
        Self {
            destroyed: false,
            hidden: true,
            card,
        }
    }

    /// The card as the player may see it.
    #[must_use]
    pub fn card_string(&self) -> String {
        if self.hidden {
            "face down".to_string()
        } else {
            self.card.to_string()
        }
    }
}

impl std::fmt::Display for Tower {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.card_string())?;
        if self.destroyed {
            write!(f, " (destroyed)")?;
        }
        Ok(())
    }
}

/// Tower row; inline for the usual six.
pub type TowerRow = SmallVec<[Tower; 6]>;

/// Everything about the current round that isn't a card container.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub towers: TowerRow,
    pub health: u32,
    pub status: GameStatus,
    /// Rounds dealt so far (0 before the first `new_state`).
    pub round: u32,
}

impl GameState {
    #[must_use]
    pub fn towers_standing(&self) -> usize {
        self.towers.iter().filter(|t| !t.destroyed).count()
    }

    #[must_use]
    pub fn all_destroyed(&self) -> bool {
        !self.towers.is_empty() && self.towers.iter().all(|t| t.destroyed)
    }
}
