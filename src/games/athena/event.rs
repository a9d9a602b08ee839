//! Player actions and the events they produce.

use serde::{Deserialize, Serialize};

use super::state::GameStatus;
use crate::cards::Card;

/// Something the player can ask the engine to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Deal a fresh round.
    NewRound,
    /// Attack tower `tower` with the hand card at `hand`.
    Act { hand: usize, tower: usize },
    /// Shuffle the discard pile back into the deck.
    RecycleDiscards,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::NewRound => write!(f, "new round"),
            Action::Act { hand, tower } => write!(f, "act {hand} -> tower {tower}"),
            Action::RecycleDiscards => write!(f, "recycle discards"),
        }
    }
}

/// A resolved change to the game, as stored in the action log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionEvent {
    /// A round was dealt.
    RoundStarted {
        health: u32,
        towers: Vec<Card>,
        hand: Vec<Card>,
    },

    /// A hand card was played against a tower.
    Attacked { played: Card, tower: usize },

    /// The attacked tower fell.
    Destroyed {
        tower: usize,
        played: Card,
        /// The tower was still face down when it fell.
        first: bool,
        type_advantage: bool,
        matched: bool,
    },

    /// A face-down tower was turned up.
    Revealed { tower: usize, card: Card },

    /// A played card went to the discard pile.
    Discarded { card: Card },

    /// A failed attack cost health.
    HealthLost { amount: u32, remaining: u32 },

    StatusChanged { from: GameStatus, to: GameStatus },

    /// The discard pile was shuffled back into the deck.
    DiscardsRecycled { count: usize },
}

impl ActionEvent {
    /// Short name of the event kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            ActionEvent::RoundStarted { .. } => "round_started",
            ActionEvent::Attacked { .. } => "attacked",
            ActionEvent::Destroyed { .. } => "destroyed",
            ActionEvent::Revealed { .. } => "revealed",
            ActionEvent::Discarded { .. } => "discarded",
            ActionEvent::HealthLost { .. } => "health_lost",
            ActionEvent::StatusChanged { .. } => "status_changed",
            ActionEvent::DiscardsRecycled { .. } => "discards_recycled",
        }
    }
}

impl std::fmt::Display for ActionEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionEvent::RoundStarted { health, towers, hand } => write!(
                f,
                "dealt {} towers and {} cards, health {health}",
                towers.len(),
                hand.len()
            ),
            ActionEvent::Attacked { played, tower } => {
                write!(f, "played {played} against tower {tower}")
            }
            ActionEvent::Destroyed {
                tower,
                first,
                type_advantage,
                matched,
                ..
            } => {
                write!(f, "tower {tower} destroyed")?;
                if *first {
                    write!(f, " before it was revealed")?;
                }
                if *type_advantage {
                    write!(f, " via type advantage")?;
                }
                if *matched {
                    write!(f, " (matched)")?;
                }
                Ok(())
            }
            ActionEvent::Revealed { tower, card } => write!(f, "tower {tower} is the {card}"),
            ActionEvent::Discarded { card } => write!(f, "discarded {card}"),
            ActionEvent::HealthLost { amount, remaining } => {
                write!(f, "lost {amount} health ({remaining} left)")
            }
            ActionEvent::StatusChanged { from, to } => write!(f, "{from} -> {to}"),
            ActionEvent::DiscardsRecycled { count } => {
                write!(f, "shuffled {count} discards into the deck")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};
    use crate::core::CardId;

    #[test]
    fn test_destroyed_display() {
        let played = Card::new(CardId(1), Suit::Hearts, Rank::new(7).unwrap());
        let event = ActionEvent::Destroyed {
            tower: 2,
            played,
            first: true,
            type_advantage: true,
            matched: false,
        };

        assert_eq!(event.kind(), "destroyed");
        assert_eq!(
            event.to_string(),
            "tower 2 destroyed before it was revealed via type advantage"
        );
    }

    #[test]
    fn test_action_serialization() {
        let action = Action::Act { hand: 3, tower: 1 };
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: Action = serde_json::from_str(&json).unwrap();

        assert_eq!(action, deserialized);
        assert_eq!(action.to_string(), "act 3 -> tower 1");
    }
}
