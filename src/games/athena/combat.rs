//! Attack resolution: pure functions of the two cards involved.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};

/// Does `card`'s suit dominate `tower`'s suit?
///
/// The cycle is hearts > spades > diamonds > clubs > hearts.
#[must_use]
pub fn check_type_advantage(card: &Card, tower: &Card) -> bool {
    matches!(
        (card.suit, tower.suit),
        (Suit::Hearts, Suit::Spades)
            | (Suit::Spades, Suit::Diamonds)
            | (Suit::Diamonds, Suit::Clubs)
            | (Suit::Clubs, Suit::Hearts)
    )
}

/// How an attack went.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackOutcome {
    pub destroyed: bool,

    /// Destroyed by a king of the tower's suit.
    pub by_king: bool,

    /// Destroyed thanks to the type-advantage bonus.
    pub type_advantage: bool,

    /// Destroyed by a card of exactly the tower's rank.
    pub matched: bool,
}

/// Resolve `card` attacking a tower holding `tower`.
///
/// - A king only ever destroys a tower of its own suit, whatever the rank.
/// - Otherwise, with type advantage, the attack wins when
///   `card.rank + bonus >= tower.rank`.
/// - Otherwise the attack wins when `card.rank >= tower.rank`.
#[must_use]
pub fn resolve_attack(card: &Card, tower: &Card, bonus: u8) -> AttackOutcome {
    let mut outcome = AttackOutcome::default();

    if card.is_king() {
        if card.suit == tower.suit {
            outcome.destroyed = true;
            outcome.by_king = true;
        }
    } else if check_type_advantage(card, tower) {
        if card.rank.value().saturating_add(bonus) >= tower.rank.value() {
            outcome.destroyed = true;
            outcome.type_advantage = true;
        }
    } else if card.rank >= tower.rank {
        outcome.destroyed = true;
    }

    outcome.matched = outcome.destroyed && card.rank == tower.rank;
    outcome
}
