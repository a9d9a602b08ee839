//! Playing cards: suit, rank and the owner back-reference.
//!
//! A `Card` is a value owned by exactly one container. Its face (suit and
//! rank) never changes. `owner` is a non-owning back-reference holding the
//! `ContainerId` of the container whose sequence currently contains the
//! card; containers keep it in sync when they append or pull.

use serde::{Deserialize, Serialize};

use crate::core::entity::{CardId, ContainerId};

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All suits in deck-building order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Lowercase suit name ("hearts", "spades", ...).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
            Suit::Spades => "spades",
        }
    }

    #[must_use]
    pub const fn colour(self) -> Colour {
        match self {
            Suit::Hearts | Suit::Diamonds => Colour::Red,
            Suit::Clubs | Suit::Spades => Colour::Black,
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Colour {
    Red,
    Black,
}

impl std::fmt::Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Colour::Red => "red",
            Colour::Black => "black",
        })
    }
}

/// Card rank, 1 (ace) through 13 (king).
///
/// Aces are low: combat compares raw rank values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Rank = Rank(1);
    pub const JACK: Rank = Rank(11);
    pub const QUEEN: Rank = Rank(12);
    pub const KING: Rank = Rank(13);

    /// Create a rank, returning `None` outside `1..=13`.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= 13 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Iterate over all ranks, ace first.
    pub fn all() -> impl Iterator<Item = Rank> {
        (1..=13).map(Rank)
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// "ace", "jack", "queen", "king", or the number.
    #[must_use]
    pub fn name(self) -> String {
        match self.0 {
            1 => "ace".to_string(),
            11 => "jack".to_string(),
            12 => "queen".to_string(),
            13 => "king".to_string(),
            n => n.to_string(),
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::new(value).ok_or_else(|| format!("rank {value} is outside 1..=13"))
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.0
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}

/// A physical playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique identity of this physical card.
    pub id: CardId,

    pub suit: Suit,

    pub rank: Rank,

    /// Container currently holding this card. `None` only while the card is
    /// in transit between containers or held outside any container.
    pub owner: Option<ContainerId>,
}

impl Card {
    /// Create a card that is not yet in any container.
    #[must_use]
    pub const fn new(id: CardId, suit: Suit, rank: Rank) -> Self {
        Self {
            id,
            suit,
            rank,
            owner: None,
        }
    }

    #[must_use]
    pub const fn colour(&self) -> Colour {
        self.suit.colour()
    }

    #[must_use]
    pub fn rank_name(&self) -> String {
        self.rank.name()
    }

    #[must_use]
    pub const fn suit_name(&self) -> &'static str {
        self.suit.name()
    }

    #[must_use]
    pub fn is_king(&self) -> bool {
        self.rank == Rank::KING
    }
}

impl std::fmt::Display for Card {
    /// Formats as `ace of hearts`, `7 of clubs`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}
