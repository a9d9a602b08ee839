//! Identity for cards and containers.
//!
//! Every physical card gets a unique `CardId` when it is created. Two cards
//! with the same suit and rank (from two different decks) are still distinct
//! cards, so identity is never derived from the face value.
//!
//! Containers are addressed by `ContainerId`. A card refers to its owning
//! container by id only; the container owns the card.
//!
//! ## Usage
//!
//! ```
//! use athena_towers::core::{CardId, IdAllocator};
//!
//! let mut ids = IdAllocator::new();
//! let first = ids.next_card().unwrap();
//! let second = ids.next_card().unwrap();
//!
//! assert_ne!(first, second);
//! assert_eq!(first, CardId(0));
//! ```

use serde::{Deserialize, Serialize};

use super::error::{TableError, TableResult};

/// Unique identifier for a physical card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Container identifier.
///
/// The container model doesn't interpret these - games decide which id is
/// the deck, the hand, the discard pile, and so on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContainerId(pub u16);

impl ContainerId {
    /// Create a new container ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for ContainerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Container({})", self.0)
    }
}

/// Hands out fresh card and container identities.
///
/// Whoever creates cards must draw their ids from a single allocator, or the
/// "no two containers hold the same card" invariant cannot be checked.
/// Ids are never reused; once a counter runs out, allocation fails.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdAllocator {
    next_card: u32,
    next_container: u16,
}

impl IdAllocator {
    /// Create an allocator starting at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a new card ID.
    pub fn next_card(&mut self) -> TableResult<CardId> {
        let id = self.next_card;
        self.next_card = id.checked_add(1).ok_or(TableError::IdsExhausted)?;
        Ok(CardId(id))
    }

    /// Allocate a new container ID.
    pub fn next_container(&mut self) -> TableResult<ContainerId> {
        let id = self.next_container;
        self.next_container = id.checked_add(1).ok_or(TableError::IdsExhausted)?;
        Ok(ContainerId(id))
    }

    /// Make sure `id` is never handed out by `next_container`.
    pub fn reserve_container(&mut self, id: ContainerId) -> TableResult<()> {
        if id.0 >= self.next_container {
            self.next_container = id.0.checked_add(1).ok_or(TableError::IdsExhausted)?;
        }
        Ok(())
    }

    /// Number of card IDs handed out so far.
    #[must_use]
    pub fn cards_allocated(&self) -> u32 {
        self.next_card
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_ids_are_sequential() {
        let mut ids = IdAllocator::new();

        assert_eq!(ids.next_card(), Ok(CardId(0)));
        assert_eq!(ids.next_card(), Ok(CardId(1)));
        assert_eq!(ids.next_card(), Ok(CardId(2)));
        assert_eq!(ids.cards_allocated(), 3);
    }

    #[test]
    fn test_container_ids_independent_of_cards() {
        let mut ids = IdAllocator::new();

        ids.next_card().unwrap();
        ids.next_card().unwrap();

        assert_eq!(ids.next_container(), Ok(ContainerId::new(0)));
        assert_eq!(ids.next_container(), Ok(ContainerId::new(1)));
    }

    #[test]
    fn test_exhausted_counters_fail() {
        let mut ids = IdAllocator {
            next_card: u32::MAX,
            next_container: u16::MAX,
        };

        assert_eq!(ids.next_card(), Err(TableError::IdsExhausted));
        assert_eq!(ids.next_container(), Err(TableError::IdsExhausted));
        // Still exhausted, nothing was handed out
        assert_eq!(ids.next_container(), Err(TableError::IdsExhausted));
        assert_eq!(ids.cards_allocated(), u32::MAX);
    }

    #[test]
    fn test_reserve_container() {
        let mut ids = IdAllocator::new();

        ids.reserve_container(ContainerId::new(4)).unwrap();
        assert_eq!(ids.next_container(), Ok(ContainerId::new(5)));

        // Reserving an id already behind the counter changes nothing
        ids.reserve_container(ContainerId::new(1)).unwrap();
        assert_eq!(ids.next_container(), Ok(ContainerId::new(6)));

        assert_eq!(
            ids.reserve_container(ContainerId::new(u16::MAX)),
            Err(TableError::IdsExhausted)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CardId(42)), "Card(42)");
        assert_eq!(format!("{}", ContainerId::new(3)), "Container(3)");
    }

    #[test]
    fn test_serialization() {
        let id = CardId(123);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: CardId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
