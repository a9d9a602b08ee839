//! Card containers: ordered piles that exclusively own their cards.
//!
//! The capability every pile shares is the `CardContainer` trait: it can
//! `pull` a card out of its sequence and `append` one to the top. Moving a
//! card between two containers is always pull-then-append through
//! [`move_to`], which keeps each card's `owner` back-reference in step with
//! the sequence that holds it.
//!
//! ## Ordering
//!
//! Index 0 is the bottom of the pile; the last card is the top. `draw`
//! takes from the top and `append` puts on the top.
//!
//! ## Usage
//!
//! ```
//! use athena_towers::core::{ContainerId, IdAllocator};
//! use athena_towers::zones::{move_to, CardContainer, Container};
//!
//! let mut ids = IdAllocator::new();
//! let mut deck = Container::standard_deck(ContainerId::new(0), &mut ids).unwrap();
//! let mut hand = Container::empty(ContainerId::new(1));
//!
//! let top = deck.top().unwrap().id;
//! move_to(top, &mut deck, &mut hand).unwrap();
//!
//! assert_eq!(deck.len(), 51);
//! assert_eq!(hand.cards()[0].owner, Some(hand.id()));
//! ```

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank, Suit};
use crate::core::entity::{CardId, ContainerId, IdAllocator};
use crate::core::error::{TableError, TableResult};
use crate::core::rng::GameRng;

/// Anything that can hold an ordered sequence of cards.
pub trait CardContainer {
    /// Identity used as the owner back-reference on held cards.
    fn id(&self) -> ContainerId;

    /// Cards from bottom to top.
    fn cards(&self) -> &[Card];

    /// Remove `card` from the sequence and return it with its owner cleared.
    ///
    /// Returns `None` if this container doesn't hold the card.
    fn pull(&mut self, card: CardId) -> Option<Card>;

    /// Put `card` on top and record this container as its owner.
    ///
    /// Panics if the card is still owned elsewhere or is already held here.
    fn append(&mut self, card: Card);

    fn len(&self) -> usize {
        self.cards().len()
    }

    fn is_empty(&self) -> bool {
        self.cards().is_empty()
    }

    fn contains(&self, card: CardId) -> bool {
        self.cards().iter().any(|c| c.id == card)
    }
}

/// Move `card` from `source` to the top of `target`.
///
/// Fails with `CardNotFound` if `source` doesn't hold the card; neither
/// container changes in that case.
pub fn move_to<S, T>(card: CardId, source: &mut S, target: &mut T) -> TableResult<()>
where
    S: CardContainer + ?Sized,
    T: CardContainer + ?Sized,
{
    let pulled = source.pull(card).ok_or(TableError::CardNotFound(card))?;
    target.append(pulled);
    Ok(())
}

/// The standard ordered pile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    id: ContainerId,
    cards: Vec<Card>,
}

impl Container {
    /// Create a container holding a full 52-card deck.
    ///
    /// Cards are laid down rank by rank (aces first), each rank in suit order
    /// hearts, diamonds, clubs, spades, so the king of spades is on top.
    pub fn standard_deck(id: ContainerId, ids: &mut IdAllocator) -> TableResult<Self> {
        let mut container = Self {
            id,
            cards: Vec::with_capacity(52),
        };

        for rank in Rank::all() {
            for suit in Suit::ALL {
                container.append(Card::new(ids.next_card()?, suit, rank));
            }
        }

        Ok(container)
    }

    /// Create a container with no cards.
    #[must_use]
    pub fn empty(id: ContainerId) -> Self {
        Self {
            id,
            cards: Vec::new(),
        }
    }

    /// Card at `index` (0 = bottom).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// The top card, if any.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> TableResult<Card> {
        let mut card = self.cards.pop().ok_or(TableError::EmptyContainer(self.id))?;
        card.owner = None;
        Ok(card)
    }

    /// Remove and return the top `n` cards, topmost first.
    ///
    /// Fails without drawing anything if fewer than `n` cards remain.
    pub fn draw_n(&mut self, n: usize) -> TableResult<Vec<Card>> {
        if self.cards.len() < n {
            return Err(TableError::EmptyContainer(self.id));
        }
        (0..n).map(|_| self.draw()).collect()
    }

    /// Remove and return the card at `index`.
    pub fn take_at(&mut self, index: usize) -> Option<Card> {
        if index >= self.cards.len() {
            return None;
        }
        let mut card = self.cards.remove(index);
        card.owner = None;
        Some(card)
    }

    /// Uniformly permute the whole pile.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Move every card of `other` on top of this pile, keeping `other`'s
    /// order. `other` is consumed.
    pub fn merge_from(&mut self, mut other: Container) {
        self.cards.reserve(other.cards.len());
        for mut card in other.cards.drain(..) {
            card.owner = None;
            self.append(card);
        }
    }

    /// Iterate over cards from bottom to top.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl CardContainer for Container {
    fn id(&self) -> ContainerId {
        self.id
    }

    fn cards(&self) -> &[Card] {
        &self.cards
    }

    fn pull(&mut self, card: CardId) -> Option<Card> {
        let pos = self.cards.iter().position(|c| c.id == card)?;
        let mut pulled = self.cards.remove(pos);
        assert_eq!(
            pulled.owner,
            Some(self.id),
            "{} sits in {} but points at {:?}",
            card,
            self.id,
            pulled.owner
        );
        pulled.owner = None;
        Some(pulled)
    }

    fn append(&mut self, mut card: Card) {
        if let Some(owner) = card.owner {
            panic!("{} is still owned by {}", card.id, owner);
        }
        if self.contains(card.id) {
            panic!("{} already exists in {}", card.id, self.id);
        }
        card.owner = Some(self.id);
        self.cards.push(card);
    }
}

impl<'a> IntoIterator for &'a Container {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
