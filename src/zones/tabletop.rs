//! A free-form card table: many containers, cards routed by back-reference.
//!
//! `Tabletop` owns every container on the table and allocates all card and
//! container identities, so card identity is unique across the whole table.
//! Moving a card only needs the card's id and the destination: the source
//! is found through the card's `owner` back-reference.
//!
//! ```
//! use athena_towers::zones::{CardContainer, Tabletop};
//!
//! let mut table = Tabletop::new();
//! let deck = table.create_deck().unwrap();
//! let pile = table.create_empty().unwrap();
//!
//! let card = table.draw_into(deck, pile).unwrap();
//! assert_eq!(table.owner_of(card), Some(pile));
//!
//! table.merge(deck, pile).unwrap();
//! assert_eq!(table.container(deck).unwrap().len(), 52);
//! assert!(table.container(pile).is_none());
//! ```

use rustc_hash::{FxHashMap, FxHashSet};

use super::container::{move_to, CardContainer, Container};
use crate::cards::Card;
use crate::core::entity::{CardId, ContainerId, IdAllocator};
use crate::core::error::{TableError, TableResult};
use crate::core::rng::GameRng;

#[derive(Clone, Debug, Default)]
pub struct Tabletop {
    containers: FxHashMap<ContainerId, Container>,
    ids: IdAllocator,
}

impl Tabletop {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a fresh 52-card deck on the table.
    pub fn create_deck(&mut self) -> TableResult<ContainerId> {
        let id = self.ids.next_container()?;
        let deck = Container::standard_deck(id, &mut self.ids)?;
        self.containers.insert(id, deck);
        Ok(id)
    }

    /// Put an empty container on the table.
    pub fn create_empty(&mut self) -> TableResult<ContainerId> {
        let id = self.ids.next_container()?;
        self.containers.insert(id, Container::empty(id));
        Ok(id)
    }

    /// Take a container (and its cards) off the table.
    pub fn destroy(&mut self, id: ContainerId) -> TableResult<Container> {
        self.containers.remove(&id).ok_or(TableError::InvalidTarget(id))
    }

    /// Put back a container previously taken off with `destroy`.
    ///
    /// Every card must have been dealt by this table, must name the container
    /// as its owner and must not be on the table already. On error the table
    /// is unchanged.
    pub fn restore(&mut self, container: Container) -> TableResult<()> {
        let id = container.id();
        if self.containers.contains_key(&id) {
            return Err(TableError::ContainerExists(id));
        }

        let on_table: FxHashSet<CardId> = self
            .containers
            .values()
            .flat_map(|c| c.iter().map(|card| card.id))
            .collect();
        let mut incoming = FxHashSet::default();
        for card in container.iter() {
            if card.id.0 >= self.ids.cards_allocated() || card.owner != Some(id) {
                return Err(TableError::ForeignCard(card.id));
            }
            if on_table.contains(&card.id) || !incoming.insert(card.id) {
                return Err(TableError::DuplicateCard(card.id));
            }
        }

        self.ids.reserve_container(id)?;
        self.containers.insert(id, container);
        Ok(())
    }

    #[must_use]
    pub fn container(&self, id: ContainerId) -> Option<&Container> {
        self.containers.get(&id)
    }

    /// Ids of all containers, in creation order.
    #[must_use]
    pub fn container_ids(&self) -> Vec<ContainerId> {
        let mut ids: Vec<_> = self.containers.keys().copied().collect();
        ids.sort();
        ids
    }

    /// Find a card anywhere on the table.
    #[must_use]
    pub fn find_card(&self, card: CardId) -> Option<&Card> {
        self.containers
            .values()
            .flat_map(|c| c.cards().iter())
            .find(|c| c.id == card)
    }

    /// The container currently holding `card`.
    #[must_use]
    pub fn owner_of(&self, card: CardId) -> Option<ContainerId> {
        self.find_card(card).and_then(|c| c.owner)
    }

    /// Move `card` to the top of `target`, wherever it currently is.
    ///
    /// Moving a card onto the container that already holds it puts it on top.
    pub fn move_card(&mut self, card: CardId, target: ContainerId) -> TableResult<()> {
        if !self.containers.contains_key(&target) {
            return Err(TableError::InvalidTarget(target));
        }
        let source = self.owner_of(card).ok_or(TableError::CardNotFound(card))?;

        if source == target {
            let container = self.container_mut(target)?;
            let pulled = container.pull(card).ok_or(TableError::CardNotFound(card))?;
            container.append(pulled);
            return Ok(());
        }

        self.with_pair(source, target, |from, to| move_to(card, from, to))
    }

    /// Draw the top card of `from` onto `to`. Returns the moved card.
    pub fn draw_into(&mut self, from: ContainerId, to: ContainerId) -> TableResult<CardId> {
        if from == to {
            return Err(TableError::InvalidTarget(to));
        }
        self.with_pair(from, to, |source, target| {
            let card = source.draw()?;
            let id = card.id;
            target.append(card);
            Ok(id)
        })
    }

    /// Move all cards of `from` on top of `into` and remove `from` from the
    /// table.
    pub fn merge(&mut self, into: ContainerId, from: ContainerId) -> TableResult<()> {
        if into == from {
            return Err(TableError::InvalidTarget(from));
        }
        if !self.containers.contains_key(&into) {
            return Err(TableError::InvalidTarget(into));
        }
        let donor = self.destroy(from)?;
        self.container_mut(into)?.merge_from(donor);
        Ok(())
    }

    /// Shuffle one container.
    pub fn shuffle(&mut self, id: ContainerId, rng: &mut GameRng) -> TableResult<()> {
        self.container_mut(id)?.shuffle(rng);
        Ok(())
    }

    /// Total number of cards across all containers.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.containers.values().map(|c| c.len()).sum()
    }

    fn container_mut(&mut self, id: ContainerId) -> TableResult<&mut Container> {
        self.containers.get_mut(&id).ok_or(TableError::InvalidTarget(id))
    }

    /// Run `f` with mutable access to two distinct containers.
    ///
    /// The source is lifted out of the map for the duration of the call and
    /// always put back, even when `f` fails.
    fn with_pair<R>(
        &mut self,
        source: ContainerId,
        target: ContainerId,
        f: impl FnOnce(&mut Container, &mut Container) -> TableResult<R>,
    ) -> TableResult<R> {
        debug_assert_ne!(source, target);
        if !self.containers.contains_key(&target) {
            return Err(TableError::InvalidTarget(target));
        }
        let mut from = self
            .containers
            .remove(&source)
            .ok_or(TableError::InvalidTarget(source))?;

        let result = match self.containers.get_mut(&target) {
            Some(to) => f(&mut from, to),
            None => Err(TableError::InvalidTarget(target)),
        };

        self.containers.insert(source, from);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_containers() {
        let mut table = Tabletop::new();
        let deck = table.create_deck().unwrap();
        let empty = table.create_empty().unwrap();

        assert_eq!(table.container(deck).unwrap().len(), 52);
        assert!(table.container(empty).unwrap().is_empty());
        assert_eq!(table.container_ids(), vec![deck, empty]);
        assert_eq!(table.total_cards(), 52);
    }

    #[test]
    fn test_two_decks_unique_cards() {
        let mut table = Tabletop::new();
        let a = table.create_deck().unwrap();
        let b = table.create_deck().unwrap();

        let card = table.container(b).unwrap().get(0).unwrap().id;
        assert_eq!(table.owner_of(card), Some(b));

        let first_of_a = table.container(a).unwrap().get(0).unwrap().id;
        assert_ne!(card, first_of_a);
    }

    #[test]
    fn test_move_card_routes_by_owner() {
        let mut table = Tabletop::new();
        let deck = table.create_deck().unwrap();
        let hand = table.create_empty().unwrap();
        let card = table.container(deck).unwrap().get(20).unwrap().id;

        table.move_card(card, hand).unwrap();

        assert_eq!(table.owner_of(card), Some(hand));
        assert!(!table.container(deck).unwrap().contains(card));
        assert_eq!(table.container(deck).unwrap().len(), 51);
        assert_eq!(table.total_cards(), 52);
    }

    #[test]
    fn test_move_card_within_container_goes_on_top() {
        let mut table = Tabletop::new();
        let deck = table.create_deck().unwrap();
        let bottom = table.container(deck).unwrap().get(0).unwrap().id;

        table.move_card(bottom, deck).unwrap();

        let pile = table.container(deck).unwrap();
        assert_eq!(pile.top().unwrap().id, bottom);
        assert_eq!(pile.len(), 52);
    }

    #[test]
    fn test_move_card_invalid_target() {
        let mut table = Tabletop::new();
        let deck = table.create_deck().unwrap();
        let card = table.container(deck).unwrap().get(0).unwrap().id;
        let bogus = ContainerId::new(77);

        assert_eq!(
            table.move_card(card, bogus),
            Err(TableError::InvalidTarget(bogus))
        );
        assert_eq!(table.owner_of(card), Some(deck));
    }

    #[test]
    fn test_move_unknown_card() {
        let mut table = Tabletop::new();
        let hand = table.create_empty().unwrap();

        assert_eq!(
            table.move_card(CardId(500), hand),
            Err(TableError::CardNotFound(CardId(500)))
        );
    }

    #[test]
    fn test_draw_into() {
        let mut table = Tabletop::new();
        let deck = table.create_deck().unwrap();
        let hand = table.create_empty().unwrap();
        let top = table.container(deck).unwrap().top().unwrap().id;

        let drawn = table.draw_into(deck, hand).unwrap();

        assert_eq!(drawn, top);
        assert_eq!(table.owner_of(top), Some(hand));
    }

    #[test]
    fn test_draw_into_from_empty_keeps_containers() {
        let mut table = Tabletop::new();
        let a = table.create_empty().unwrap();
        let b = table.create_empty().unwrap();

        assert_eq!(table.draw_into(a, b), Err(TableError::EmptyContainer(a)));
        assert!(table.container(a).is_some());
        assert!(table.container(b).is_some());
    }

    #[test]
    fn test_merge_destroys_donor() {
        let mut table = Tabletop::new();
        let a = table.create_deck().unwrap();
        let b = table.create_deck().unwrap();
        let from_b = table.container(b).unwrap().get(3).unwrap().id;

        table.merge(a, b).unwrap();

        assert_eq!(table.container(a).unwrap().len(), 104);
        assert!(table.container(b).is_none());
        assert_eq!(table.owner_of(from_b), Some(a));
    }

    #[test]
    fn test_merge_into_self_rejected() {
        let mut table = Tabletop::new();
        let a = table.create_deck().unwrap();

        assert_eq!(table.merge(a, a), Err(TableError::InvalidTarget(a)));
        assert_eq!(table.container(a).unwrap().len(), 52);
    }

    #[test]
    fn test_destroy() {
        let mut table = Tabletop::new();
        let a = table.create_deck().unwrap();

        let removed = table.destroy(a).unwrap();
        assert_eq!(removed.len(), 52);
        assert_eq!(table.total_cards(), 0);
        assert_eq!(table.destroy(a), Err(TableError::InvalidTarget(a)));
    }

    #[test]
    fn test_restore() {
        let mut table = Tabletop::new();
        let a = table.create_deck().unwrap();
        let removed = table.destroy(a).unwrap();
        let copy = removed.clone();

        table.restore(removed).unwrap();
        assert_eq!(table.total_cards(), 52);
        assert_eq!(table.restore(copy), Err(TableError::ContainerExists(a)));
    }

    #[test]
    fn test_restore_rejects_foreign_deck() {
        let mut table = Tabletop::new();
        let a = table.create_deck().unwrap();

        // Same ids, dealt by a different allocator
        let mut other = IdAllocator::new();
        let twin = Container::standard_deck(ContainerId::new(9), &mut other).unwrap();
        let first = twin.get(0).unwrap().id;
        assert_eq!(table.restore(twin), Err(TableError::DuplicateCard(first)));

        // Ids this table never dealt
        let mut ahead = IdAllocator::new();
        for _ in 0..52 {
            ahead.next_card().unwrap();
        }
        let stranger = Container::standard_deck(ContainerId::new(9), &mut ahead).unwrap();
        assert_eq!(
            table.restore(stranger),
            Err(TableError::ForeignCard(CardId(52)))
        );

        assert_eq!(table.container_ids(), vec![a]);
        assert_eq!(table.total_cards(), 52);
    }

    #[test]
    fn test_restore_rejects_card_taken_since() {
        let mut table = Tabletop::new();
        let a = table.create_deck().unwrap();
        let hand = table.create_empty().unwrap();
        let card = table.container(a).unwrap().top().unwrap().id;
        let snapshot = table.destroy(a).unwrap();

        // The snapshot still holds `card`, now put back on the table elsewhere
        table.restore(snapshot.clone()).unwrap();
        table.move_card(card, hand).unwrap();
        let stale = table.destroy(a).unwrap();
        assert_eq!(stale.len(), 51);

        assert_eq!(table.restore(snapshot), Err(TableError::DuplicateCard(card)));
        assert_eq!(table.total_cards(), 1);
    }

    #[test]
    fn test_restore_rejects_wrong_owner() {
        let mut table = Tabletop::new();
        let a = table.create_deck().unwrap();
        let removed = table.destroy(a).unwrap();
        let first = removed.get(0).unwrap().id;

        // Relabelled container whose cards still point at `a`
        let json = serde_json::to_string(&removed)
            .unwrap()
            .replacen("\"id\":0", "\"id\":3", 1);
        let relabelled: Container = serde_json::from_str(&json).unwrap();
        assert_eq!(relabelled.id(), ContainerId::new(3));

        assert_eq!(
            table.restore(relabelled),
            Err(TableError::ForeignCard(first))
        );
    }

    #[test]
    fn test_restore_keeps_allocator_ahead() {
        let mut table = Tabletop::new();
        let a = table.create_deck().unwrap();
        let removed = table.destroy(a).unwrap();
        table.restore(removed).unwrap();

        let b = table.create_empty().unwrap();
        assert_ne!(b, a);
        assert_eq!(table.container_ids(), vec![a, b]);

        table.draw_into(a, b).unwrap();
        assert_eq!(table.total_cards(), 52);
    }

    #[test]
    fn test_container_ids_run_out() {
        let mut table = Tabletop::new();
        for _ in 0..u16::MAX {
            let id = table.create_empty().unwrap();
            table.destroy(id).unwrap();
        }

        assert_eq!(table.create_empty(), Err(TableError::IdsExhausted));
        assert_eq!(table.create_deck(), Err(TableError::IdsExhausted));
        assert_eq!(table.total_cards(), 0);
    }

    #[test]
    fn test_shuffle() {
        let mut table = Tabletop::new();
        let a = table.create_deck().unwrap();
        let before: Vec<_> = table.container(a).unwrap().iter().map(|c| c.id).collect();

        table.shuffle(a, &mut GameRng::new(9)).unwrap();

        let after: Vec<_> = table.container(a).unwrap().iter().map(|c| c.id).collect();
        assert_ne!(before, after);
        assert_eq!(after.len(), 52);
    }
}
