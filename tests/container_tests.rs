//! Container model tests.
//!
//! These tests verify the ownership rules of the card model:
//! - A card sits in exactly one container
//! - Its owner back-reference always names that container
//! - Moves, merges, draws and shuffles conserve cards

use std::collections::HashSet;

use athena_towers::core::{CardId, ContainerId, GameRng, IdAllocator, TableError};
use athena_towers::zones::{move_to, CardContainer, Container, Tabletop};
use proptest::prelude::*;

/// Every card on the table is held once and points at its holder.
fn assert_consistent(table: &Tabletop) {
    let mut seen = HashSet::new();
    for id in table.container_ids() {
        let container = table.container(id).unwrap();
        for card in container.cards() {
            assert_eq!(card.owner, Some(id), "{} points at the wrong container", card.id);
            assert!(seen.insert(card.id), "{} is held twice", card.id);
        }
    }
}

/// Test that a move updates both sequences and the back-reference.
#[test]
fn test_move_between_containers() {
    let mut ids = IdAllocator::new();
    let mut deck = Container::standard_deck(ContainerId::new(0), &mut ids).unwrap();
    let mut pile = Container::empty(ContainerId::new(1));
    let card = deck.get(20).unwrap().id;

    move_to(card, &mut deck, &mut pile).unwrap();

    assert!(!deck.contains(card));
    assert!(pile.contains(card));
    assert_eq!(pile.top().unwrap().owner, Some(pile.id()));
    assert_eq!(deck.len() + pile.len(), 52);
}

/// Test that the tabletop routes moves through the owner back-reference.
#[test]
fn test_tabletop_routes_by_owner() {
    let mut table = Tabletop::new();
    let deck = table.create_deck().unwrap();
    let a = table.create_empty().unwrap();
    let b = table.create_empty().unwrap();

    let card = table.draw_into(deck, a).unwrap();
    table.move_card(card, b).unwrap();

    assert_eq!(table.owner_of(card), Some(b));
    assert!(table.container(a).unwrap().is_empty());
    assert_eq!(table.total_cards(), 52);
    assert_consistent(&table);
}

/// Test that moving to a missing container fails loudly and changes nothing.
#[test]
fn test_move_to_unknown_container() {
    let mut table = Tabletop::new();
    let deck = table.create_deck().unwrap();
    let card = table.container(deck).unwrap().top().unwrap().id;
    let missing = ContainerId::new(99);

    assert_eq!(
        table.move_card(card, missing),
        Err(TableError::InvalidTarget(missing))
    );
    assert_eq!(table.owner_of(card), Some(deck));
    assert_eq!(table.container(deck).unwrap().len(), 52);
}

/// Test moving a card that isn't on the table.
#[test]
fn test_move_unknown_card() {
    let mut table = Tabletop::new();
    let deck = table.create_deck().unwrap();

    assert_eq!(
        table.move_card(CardId(10_000), deck),
        Err(TableError::CardNotFound(CardId(10_000)))
    );
}

/// Test that drawing from an empty container reports which one.
#[test]
fn test_draw_from_empty() {
    let mut table = Tabletop::new();
    let empty = table.create_empty().unwrap();
    let other = table.create_empty().unwrap();

    assert_eq!(
        table.draw_into(empty, other),
        Err(TableError::EmptyContainer(empty))
    );
    // Both containers are still on the table
    assert_eq!(table.container_ids(), vec![empty, other]);
}

/// Test merging two decks and destroying the donor.
#[test]
fn test_merge_two_decks() {
    let mut table = Tabletop::new();
    let a = table.create_deck().unwrap();
    let b = table.create_deck().unwrap();
    let b_cards: Vec<_> = table.container(b).unwrap().iter().map(|c| c.id).collect();

    table.merge(a, b).unwrap();

    let merged = table.container(a).unwrap();
    assert_eq!(merged.len(), 104);
    assert!(table.container(b).is_none());
    for id in b_cards {
        assert_eq!(table.owner_of(id), Some(a));
    }
    assert_consistent(&table);
}

/// Test that destroying a container hands its cards back to the caller.
#[test]
fn test_destroy_returns_cards() {
    let mut table = Tabletop::new();
    let deck = table.create_deck().unwrap();

    let removed = table.destroy(deck).unwrap();

    assert_eq!(removed.len(), 52);
    assert_eq!(table.total_cards(), 0);
    assert_eq!(table.destroy(deck), Err(TableError::InvalidTarget(deck)));
}

/// Test that a deck dealt by another table can't be restored onto this one.
#[test]
fn test_restore_foreign_deck() {
    let mut table = Tabletop::new();
    let deck = table.create_deck().unwrap();

    let mut other = Tabletop::new();
    other.create_empty().unwrap();
    let twin = other.create_deck().unwrap();
    let twin = other.destroy(twin).unwrap();

    assert_eq!(
        table.restore(twin),
        Err(TableError::DuplicateCard(CardId(0)))
    );
    assert_eq!(table.container_ids(), vec![deck]);
    assert_eq!(table.total_cards(), 52);
    assert_consistent(&table);

    // A legitimately restored container doesn't collide with later ones
    let removed = table.destroy(deck).unwrap();
    table.restore(removed).unwrap();
    let pile = table.create_empty().unwrap();
    table.draw_into(deck, pile).unwrap();
    assert_consistent(&table);
}

/// Test that card ids stay unique across every deck on a table.
#[test]
fn test_ids_unique_across_decks() {
    let mut table = Tabletop::new();
    for _ in 0..3 {
        table.create_deck().unwrap();
    }
    assert_consistent(&table);
    assert_eq!(table.total_cards(), 156);
}

#[derive(Clone, Debug)]
enum Op {
    Move { card: usize, target: usize },
    Draw { from: usize, to: usize },
    Shuffle { target: usize, seed: u64 },
    Merge { into: usize, from: usize },
    DestroyRestore { target: usize },
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0..200usize, 0..4usize).prop_map(|(card, target)| Op::Move { card, target }),
        3 => (0..4usize, 0..4usize).prop_map(|(from, to)| Op::Draw { from, to }),
        1 => (0..4usize, any::<u64>()).prop_map(|(target, seed)| Op::Shuffle { target, seed }),
        1 => (0..4usize, 0..4usize).prop_map(|(into, from)| Op::Merge { into, from }),
        1 => (0..4usize).prop_map(|target| Op::DestroyRestore { target }),
    ]
}

proptest! {
    /// Any sequence of table operations keeps ownership exclusive and
    /// conserves cards. Failed operations leave the table untouched.
    #[test]
    fn prop_operations_preserve_ownership(ops in prop::collection::vec(op(), 1..60)) {
        let mut table = Tabletop::new();
        table.create_deck().unwrap();
        table.create_deck().unwrap();
        table.create_empty().unwrap();
        table.create_empty().unwrap();

        let all_cards: Vec<CardId> = table
            .container_ids()
            .into_iter()
            .flat_map(|id| table.container(id).unwrap().iter().map(|c| c.id).collect::<Vec<_>>())
            .collect();

        for op in ops {
            // Containers can disappear through merges; pick from what's left.
            let live = table.container_ids();
            let pick = |i: usize| live[i % live.len()];

            match op {
                Op::Move { card, target } => {
                    let card = all_cards[card % all_cards.len()];
                    let target = pick(target);
                    table.move_card(card, target).unwrap();
                    prop_assert_eq!(table.owner_of(card), Some(target));
                    prop_assert_eq!(table.container(target).unwrap().top().unwrap().id, card);
                }
                Op::Draw { from, to } => {
                    let (from, to) = (pick(from), pick(to));
                    let before = table.container(from).unwrap().len();
                    match table.draw_into(from, to) {
                        Ok(card) => prop_assert_eq!(table.owner_of(card), Some(to)),
                        Err(_) => prop_assert!(from == to || before == 0),
                    }
                }
                Op::Shuffle { target, seed } => {
                    let target = pick(target);
                    let mut before: Vec<_> = table.container(target).unwrap().iter().map(|c| c.id).collect();
                    table.shuffle(target, &mut GameRng::new(seed)).unwrap();
                    let mut after: Vec<_> = table.container(target).unwrap().iter().map(|c| c.id).collect();
                    before.sort();
                    after.sort();
                    prop_assert_eq!(before, after);
                }
                Op::Merge { into, from } => {
                    let (into, from) = (pick(into), pick(from));
                    if into == from {
                        prop_assert!(table.merge(into, from).is_err());
                    } else {
                        let expected = table.container(into).unwrap().len()
                            + table.container(from).unwrap().len();
                        table.merge(into, from).unwrap();
                        prop_assert_eq!(table.container(into).unwrap().len(), expected);
                        prop_assert!(table.container(from).is_none());
                    }
                }
                Op::DestroyRestore { target } => {
                    let target = pick(target);
                    let removed = table.destroy(target).unwrap();
                    let held: Vec<_> = removed.iter().map(|c| c.id).collect();
                    prop_assert_eq!(table.total_cards(), 104 - held.len());
                    for &card in &held {
                        prop_assert_eq!(table.owner_of(card), None);
                    }

                    let copy = removed.clone();
                    table.restore(removed).unwrap();
                    prop_assert_eq!(table.restore(copy), Err(TableError::ContainerExists(target)));
                    for &card in &held {
                        prop_assert_eq!(table.owner_of(card), Some(target));
                    }
                }
            }

            prop_assert_eq!(table.total_cards(), 104);
            assert_consistent(&table);
        }
    }

    /// Drawing n cards and putting them elsewhere conserves the deck.
    #[test]
    fn prop_draw_n_conserves(n in 0..=52usize, seed in any::<u64>()) {
        let mut ids = IdAllocator::new();
        let mut deck = Container::standard_deck(ContainerId::new(0), &mut ids).unwrap();
        deck.shuffle(&mut GameRng::new(seed));
        let mut hand = Container::empty(ContainerId::new(1));

        for card in deck.draw_n(n).unwrap() {
            hand.append(card);
        }

        prop_assert_eq!(deck.len() + hand.len(), 52);
        prop_assert!(hand.iter().all(|c| c.owner == Some(hand.id())));
        prop_assert!(deck.iter().all(|c| !hand.contains(c.id)));
    }
}
