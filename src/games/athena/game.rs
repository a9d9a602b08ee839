//! The tower game engine.

use super::combat::{self, resolve_attack, AttackOutcome};
use super::config::TowersConfig;
use super::error::{GameError, IndexKind, Result};
use super::event::{Action, ActionEvent};
use super::state::{GameState, GameStatus, Tower};
use crate::cards::Card;
use crate::core::{ActionLog, ContainerId, GameLogger, GameRng, IdAllocator, TableError};
use crate::rules::{GameResult, RulesEngine};
use crate::zones::{move_to, CardContainer, Container};

/// Container id of the draw pile.
pub const DECK: ContainerId = ContainerId(0);
/// Container id of the player's hand.
pub const HAND: ContainerId = ContainerId(1);
/// Container id of the discard pile.
pub const DISCARD: ContainerId = ContainerId(2);

/// One game of Athena's Towers.
///
/// Owns the three card containers and the round state. Every card of the
/// deck is always in exactly one of: the deck, the hand, the discard pile,
/// or a tower slot.
#[derive(Clone, Debug)]
pub struct AthenaTowers {
    config: TowersConfig,
    deck: Container,
    hand: Container,
    discard: Container,
    state: GameState,
    log: ActionLog<ActionEvent>,
    /// Actions applied so far, in order.
    history: Vec<Action>,
    rng: GameRng,
    logger: GameLogger,
}

/// Builder for creating an AthenaTowers game.
#[derive(Clone, Debug, Default)]
pub struct AthenaTowersBuilder {
    config: TowersConfig,
    logger: GameLogger,
}

impl AthenaTowersBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: TowersConfig) -> Self {
        self.config = config;
        self
    }

    pub fn logger(mut self, logger: GameLogger) -> Self {
        self.logger = logger;
        self
    }

    /// Build the game with a freshly shuffled deck.
    ///
    /// No round is dealt; the game starts out `Waiting`.
    pub fn build(self, seed: u64) -> Result<AthenaTowers> {
        self.config.validate()?;
        AthenaTowers::with_parts(self.config, self.logger, seed)
    }
}

impl AthenaTowers {
    pub fn builder() -> AthenaTowersBuilder {
        AthenaTowersBuilder::new()
    }

    fn with_parts(config: TowersConfig, logger: GameLogger, seed: u64) -> Result<Self> {
        let mut ids = IdAllocator::new();
        let mut deck = Container::standard_deck(DECK, &mut ids)?;
        let mut rng = GameRng::new(seed);
        deck.shuffle(&mut rng);

        logger.verbose(
            "setup",
            format!("Shuffled {} cards with seed {seed}", deck.len()),
        );

        Ok(Self {
            config,
            deck,
            hand: Container::empty(HAND),
            discard: Container::empty(DISCARD),
            state: GameState::default(),
            log: ActionLog::new(),
            history: Vec::new(),
            rng,
            logger,
        })
    }

    // === Accessors ===

    pub fn config(&self) -> &TowersConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn health(&self) -> u32 {
        self.state.health
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn round(&self) -> u32 {
        self.state.round
    }

    pub fn towers(&self) -> &[Tower] {
        &self.state.towers
    }

    pub fn hand(&self) -> &Container {
        &self.hand
    }

    pub fn deck(&self) -> &Container {
        &self.deck
    }

    pub fn discard(&self) -> &Container {
        &self.discard
    }

    pub fn log(&self) -> &ActionLog<ActionEvent> {
        &self.log
    }

    pub fn history(&self) -> &[Action] {
        &self.history
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn logger(&self) -> &GameLogger {
        &self.logger
    }

    pub fn logger_mut(&mut self) -> &mut GameLogger {
        &mut self.logger
    }

    /// Cards across every container and tower slot.
    pub fn total_cards(&self) -> usize {
        self.deck.len() + self.hand.len() + self.discard.len() + self.state.towers.len()
    }

    /// Does `card`'s suit dominate `tower`'s?
    pub fn check_type_advantage(&self, card: &Card, tower: &Card) -> bool {
        combat::check_type_advantage(card, tower)
    }

    // === Operations ===

    /// Deal a new round.
    ///
    /// Cards left over from the previous round (hand and towers) go to the
    /// discard pile first. Then `tower_count` face-down towers are drawn,
    /// health resets, and `hand_size` cards are drawn into the hand.
    ///
    /// Fails with `EmptyContainer` before touching anything if the deck
    /// can't supply a full round.
    pub fn new_state(&mut self) -> Result<()> {
        let needed = self.config.cards_per_round();
        if self.deck.len() < needed {
            return Err(TableError::EmptyContainer(DECK).into());
        }

        self.clear_table()?;

        let towers = self.deck.draw_n(self.config.tower_count)?;
        self.state.towers = towers.into_iter().map(Tower::new).collect();
        self.state.health = self.config.starting_health;
        self.state.round += 1;

        for _ in 0..self.config.hand_size {
            let card = self.deck.draw()?;
            self.hand.append(card);
        }

        self.logger.normal(
            "round",
            format!(
                "Round {}: {} towers, {} cards in hand, {} health",
                self.state.round,
                self.state.towers.len(),
                self.hand.len(),
                self.state.health
            ),
        );
        self.push_event(ActionEvent::RoundStarted {
            health: self.state.health,
            towers: self.state.towers.iter().map(|t| t.card).collect(),
            hand: self.hand.cards().to_vec(),
        });
        self.set_status(GameStatus::Playing);
        self.history.push(Action::NewRound);

        Ok(())
    }

    /// Attack tower `tower_index` with the hand card at `hand_index`.
    ///
    /// Resolution order: a king of the tower's suit always wins; otherwise
    /// type advantage adds the configured bonus; otherwise plain rank
    /// comparison. A hidden tower is revealed whatever the outcome. The
    /// played card is discarded, and a failed attack costs health.
    pub fn act_on(&mut self, hand_index: usize, tower_index: usize) -> Result<AttackOutcome> {
        if self.state.status != GameStatus::Playing {
            return Err(GameError::NotPlaying(self.state.status));
        }

        let Some(played) = self.hand.get(hand_index).copied() else {
            return Err(GameError::InvalidIndex {
                kind: IndexKind::Hand,
                index: hand_index,
                len: self.hand.len(),
            });
        };
        let Some(tower) = self.state.towers.get(tower_index).copied() else {
            return Err(GameError::InvalidIndex {
                kind: IndexKind::Tower,
                index: tower_index,
                len: self.state.towers.len(),
            });
        };
        if tower.destroyed {
            return Err(GameError::TowerDestroyed(tower_index));
        }

        let outcome = resolve_attack(&played, &tower.card, self.config.type_advantage_bonus);
        self.push_event(ActionEvent::Attacked {
            played,
            tower: tower_index,
        });

        if outcome.destroyed {
            self.state.towers[tower_index].destroyed = true;
            self.logger.normal(
                "combat",
                format!("{played} destroys tower {tower_index} ({})", tower.card),
            );
            self.push_event(ActionEvent::Destroyed {
                tower: tower_index,
                played,
                first: tower.hidden,
                type_advantage: outcome.type_advantage,
                matched: outcome.matched,
            });
        } else {
            self.logger.normal(
                "combat",
                format!("{played} fails against tower {tower_index} ({})", tower.card),
            );
        }

        if tower.hidden {
            self.state.towers[tower_index].hidden = false;
            self.logger
                .verbose("combat", format!("Tower {tower_index} revealed: {}", tower.card));
            self.push_event(ActionEvent::Revealed {
                tower: tower_index,
                card: tower.card,
            });
        }

        move_to(played.id, &mut self.hand, &mut self.discard)?;
        self.push_event(ActionEvent::Discarded { card: played });

        if !outcome.destroyed {
            let amount = self.config.failure_penalty.amount(tower.card.rank.value());
            if amount > 0 {
                self.state.health = self.state.health.saturating_sub(amount);
                self.logger.normal(
                    "combat",
                    format!("Lost {amount} health, {} left", self.state.health),
                );
                self.push_event(ActionEvent::HealthLost {
                    amount,
                    remaining: self.state.health,
                });
            }
        }

        self.settle_status();
        self.history.push(Action::Act {
            hand: hand_index,
            tower: tower_index,
        });

        Ok(outcome)
    }

    /// Shuffle the discard pile back into the deck.
    ///
    /// Returns how many cards were recycled.
    pub fn recycle_discards(&mut self) -> usize {
        let discards = std::mem::replace(&mut self.discard, Container::empty(DISCARD));
        let count = discards.len();

        self.deck.merge_from(discards);
        self.deck.shuffle(&mut self.rng);

        self.logger.verbose(
            "deck",
            format!("Recycled {count} discards, deck has {}", self.deck.len()),
        );
        self.push_event(ActionEvent::DiscardsRecycled { count });
        self.history.push(Action::RecycleDiscards);

        count
    }

    // === Internals ===

    /// Move the previous round's hand and tower cards to the discard pile.
    fn clear_table(&mut self) -> Result<()> {
        let held: Vec<_> = self.hand.cards().iter().map(|c| c.id).collect();
        for id in held {
            move_to(id, &mut self.hand, &mut self.discard)?;
        }

        for tower in self.state.towers.drain(..) {
            self.discard.append(tower.card);
        }

        Ok(())
    }

    /// Move a `Playing` game to `Won` or `Lost` once the round is decided.
    fn settle_status(&mut self) {
        if self.state.status != GameStatus::Playing {
            return;
        }

        if self.state.all_destroyed() {
            self.set_status(GameStatus::Won);
        } else if self.state.health == 0 || self.hand.is_empty() {
            self.set_status(GameStatus::Lost);
        }
    }

    fn set_status(&mut self, to: GameStatus) {
        let from = self.state.status;
        if from == to {
            return;
        }

        self.state.status = to;
        match to {
            GameStatus::Won => self.logger.minimal("status", "All towers destroyed, you win!"),
            GameStatus::Lost => self.logger.minimal("status", "You lose."),
            _ => self.logger.verbose("status", format!("{from} -> {to}")),
        }
        self.push_event(ActionEvent::StatusChanged { from, to });
    }

    fn push_event(&mut self, event: ActionEvent) {
        self.log.push(self.state.round, event);
    }
}

impl RulesEngine for AthenaTowers {
    type Action = Action;
    type Error = GameError;

    fn legal_actions(&self) -> Vec<Action> {
        let mut actions = Vec::new();

        if self.state.status == GameStatus::Playing {
            for (tower, t) in self.state.towers.iter().enumerate() {
                if t.destroyed {
                    continue;
                }
                for hand in 0..self.hand.len() {
                    actions.push(Action::Act { hand, tower });
                }
            }
        }

        if self.deck.len() >= self.config.cards_per_round() {
            actions.push(Action::NewRound);
        }
        if !self.discard.is_empty() {
            actions.push(Action::RecycleDiscards);
        }

        actions
    }

    fn apply_action(&mut self, action: &Action) -> Result<()> {
        match *action {
            Action::NewRound => self.new_state(),
            Action::Act { hand, tower } => self.act_on(hand, tower).map(|_| ()),
            Action::RecycleDiscards => {
                self.recycle_discards();
                Ok(())
            }
        }
    }

    fn is_terminal(&self) -> Option<GameResult> {
        match self.state.status {
            GameStatus::Won => Some(GameResult::Victory),
            GameStatus::Lost => Some(GameResult::Defeat),
            GameStatus::Waiting | GameStatus::Playing => None,
        }
    }
}
