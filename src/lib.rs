//! # athena-towers
//!
//! A small card-table engine and the tower game played on it.
//!
//! ## Design Principles
//!
//! 1. **Exclusive Ownership**: Every card lives in exactly one container.
//!    A card's `owner` is a plain id back-reference, never a pointer, and
//!    changes only through `move_to`.
//!
//! 2. **Deterministic**: All randomness comes from an injected, seeded
//!    `GameRng`. A seed plus an action list replays a game exactly.
//!
//! 3. **Everything Is Logged**: Engines record every resolved change in an
//!    append-only `ActionLog`.
//!
//! ## Modules
//!
//! - `core`: Ids, RNG, action log, errors, logger
//! - `cards`: Suits, ranks and physical cards
//! - `zones`: Containers and the tabletop that routes card moves
//! - `rules`: RulesEngine trait for game implementations
//! - `games`: Athena's Towers
//! - `dice`: Dice notation parser and roller

pub mod core;
pub mod cards;
pub mod zones;
pub mod rules;
pub mod games;
pub mod dice;

// Re-export commonly used types
pub use crate::core::{
    ActionLog, ActionRecord,
    CardId, ContainerId, IdAllocator,
    GameLogger, OutputMode, VerbosityLevel,
    GameRng,
    TableError, TableResult,
};

pub use crate::cards::{Card, Colour, Rank, Suit};

pub use crate::zones::{move_to, CardContainer, Container, Tabletop};

pub use crate::rules::{GameResult, RulesEngine};

pub use crate::games::athena::{
    Action, ActionEvent, AthenaTowers, AthenaTowersBuilder, AttackOutcome,
    GameError, GameRecord, GameState, GameStatus, Tower, TowersConfig,
};

pub use crate::dice::{parse as parse_dice, roll as roll_dice, DiceNotation, DiceRoll};
