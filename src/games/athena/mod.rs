//! Athena's Towers.
//!
//! A single-player round against a row of face-down towers:
//! - A round deals six towers and a seven-card hand from one shuffled deck
//! - Each turn the player plays a hand card against a standing tower
//! - Kings destroy towers of their own suit outright
//! - Otherwise suit advantage (hearts > spades > diamonds > clubs > hearts)
//!   adds a rank bonus, and the higher or equal rank wins
//! - Destroy every tower to win; run out of health or cards to lose
//!
//! ```
//! use athena_towers::core::GameLogger;
//! use athena_towers::zones::CardContainer;
//! use athena_towers::games::athena::{AthenaTowers, GameStatus};
//!
//! let mut game = AthenaTowers::builder()
//!     .logger(GameLogger::silent())
//!     .build(42)
//!     .unwrap();
//! game.new_state().unwrap();
//!
//! assert_eq!(game.status(), GameStatus::Playing);
//! assert_eq!(game.towers().len(), 6);
//! assert_eq!(game.hand().cards().len(), 7);
//! ```

mod combat;
mod config;
mod error;
mod event;
mod game;
mod record;
mod state;

pub use combat::{check_type_advantage, resolve_attack, AttackOutcome};
pub use config::{FailurePenalty, TowersConfig, DECK_SIZE};
pub use error::{GameError, IndexKind, Result};
pub use event::{Action, ActionEvent};
pub use game::{AthenaTowers, AthenaTowersBuilder, DECK, DISCARD, HAND};
pub use record::GameRecord;
pub use state::{GameState, GameStatus, Tower, TowerRow};
