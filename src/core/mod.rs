//! Core building blocks shared by every game on the table.
//!
//! Identity, deterministic randomness, the append-only event log, error
//! types and logging. Nothing here knows about towers or dice.

pub mod action;
pub mod entity;
pub mod error;
pub mod logger;
pub mod rng;

pub use action::{ActionLog, ActionRecord};
pub use entity::{CardId, ContainerId, IdAllocator};
pub use error::{TableError, TableResult};
pub use logger::{GameLogger, LogEntry, OutputMode, VerbosityLevel};
pub use rng::GameRng;
