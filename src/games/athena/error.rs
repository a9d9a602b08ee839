//! Errors raised by the tower game.

use thiserror::Error;

use super::state::GameStatus;
use crate::core::error::TableError;

/// Which sequence an index pointed into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexKind {
    Hand,
    Tower,
}

impl std::fmt::Display for IndexKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            IndexKind::Hand => "hand",
            IndexKind::Tower => "tower",
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid {kind} index {index} (have {len})")]
    InvalidIndex {
        kind: IndexKind,
        index: usize,
        len: usize,
    },

    #[error("no round in progress (game is {0})")]
    NotPlaying(GameStatus),

    #[error("tower {0} is already destroyed")]
    TowerDestroyed(usize),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("game record error: {0}")]
    Record(String),

    #[error(transparent)]
    Table(#[from] TableError),
}

pub type Result<T, E = GameError> = std::result::Result<T, E>;
