//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define their rules:
//! - What actions are legal
//! - How actions modify state
//! - When the game is over

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    Victory,
    Defeat,
}

impl GameResult {
    #[must_use]
    pub fn is_victory(self) -> bool {
        matches!(self, GameResult::Victory)
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: Return empty vec if nothing can be done
/// - `apply_action`: Must be deterministic so games can be replayed
/// - `is_terminal`: Return None if the game continues
pub trait RulesEngine {
    type Action;
    type Error;

    /// Every action `apply_action` would currently accept.
    fn legal_actions(&self) -> Vec<Self::Action>;

    /// Apply an action to the game.
    fn apply_action(&mut self, action: &Self::Action) -> Result<(), Self::Error>;

    /// Returns `Some(result)` if the game has ended.
    fn is_terminal(&self) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Apply actions in order, stopping at the first error.
    fn apply_all<'a, I>(&mut self, actions: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = &'a Self::Action>,
        Self::Action: 'a,
    {
        for action in actions {
            self.apply_action(action)?;
        }
        Ok(())
    }
}
