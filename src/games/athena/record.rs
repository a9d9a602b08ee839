//! Replayable game records.
//!
//! A game is fully determined by its seed, its configuration and the list of
//! actions applied to it. `GameRecord` captures those three things so a game
//! can be rebuilt elsewhere and compared against the original.

use serde::{Deserialize, Serialize};

use super::config::TowersConfig;
use super::error::{GameError, Result};
use super::event::Action;
use super::game::AthenaTowers;
use crate::core::GameLogger;
use crate::rules::RulesEngine;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub seed: u64,
    pub config: TowersConfig,
    pub actions: Vec<Action>,
}

impl GameRecord {
    /// Rebuild the game by applying every recorded action to a fresh game.
    ///
    /// The replayed game logs nothing.
    pub fn replay(&self) -> Result<AthenaTowers> {
        let mut game = AthenaTowers::builder()
            .config(self.config.clone())
            .logger(GameLogger::silent())
            .build(self.seed)?;
        game.apply_all(&self.actions)?;
        Ok(game)
    }

    /// Compact binary form.
    pub fn encode(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(|e| GameError::Record(e.to_string()))
    }

    pub fn decode(bytes: &[u8]) -> Result<Self> {
        bincode::deserialize(bytes).map_err(|e| GameError::Record(e.to_string()))
    }
}

impl AthenaTowers {
    /// Everything needed to replay this game so far.
    pub fn record(&self) -> GameRecord {
        GameRecord {
            seed: self.seed(),
            config: self.config().clone(),
            actions: self.history().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn played_game() -> AthenaTowers {
        let mut game = AthenaTowers::builder()
            .logger(GameLogger::silent())
            .build(2024)
            .unwrap();
        game.new_state().unwrap();
        game.act_on(0, 0).unwrap();
        game.act_on(2, 3).unwrap();
        game
    }

    #[test]
    fn test_record_captures_history() {
        let record = played_game().record();

        assert_eq!(record.seed, 2024);
        assert_eq!(record.actions[0], Action::NewRound);
        assert_eq!(record.actions.len(), 3);
    }

    #[test]
    fn test_replay_matches() {
        let game = played_game();
        let replayed = game.record().replay().unwrap();

        assert_eq!(replayed.state(), game.state());
        assert_eq!(replayed.hand(), game.hand());
        assert_eq!(replayed.discard(), game.discard());
        assert_eq!(replayed.log(), game.log());
    }

    #[test]
    fn test_encode_decode() {
        let record = played_game().record();
        let bytes = record.encode().unwrap();

        assert_eq!(GameRecord::decode(&bytes).unwrap(), record);
    }

    #[test]
    fn test_decode_garbage() {
        assert!(matches!(
            GameRecord::decode(&[0xff, 0x01]),
            Err(GameError::Record(_))
        ));
    }

    #[test]
    fn test_replay_bad_action_fails() {
        let record = GameRecord {
            seed: 1,
            config: TowersConfig::default(),
            actions: vec![Action::Act { hand: 0, tower: 0 }],
        };

        assert!(matches!(record.replay(), Err(GameError::NotPlaying(_))));
    }
}
