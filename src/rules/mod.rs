//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define:
//! - Legal actions for the current state
//! - How actions modify state
//! - Win/loss conditions
//!
//! Replay and simulation code only talks to games through this trait.

pub mod engine;

pub use engine::{GameResult, RulesEngine};
