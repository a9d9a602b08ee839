//! Dice notation: `[count]d<sides>[+modifier]`.
//!
//! Independent of the card model. Parsing never fails loudly: bad input
//! comes back as a `DiceNotation` with `valid == false` and zeroed fields.
//! Rolls draw from an injected `GameRng`.

pub mod notation;
pub mod roll;

pub use notation::{parse, DiceError, DiceNotation, MAX_DICE};
pub use roll::{quick_roll, roll, roll_notation, DiceRoll};
