//! Standard playing cards.
//!
//! ## Key Types
//!
//! - `Suit`, `Rank`, `Colour`: the face of a card
//! - `Card`: a physical card with identity and an owner back-reference

pub mod card;

pub use card::{Card, Colour, Rank, Suit};
