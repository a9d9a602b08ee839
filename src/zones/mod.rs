//! Containers of cards and the table that holds them.
//!
//! ## Key Types
//!
//! - `CardContainer`: the pull/append capability shared by every pile
//! - `Container`: ordered pile with exclusive ownership of its cards
//! - `move_to`: the only way a card changes containers
//! - `Tabletop`: many containers, card moves routed by owner back-reference

pub mod container;
pub mod tabletop;

pub use container::{move_to, CardContainer, Container};
pub use tabletop::Tabletop;
