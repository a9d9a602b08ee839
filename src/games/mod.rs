//! Games built on the card model.

pub mod athena;
