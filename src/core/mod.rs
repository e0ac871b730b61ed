//! Core engine types: seats, RNG, configuration and errors.
//!
//! These are the building blocks shared by every other module. None of them
//! knows the Parade rules; they only shape a table.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use config::ParadeConfig;
pub use error::ParadeError;
