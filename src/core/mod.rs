//! Core module - pure simulation logic with no dependencies on UI or I/O
//!
//! This module contains the game rules and state: the ring-buffer snake body,
//! the per-step transition function, and the scoring/speed/game-over rules.
//! Everything here is deterministic given a random source.

pub mod game;
pub mod grid;
pub mod rng;
pub mod snake;

// Re-export commonly used types
pub use game::{Events, Game};
pub use rng::{RandomSource, SimpleRng};
pub use snake::Snake;
