//! Input module - maps terminal key events onto the simulation's inputs
//!
//! The simulation only understands four discrete direction codes; everything
//! else here (quit, restart) is host-level and never reaches the core.

pub mod map;

pub use map::{direction_for_key, is_restart, should_quit};
