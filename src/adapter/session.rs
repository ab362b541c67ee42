//! Session: one game session driven by protocol commands.
//!
//! Decouples the simulation from any particular host embedding: whatever can
//! produce `Command` values and consume `Outbound` messages can run a game.

use crate::adapter::protocol::{Command, Outbound};
use crate::core::Game;

pub struct Session {
    game: Game,
}

impl Session {
    pub fn new(seed: u32) -> Self {
        Self {
            game: Game::new(seed),
        }
    }

    /// Dispatch one command, returning the messages it produced.
    pub fn handle(&mut self, command: Command) -> Vec<Outbound> {
        match command {
            Command::Init => self.game.init().into_iter().map(Outbound::from).collect(),
            Command::Tick { ts } => self.game.step(ts).into_iter().map(Outbound::from).collect(),
            Command::SetDirection { direction } => {
                self.game.change_direction(direction);
                Vec::new()
            }
            Command::Query => vec![Outbound::state_of(&self.game)],
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }
}
