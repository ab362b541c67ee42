//! Protocol module - JSON message types for external hosts
//!
//! Line-delimited JSON: one command in per line, zero or more messages out
//! per command. Tags are snake_case in a `type` field.

use serde::{Deserialize, Serialize};

use crate::core::Game;
use crate::types::{Direction, GameEvent, Position};

impl Serialize for Direction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Direction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <&str>::deserialize(deserializer)?;
        Direction::from_str(s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid direction: {s}")))
    }
}

/// Wire form of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl From<Position> for Point {
    fn from(pos: Position) -> Self {
        Self { x: pos.x, y: pos.y }
    }
}

/// Host -> game messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// (Re)start the session.
    Init,
    /// Advance the simulation one step.
    Tick { ts: i32 },
    /// Request a heading change.
    SetDirection { direction: Direction },
    /// Ask for a full state snapshot (observer support).
    Query,
}

/// Game -> host messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Outbound {
    ScoreChanged {
        score: i32,
    },
    StepPeriodChanged {
        period_ms: i32,
    },
    GameOver,
    State {
        snake: Vec<Point>,
        apple: Point,
        score: i32,
        next_reward: i32,
        step_period_ms: i32,
    },
    Error {
        message: String,
    },
}

impl From<GameEvent> for Outbound {
    fn from(event: GameEvent) -> Self {
        match event {
            GameEvent::ScoreChanged(score) => Outbound::ScoreChanged { score },
            GameEvent::StepPeriodChanged(period_ms) => Outbound::StepPeriodChanged { period_ms },
            GameEvent::GameOver => Outbound::GameOver,
        }
    }
}

impl Outbound {
    /// Snapshot of the full session state.
    pub fn state_of(game: &Game) -> Self {
        Outbound::State {
            snake: game.snake().segments().map(Point::from).collect(),
            apple: game.apple().into(),
            score: game.score(),
            next_reward: game.next_reward(),
            step_period_ms: game.step_period(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_wire_format() {
        let init: Command = serde_json::from_str(r#"{"type":"init"}"#).unwrap();
        assert_eq!(init, Command::Init);

        let tick: Command = serde_json::from_str(r#"{"type":"tick","ts":1200}"#).unwrap();
        assert_eq!(tick, Command::Tick { ts: 1200 });

        let steer: Command =
            serde_json::from_str(r#"{"type":"set_direction","direction":"left"}"#).unwrap();
        assert_eq!(
            steer,
            Command::SetDirection {
                direction: Direction::Left
            }
        );
    }

    #[test]
    fn test_unknown_direction_is_rejected() {
        let result =
            serde_json::from_str::<Command>(r#"{"type":"set_direction","direction":"back"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_outbound_wire_format() {
        let json = serde_json::to_string(&Outbound::ScoreChanged { score: 30 }).unwrap();
        assert_eq!(json, r#"{"type":"score_changed","score":30}"#);

        let json = serde_json::to_string(&Outbound::StepPeriodChanged { period_ms: 275 }).unwrap();
        assert_eq!(json, r#"{"type":"step_period_changed","period_ms":275}"#);

        let json = serde_json::to_string(&Outbound::GameOver).unwrap();
        assert_eq!(json, r#"{"type":"game_over"}"#);
    }

    #[test]
    fn test_event_conversion() {
        assert_eq!(
            Outbound::from(GameEvent::ScoreChanged(10)),
            Outbound::ScoreChanged { score: 10 }
        );
        assert_eq!(
            Outbound::from(GameEvent::StepPeriodChanged(275)),
            Outbound::StepPeriodChanged { period_ms: 275 }
        );
        assert_eq!(Outbound::from(GameEvent::GameOver), Outbound::GameOver);
    }

    #[test]
    fn test_state_snapshot_contents() {
        let mut game = Game::new(12345);
        game.init();

        match Outbound::state_of(&game) {
            Outbound::State {
                snake,
                score,
                next_reward,
                step_period_ms,
                ..
            } => {
                assert_eq!(snake.len(), 4);
                assert_eq!(snake[3], Point { x: 3, y: 0 });
                assert_eq!(score, 0);
                assert_eq!(next_reward, 10);
                assert_eq!(step_period_ms, 300);
            }
            other => panic!("expected state snapshot, got {:?}", other),
        }
    }
}
