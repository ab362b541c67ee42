//! Game session state - owns the snake, apple, scoring, and speed progression
//!
//! One `Game` value is one play session. The host calls `init` to (re)start,
//! `step` on its own cadence, and `change_direction` between steps; each
//! `init`/`step` returns the notifications that fired. There is no internal
//! stopped state: after a `GameOver` notification the session keeps simulating
//! if the host keeps stepping.

use arrayvec::ArrayVec;

use crate::core::rng::{RandomSource, SimpleRng};
use crate::core::snake::Snake;
use crate::types::{
    Direction, GameEvent, Position, GRID_HEIGHT, GRID_WIDTH, INITIAL_REWARD,
    INITIAL_STEP_PERIOD_MS, MIN_STEP_PERIOD_MS, REWARD_INCREMENT, STEP_PERIOD_DECREMENT_MS,
};

/// Notifications fired by a single `init` or `step` call.
/// A step fires at most three (period, score, game over).
pub type Events = ArrayVec<GameEvent, 4>;

pub struct Game {
    snake: Snake,
    apple: Position,
    score: i32,
    next_reward: i32,
    step_period: i32,
    rng: Box<dyn RandomSource + Send>,
}

impl Game {
    /// Create a session with the default seeded RNG. Call `init` before stepping.
    pub fn new(seed: u32) -> Self {
        Self::with_rng(Box::new(SimpleRng::new(seed)))
    }

    /// Create a session with a caller-supplied random source.
    pub fn with_rng(rng: Box<dyn RandomSource + Send>) -> Self {
        Self {
            snake: Snake::new(),
            apple: Position::new(0, 0),
            score: 0,
            next_reward: INITIAL_REWARD,
            step_period: INITIAL_STEP_PERIOD_MS,
            rng,
        }
    }

    /// (Re)start the session: fresh snake, reset score/reward/period, apple
    /// relocated. Announces the starting score.
    pub fn init(&mut self) -> Events {
        self.snake = Snake::new();
        self.score = 0;
        self.next_reward = INITIAL_REWARD;
        self.step_period = INITIAL_STEP_PERIOD_MS;
        self.teleport_apple();

        let mut events = Events::new();
        events.push(GameEvent::ScoreChanged(self.score));
        events
    }

    /// Advance the simulation by one tick.
    ///
    /// `timestamp` is accepted from the host for future use; the transition is
    /// purely a function of current state.
    pub fn step(&mut self, _timestamp: i32) -> Events {
        let mut events = Events::new();

        if self.snake.next_head() == self.apple {
            self.snake.grow();
            self.teleport_apple();
            self.speed_up(&mut events);
            self.score += self.next_reward;
            self.next_reward += REWARD_INCREMENT;
            events.push(GameEvent::ScoreChanged(self.score));
        } else {
            self.snake.move_ahead();
        }

        if self.snake.is_out_of_bounds() || self.snake.self_intersects() {
            events.push(GameEvent::GameOver);
        }

        events
    }

    /// Request a heading change; exact reversals are silently discarded.
    /// Takes effect on the next step's head computation.
    pub fn change_direction(&mut self, direction: Direction) -> bool {
        self.snake.set_direction(direction)
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple(&self) -> Position {
        self.apple
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn next_reward(&self) -> i32 {
        self.next_reward
    }

    /// Host-recommended milliseconds between steps.
    pub fn step_period(&self) -> i32 {
        self.step_period
    }

    fn speed_up(&mut self, events: &mut Events) {
        if self.step_period > MIN_STEP_PERIOD_MS {
            self.step_period -= STEP_PERIOD_DECREMENT_MS;
            events.push(GameEvent::StepPeriodChanged(self.step_period));
        }
    }

    // The relocated apple may land on a snake-occupied cell; there is no
    // exclusion check.
    fn teleport_apple(&mut self) {
        self.apple = Position::new(
            self.rng.next_in(GRID_WIDTH),
            self.rng.next_in(GRID_HEIGHT),
        );
    }
}
