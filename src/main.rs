//! Terminal snake runner (default binary).
//!
//! Owns the event loop: steps the simulation on the cadence the game
//! recommends, feeds key presses to it, and flushes frames to the terminal.
//! The core never stops itself; this host stops stepping once it receives the
//! game-over notification, and `r` starts a fresh session.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_snake::core::Game;
use tui_snake::input::{direction_for_key, is_restart, should_quit};
use tui_snake::term::{GameView, TerminalRenderer, Viewport};
use tui_snake::types::GameEvent;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let view = GameView::default();
    let mut game = Game::new(clock_seed());
    let started = Instant::now();

    game.init();
    let mut game_over = false;
    let mut last_step = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((100, 44));
        let mut fb = view.render(&game, game_over, Viewport::new(w, h));
        term.draw_swap(&mut fb)?;

        // Input with timeout until the next step is due. Once the game is
        // over there is no cadence to keep, only keys to wait for.
        let period = Duration::from_millis(game.step_period() as u64);
        let timeout = if game_over {
            Duration::from_millis(250)
        } else {
            period
                .checked_sub(last_step.elapsed())
                .unwrap_or_else(|| Duration::from_secs(0))
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if is_restart(key) {
                        game.init();
                        game_over = false;
                        last_step = Instant::now();
                    } else if let Some(direction) = direction_for_key(key.code) {
                        game.change_direction(direction);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Step on cadence. The period getter reflects any speed-up from the
        // last step, so the cadence follows the game's recommendation.
        if !game_over && last_step.elapsed() >= period {
            last_step = Instant::now();
            let timestamp = started.elapsed().as_millis() as i32;
            for event in game.step(timestamp) {
                if matches!(event, GameEvent::GameOver) {
                    game_over = true;
                }
            }
        }
    }
}
