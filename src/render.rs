//! Render adapter: turns the current game state into fill-rectangle commands
//!
//! The sink is a trait so any raster surface can receive a frame. Every frame
//! is exactly: one background fill over the whole grid, one cell fill per
//! occupied snake segment, one apple cell fill, one present.

use crate::core::grid;
use crate::core::Game;
use crate::types::{
    Position, CELL_SIZE, COLOR_APPLE, COLOR_BACKGROUND, COLOR_SNAKE, GRID_HEIGHT, GRID_WIDTH,
};

/// Raster surface the game draws into. Coordinates are in pixels.
pub trait Canvas {
    fn set_fill_style(&mut self, color: u32);
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32);
    /// Flush the finished frame.
    fn present(&mut self);
}

fn fill_cell(canvas: &mut dyn Canvas, pos: Position) {
    let (px, py) = grid::cell_to_pixels(pos);
    canvas.fill_rect(px, py, CELL_SIZE, CELL_SIZE);
}

/// Paint one full frame of the current state.
pub fn paint_frame(game: &Game, canvas: &mut dyn Canvas) {
    canvas.set_fill_style(COLOR_BACKGROUND);
    canvas.fill_rect(0, 0, GRID_WIDTH * CELL_SIZE, GRID_HEIGHT * CELL_SIZE);

    canvas.set_fill_style(COLOR_SNAKE);
    for segment in game.snake().segments() {
        fill_cell(canvas, segment);
    }

    canvas.set_fill_style(COLOR_APPLE);
    fill_cell(canvas, game.apple());

    canvas.present();
}
