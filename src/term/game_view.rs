//! GameView: maps a game session into a terminal framebuffer.
//!
//! This module is pure (no I/O). The playfield itself is painted through the
//! same fill-command path every other render sink uses; the frame border and
//! the score panel are terminal dressing around it.

use crate::core::Game;
use crate::render::{paint_frame, Canvas};
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{CELL_SIZE, GRID_HEIGHT, GRID_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal renderer for the snake game.
pub struct GameView {
    /// Playfield cell width in terminal columns.
    cell_w: u16,
    /// Playfield cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the current state into a framebuffer.
    ///
    /// `game_over` comes from the host: the session itself has no stopped
    /// state, only the host knows it received the notification.
    pub fn render(&self, game: &Game, game_over: bool, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let field_w = GRID_WIDTH as u16 * self.cell_w;
        let field_h = GRID_HEIGHT as u16 * self.cell_h;
        let frame_w = field_w + 2;
        let frame_h = field_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };

        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        {
            let mut canvas = FbCanvas {
                fb: &mut fb,
                origin_x: start_x + 1,
                origin_y: start_y + 1,
                cell_w: self.cell_w,
                cell_h: self.cell_h,
                fill: Rgb::default(),
            };
            paint_frame(game, &mut canvas);
        }

        self.draw_side_panel(&mut fb, game, start_x + frame_w + 2, start_y + 1);

        if game_over {
            self.draw_overlay_text(&mut fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }

        fb
    }

    /// Playfield origin inside the frame, for tests poking at cells.
    pub fn field_origin(&self, viewport: Viewport) -> (u16, u16) {
        let frame_w = GRID_WIDTH as u16 * self.cell_w + 2;
        let frame_h = GRID_HEIGHT as u16 * self.cell_h + 2;
        (
            viewport.width.saturating_sub(frame_w) / 2 + 1,
            viewport.height.saturating_sub(frame_h) / 2 + 1,
        )
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }
        let right = x + w - 1;
        let bottom = y + h - 1;

        fb.put_char(x, y, '┌', style);
        fb.put_char(right, y, '┐', style);
        fb.put_char(x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);
        for cx in x + 1..right {
            fb.put_char(cx, y, '─', style);
            fb.put_char(cx, bottom, '─', style);
        }
        for cy in y + 1..bottom {
            fb.put_char(x, cy, '│', style);
            fb.put_char(right, cy, '│', style);
        }
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, game: &Game, x: u16, y: u16) {
        let label = CellStyle {
            fg: Rgb::new(140, 140, 140),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };
        let value = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };

        fb.put_str(x, y, "SCORE", label);
        fb.put_str(x, y + 1, &game.score().to_string(), value);
        fb.put_str(x, y + 3, "SPEED", label);
        fb.put_str(x, y + 4, &format!("{} ms", game.step_period()), value);
        fb.put_str(x, y + 6, "arrows/wasd steer", label);
        fb.put_str(x, y + 7, "r restart  q quit", label);
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        text: &str,
    ) {
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(120, 0, 0),
            bold: true,
        };
        let text_x = x + w.saturating_sub(text.len() as u16) / 2;
        let text_y = y + h / 2;
        fb.put_str(text_x, text_y, text, style);
    }
}

/// Fill-command sink over a framebuffer region.
///
/// Converts pixel rectangles into terminal cells; fills that are not fully on
/// the playfield (an out-of-bounds head segment) are clipped away.
struct FbCanvas<'a> {
    fb: &'a mut FrameBuffer,
    origin_x: u16,
    origin_y: u16,
    cell_w: u16,
    cell_h: u16,
    fill: Rgb,
}

impl Canvas for FbCanvas<'_> {
    fn set_fill_style(&mut self, color: u32) {
        self.fill = Rgb::from_rgb24(color);
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        if x < 0
            || y < 0
            || x + width > GRID_WIDTH * CELL_SIZE
            || y + height > GRID_HEIGHT * CELL_SIZE
        {
            return;
        }
        let cx = self.origin_x + (x / CELL_SIZE) as u16 * self.cell_w;
        let cy = self.origin_y + (y / CELL_SIZE) as u16 * self.cell_h;
        let cw = (width / CELL_SIZE) as u16 * self.cell_w;
        let ch = (height / CELL_SIZE) as u16 * self.cell_h;
        let style = CellStyle {
            fg: self.fill,
            bg: self.fill,
            bold: false,
        };
        self.fb.fill_rect(cx, cy, cw, ch, ' ', style);
    }

    fn present(&mut self) {
        // Flushing is the terminal renderer's job.
    }
}
