//! Terminal "game renderer" module.
//!
//! Renders into a simple framebuffer that is then flushed to a terminal
//! backend, keeping the drawing logic pure and the I/O thin.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
