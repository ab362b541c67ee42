//! Control-adapter server binary.
//!
//! Lets an external program (an AI, a test harness) drive the game over TCP
//! with line-delimited JSON commands.

use anyhow::Result;

use tui_snake::adapter::{serve, AdapterConfig};

#[tokio::main]
async fn main() -> Result<()> {
    serve(AdapterConfig::from_env()).await
}
