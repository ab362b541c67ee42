//! TCP server for the control adapter
//!
//! One line-delimited JSON client at a time: commands in, messages out.
//! Each connection gets a fresh session. Uses tokio for async networking.

use std::net::SocketAddr;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};

use crate::adapter::protocol::{Command, Outbound};
use crate::adapter::session::Session;

/// Server configuration
#[derive(Debug, Clone)]
pub struct AdapterConfig {
    pub host: String,
    pub port: u16,
    pub seed: u32,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 7878,
            seed: 1,
        }
    }
}

impl AdapterConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        use std::env;

        let defaults = Self::default();
        let host = env::var("SNAKE_ADAPTER_HOST").unwrap_or(defaults.host);
        let port = env::var("SNAKE_ADAPTER_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.port);
        let seed = env::var("SNAKE_ADAPTER_SEED")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.seed);

        Self { host, port, seed }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

/// Bind and serve forever.
pub async fn serve(config: AdapterConfig) -> Result<()> {
    let listener = TcpListener::bind(config.socket_addr()?).await?;
    eprintln!("[Adapter] listening on {}", listener.local_addr()?);
    serve_on(listener, config.seed).await
}

/// Serve connections from an already-bound listener.
pub async fn serve_on(listener: TcpListener, seed: u32) -> Result<()> {
    loop {
        let (stream, addr) = listener.accept().await?;
        eprintln!("[Adapter] host connected from {addr}");

        let mut session = Session::new(seed);
        match serve_client(stream, &mut session).await {
            Ok(()) => eprintln!("[Adapter] host {addr} disconnected"),
            Err(e) => eprintln!("[Adapter] host {addr} error: {e}"),
        }
    }
}

async fn serve_client(stream: TcpStream, session: &mut Session) -> Result<()> {
    let (read_half, mut write_half) = stream.into_split();
    let mut lines = BufReader::new(read_half).lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let outbound = match serde_json::from_str::<Command>(line) {
            Ok(command) => session.handle(command),
            Err(e) => vec![Outbound::Error {
                message: e.to_string(),
            }],
        };

        for message in outbound {
            let mut payload = serde_json::to_string(&message)?;
            payload.push('\n');
            write_half.write_all(payload.as_bytes()).await?;
        }
    }

    Ok(())
}
