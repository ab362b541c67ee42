//! Adapter module - external host protocol
//!
//! Exposes the simulation as an explicit command/message interface over
//! line-delimited JSON, served over TCP.

pub mod protocol;
pub mod server;
pub mod session;

pub use protocol::{Command, Outbound, Point};
pub use server::{serve, serve_on, AdapterConfig};
pub use session::Session;
