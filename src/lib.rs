//! slirc-client - Straylight IRC Client
//!
//! A line-oriented chat client. User input becomes request lines through
//! the [`commands`] layer; received lines become display text and state
//! changes through the [`events`] layer. A single [`session::Session`] task
//! owns all state and serializes both directions.

pub mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod network;
pub mod session;
pub mod state;
pub mod telemetry;

pub use commands::{Command, CommandKind, Registry};
pub use config::Config;
pub use events::{EventKind, ServerEvent, classify};
pub use network::{TcpTransport, Transport};
pub use session::{ConsoleView, Session, SessionEvent, View};
pub use state::{ClientState, StateEffect};
