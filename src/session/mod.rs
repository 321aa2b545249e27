//! Session task.
//!
//! One task owns the [`ClientState`], the transport and the view. User
//! input, received lines and connection closes all arrive on a single
//! queue and are handled strictly in arrival order:
//!
//! ```text
//!  input thread ──Input──┐
//!                        ├──► mpsc ──► Session ──► Transport (send)
//!  reader task ──Received┘                │
//!              ──Closed──┘                └──────► View
//! ```

mod event;
mod input;
mod view;

use std::time::Duration;

use bytes::Bytes;
use slirc_proto::CRLF;
use tokio::sync::mpsc;
use tracing::{Instrument, debug, info, warn};

use crate::commands::{Context, Registry};
use crate::error::CommandError;
use crate::events::{classify, pong_reply};
use crate::network::Transport;
use crate::state::ClientState;
use crate::telemetry::spans;

pub use event::SessionEvent;
pub use input::{EXIT_LINE, spawn_interrupt, spawn_reader, spawn_stdin};
pub use view::{ConsoleView, View};

/// Queue depth between producers and the session.
pub const QUEUE_SIZE: usize = 256;

/// The single owner of client state.
pub struct Session<T, V> {
    state: ClientState,
    transport: T,
    view: V,
    registry: Registry,
    events: mpsc::Receiver<SessionEvent>,
    connect_timeout: Duration,
}

impl<T: Transport, V: View> Session<T, V> {
    pub fn new(
        state: ClientState,
        transport: T,
        view: V,
        events: mpsc::Receiver<SessionEvent>,
        connect_timeout: Duration,
    ) -> Self {
        Self {
            state,
            transport,
            view,
            registry: Registry::new(),
            events,
            connect_timeout,
        }
    }

    pub fn state(&self) -> &ClientState {
        &self.state
    }

    /// Handle queued events until the client stops or every producer is
    /// gone. Returns the final state, always disconnected and not running.
    pub async fn run(mut self) -> ClientState {
        let span = spans::session(&self.state.nickname);
        async move {
            info!("Session started");
            while self.state.is_running {
                let Some(event) = self.events.recv().await else {
                    debug!("Session queue closed");
                    break;
                };
                self.handle(event).await;
            }

            self.transport.shutdown().await;
            self.state.stop();
            info!("Session finished");
            self.state
        }
        .instrument(span)
        .await
    }

    /// Handle one event.
    pub async fn handle(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::Input(line) => self.handle_input(&line).await,
            SessionEvent::Received { connection, line } => {
                self.handle_received(connection, line).await
            }
            SessionEvent::Closed { connection, reason } => {
                self.handle_closed(connection, reason).await
            }
            SessionEvent::Shutdown => {
                if self.state.is_connected {
                    self.transport.half_close().await;
                }
                self.state.stop();
            }
        }
    }

    async fn handle_input(&mut self, line: &str) {
        let line = line.trim_end_matches(['\r', '\n']);
        let mut command = self.registry.dispatch(line, &self.state);

        let wire = {
            let mut ctx = Context {
                state: &mut self.state,
                transport: &mut self.transport,
                connect_timeout: self.connect_timeout,
            };
            command.run(&mut ctx).await
        };

        if !command.output().is_empty() {
            self.view.show_text(command.output());
        }
        if wire.is_empty() {
            return;
        }
        if self.transport.connection_id().is_none() {
            debug!(verb = command.kind().verb(), "Nothing to send on");
            if command.output().is_empty() {
                self.view.show_text(&CommandError::NotConnected.to_string());
            }
            return;
        }
        self.send(&wire).await;
    }

    async fn handle_received(&mut self, connection: u64, line: Bytes) {
        if self.transport.connection_id() != Some(connection) {
            debug!(connection, "Dropping line from stale connection");
            return;
        }

        let text = self.state.code_page.decode(&line).into_owned();
        if let Some(pong) = pong_reply(&text) {
            self.send(&format!("{pong}{CRLF}")).await;
            return;
        }

        for event in classify(&text) {
            self.view.show_server_event(&event.render());
            if let Some(effect) = event.effect(&self.state) {
                debug!(kind = ?event.kind(), effect = ?effect, "Applying event effect");
                for reply in self.state.apply(effect) {
                    self.send(&format!("{reply}{CRLF}")).await;
                }
            }
        }
    }

    async fn handle_closed(&mut self, connection: u64, reason: Option<String>) {
        if self.transport.connection_id() != Some(connection) {
            return;
        }

        let host = self.state.reset_connection().unwrap_or_default();
        self.transport.half_close().await;
        info!(connection, host = %host, reason = ?reason, "Server closed connection");
        let notice = match reason {
            Some(reason) => format!("Connection to {host} closed: {reason}"),
            None => format!("Connection to {host} closed"),
        };
        self.view.show_text(&notice);
    }

    /// Encode with the current code page and write. A failed write ends
    /// the connection.
    async fn send(&mut self, text: &str) {
        if self.transport.connection_id().is_none() {
            return;
        }

        let bytes = self.state.code_page.encode(text);
        if let Err(e) = self.transport.send(&bytes).await {
            warn!(code = e.error_code(), error = %e, "Send failed");
            let host = self.state.reset_connection().unwrap_or_default();
            self.transport.half_close().await;
            self.view
                .show_text(&format!("Connection to {host} lost: {e}"));
        }
    }
}
