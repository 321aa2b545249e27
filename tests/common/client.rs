//! Client harness: a real session over TCP with a scripted view.

use std::time::Duration;

use slirc_client::{ClientState, Session, SessionEvent, TcpTransport};
use slirc_proto::CodePage;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::timeout;

use super::view::{self, ViewLog};

/// A running session fed by the test instead of a terminal.
pub struct TestClient {
    input: mpsc::Sender<SessionEvent>,
    pub output: ViewLog,
    handle: JoinHandle<ClientState>,
}

impl TestClient {
    pub fn spawn(nick: &str) -> Self {
        Self::spawn_with(ClientState::new(nick, CodePage::Utf8))
    }

    pub fn spawn_with(state: ClientState) -> Self {
        let (input, rx) = mpsc::channel(64);
        let (view, output) = view::channel();
        let session = Session::new(
            state,
            TcpTransport::new(input.clone()),
            view,
            rx,
            Duration::from_secs(2),
        );
        Self {
            input,
            output,
            handle: tokio::spawn(session.run()),
        }
    }

    /// Type one line as the user.
    pub async fn type_line(&self, line: &str) {
        self.input
            .send(SessionEvent::Input(line.to_string()))
            .await
            .expect("session stopped early");
    }

    /// Type `/exit` and wait for the final state.
    pub async fn exit(self) -> anyhow::Result<ClientState> {
        self.type_line("/exit").await;
        Ok(timeout(Duration::from_secs(2), self.handle).await??)
    }
}
