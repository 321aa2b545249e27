//! In-memory transport for unit tests.

use std::io;
use std::time::Duration;

use async_trait::async_trait;

use super::Transport;
use crate::error::TransportError;

#[derive(Debug, Default)]
pub(crate) struct MockTransport {
    pub connects: Vec<(String, u16)>,
    pub sent: Vec<Vec<u8>>,
    pub half_closes: usize,
    pub refuse_connect: bool,
    pub fail_sends: bool,
    live: Option<u64>,
    next_id: u64,
}

impl MockTransport {
    /// A transport with a live connection already open.
    pub fn connected() -> Self {
        Self {
            live: Some(1),
            next_id: 1,
            ..Self::default()
        }
    }

    /// A transport whose connects are refused.
    pub fn refusing() -> Self {
        Self {
            refuse_connect: true,
            ..Self::default()
        }
    }

    pub fn sent_text(&self) -> Vec<String> {
        self.sent
            .iter()
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
            .collect()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn connect(
        &mut self,
        host: &str,
        port: u16,
        _timeout: Duration,
    ) -> Result<u64, TransportError> {
        if self.refuse_connect {
            return Err(TransportError::Connect {
                addr: format!("{host}:{port}"),
                source: io::Error::from(io::ErrorKind::ConnectionRefused),
            });
        }
        self.connects.push((host.to_string(), port));
        self.next_id += 1;
        self.live = Some(self.next_id);
        Ok(self.next_id)
    }

    async fn send(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        if self.live.is_none() {
            return Err(TransportError::NotConnected);
        }
        if self.fail_sends {
            return Err(io::Error::from(io::ErrorKind::BrokenPipe).into());
        }
        self.sent.push(bytes.to_vec());
        Ok(())
    }

    async fn half_close(&mut self) {
        if self.live.take().is_some() {
            self.half_closes += 1;
        }
    }

    fn connection_id(&self) -> Option<u64> {
        self.live
    }

    async fn shutdown(&mut self) {
        self.half_close().await;
    }
}
