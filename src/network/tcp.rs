//! TCP transport.
//!
//! Each connection gets a reader task that frames inbound bytes with
//! [`LineCodec`] and forwards raw lines to the session queue. The reader
//! stops on EOF, on a framing error, or when its token is cancelled.

use std::net::SocketAddr;
use std::time::Duration;

use async_trait::async_trait;
use futures_util::StreamExt;
use slirc_proto::LineCodec;
use tokio::io::AsyncWriteExt;
use tokio::net::{TcpStream, lookup_host};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::sync::mpsc;
use tokio_util::codec::FramedRead;
use tokio_util::sync::CancellationToken;
use tracing::{Instrument, debug, info, warn};

use super::transport::Transport;
use crate::error::TransportError;
use crate::session::SessionEvent;
use crate::telemetry::spans;

struct Link {
    id: u64,
    writer: OwnedWriteHalf,
    cancel: CancellationToken,
}

/// Plain TCP transport feeding a session queue.
pub struct TcpTransport {
    events: mpsc::Sender<SessionEvent>,
    next_id: u64,
    link: Option<Link>,
    shutdown: CancellationToken,
}

impl TcpTransport {
    pub fn new(events: mpsc::Sender<SessionEvent>) -> Self {
        Self {
            events,
            next_id: 0,
            link: None,
            shutdown: CancellationToken::new(),
        }
    }
}

#[async_trait]
impl Transport for TcpTransport {
    async fn connect(
        &mut self,
        host: &str,
        port: u16,
        timeout: Duration,
    ) -> Result<u64, TransportError> {
        if self.shutdown.is_cancelled() {
            return Err(TransportError::NotConnected);
        }

        let addr = format!("{host}:{port}");
        let stream = match tokio::time::timeout(timeout, open(host, port, &addr)).await {
            Ok(result) => result?,
            Err(_) => return Err(TransportError::Timeout),
        };
        if let Err(e) = stream.set_nodelay(true) {
            debug!(error = %e, "Failed to set TCP_NODELAY");
        }

        self.half_close().await;

        self.next_id += 1;
        let id = self.next_id;
        let (reader, writer) = stream.into_split();
        let cancel = self.shutdown.child_token();

        tokio::spawn(
            read_loop(id, reader, self.events.clone(), cancel.clone())
                .instrument(spans::connection(id, &addr)),
        );
        info!(connection = id, addr = %addr, "Connected");

        self.link = Some(Link { id, writer, cancel });
        Ok(id)
    }

    async fn send(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        let link = self.link.as_mut().ok_or(TransportError::NotConnected)?;
        link.writer.write_all(bytes).await?;
        link.writer.flush().await?;
        Ok(())
    }

    async fn half_close(&mut self) {
        if let Some(mut link) = self.link.take() {
            if let Err(e) = link.writer.shutdown().await {
                debug!(connection = link.id, error = %e, "Write shutdown failed");
            }
            link.cancel.cancel();
            info!(connection = link.id, "Connection closed");
        }
    }

    fn connection_id(&self) -> Option<u64> {
        self.link.as_ref().map(|link| link.id)
    }

    async fn shutdown(&mut self) {
        self.half_close().await;
        self.shutdown.cancel();
    }
}

/// Resolve `host`, then connect to the first address that accepts.
async fn open(host: &str, port: u16, addr: &str) -> Result<TcpStream, TransportError> {
    let addrs: Vec<SocketAddr> = lookup_host((host, port))
        .await
        .map_err(|source| TransportError::Resolve {
            host: host.to_string(),
            source,
        })?
        .collect();
    debug!(addr = %addr, resolved = addrs.len(), "Resolved host");

    TcpStream::connect(addrs.as_slice())
        .await
        .map_err(|source| TransportError::Connect {
            addr: addr.to_string(),
            source,
        })
}

async fn read_loop(
    id: u64,
    reader: OwnedReadHalf,
    events: mpsc::Sender<SessionEvent>,
    cancel: CancellationToken,
) {
    let mut framed = FramedRead::new(reader, LineCodec::new());

    let reason = loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                debug!("Reader cancelled");
                return;
            }
            next = framed.next() => match next {
                Some(Ok(line)) => {
                    let event = SessionEvent::Received { connection: id, line };
                    if events.send(event).await.is_err() {
                        return;
                    }
                }
                Some(Err(e)) => {
                    warn!(error = %e, "Read failed");
                    break Some(e.to_string());
                }
                None => break None,
            }
        }
    };

    let _ = events
        .send(SessionEvent::Closed {
            connection: id,
            reason,
        })
        .await;
}
