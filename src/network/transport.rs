//! Transport trait.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::TransportError;

/// Standard plaintext port, used when `/server` omits one.
pub const DEFAULT_PORT: u16 = 6667;

/// Outbound half of a connection, owned by the session.
///
/// Inbound lines do not come back through this trait: an implementation
/// delivers them to the session queue tagged with the id returned by
/// [`Transport::connect`].
#[async_trait]
pub trait Transport: Send {
    /// Open a connection, replacing any previous one.
    async fn connect(
        &mut self,
        host: &str,
        port: u16,
        timeout: Duration,
    ) -> Result<u64, TransportError>;

    /// Write already-encoded bytes.
    async fn send(&mut self, bytes: &[u8]) -> Result<(), TransportError>;

    /// Close the write side and stop reading.
    async fn half_close(&mut self);

    /// Id of the live connection, if any.
    fn connection_id(&self) -> Option<u64>;

    /// Close everything; no connection may be opened afterwards.
    async fn shutdown(&mut self);
}
