//! Network transport.
//!
//! - `transport`: the `Transport` seam the command layer talks to
//! - `tcp`: plain TCP implementation with a cancellable reader task

#[cfg(test)]
pub(crate) mod mock;
mod tcp;
mod transport;

pub use tcp::TcpTransport;
pub use transport::{DEFAULT_PORT, Transport};
