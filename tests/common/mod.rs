//! Integration test common infrastructure.
//!
//! Provides a scripted local server, a channel-backed view and a client
//! harness that runs a real session over TCP.

pub mod client;
pub mod server;
pub mod view;

#[allow(unused_imports)]
pub use client::TestClient;
#[allow(unused_imports)]
pub use server::{TestPeer, TestServer};
