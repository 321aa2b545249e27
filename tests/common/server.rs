//! Scripted server side.
//!
//! Listens on an ephemeral localhost port and lets a test read the
//! client's request lines and push response lines back.

use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpListener;
use tokio::time::timeout;

const WAIT: Duration = Duration::from_secs(2);

/// A listening test server.
pub struct TestServer {
    listener: TcpListener,
    port: u16,
}

impl TestServer {
    /// Bind to an ephemeral port on 127.0.0.1.
    pub async fn bind() -> anyhow::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let port = listener.local_addr()?.port();
        Ok(Self { listener, port })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Accept the next client connection.
    pub async fn accept(&self) -> anyhow::Result<TestPeer> {
        let (stream, _) = timeout(WAIT, self.listener.accept()).await??;
        let (read, write) = stream.into_split();
        Ok(TestPeer {
            lines: BufReader::new(read).lines(),
            writer: write,
        })
    }
}

/// The server end of one accepted connection.
pub struct TestPeer {
    lines: Lines<BufReader<OwnedReadHalf>>,
    writer: OwnedWriteHalf,
}

impl TestPeer {
    /// Next request line, without its terminator.
    pub async fn recv_line(&mut self) -> anyhow::Result<String> {
        match timeout(WAIT, self.lines.next_line()).await?? {
            Some(line) => Ok(line.trim_end_matches('\r').to_string()),
            None => anyhow::bail!("client closed the connection"),
        }
    }

    /// Send one response line; the terminator is added here.
    pub async fn send(&mut self, line: &str) -> anyhow::Result<()> {
        self.writer.write_all(line.as_bytes()).await?;
        self.writer.write_all(b"\r\n").await?;
        self.writer.flush().await?;
        Ok(())
    }

    /// Wait for the client to close its write side.
    pub async fn expect_eof(&mut self) -> anyhow::Result<()> {
        match timeout(WAIT, self.lines.next_line()).await?? {
            None => Ok(()),
            Some(line) => anyhow::bail!("expected EOF, got {line:?}"),
        }
    }
}
