//! Channel-backed view.

use std::time::Duration;

use slirc_client::View;
use tokio::sync::mpsc;
use tokio::time::timeout;

const WAIT: Duration = Duration::from_secs(2);

/// View half, moved into the session.
pub struct TestView {
    tx: mpsc::UnboundedSender<String>,
}

/// Reading half, kept by the test.
pub struct ViewLog {
    rx: mpsc::UnboundedReceiver<String>,
}

pub fn channel() -> (TestView, ViewLog) {
    let (tx, rx) = mpsc::unbounded_channel();
    (TestView { tx }, ViewLog { rx })
}

impl View for TestView {
    fn show_text(&mut self, text: &str) {
        let _ = self.tx.send(text.to_string());
    }

    fn show_server_event(&mut self, rendered: &str) {
        let _ = self.tx.send(rendered.to_string());
    }
}

impl ViewLog {
    /// Skip output until a line equal to `expected` shows up.
    pub async fn wait_for(&mut self, expected: &str) -> anyhow::Result<()> {
        self.wait_until(|line| line == expected).await.map(|_| ())
    }

    /// Skip output until `pred` matches; returns the matching line.
    pub async fn wait_until<F>(&mut self, pred: F) -> anyhow::Result<String>
    where
        F: Fn(&str) -> bool,
    {
        let mut seen = Vec::new();
        loop {
            match timeout(WAIT, self.rx.recv()).await {
                Ok(Some(line)) if pred(&line) => return Ok(line),
                Ok(Some(line)) => seen.push(line),
                Ok(None) => anyhow::bail!("view closed; saw {seen:?}"),
                Err(_) => anyhow::bail!("timed out; saw {seen:?}"),
            }
        }
    }
}
