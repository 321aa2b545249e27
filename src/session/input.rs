//! User input.
//!
//! Terminal reads block, so they run on a dedicated thread that forwards
//! each line into the session queue. End of input is treated as `/exit`;
//! Ctrl+C queues a shutdown.

use std::io::{self, BufRead, BufReader};
use std::thread::{self, JoinHandle};

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::SessionEvent;

/// Line the reader sends when input ends.
pub const EXIT_LINE: &str = "/exit";

/// Forward lines from `reader` until it ends or the session goes away.
pub fn spawn_reader<R>(reader: R, events: mpsc::Sender<SessionEvent>) -> io::Result<JoinHandle<()>>
where
    R: BufRead + Send + 'static,
{
    thread::Builder::new()
        .name("slirc-input".to_string())
        .spawn(move || {
            for line in reader.lines() {
                match line {
                    Ok(line) => {
                        if events.blocking_send(SessionEvent::Input(line)).is_err() {
                            debug!("Session gone; input reader stopping");
                            return;
                        }
                    }
                    Err(e) => {
                        warn!(error = %e, "Input read failed");
                        break;
                    }
                }
            }
            let _ = events.blocking_send(SessionEvent::Input(EXIT_LINE.to_string()));
        })
}

/// Forward terminal input.
pub fn spawn_stdin(events: mpsc::Sender<SessionEvent>) -> io::Result<JoinHandle<()>> {
    spawn_reader(BufReader::new(io::stdin()), events)
}

/// Queue [`SessionEvent::Shutdown`] on Ctrl+C.
pub fn spawn_interrupt(events: mpsc::Sender<SessionEvent>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            return;
        }
        info!("Ctrl+C received, shutting down");
        let _ = events.send(SessionEvent::Shutdown).await;
    })
}
