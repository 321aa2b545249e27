//! Output collaborator.

use std::io::{self, Write};

use tracing::debug;

/// Where the session shows text.
pub trait View: Send {
    /// Status text from a command. May span several lines.
    fn show_text(&mut self, text: &str);

    /// A rendered server event.
    fn show_server_event(&mut self, rendered: &str);
}

/// Writes everything to a stream, one line per entry.
pub struct ConsoleView<W> {
    out: W,
}

impl ConsoleView<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{text}").and_then(|()| self.out.flush()) {
            debug!(error = %e, "Console write failed");
        }
    }
}

impl<W: Write + Send> View for ConsoleView<W> {
    fn show_text(&mut self, text: &str) {
        self.write_line(text);
    }

    fn show_server_event(&mut self, rendered: &str) {
        self.write_line(rendered);
    }
}
