//! slirc - Straylight IRC Client
//!
//! Usage: `slirc [CONFIG]` (default `config.toml`).

use anyhow::Context as _;
use slirc_client::config::{self, Config};
use slirc_client::session::{self, ConsoleView, Session};
use slirc_client::TcpTransport;
use tokio::sync::mpsc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Chat output owns stdout; logs go to stderr and stay quiet by default.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());

    let mut config = Config::load_or_default(&config_path).map_err(|e| {
        error!(path = %config_path, error = %e, "Failed to load config");
        e
    })?;

    if let Err(errors) = config::validate(&config) {
        for e in &errors {
            error!(error = %e, "Invalid configuration");
        }
        anyhow::bail!("{} configuration error(s) in {config_path}", errors.len());
    }

    info!(
        path = %config_path,
        nick = %config.settings.nickname,
        code_page = %config.code_page(),
        favourites = config.servers.len(),
        "Starting slirc"
    );

    let (events_tx, events_rx) = mpsc::channel(session::QUEUE_SIZE);
    let transport = TcpTransport::new(events_tx.clone());
    session::spawn_interrupt(events_tx.clone());
    session::spawn_stdin(events_tx).context("failed to start input reader")?;

    let session = Session::new(
        config.client_state(),
        transport,
        ConsoleView::stdout(),
        events_rx,
        config.connect_timeout(),
    );
    println!("Type /help for a list of commands.");
    let state = session.run().await;

    config.update_from(&state);
    config
        .save(&config_path)
        .with_context(|| format!("failed to save config to {config_path}"))?;
    info!(path = %config_path, "Configuration saved");

    Ok(())
}
