//! Config types and file I/O.

use std::collections::BTreeMap;
use std::io;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use slirc_proto::CodePage;
use thiserror::Error;
use tracing::warn;

use super::defaults::{default_code_page, default_connect_timeout_secs, default_nickname};
use crate::state::ClientState;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Client configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
    /// Favourite servers: host -> comma-joined channel list.
    #[serde(default)]
    pub servers: BTreeMap<String, String>,
}

/// User settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_nickname")]
    pub nickname: String,
    /// Code page name, one of [`CodePage::ALL`].
    #[serde(default = "default_code_page")]
    pub code_page: String,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            nickname: default_nickname(),
            code_page: default_code_page(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Like [`load`](Self::load), but a missing file yields the defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        match Self::load(&path) {
            Err(ConfigError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                warn!(path = %path.as_ref().display(), "Config file not found, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Write configuration as TOML.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// The configured code page. Unknown names fall back to the default;
    /// [`validate`](super::validate) reports them.
    pub fn code_page(&self) -> CodePage {
        self.settings.code_page.parse().unwrap_or_default()
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.settings.connect_timeout_secs)
    }

    /// Initial session state.
    pub fn client_state(&self) -> ClientState {
        let mut state = ClientState::new(self.settings.nickname.clone(), self.code_page());
        state.favourite_servers = self
            .servers
            .iter()
            .map(|(host, channels)| (host.to_lowercase(), channels.clone()))
            .collect();
        state
    }

    /// Copy back what the session may have changed.
    pub fn update_from(&mut self, state: &ClientState) {
        self.settings.nickname = state.nickname.clone();
        self.settings.code_page = state.code_page.name().to_string();
        self.servers = state.favourite_servers.clone();
    }
}
