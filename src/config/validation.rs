//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use slirc_proto::{CodePage, NickExt};
use thiserror::Error;

use super::Config;

/// Validation errors for configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("settings.nickname is not a valid nickname: '{0}'")]
    InvalidNickname(String),
    #[error("settings.code_page '{0}' is not supported (supported: {supported})", supported = CodePage::supported_names())]
    UnsupportedCodePage(String),
    #[error("settings.connect_timeout_secs must be greater than 0")]
    ZeroConnectTimeout,
    #[error("servers contains an empty host name")]
    EmptyServerName,
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let settings = &config.settings;

    if !settings.nickname.is_valid_nick() {
        errors.push(ValidationError::InvalidNickname(settings.nickname.clone()));
    }
    if settings.code_page.parse::<CodePage>().is_err() {
        errors.push(ValidationError::UnsupportedCodePage(settings.code_page.clone()));
    }
    if settings.connect_timeout_secs == 0 {
        errors.push(ValidationError::ZeroConnectTimeout);
    }
    if config.servers.keys().any(|host| host.trim().is_empty()) {
        errors.push(ValidationError::EmptyServerName);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
