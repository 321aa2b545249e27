//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Config struct definitions (Config, Settings) and file I/O
//! - `defaults`: serde default values
//! - [`validation`]: startup checks

mod defaults;
pub mod types;
pub mod validation;

pub use types::{Config, ConfigError, Settings};
pub use validation::{ValidationError, validate};
