//! Shared Module
//!
//! Plain data types that do not depend on the HTTP stack: flash messages
//! and application configuration.

/// Flash message types
pub mod flash;

/// Application configuration
pub mod config;

pub use config::{AppConfig, ConfigError};
pub use flash::{FlashMessage, Severity};
