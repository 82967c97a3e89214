//! Configuration Module
//!
//! Configuration loading and dependency injection for the service.

mod container;
mod settings;

pub use container::{Container, InMemoryContainer};
pub use settings::{AppConfig, ConfigError, ServerSettings};
