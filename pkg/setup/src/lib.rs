pub mod config;
pub mod tracing;

pub use config::{Config, ConfigError};
