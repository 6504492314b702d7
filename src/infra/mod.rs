//! Infrastructure - configuration and logging setup
//!
//! - `config` - Engine configuration (TOML loading, defaults)
//! - `logging` - tracing subscriber initialization

pub mod config;
pub mod logging;

pub use config::Config;
