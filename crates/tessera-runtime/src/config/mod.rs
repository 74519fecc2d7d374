//! Configuration for Tessera bots.
//!
//! Settings are layered with `figment`: built-in defaults, then a TOML
//! file, then `TESSERA_*` environment variables. See [`ConfigLoader`].

pub mod error;
pub mod loader;
pub mod schema;
pub mod validation;

pub use error::{ConfigError, ConfigResult};
pub use loader::{ConfigLoader, load_config, load_config_from_file};
pub use schema::{
    BotConfig, LogFormat, LogLevel, LogOutput, LogRotation, LoggingConfig, SpanEventConfig,
    TesseraConfig,
};
pub use validation::validate_config;
