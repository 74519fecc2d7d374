//! Tessera Runtime: runs a bot on top of a chat client.
//!
//! This crate provides:
//! - [`Bot`], which logs a [`ChatClient`](tessera_core::ChatClient) in and
//!   routes its events to an [`EventHandler`](tessera_framework::EventHandler)
//! - Layered configuration loading ([`config`])
//! - Logging setup ([`logging`])
//!
//! ```rust,ignore
//! use tessera_runtime::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = load_config()?;
//!     logging::init_from_config(&config.logging);
//!
//!     let bot = Bot::new(client, MyBot::new(&config.bot.prefix), BotOptions::from(&config.bot));
//!     bot.login(None).await?;
//!     bot.run().await?;
//!     Ok(())
//! }
//! ```

pub mod bot;
pub mod config;
pub mod error;
pub mod logging;

pub use bot::{Bot, BotOptions};
pub use config::{ConfigError, ConfigLoader, TesseraConfig, load_config};
pub use error::{RuntimeError, RuntimeResult};

/// Common imports for bot binaries.
pub mod prelude {
    pub use crate::bot::{Bot, BotOptions};
    pub use crate::config::{ConfigLoader, TesseraConfig, load_config, load_config_from_file};
    pub use crate::error::{RuntimeError, RuntimeResult};
    pub use crate::logging::{self, LoggingBuilder};
}
