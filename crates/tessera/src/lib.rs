//! # Tessera
//!
//! A chat bot library built around commands.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────┐  events  ┌─────┐  message  ┌────────────┐  name  ┌──────────────┐
//! │ ChatClient │─────────▶│ Bot │──────────▶│ Dispatcher │───────▶│ CommandTable │
//! └────────────┘          └─────┘           └────────────┘        └──────────────┘
//!                            │ every event        │ trigger + lexer
//!                            ▼                    ▼
//!                     ┌──────────────┐     spawned Command task
//!                     │ EventHandler │◀──── errors
//!                     └──────────────┘
//! ```
//!
//! - **Client**: owns the connection to a chat service and decodes its events
//! - **Bot**: routes events to the handler and runs commands
//! - **Trigger**: the handler's rule for which messages are commands
//! - **Commands**: async functions bound to one or more names
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tessera::prelude::*;
//!
//! struct MyBot(Prefix);
//!
//! impl Trigger for MyBot {
//!     fn triggers(&self, text: &str) -> Option<usize> {
//!         self.0.triggers(text)
//!     }
//! }
//!
//! #[async_trait]
//! impl EventHandler for MyBot {
//!     // one method per event kind
//! }
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let bot = Bot::new(client, MyBot(Prefix::new("!")), BotOptions::default());
//!     bot.register_command(
//!         "ping",
//!         Arc::new(Command::new(|ctx, msg, _args| async move {
//!             ctx.reply(&msg, "pong").await?;
//!             Ok(())
//!         })),
//!         false,
//!     )?;
//!     bot.login(Some("token")).await?;
//!     bot.run().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - `toml-config`: load `tessera.toml` configuration files (default)
//! - `json-log`: JSON log output

pub use tessera_core as core;
pub use tessera_framework as framework;
pub use tessera_runtime as runtime;

/// Common imports for writing a bot.
///
/// ```rust,ignore
/// use tessera::prelude::*;
/// ```
pub mod prelude {
    pub use async_trait::async_trait;

    // Runtime
    pub use tessera_runtime::prelude::*;

    // Commands and dispatch
    pub use tessera_framework::{
        Args, BotContext, BotError, Command, CommandError, EventHandler, IntakePolicy,
        ParsedCommand, Prefix, Trigger,
    };

    // Client and event types
    pub use tessera_core::{
        BoxedClient, ButtonClick, ButtonResponder, Channel, ChatClient, ClientError, ClientEvent,
        Guild, GuildMember, Message, Presence, Role, User,
    };
}
