//! # Tessera Framework
//!
//! The command and event layer of Tessera.
//!
//! This layer provides:
//! - [`CommandTable`], the single registry of commands and their aliases
//! - [`Lexer`] and [`Args`] for quote-aware argument splitting
//! - [`Trigger`] and [`Prefix`] for deciding which messages are commands
//! - [`Dispatcher`], which resolves message text to a [`ParsedCommand`]
//! - [`IntakePolicy`], which filters commands by author
//! - [`EventHandler`], the full set of events a bot reacts to
//!
//! It knows nothing about connecting to a chat service; that is the job of
//! a [`ChatClient`](tessera_core::ChatClient) and of the runtime crate that
//! drives it.

pub mod command;
pub mod context;
pub mod dispatcher;
pub mod error;
pub mod handler;
pub mod intake;
pub mod trigger;

#[cfg(test)]
pub(crate) mod testing;

pub use command::{
    Args, ArgsState, Command, CommandEntry, CommandFuture, CommandTable, DEFAULT_QUOTES, Lexer,
    SharedCommandTable, Token, join_raw,
};
pub use context::BotContext;
pub use dispatcher::{Dispatcher, ParsedCommand};
pub use error::{BotError, CommandError, CommandResult};
pub use handler::EventHandler;
pub use intake::IntakePolicy;
pub use trigger::{Prefix, Trigger};
