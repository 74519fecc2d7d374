//! Commands and the machinery that finds them in message text.
//!
//! - [`Lexer`] splits text into quote-aware [`Token`]s
//! - [`Args`] hands those tokens to a command one by one
//! - [`CommandTable`] binds invocation names to [`Command`]s
//!
//! # Defining a command
//!
//! ```rust,ignore
//! use tessera_framework::{Args, BotContext, Command};
//!
//! let ping = Command::new(|ctx: BotContext, msg, _args: Args| async move {
//!     ctx.reply(&msg, "Pong!").await?;
//!     Ok(())
//! })
//! .with_help_short("Replies with Pong!");
//!
//! bot.register_command("ping", Arc::new(ping), false)?;
//! ```

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use tessera_core::Message;

use crate::context::BotContext;

pub mod args;
pub mod lexer;
pub mod table;

pub use args::{Args, ArgsState};
pub use lexer::{DEFAULT_QUOTES, Lexer, Token, join_raw};
pub use table::{CommandEntry, CommandTable, SharedCommandTable};

/// The future returned by a command invocation.
pub type CommandFuture = BoxFuture<'static, anyhow::Result<()>>;

type CommandFn = Arc<dyn Fn(BotContext, Message, Args) -> CommandFuture + Send + Sync>;

/// A named, invokable unit of bot behaviour.
///
/// A `Command` carries its help texts and the function to run. It does not
/// know its own names: those live in the [`CommandTable`] it is registered
/// in, and [`CommandTable::names_of`] lists them.
///
/// Commands are shared as `Arc<Command>`; the table compares commands by
/// pointer identity.
#[derive(Clone)]
pub struct Command {
    help_short: String,
    help: String,
    handler: CommandFn,
}

impl Command {
    /// Creates a command from an async function taking the bot context, the
    /// invoking message and the parsed arguments.
    pub fn new<F, Fut>(handler: F) -> Self
    where
        F: Fn(BotContext, Message, Args) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        Self {
            help_short: String::new(),
            help: String::new(),
            handler: Arc::new(move |ctx, msg, args| handler(ctx, msg, args).boxed()),
        }
    }

    /// Sets the one-line summary shown in command listings.
    pub fn with_help_short(mut self, text: impl Into<String>) -> Self {
        self.help_short = text.into();
        self
    }

    /// Sets the detailed help text.
    pub fn with_help(mut self, text: impl Into<String>) -> Self {
        self.help = text.into();
        self
    }

    pub fn help_short(&self) -> &str {
        &self.help_short
    }

    /// Detailed help, falling back to the short help when unset.
    pub fn help(&self) -> &str {
        if self.help.is_empty() {
            &self.help_short
        } else {
            &self.help
        }
    }

    /// Runs the command.
    ///
    /// The returned future is `'static` and can be spawned.
    pub fn invoke(&self, ctx: BotContext, message: Message, args: Args) -> CommandFuture {
        (self.handler)(ctx, message, args)
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("help_short", &self.help_short)
            .field("help", &self.help)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_falls_back_to_short() {
        let cmd = Command::new(|_, _, _| async { anyhow::Ok(()) }).with_help_short("short");
        assert_eq!(cmd.help(), "short");

        let cmd = cmd.with_help("long");
        assert_eq!(cmd.help_short(), "short");
        assert_eq!(cmd.help(), "long");
    }
}
