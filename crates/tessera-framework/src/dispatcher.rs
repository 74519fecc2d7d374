//! Command dispatcher.
//!
//! The [`Dispatcher`] turns raw message text into a command invocation:
//!
//! 1. The [`Trigger`] decides whether the text invokes a command and where
//!    the command name starts
//! 2. The [`Lexer`] splits the rest of the text into the name token and
//!    argument tokens
//! 3. The name is looked up in the [`CommandTable`](crate::CommandTable)
//! 4. The remaining tokens become the command's [`Args`]
//!
//! Text that is not triggered, or whose name is not registered, is simply
//! not a command call: [`parse_command`](Dispatcher::parse_command) returns
//! `None` and nothing is reported.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::command::{Args, Command, DEFAULT_QUOTES, Lexer, SharedCommandTable};
use crate::trigger::Trigger;

/// A successfully resolved command invocation.
#[derive(Debug, Clone)]
pub struct ParsedCommand {
    pub command: Arc<Command>,
    /// The alias the command was invoked under.
    pub invoked_name: String,
    pub args: Args,
}

/// Resolves message text against a command table.
#[derive(Clone)]
pub struct Dispatcher {
    commands: SharedCommandTable,
    trigger: Arc<dyn Trigger>,
    quotes: Vec<(char, char)>,
}

impl Dispatcher {
    pub fn new(commands: SharedCommandTable, trigger: Arc<dyn Trigger>) -> Self {
        Self {
            commands,
            trigger,
            quotes: DEFAULT_QUOTES.to_vec(),
        }
    }

    /// Replaces the quote pairs used when lexing arguments.
    pub fn with_quotes(mut self, quotes: impl IntoIterator<Item = (char, char)>) -> Self {
        self.quotes = quotes.into_iter().collect();
        self
    }

    pub fn commands(&self) -> &SharedCommandTable {
        &self.commands
    }

    /// Resolves `text` to a command and its arguments.
    ///
    /// Returns `None` if the trigger does not match or the name is not
    /// registered.
    pub fn parse_command(&self, text: &str) -> Option<ParsedCommand> {
        let lexer = Lexer::new(text).with_quotes(self.quotes.iter().copied());
        let Some((name, rest)) = lexer.lex_command(self.trigger.as_ref()) else {
            trace!("Text does not trigger a command");
            return None;
        };

        let Some(command) = self.commands.read().lookup(&name.value) else {
            trace!(command = %name.value, "No command registered under this name");
            return None;
        };

        debug!(command = %name.value, args = rest.len(), "Resolved command invocation");
        Some(ParsedCommand {
            command,
            invoked_name: name.value,
            args: Args::new(rest),
        })
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("quotes", &self.quotes)
            .finish_non_exhaustive()
    }
}
