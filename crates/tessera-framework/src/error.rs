//! Error types for the Tessera framework.

use tessera_core::ClientError;
use thiserror::Error;

/// Errors raised by the command registration API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The name is already bound to another command and `overwrite` was not set.
    #[error("command name '{name}' is already registered; pass overwrite to replace it")]
    DuplicateName {
        /// The contested name.
        name: String,
    },

    /// The name is not bound and `force` was not set.
    #[error("command name '{name}' is not registered; pass force to ignore")]
    UnknownName {
        /// The missing name.
        name: String,
    },

    /// The name can never be produced by the lexer.
    #[error("invalid command name '{name}': names must be non-empty and contain no whitespace")]
    InvalidName {
        /// The rejected name.
        name: String,
    },
}

impl CommandError {
    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }

    pub fn unknown(name: impl Into<String>) -> Self {
        Self::UnknownName { name: name.into() }
    }

    pub fn invalid(name: impl Into<String>) -> Self {
        Self::InvalidName { name: name.into() }
    }
}

/// Result type for command registration.
pub type CommandResult<T> = Result<T, CommandError>;

/// Failures delivered to [`EventHandler::error`](crate::EventHandler::error).
#[derive(Debug, Error)]
pub enum BotError {
    /// A command returned an error.
    #[error("command '{command}' failed: {error:#}")]
    Command {
        /// The alias the command was invoked under.
        command: String,
        error: anyhow::Error,
    },

    /// The client reported an error on its event stream.
    #[error(transparent)]
    Client(#[from] ClientError),
}

impl BotError {
    pub fn command(command: impl Into<String>, error: anyhow::Error) -> Self {
        Self::Command {
            command: command.into(),
            error,
        }
    }
}
