//! Runtime error types.

use tessera_core::ClientError;
use tessera_framework::CommandError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur during runtime operations.
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// `login` was called without a token and none was configured.
    #[error("No login token was given and none is configured")]
    MissingCredential,

    /// The chat client failed.
    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    /// Registering or unregistering a command failed.
    #[error("Command error: {0}")]
    Command(#[from] CommandError),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for runtime operations.
pub type RuntimeResult<T> = Result<T, RuntimeError>;
