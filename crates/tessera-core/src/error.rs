//! Error types reported by chat clients.

use thiserror::Error;

/// Errors that can occur while talking to the chat service.
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// The service rejected the credentials.
    #[error("authentication failed: {reason}")]
    Auth {
        /// Reason given by the service.
        reason: String,
    },

    /// An operation needed a live session but none exists.
    #[error("client is not connected")]
    NotConnected,

    /// The event stream was already handed out.
    #[error("event stream already taken")]
    StreamTaken,

    /// Sending a message failed.
    #[error("failed to send message: {0}")]
    SendFailed(String),

    /// Anything else the client could not recover from.
    #[error("client error: {0}")]
    Internal(String),
}

impl ClientError {
    pub fn auth(reason: impl Into<String>) -> Self {
        Self::Auth {
            reason: reason.into(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
