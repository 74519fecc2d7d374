//! The chat client interface Tessera is layered on.
//!
//! Tessera does not speak any wire protocol. Instead it consumes a
//! [`ChatClient`], which owns the connection, decodes incoming traffic into
//! [`ClientEvent`]s and offers the few outbound operations the bot layer
//! needs (login and replying).
//!
//! # Implementing a client
//!
//! ```rust,ignore
//! struct MyClient { /* connection state */ }
//!
//! #[async_trait]
//! impl ChatClient for MyClient {
//!     async fn login(&self, token: &str) -> ClientResult<()> { /* ... */ }
//!     fn current_user(&self) -> Option<User> { /* ... */ }
//!     fn events(&self) -> ClientResult<EventStream> { /* ... */ }
//!     async fn send(&self, channel_id: &str, content: &str) -> ClientResult<String> { /* ... */ }
//! }
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::error::ClientResult;
use crate::event::{ClientEvent, Message, User};

/// Stream of decoded events produced by a client.
pub type EventStream = BoxStream<'static, ClientEvent>;

/// A connection to a chat service.
#[async_trait]
pub trait ChatClient: Send + Sync + 'static {
    /// Authenticates with the service using `token`.
    async fn login(&self, token: &str) -> ClientResult<()>;

    /// Returns the account the client is logged in as, if any.
    fn current_user(&self) -> Option<User>;

    /// Hands out the event stream.
    ///
    /// A client has a single event stream; calling this a second time
    /// returns [`ClientError::StreamTaken`](crate::ClientError::StreamTaken).
    fn events(&self) -> ClientResult<EventStream>;

    /// Sends `content` to a channel and returns the new message's ID.
    async fn send(&self, channel_id: &str, content: &str) -> ClientResult<String>;

    /// Replies to `message` in its channel.
    ///
    /// The default implementation sends to the message's channel. Services
    /// with threaded replies should override it.
    async fn reply(&self, message: &Message, content: &str) -> ClientResult<String> {
        self.send(&message.channel_id, content).await
    }

    /// Returns `true` if `user` is the account this client is logged in as.
    fn is_self(&self, user: &User) -> bool {
        self.current_user().is_some_and(|me| me.id == user.id)
    }
}

/// A shared chat client trait object.
pub type BoxedClient = Arc<dyn ChatClient>;
