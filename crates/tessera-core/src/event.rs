//! Decoded event model for the Tessera bot library.
//!
//! The chat client is responsible for turning wire data into these types.
//! Tessera never looks at raw payloads; a [`Message`] reaches the dispatch
//! core with its text already extracted and its author already resolved.
//!
//! ```text
//! ClientEvent
//! ├── Ready
//! ├── Error(ClientError)
//! ├── Message(Message) / MessageUpdate(Message)
//! ├── MessageButtonClicked(ButtonClick, ButtonResponder)
//! ├── ChannelCreate(Channel) / ChannelDelete(Channel)
//! ├── GuildCreate(Guild) / GuildDelete(Guild)
//! ├── GuildMemberAdd(GuildMember) / GuildMemberRemove(GuildMember)
//! ├── PresenceUpdate(Presence)
//! └── RoleCreate(Role) / RoleUpdate(Role)
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;

use crate::error::ClientError;

// ============================================================================
// Entities
// ============================================================================

/// An account on the chat service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    /// Short discriminator shown next to the username.
    #[serde(default)]
    pub tag: String,
    /// Whether the service flags this account as a bot account.
    #[serde(default)]
    pub bot: bool,
}

impl User {
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            tag: String::new(),
            bot: false,
        }
    }

    /// Marks this user as a bot account.
    pub fn with_bot(mut self, bot: bool) -> Self {
        self.bot = bot;
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tag.is_empty() {
            write!(f, "{}", self.username)
        } else {
            write!(f, "{}:{}", self.username, self.tag)
        }
    }
}

/// A chat message.
///
/// `content` is `None` for messages that carry no text at all (for example
/// attachment-only messages). Such messages are still delivered to
/// handlers but never reach command dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub channel_id: String,
    #[serde(default)]
    pub content: Option<String>,
    pub author: User,
}

impl Message {
    pub fn new(
        id: impl Into<String>,
        channel_id: impl Into<String>,
        author: User,
        content: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            channel_id: channel_id.into(),
            content,
            author,
        }
    }

    /// Returns the text content, or an empty string if there is none.
    pub fn text(&self) -> &str {
        self.content.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Owning guild, `None` for direct-message channels.
    #[serde(default)]
    pub guild_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guild {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildMember {
    pub guild_id: String,
    pub user: User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresenceStatus {
    Offline,
    Online,
    Away,
    Busy,
    LookingToPlay,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presence {
    pub user_id: String,
    pub status: PresenceStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: String,
    pub guild_id: String,
    pub name: String,
}

/// A click on a button attached to one of the bot's messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonClick {
    pub button_id: String,
    pub message_id: String,
    pub channel_id: String,
    pub clicked_by: User,
}

// ============================================================================
// Button acknowledgement
// ============================================================================

/// Completes a button click.
///
/// The client waits for the handler to call [`done`](Self::done) before it
/// acknowledges the click to the service. Dropping the responder without
/// calling `done` acknowledges with no message.
pub struct ButtonResponder {
    tx: oneshot::Sender<Option<String>>,
}

impl ButtonResponder {
    /// Creates a responder and the receiver the client listens on.
    pub fn channel() -> (Self, oneshot::Receiver<Option<String>>) {
        let (tx, rx) = oneshot::channel();
        (Self { tx }, rx)
    }

    /// Finishes processing, optionally showing `message` to the user who
    /// clicked.
    pub fn done(self, message: Option<String>) {
        // The client may have stopped waiting; nothing to report then.
        let _ = self.tx.send(message);
    }
}

impl fmt::Debug for ButtonResponder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonResponder")
            .field("closed", &self.tx.is_closed())
            .finish()
    }
}

// ============================================================================
// Client events
// ============================================================================

/// Classification of client events, one per [`ClientEvent`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Ready,
    Error,
    Message,
    MessageUpdate,
    MessageButtonClicked,
    ChannelCreate,
    ChannelDelete,
    GuildCreate,
    GuildDelete,
    GuildMemberAdd,
    GuildMemberRemove,
    PresenceUpdate,
    RoleCreate,
    RoleUpdate,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::Error => "error",
            Self::Message => "message",
            Self::MessageUpdate => "message_update",
            Self::MessageButtonClicked => "message_button_clicked",
            Self::ChannelCreate => "channel_create",
            Self::ChannelDelete => "channel_delete",
            Self::GuildCreate => "guild_create",
            Self::GuildDelete => "guild_delete",
            Self::GuildMemberAdd => "guild_member_add",
            Self::GuildMemberRemove => "guild_member_remove",
            Self::PresenceUpdate => "presence_update",
            Self::RoleCreate => "role_create",
            Self::RoleUpdate => "role_update",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An event emitted by the chat client.
#[derive(Debug)]
pub enum ClientEvent {
    /// Authentication finished and the client is ready.
    Ready,
    /// The client hit an error it could not handle itself.
    Error(ClientError),
    Message(Message),
    MessageUpdate(Message),
    MessageButtonClicked(ButtonClick, ButtonResponder),
    ChannelCreate(Channel),
    ChannelDelete(Channel),
    GuildCreate(Guild),
    GuildDelete(Guild),
    GuildMemberAdd(GuildMember),
    GuildMemberRemove(GuildMember),
    PresenceUpdate(Presence),
    RoleCreate(Role),
    RoleUpdate(Role),
}

impl ClientEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Ready => EventKind::Ready,
            Self::Error(_) => EventKind::Error,
            Self::Message(_) => EventKind::Message,
            Self::MessageUpdate(_) => EventKind::MessageUpdate,
            Self::MessageButtonClicked(..) => EventKind::MessageButtonClicked,
            Self::ChannelCreate(_) => EventKind::ChannelCreate,
            Self::ChannelDelete(_) => EventKind::ChannelDelete,
            Self::GuildCreate(_) => EventKind::GuildCreate,
            Self::GuildDelete(_) => EventKind::GuildDelete,
            Self::GuildMemberAdd(_) => EventKind::GuildMemberAdd,
            Self::GuildMemberRemove(_) => EventKind::GuildMemberRemove,
            Self::PresenceUpdate(_) => EventKind::PresenceUpdate,
            Self::RoleCreate(_) => EventKind::RoleCreate,
            Self::RoleUpdate(_) => EventKind::RoleUpdate,
        }
    }
}
