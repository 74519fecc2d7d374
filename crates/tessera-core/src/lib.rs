//! # Tessera Core
//!
//! The types shared by every layer of Tessera:
//!
//! - [`ClientEvent`] and the decoded entities it carries ([`Message`],
//!   [`User`], [`Channel`], ...)
//! - [`ChatClient`], the interface to the external chat service
//! - [`ClientError`], errors reported by that service

pub mod client;
pub mod error;
pub mod event;

pub use client::{BoxedClient, ChatClient, EventStream};
pub use error::{ClientError, ClientResult};
pub use event::{
    ButtonClick, ButtonResponder, Channel, ClientEvent, EventKind, Guild, GuildMember, Message,
    Presence, PresenceStatus, Role, User,
};
