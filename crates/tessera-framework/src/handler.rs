//! Event handler capability set.
//!
//! [`EventHandler`] declares one method per [`ClientEvent`] kind. All
//! methods are required, so a bot that forgets an event does not compile.
//! The trait also requires [`Trigger`]: every bot decides for itself which
//! messages invoke commands.
//!
//! ```rust,ignore
//! struct MyBot { prefix: Prefix }
//!
//! impl Trigger for MyBot {
//!     fn triggers(&self, text: &str) -> Option<usize> {
//!         self.prefix.triggers(text)
//!     }
//! }
//!
//! #[async_trait]
//! impl EventHandler for MyBot {
//!     async fn ready(&self, ctx: &BotContext) {
//!         info!("Ready as {:?}", ctx.current_user());
//!     }
//!     // ... one method per event kind
//! }
//! ```
//!
//! [`ClientEvent`]: tessera_core::ClientEvent

use async_trait::async_trait;
use tessera_core::{
    ButtonClick, ButtonResponder, Channel, Guild, GuildMember, Message, Presence, Role,
};

use crate::context::BotContext;
use crate::error::BotError;
use crate::trigger::Trigger;

/// Receives every event a bot observes.
#[async_trait]
pub trait EventHandler: Trigger + 'static {
    /// The client finished logging in.
    async fn ready(&self, ctx: &BotContext);

    /// A command failed or the client reported an error.
    async fn error(&self, ctx: &BotContext, error: BotError);

    /// A message was received.
    ///
    /// Runs for every message, before and regardless of command dispatch.
    async fn message(&self, ctx: &BotContext, message: &Message);

    /// A visible message was edited; `message` is the new version.
    async fn message_update(&self, ctx: &BotContext, message: &Message);

    /// A button on one of the bot's messages was clicked.
    ///
    /// Call [`ButtonResponder::done`] once the click has been handled.
    async fn message_button_clicked(
        &self,
        ctx: &BotContext,
        click: &ButtonClick,
        responder: ButtonResponder,
    );

    async fn channel_create(&self, ctx: &BotContext, channel: &Channel);

    async fn channel_delete(&self, ctx: &BotContext, channel: &Channel);

    async fn guild_create(&self, ctx: &BotContext, guild: &Guild);

    async fn guild_delete(&self, ctx: &BotContext, guild: &Guild);

    async fn guild_member_add(&self, ctx: &BotContext, member: &GuildMember);

    /// A member left a guild for any reason.
    async fn guild_member_remove(&self, ctx: &BotContext, member: &GuildMember);

    async fn presence_update(&self, ctx: &BotContext, presence: &Presence);

    async fn role_create(&self, ctx: &BotContext, role: &Role);

    /// `role` is the role as it appears after the update.
    async fn role_update(&self, ctx: &BotContext, role: &Role);
}
