//! The context handed to event handlers and commands.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLockReadGuard;
use tessera_core::{BoxedClient, ClientResult, Message, User};

use crate::command::{Command, CommandTable, SharedCommandTable};

/// A cheap-to-clone handle on a running bot.
///
/// Gives handlers and commands access to the chat client and to the bot's
/// command table. Every clone refers to the same client and table.
#[derive(Clone)]
pub struct BotContext {
    client: BoxedClient,
    commands: SharedCommandTable,
}

impl BotContext {
    pub fn new(client: BoxedClient, commands: SharedCommandTable) -> Self {
        Self { client, commands }
    }

    pub fn client(&self) -> &BoxedClient {
        &self.client
    }

    /// Read access to the command table.
    ///
    /// Do not hold the guard across an `.await`.
    pub fn commands(&self) -> RwLockReadGuard<'_, CommandTable> {
        self.commands.read()
    }

    /// The shared table itself.
    pub fn command_table(&self) -> &SharedCommandTable {
        &self.commands
    }

    pub fn lookup(&self, name: &str) -> Option<Arc<Command>> {
        self.commands.read().lookup(name)
    }

    pub fn names_of(&self, command: &Arc<Command>) -> Vec<String> {
        self.commands.read().names_of(command)
    }

    /// Replies to `message` through the client.
    pub async fn reply(&self, message: &Message, content: &str) -> ClientResult<String> {
        self.client.reply(message, content).await
    }

    pub fn current_user(&self) -> Option<User> {
        self.client.current_user()
    }

    /// Returns `true` if `user` is the bot's own account.
    pub fn is_self(&self, user: &User) -> bool {
        self.client.is_self(user)
    }
}

impl fmt::Debug for BotContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotContext")
            .field("commands", &self.commands.read().len())
            .finish_non_exhaustive()
    }
}
