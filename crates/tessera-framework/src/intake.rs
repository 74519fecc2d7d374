//! Author-origin policy deciding which messages may invoke commands.

use serde::{Deserialize, Serialize};
use tessera_core::{ChatClient, Message};

/// Which authors the bot accepts commands from.
///
/// The two switches are independent: a message is eligible when its author
/// is the bot itself and `respond_to_self` is set, or when its author is
/// anyone else and `respond_to_others` is set. Whether an account is
/// flagged as a bot account plays no part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakePolicy {
    /// Accept commands from other accounts (default: `true`).
    pub respond_to_others: bool,
    /// Accept commands from the bot's own account (default: `false`).
    pub respond_to_self: bool,
}

impl Default for IntakePolicy {
    fn default() -> Self {
        Self {
            respond_to_others: true,
            respond_to_self: false,
        }
    }
}

impl IntakePolicy {
    pub fn new(respond_to_others: bool, respond_to_self: bool) -> Self {
        Self {
            respond_to_others,
            respond_to_self,
        }
    }

    /// Returns whether a message whose authorship is `author_is_self` may
    /// be dispatched.
    pub fn allows(&self, author_is_self: bool) -> bool {
        if author_is_self {
            self.respond_to_self
        } else {
            self.respond_to_others
        }
    }

    /// Applies the policy to `message` as seen by `client`.
    pub fn allows_message(&self, client: &dyn ChatClient, message: &Message) -> bool {
        self.allows(client.is_self(&message.author))
    }
}
