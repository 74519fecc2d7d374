//! Name → command bindings.
//!
//! The table is the only place command names are stored. A command's alias
//! list is computed from the bindings on demand, so the table and the alias
//! lists cannot disagree.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use super::Command;
use crate::error::{CommandError, CommandResult};

/// A command table shared between the bot, its dispatcher and handlers.
///
/// Lookups vastly outnumber registrations, hence the read-write lock.
pub type SharedCommandTable = Arc<RwLock<CommandTable>>;

#[derive(Debug, Clone)]
struct Binding {
    command: Arc<Command>,
    /// Registration sequence number; orders a command's aliases.
    seq: u64,
}

/// A registered command together with all of its names.
#[derive(Debug, Clone)]
pub struct CommandEntry {
    pub command: Arc<Command>,
    /// Aliases in registration order; never empty.
    pub names: Vec<String>,
}

impl CommandEntry {
    /// The first name the command was registered under.
    pub fn primary_name(&self) -> &str {
        &self.names[0]
    }
}

/// Mapping from invocation name to [`Command`].
#[derive(Debug, Default)]
pub struct CommandTable {
    bindings: HashMap<String, Binding>,
    next_seq: u64,
}

impl CommandTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a new, empty table for sharing.
    pub fn shared() -> SharedCommandTable {
        Arc::new(RwLock::new(Self::new()))
    }

    /// Binds `name` to `command`.
    ///
    /// If `name` is bound to a different command, this fails with
    /// [`CommandError::DuplicateName`] unless `overwrite` is set, in which
    /// case the old command loses the name. Binding a name to the command
    /// it already belongs to is a no-op.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        command: Arc<Command>,
        overwrite: bool,
    ) -> CommandResult<()> {
        let name = name.into();
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(CommandError::invalid(name));
        }

        if let Some(existing) = self.bindings.get(&name) {
            if Arc::ptr_eq(&existing.command, &command) {
                return Ok(());
            }
            if !overwrite {
                return Err(CommandError::duplicate(name));
            }
            debug!(command = %name, "Overwriting command binding");
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        debug!(command = %name, "Registered command");
        self.bindings.insert(name, Binding { command, seq });
        Ok(())
    }

    /// Removes the binding for `name`.
    ///
    /// Fails with [`CommandError::UnknownName`] if `name` is not bound,
    /// unless `force` is set.
    pub fn unregister(&mut self, name: &str, force: bool) -> CommandResult<()> {
        match self.bindings.remove(name) {
            Some(_) => {
                debug!(command = %name, "Unregistered command");
                Ok(())
            }
            None if force => Ok(()),
            None => Err(CommandError::unknown(name)),
        }
    }

    /// Returns the command bound to `name`.
    pub fn lookup(&self, name: &str) -> Option<Arc<Command>> {
        self.bindings.get(name).map(|b| Arc::clone(&b.command))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Number of bound names (not distinct commands).
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Names bound to `command`, in registration order.
    pub fn names_of(&self, command: &Arc<Command>) -> Vec<String> {
        let mut names: Vec<(u64, &str)> = self
            .bindings
            .iter()
            .filter(|(_, b)| Arc::ptr_eq(&b.command, command))
            .map(|(name, b)| (b.seq, name.as_str()))
            .collect();
        names.sort_unstable_by_key(|&(seq, _)| seq);
        names.into_iter().map(|(_, name)| name.to_string()).collect()
    }

    /// The first name still bound to `command`.
    pub fn primary_name(&self, command: &Arc<Command>) -> Option<String> {
        self.bindings
            .iter()
            .filter(|(_, b)| Arc::ptr_eq(&b.command, command))
            .min_by_key(|(_, b)| b.seq)
            .map(|(name, _)| name.clone())
    }

    /// Every reachable command once, ordered by its oldest binding.
    pub fn commands(&self) -> Vec<CommandEntry> {
        let mut ordered: Vec<(&String, &Binding)> = self.bindings.iter().collect();
        ordered.sort_unstable_by_key(|(_, b)| b.seq);

        let mut entries: Vec<CommandEntry> = Vec::new();
        for (name, binding) in ordered {
            match entries
                .iter_mut()
                .find(|e| Arc::ptr_eq(&e.command, &binding.command))
            {
                Some(entry) => entry.names.push(name.clone()),
                None => entries.push(CommandEntry {
                    command: Arc::clone(&binding.command),
                    names: vec![name.clone()],
                }),
            }
        }
        entries
    }
}
