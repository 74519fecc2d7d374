//! Test doubles shared by the framework's unit tests.

use std::sync::Arc;

use async_trait::async_trait;
use futures::StreamExt;
use parking_lot::Mutex;
use tessera_core::{ChatClient, ClientResult, EventStream, User};

/// A client that records what it sends and never produces events.
pub(crate) struct MockClient {
    me: User,
    sent: Mutex<Vec<(String, String)>>,
}

impl MockClient {
    pub(crate) fn logged_in_as(id: &str) -> Arc<Self> {
        Arc::new(Self {
            me: User::new(id, "tessera").with_bot(true),
            sent: Mutex::new(Vec::new()),
        })
    }

    /// `(channel_id, content)` pairs in send order.
    pub(crate) fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().clone()
    }
}

#[async_trait]
impl ChatClient for MockClient {
    async fn login(&self, _token: &str) -> ClientResult<()> {
        Ok(())
    }

    fn current_user(&self) -> Option<User> {
        Some(self.me.clone())
    }

    fn events(&self) -> ClientResult<EventStream> {
        Ok(futures::stream::empty().boxed())
    }

    async fn send(&self, channel_id: &str, content: &str) -> ClientResult<String> {
        let mut sent = self.sent.lock();
        sent.push((channel_id.to_string(), content.to_string()));
        Ok(format!("sent-{}", sent.len()))
    }
}
