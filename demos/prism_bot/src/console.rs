//! A chat client backed by the terminal.
//!
//! Every line read from stdin arrives as a message from the same user in a
//! single channel; everything the bot sends is printed to stdout.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use futures::StreamExt;
use tessera::core::{
    ChatClient, ClientError, ClientEvent, ClientResult, EventStream, Message, User,
};
use tessera::prelude::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;

const CHANNEL: &str = "console";

pub struct ConsoleClient {
    me: User,
    user: User,
    logged_in: AtomicBool,
    stream_taken: AtomicBool,
    sent: AtomicU64,
}

impl Default for ConsoleClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleClient {
    pub fn new() -> Self {
        Self {
            me: User::new("prism", "prism").with_bot(true),
            user: User::new("console", "you"),
            logged_in: AtomicBool::new(false),
            stream_taken: AtomicBool::new(false),
            sent: AtomicU64::new(0),
        }
    }
}

#[async_trait]
impl ChatClient for ConsoleClient {
    async fn login(&self, token: &str) -> ClientResult<()> {
        if token.trim().is_empty() {
            return Err(ClientError::auth("empty token"));
        }
        self.logged_in.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn current_user(&self) -> Option<User> {
        self.logged_in
            .load(Ordering::SeqCst)
            .then(|| self.me.clone())
    }

    fn events(&self) -> ClientResult<EventStream> {
        if !self.logged_in.load(Ordering::SeqCst) {
            return Err(ClientError::NotConnected);
        }
        if self.stream_taken.swap(true, Ordering::SeqCst) {
            return Err(ClientError::StreamTaken);
        }

        let user = self.user.clone();
        let lines = BufReader::new(tokio::io::stdin()).lines();
        let messages = futures::stream::unfold((lines, 0u64), move |(mut lines, n)| {
            let user = user.clone();
            async move {
                match lines.next_line().await {
                    Ok(Some(line)) => {
                        let message = Message::new(format!("m{n}"), CHANNEL, user, Some(line));
                        Some((ClientEvent::Message(message), (lines, n + 1)))
                    }
                    Ok(None) => None,
                    Err(err) => {
                        warn!("Failed to read stdin: {err}");
                        None
                    }
                }
            }
        });

        Ok(futures::stream::once(async { ClientEvent::Ready })
            .chain(messages)
            .boxed())
    }

    async fn send(&self, channel_id: &str, content: &str) -> ClientResult<String> {
        if !self.logged_in.load(Ordering::SeqCst) {
            return Err(ClientError::NotConnected);
        }
        let id = self.sent.fetch_add(1, Ordering::SeqCst);
        println!("[#{channel_id}] {}: {content}", self.me.username);
        Ok(format!("r{id}"))
    }
}
