//! Prism Bot Example
//!
//! A small Tessera bot that talks to the terminal instead of a chat service.
//! Type messages on stdin; replies are printed to stdout.
//!
//! # Commands
//!
//! - `t.rainbow <text>` (alias `t.rain`): colours the text along a hue gradient
//! - `t.help [command]` (alias `t.?`): help for one command, or the command list
//!
//! # Usage
//!
//! ```bash
//! cargo run --package prism-bot -- --prefix t.
//! ```

mod commands;
mod console;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tessera::prelude::*;
use tessera::runtime::config::{BotConfig, LogOutput, LoggingConfig};
use tracing::{debug, error, info, warn};

use crate::console::ConsoleClient;

#[derive(Parser, Debug)]
#[command(name = "prism-bot", about = "A console demo bot for Tessera")]
struct Cli {
    /// Configuration file to load instead of searching for tessera.toml.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Login token, overriding the configured one.
    #[arg(short, long)]
    token: Option<String>,

    /// Command prefix, overriding the configured one.
    #[arg(short, long)]
    prefix: Option<String>,
}

/// The demo's event handler.
struct PrismBot {
    prefix: Prefix,
}

impl PrismBot {
    fn new(prefix: &str) -> Self {
        Self {
            prefix: Prefix::new(prefix),
        }
    }
}

impl Trigger for PrismBot {
    fn triggers(&self, text: &str) -> Option<usize> {
        self.prefix.triggers(text)
    }
}

#[async_trait]
impl EventHandler for PrismBot {
    async fn ready(&self, ctx: &BotContext) {
        match ctx.current_user() {
            Some(me) => info!("Ready as [{}:{}]", me.username, me.tag),
            None => warn!("Ready without a logged-in user"),
        }
    }

    async fn error(&self, _ctx: &BotContext, error: BotError) {
        error!("{error}");
    }

    async fn message(&self, _ctx: &BotContext, message: &Message) {
        debug!(author = %message.author, "{}", message.text());
    }

    async fn message_update(&self, _ctx: &BotContext, _message: &Message) {}

    async fn message_button_clicked(
        &self,
        _ctx: &BotContext,
        _click: &ButtonClick,
        responder: ButtonResponder,
    ) {
        responder.done(None);
    }

    async fn channel_create(&self, _ctx: &BotContext, _channel: &Channel) {}
    async fn channel_delete(&self, _ctx: &BotContext, _channel: &Channel) {}
    async fn guild_create(&self, _ctx: &BotContext, _guild: &Guild) {}
    async fn guild_delete(&self, _ctx: &BotContext, _guild: &Guild) {}
    async fn guild_member_add(&self, _ctx: &BotContext, _member: &GuildMember) {}
    async fn guild_member_remove(&self, _ctx: &BotContext, _member: &GuildMember) {}
    async fn presence_update(&self, _ctx: &BotContext, _presence: &Presence) {}
    async fn role_create(&self, _ctx: &BotContext, _role: &Role) {}
    async fn role_update(&self, _ctx: &BotContext, _role: &Role) {}
}

/// Demo defaults: the console accepts any token and logs go to stderr so
/// they do not interleave with replies.
fn demo_defaults() -> TesseraConfig {
    TesseraConfig {
        bot: BotConfig {
            token: Some("console".into()),
            prefix: "t.".into(),
            ..Default::default()
        },
        logging: LoggingConfig {
            output: LogOutput::Stderr,
            ..Default::default()
        },
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new().merge(demo_defaults());
    if let Some(path) = &cli.config {
        loader = loader.file(path);
    }
    let mut config = loader.load()?;
    if let Some(prefix) = cli.prefix {
        config.bot.prefix = prefix;
    }

    logging::init_from_config(&config.logging);

    let bot = Bot::new(
        Arc::new(ConsoleClient::new()),
        PrismBot::new(&config.bot.prefix),
        BotOptions::from(&config.bot),
    );

    let rainbow = Arc::new(commands::rainbow());
    bot.register_command("rainbow", Arc::clone(&rainbow), false)?;
    bot.register_command("rain", rainbow, false)?;

    let help = Arc::new(commands::help());
    bot.register_command("help", Arc::clone(&help), false)?;
    bot.register_command("?", help, false)?;

    info!(prefix = %config.bot.prefix, "Starting Prism Bot");
    bot.login(cli.token.as_deref()).await?;
    bot.run().await?;

    Ok(())
}
