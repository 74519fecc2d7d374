//! The bot runtime.
//!
//! [`Bot`] ties a [`ChatClient`] to an [`EventHandler`]: it pulls events off
//! the client's stream, hands each one to the matching handler method and
//! runs the commands that messages invoke.
//!
//! ```rust,ignore
//! let bot = Bot::new(client, MyBot::new("!"), BotOptions::from(&config.bot));
//! bot.register_command("ping", Arc::new(ping()), false)?;
//! bot.login(None).await?;
//! bot.run().await?;
//! ```

use std::future::Future;
use std::sync::Arc;

use futures::StreamExt;
use tessera_core::{BoxedClient, ChatClient, ClientEvent, Message};
use tessera_framework::{
    BotContext, BotError, Command, CommandResult, CommandTable, Dispatcher, EventHandler,
    IntakePolicy, ParsedCommand, SharedCommandTable, Trigger,
};
use tokio::task::JoinHandle;
use tracing::{Instrument, debug, error, info, info_span, trace, warn};

use crate::config::BotConfig;
use crate::error::{RuntimeError, RuntimeResult};

/// Construction options for a [`Bot`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BotOptions {
    /// Token used by [`Bot::login`] when none is passed.
    pub token: Option<String>,
    pub intake: IntakePolicy,
}

impl From<&BotConfig> for BotOptions {
    fn from(config: &BotConfig) -> Self {
        Self {
            token: config.token.clone(),
            intake: config.intake(),
        }
    }
}

/// A running bot: a client, a handler and a command table.
pub struct Bot<H: EventHandler> {
    client: BoxedClient,
    handler: Arc<H>,
    commands: SharedCommandTable,
    dispatcher: Dispatcher,
    intake: IntakePolicy,
    token: Option<String>,
}

impl<H: EventHandler> Bot<H> {
    pub fn new(client: BoxedClient, handler: H, options: BotOptions) -> Self {
        let handler = Arc::new(handler);
        let commands = CommandTable::shared();
        let trigger: Arc<dyn Trigger> = handler.clone();
        Self {
            dispatcher: Dispatcher::new(Arc::clone(&commands), trigger),
            client,
            handler,
            commands,
            intake: options.intake,
            token: options.token,
        }
    }

    pub fn client(&self) -> &BoxedClient {
        &self.client
    }

    pub fn handler(&self) -> &Arc<H> {
        &self.handler
    }

    pub fn commands(&self) -> &SharedCommandTable {
        &self.commands
    }

    pub fn intake(&self) -> IntakePolicy {
        self.intake
    }

    /// A context handle sharing this bot's client and command table.
    pub fn context(&self) -> BotContext {
        BotContext::new(Arc::clone(&self.client), Arc::clone(&self.commands))
    }

    /// Binds `name` to `command`. See [`CommandTable::register`].
    pub fn register_command(
        &self,
        name: impl Into<String>,
        command: Arc<Command>,
        overwrite: bool,
    ) -> CommandResult<()> {
        self.commands.write().register(name, command, overwrite)
    }

    /// Removes the binding for `name`. See [`CommandTable::unregister`].
    pub fn unregister_command(&self, name: &str, force: bool) -> CommandResult<()> {
        self.commands.write().unregister(name, force)
    }

    /// Resolves `text` to a command invocation without running it.
    pub fn parse_command(&self, text: &str) -> Option<ParsedCommand> {
        self.dispatcher.parse_command(text)
    }

    /// Logs the client in.
    ///
    /// Uses `token` if given, otherwise the token from [`BotOptions`].
    pub async fn login(&self, token: Option<&str>) -> RuntimeResult<()> {
        let token = token
            .or(self.token.as_deref())
            .ok_or(RuntimeError::MissingCredential)?;

        info!("Logging in");
        self.client.login(token).await?;
        if let Some(me) = self.client.current_user() {
            info!(user = %me, "Logged in");
        }
        Ok(())
    }

    /// Processes events until the stream ends or Ctrl+C is pressed.
    pub async fn run(&self) -> RuntimeResult<()> {
        self.run_until(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received Ctrl+C, shutting down"),
                Err(err) => {
                    warn!("Failed to listen for Ctrl+C: {err}");
                    std::future::pending::<()>().await;
                }
            }
        })
        .await
    }

    /// Processes events until the stream ends or `shutdown` completes.
    ///
    /// Events are handled one at a time in arrival order. Commands run on
    /// their own tasks and are not waited for.
    pub async fn run_until<F>(&self, shutdown: F) -> RuntimeResult<()>
    where
        F: Future<Output = ()>,
    {
        let mut events = self.client.events().map_err(RuntimeError::Client)?;
        tokio::pin!(shutdown);

        info!("Bot running");
        loop {
            tokio::select! {
                event = events.next() => match event {
                    Some(event) => self.dispatch_event(event).await,
                    None => {
                        info!("Event stream ended");
                        break;
                    }
                },
                () = &mut shutdown => break,
            }
        }

        Ok(())
    }

    /// Routes one event to the handler.
    ///
    /// Message events additionally go through command dispatch.
    pub async fn dispatch_event(&self, event: ClientEvent) {
        trace!(kind = %event.kind(), "Dispatching event");
        let ctx = self.context();
        let handler = self.handler.as_ref();

        match event {
            ClientEvent::Ready => handler.ready(&ctx).await,
            ClientEvent::Error(err) => {
                warn!("Client reported an error: {err}");
                handler.error(&ctx, BotError::Client(err)).await;
            }
            ClientEvent::Message(message) => {
                self.handle_message(message).await;
            }
            ClientEvent::MessageUpdate(message) => handler.message_update(&ctx, &message).await,
            ClientEvent::MessageButtonClicked(click, responder) => {
                handler.message_button_clicked(&ctx, &click, responder).await;
            }
            ClientEvent::ChannelCreate(channel) => handler.channel_create(&ctx, &channel).await,
            ClientEvent::ChannelDelete(channel) => handler.channel_delete(&ctx, &channel).await,
            ClientEvent::GuildCreate(guild) => handler.guild_create(&ctx, &guild).await,
            ClientEvent::GuildDelete(guild) => handler.guild_delete(&ctx, &guild).await,
            ClientEvent::GuildMemberAdd(member) => handler.guild_member_add(&ctx, &member).await,
            ClientEvent::GuildMemberRemove(member) => {
                handler.guild_member_remove(&ctx, &member).await;
            }
            ClientEvent::PresenceUpdate(presence) => {
                handler.presence_update(&ctx, &presence).await;
            }
            ClientEvent::RoleCreate(role) => handler.role_create(&ctx, &role).await,
            ClientEvent::RoleUpdate(role) => handler.role_update(&ctx, &role).await,
        }
    }

    /// Hands `message` to the handler, then spawns the command it invokes.
    ///
    /// Returns the command's task, or `None` if no command was started.
    async fn handle_message(&self, message: Message) -> Option<JoinHandle<()>> {
        let ctx = self.context();
        self.handler.message(&ctx, &message).await;

        let text = message.content.as_deref()?;
        if !self.intake.allows_message(self.client.as_ref(), &message) {
            trace!(author = %message.author, "Message author not accepted by intake policy");
            return None;
        }

        let parsed = self.dispatcher.parse_command(text)?;
        Some(self.spawn_command(ctx, parsed, message))
    }

    fn spawn_command(
        &self,
        ctx: BotContext,
        parsed: ParsedCommand,
        message: Message,
    ) -> JoinHandle<()> {
        let ParsedCommand {
            command,
            invoked_name,
            args,
        } = parsed;
        let handler = Arc::clone(&self.handler);
        let span = info_span!("command", name = %invoked_name, message_id = %message.id);

        tokio::spawn(
            async move {
                debug!("Invoking command");
                if let Err(err) = command.invoke(ctx.clone(), message, args).await {
                    error!("Command '{invoked_name}' failed: {err:#}");
                    handler.error(&ctx, BotError::command(invoked_name, err)).await;
                }
            }
            .instrument(span),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use tessera_core::{
        ButtonClick, ButtonResponder, Channel, ClientError, ClientResult, EventStream, Guild,
        GuildMember, Presence, Role, User,
    };
    use tessera_framework::{Args, Prefix};
    use tokio::sync::mpsc;

    const BOT_ID: &str = "bot-1";

    struct MockClient {
        me: User,
        logins: Mutex<Vec<String>>,
        sent: Mutex<Vec<(String, String)>>,
        events: Mutex<Option<Vec<ClientEvent>>>,
        endless: bool,
    }

    impl MockClient {
        fn build(events: Vec<ClientEvent>, endless: bool) -> Arc<Self> {
            Arc::new(Self {
                me: User::new(BOT_ID, "tessera").with_bot(true),
                logins: Mutex::new(Vec::new()),
                sent: Mutex::new(Vec::new()),
                events: Mutex::new(Some(events)),
                endless,
            })
        }

        fn with_events(events: Vec<ClientEvent>) -> Arc<Self> {
            Self::build(events, false)
        }

        fn new() -> Arc<Self> {
            Self::build(Vec::new(), false)
        }

        /// A client whose event stream never ends.
        fn endless() -> Arc<Self> {
            Self::build(Vec::new(), true)
        }
    }

    #[async_trait]
    impl ChatClient for MockClient {
        async fn login(&self, token: &str) -> ClientResult<()> {
            self.logins.lock().push(token.to_string());
            Ok(())
        }

        fn current_user(&self) -> Option<User> {
            Some(self.me.clone())
        }

        fn events(&self) -> ClientResult<EventStream> {
            let events = self.events.lock().take().ok_or(ClientError::StreamTaken)?;
            if self.endless {
                return Ok(futures::stream::pending().boxed());
            }
            Ok(futures::stream::iter(events).boxed())
        }

        async fn send(&self, channel_id: &str, content: &str) -> ClientResult<String> {
            let mut sent = self.sent.lock();
            sent.push((channel_id.to_string(), content.to_string()));
            Ok(format!("sent-{}", sent.len()))
        }
    }

    struct TestBot {
        prefix: Prefix,
        seen: Mutex<Vec<String>>,
        errors: mpsc::UnboundedSender<String>,
    }

    impl TestBot {
        fn new() -> (Self, mpsc::UnboundedReceiver<String>) {
            let (tx, rx) = mpsc::unbounded_channel();
            let bot = Self {
                prefix: Prefix::new("!"),
                seen: Mutex::new(Vec::new()),
                errors: tx,
            };
            (bot, rx)
        }

        fn push(&self, what: impl Into<String>) {
            self.seen.lock().push(what.into());
        }

        fn seen(&self) -> Vec<String> {
            self.seen.lock().clone()
        }
    }

    impl Trigger for TestBot {
        fn triggers(&self, text: &str) -> Option<usize> {
            self.prefix.triggers(text)
        }
    }

    #[async_trait]
    impl EventHandler for TestBot {
        async fn ready(&self, _ctx: &BotContext) {
            self.push("ready");
        }
        async fn error(&self, _ctx: &BotContext, error: BotError) {
            let _ = self.errors.send(error.to_string());
        }
        async fn message(&self, _ctx: &BotContext, message: &Message) {
            self.push(format!("message {}", message.id));
        }
        async fn message_update(&self, _ctx: &BotContext, message: &Message) {
            self.push(format!("message_update {}", message.id));
        }
        async fn message_button_clicked(
            &self,
            _ctx: &BotContext,
            click: &ButtonClick,
            responder: ButtonResponder,
        ) {
            self.push(format!("button {}", click.button_id));
            responder.done(Some("thanks".into()));
        }
        async fn channel_create(&self, _ctx: &BotContext, channel: &Channel) {
            self.push(format!("channel_create {}", channel.id));
        }
        async fn channel_delete(&self, _ctx: &BotContext, channel: &Channel) {
            self.push(format!("channel_delete {}", channel.id));
        }
        async fn guild_create(&self, _ctx: &BotContext, guild: &Guild) {
            self.push(format!("guild_create {}", guild.id));
        }
        async fn guild_delete(&self, _ctx: &BotContext, guild: &Guild) {
            self.push(format!("guild_delete {}", guild.id));
        }
        async fn guild_member_add(&self, _ctx: &BotContext, member: &GuildMember) {
            self.push(format!("guild_member_add {}", member.user.id));
        }
        async fn guild_member_remove(&self, _ctx: &BotContext, member: &GuildMember) {
            self.push(format!("guild_member_remove {}", member.user.id));
        }
        async fn presence_update(&self, _ctx: &BotContext, presence: &Presence) {
            self.push(format!("presence_update {}", presence.user_id));
        }
        async fn role_create(&self, _ctx: &BotContext, role: &Role) {
            self.push(format!("role_create {}", role.id));
        }
        async fn role_update(&self, _ctx: &BotContext, role: &Role) {
            self.push(format!("role_update {}", role.id));
        }
    }

    fn text_message(id: &str, author: User, content: &str) -> Message {
        Message::new(id, "general", author, Some(content.to_string()))
    }

    fn alice() -> User {
        User::new("u1", "alice")
    }

    fn echo() -> Arc<Command> {
        Arc::new(Command::new(
            |ctx: BotContext, message: Message, mut args: Args| async move {
                ctx.reply(&message, &args.rest()).await?;
                anyhow::Ok(())
            },
        ))
    }

    fn failing() -> Arc<Command> {
        Arc::new(Command::new(|_, _, _| async {
            Err::<(), _>(anyhow::anyhow!("out of paint"))
        }))
    }

    #[tokio::test]
    async fn test_login_uses_argument_then_stored_token() {
        let client = MockClient::new();
        let (handler, _rx) = TestBot::new();
        let options = BotOptions {
            token: Some("stored".into()),
            ..Default::default()
        };
        let bot = Bot::new(client.clone(), handler, options);

        bot.login(Some("explicit")).await.unwrap();
        bot.login(None).await.unwrap();

        assert_eq!(*client.logins.lock(), vec!["explicit", "stored"]);
    }

    #[tokio::test]
    async fn test_login_without_token_fails() {
        let client = MockClient::new();
        let (handler, _rx) = TestBot::new();
        let bot = Bot::new(client.clone(), handler, BotOptions::default());

        let err = bot.login(None).await.unwrap_err();
        assert!(matches!(err, RuntimeError::MissingCredential));
        assert!(client.logins.lock().is_empty());
    }

    #[tokio::test]
    async fn test_command_is_spawned_and_replies() {
        let client = MockClient::new();
        let (handler, _rx) = TestBot::new();
        let bot = Bot::new(client.clone(), handler, BotOptions::default());
        bot.register_command("echo", echo(), false).unwrap();

        let task = bot
            .handle_message(text_message("m1", alice(), "!echo hello   world"))
            .await
            .expect("command should be dispatched");
        task.await.unwrap();

        assert_eq!(
            *client.sent.lock(),
            vec![("general".to_string(), "hello   world".to_string())]
        );
        assert_eq!(bot.handler().seen(), vec!["message m1"]);
    }

    #[tokio::test]
    async fn test_failed_command_reaches_error_handler() {
        let client = MockClient::new();
        let (handler, mut errors) = TestBot::new();
        let bot = Bot::new(client, handler, BotOptions::default());
        bot.register_command("paint", failing(), false).unwrap();

        bot.dispatch_event(ClientEvent::Message(text_message("m1", alice(), "!paint")))
            .await;

        let error = errors.recv().await.unwrap();
        assert_eq!(error, "command 'paint' failed: out of paint");
    }

    #[tokio::test]
    async fn test_message_handler_runs_for_non_commands() {
        let client = MockClient::new();
        let (handler, _rx) = TestBot::new();
        let bot = Bot::new(client.clone(), handler, BotOptions::default());
        bot.register_command("echo", echo(), false).unwrap();

        assert!(bot.handle_message(text_message("m1", alice(), "hello")).await.is_none());
        assert!(bot.handle_message(text_message("m2", alice(), "!nope")).await.is_none());
        let no_text = Message::new("m3", "general", alice(), None);
        assert!(bot.handle_message(no_text).await.is_none());

        assert_eq!(bot.handler().seen(), vec!["message m1", "message m2", "message m3"]);
        assert!(client.sent.lock().is_empty());
    }

    #[tokio::test]
    async fn test_intake_policy_filters_authors() {
        let client = MockClient::new();
        let (handler, _rx) = TestBot::new();
        let bot = Bot::new(client, handler, BotOptions::default());
        bot.register_command("echo", echo(), false).unwrap();

        let me = User::new(BOT_ID, "tessera").with_bot(true);
        let other_bot = User::new("u2", "helper").with_bot(true);

        assert!(bot.handle_message(text_message("m1", me.clone(), "!echo x")).await.is_none());
        assert!(bot.handle_message(text_message("m2", other_bot, "!echo x")).await.is_some());

        let client = MockClient::new();
        let (handler, _rx) = TestBot::new();
        let options = BotOptions {
            intake: IntakePolicy::new(false, true),
            ..Default::default()
        };
        let bot = Bot::new(client, handler, options);
        bot.register_command("echo", echo(), false).unwrap();

        assert!(bot.handle_message(text_message("m3", me, "!echo x")).await.is_some());
        assert!(bot.handle_message(text_message("m4", alice(), "!echo x")).await.is_none());
    }

    #[tokio::test]
    async fn test_run_routes_every_event_kind() {
        let (responder, ack) = ButtonResponder::channel();
        let role = Role {
            id: "r1".into(),
            guild_id: "g1".into(),
            name: "painters".into(),
        };
        let member = GuildMember {
            guild_id: "g1".into(),
            user: alice(),
        };
        let channel = Channel {
            id: "c1".into(),
            name: Some("general".into()),
            guild_id: Some("g1".into()),
        };
        let guild = Guild {
            id: "g1".into(),
            name: "Prism".into(),
        };
        let events = vec![
            ClientEvent::Ready,
            ClientEvent::Message(text_message("m1", alice(), "hi")),
            ClientEvent::MessageUpdate(text_message("m1", alice(), "hi!")),
            ClientEvent::MessageButtonClicked(
                ButtonClick {
                    button_id: "b1".into(),
                    message_id: "m1".into(),
                    channel_id: "c1".into(),
                    clicked_by: alice(),
                },
                responder,
            ),
            ClientEvent::ChannelCreate(channel.clone()),
            ClientEvent::ChannelDelete(channel),
            ClientEvent::GuildCreate(guild.clone()),
            ClientEvent::GuildDelete(guild),
            ClientEvent::GuildMemberAdd(member.clone()),
            ClientEvent::GuildMemberRemove(member),
            ClientEvent::PresenceUpdate(Presence {
                user_id: "u1".into(),
                status: tessera_core::PresenceStatus::Online,
            }),
            ClientEvent::RoleCreate(role.clone()),
            ClientEvent::RoleUpdate(role),
        ];

        let client = MockClient::with_events(events);
        let (handler, _rx) = TestBot::new();
        let bot = Bot::new(client, handler, BotOptions::default());

        bot.run_until(std::future::pending()).await.unwrap();

        assert_eq!(
            bot.handler().seen(),
            vec![
                "ready",
                "message m1",
                "message_update m1",
                "button b1",
                "channel_create c1",
                "channel_delete c1",
                "guild_create g1",
                "guild_delete g1",
                "guild_member_add u1",
                "guild_member_remove u1",
                "presence_update u1",
                "role_create r1",
                "role_update r1",
            ]
        );
        assert_eq!(ack.await.unwrap().as_deref(), Some("thanks"));
    }

    #[tokio::test]
    async fn test_client_error_event_is_forwarded() {
        let client = MockClient::with_events(vec![ClientEvent::Error(ClientError::NotConnected)]);
        let (handler, mut errors) = TestBot::new();
        let bot = Bot::new(client, handler, BotOptions::default());

        bot.run_until(std::future::pending()).await.unwrap();

        assert_eq!(errors.recv().await.unwrap(), "client is not connected");
    }

    #[tokio::test]
    async fn test_run_twice_reports_taken_stream() {
        let client = MockClient::new();
        let (handler, _rx) = TestBot::new();
        let bot = Bot::new(client, handler, BotOptions::default());

        bot.run_until(std::future::pending()).await.unwrap();
        let err = bot.run_until(std::future::pending()).await.unwrap_err();
        assert!(matches!(err, RuntimeError::Client(ClientError::StreamTaken)));
    }

    #[tokio::test]
    async fn test_shutdown_stops_run() {
        let client = MockClient::endless();
        let (handler, _rx) = TestBot::new();
        let bot = Bot::new(client, handler, BotOptions::default());

        let (stop, stopped) = tokio::sync::oneshot::channel::<()>();
        stop.send(()).unwrap();
        bot.run_until(async {
            let _ = stopped.await;
        })
        .await
        .unwrap();
    }

    #[test]
    fn test_options_from_config() {
        let config = BotConfig {
            token: Some("abc".into()),
            respond_to_self: true,
            ..Default::default()
        };
        let options = BotOptions::from(&config);
        assert_eq!(options.token.as_deref(), Some("abc"));
        assert_eq!(options.intake, IntakePolicy::new(true, true));
    }
}
