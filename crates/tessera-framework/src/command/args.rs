use std::str::FromStr;

use super::lexer::{Token, join_raw};

/// The arguments of a command invocation.
///
/// Holds the tokens that followed the command name and a cursor into them.
/// Arguments are consumed front to back, either one at a time
/// ([`single`](Self::single)) or all at once ([`many`](Self::many)).
///
/// ```rust,ignore
/// async fn greet(ctx: BotContext, msg: Message, mut args: Args) -> anyhow::Result<()> {
///     let name = args.single().unwrap_or_else(|| "stranger".into());
///     ctx.reply(&msg, &format!("Hello, {name}!")).await?;
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    tokens: Vec<Token>,
    position: usize,
}

/// A saved cursor position, see [`Args::save`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgsState(usize);

impl Args {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// All tokens, consumed or not.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Total number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of tokens not consumed yet.
    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.position
    }

    /// Returns `true` once every token has been consumed.
    pub fn is_finished(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// Returns the next token without consuming it.
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    /// Consumes the next token and returns it.
    pub fn single_token(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.position)?.clone();
        self.position += 1;
        Some(token)
    }

    /// Consumes the next token and returns its unquoted value.
    pub fn single(&mut self) -> Option<String> {
        self.single_token().map(|t| t.value)
    }

    /// Parses the next token's value as `T`.
    ///
    /// The token is consumed only if parsing succeeds.
    pub fn single_parse<T: FromStr>(&mut self) -> Option<T> {
        let parsed: T = self.peek()?.value.parse().ok()?;
        self.position += 1;
        Some(parsed)
    }

    /// Consumes and returns every remaining token.
    pub fn many(&mut self) -> Vec<Token> {
        let rest = self.tokens[self.position..].to_vec();
        self.position = self.tokens.len();
        rest
    }

    /// Consumes the remaining tokens and returns them as originally written,
    /// quotes and spacing included.
    pub fn rest(&mut self) -> String {
        join_raw(&self.many())
    }

    /// Saves the cursor so that consumption can be undone with
    /// [`restore`](Self::restore).
    pub fn save(&self) -> ArgsState {
        ArgsState(self.position)
    }

    pub fn restore(&mut self, state: ArgsState) {
        self.position = state.0.min(self.tokens.len());
    }
}

impl From<Vec<Token>> for Args {
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens)
    }
}
