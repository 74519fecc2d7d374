//! Quote-aware lexer for command text.
//!
//! Splits text into [`Token`]s on whitespace while keeping quoted spans
//! together. Every token remembers how it was written (`raw`) and the
//! whitespace that followed it (`trailing`), so joining `raw + trailing`
//! over the tokens gives back the lexed text unchanged.

use tracing::trace;

use crate::trigger::Trigger;

/// Quote pairs recognised by default: straight double, straight single and
/// curly double quotes.
pub const DEFAULT_QUOTES: [(char, char); 3] = [('"', '"'), ('\'', '\''), ('“', '”')];

/// A lexical unit of message text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Token {
    /// Content with surrounding quotes removed.
    pub value: String,
    /// Content as written, quotes included.
    pub raw: String,
    /// Unquoted whitespace that followed the token.
    pub trailing: String,
}

impl Token {
    pub fn new(
        value: impl Into<String>,
        raw: impl Into<String>,
        trailing: impl Into<String>,
    ) -> Self {
        Self {
            value: value.into(),
            raw: raw.into(),
            trailing: trailing.into(),
        }
    }
}

/// Joins tokens back into the text they were lexed from.
pub fn join_raw(tokens: &[Token]) -> String {
    tokens
        .iter()
        .flat_map(|t| [t.raw.as_str(), t.trailing.as_str()])
        .collect()
}

/// Iterator over the tokens of a string.
///
/// ```rust,ignore
/// let tokens = Lexer::new(r#"say "hello there" now"#).lex();
/// assert_eq!(tokens[1].value, "hello there");
/// assert_eq!(tokens[1].raw, "\"hello there\"");
/// ```
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
    quotes: Vec<(char, char)>,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over `input` using [`DEFAULT_QUOTES`].
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            position: 0,
            quotes: DEFAULT_QUOTES.to_vec(),
        }
    }

    /// Replaces the recognised quote pairs.
    pub fn with_quotes(mut self, quotes: impl IntoIterator<Item = (char, char)>) -> Self {
        self.quotes = quotes.into_iter().collect();
        self
    }

    /// Lexes the remaining input.
    pub fn lex(self) -> Vec<Token> {
        self.collect()
    }

    /// Splits a command invocation into its name token and its arguments.
    ///
    /// Returns `None` when `trigger` does not match the input, when its
    /// offset is not a character boundary, or when nothing follows it.
    pub fn lex_command<T>(mut self, trigger: &T) -> Option<(Token, Vec<Token>)>
    where
        T: Trigger + ?Sized,
    {
        let start = trigger.triggers(self.input)?;
        if !self.input.is_char_boundary(start) {
            trace!(offset = start, "Trigger offset is not a char boundary");
            return None;
        }
        self.position = start;
        let name = self.next()?;
        Some((name, self.collect()))
    }

    fn rest(&self) -> &'a str {
        &self.input[self.position..]
    }

    fn is_open_quote(&self, c: char) -> bool {
        self.quotes.iter().any(|&(open, _)| open == c)
    }

    fn take_whitespace(&mut self) -> &'a str {
        let rest = self.rest();
        let len = rest.len() - rest.trim_start().len();
        self.position += len;
        &rest[..len]
    }

    fn quoted(&mut self) -> Option<Token> {
        let rest = self.rest();
        let first = rest.chars().next()?;
        let &(open, close) = self.quotes.iter().find(|&&(open, _)| open == first)?;

        let body = &rest[open.len_utf8()..];
        // An unclosed quote runs to the end of the input.
        let (value, raw_len) = match body.find(close) {
            Some(end) => (&body[..end], open.len_utf8() + end + close.len_utf8()),
            None => (body, rest.len()),
        };
        let raw = &rest[..raw_len];
        self.position += raw_len;

        let trailing = self.take_whitespace();
        Some(Token::new(value, raw, trailing))
    }

    fn word(&mut self) -> Token {
        let rest = self.rest();
        let len = rest
            .char_indices()
            .skip(1)
            .find(|&(_, c)| c.is_whitespace() || self.is_open_quote(c))
            .map_or(rest.len(), |(i, _)| i);
        let word = &rest[..len];
        self.position += len;

        let trailing = self.take_whitespace();
        Token::new(word, word, trailing)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        // Only reachable at the start: every token swallows its trailing
        // whitespace.
        self.take_whitespace();
        if self.position >= self.input.len() {
            return None;
        }
        self.quoted().or_else(|| Some(self.word()))
    }
}
