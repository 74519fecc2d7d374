//! Trigger policies: deciding whether, and where, a message invokes a command.
//!
//! A [`Trigger`] inspects the full message text and returns the byte offset
//! at which the command name starts, or `None` if the message is not a
//! command invocation. The dispatch core does not prescribe a policy; each
//! bot brings its own.
//!
//! ```rust,ignore
//! // Fixed prefix
//! let trigger = Prefix::new("!");
//!
//! // Any closure works too
//! let trigger = |text: &str| text.strip_prefix("hey bot,").map(|_| 8);
//! ```

/// Decides whether a text invokes a command.
pub trait Trigger: Send + Sync {
    /// Returns the byte offset at which the command name begins.
    fn triggers(&self, text: &str) -> Option<usize>;
}

impl<F> Trigger for F
where
    F: Fn(&str) -> Option<usize> + Send + Sync,
{
    fn triggers(&self, text: &str) -> Option<usize> {
        self(text)
    }
}

/// Triggers on one of a set of fixed prefixes.
///
/// When several prefixes match, the longest one wins, so `Prefix::any(["!",
/// "!!"])` treats `!!ping` as `ping` rather than `!ping`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefix {
    prefixes: Vec<String>,
    ignore_case: bool,
}

impl Prefix {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::any([prefix])
    }

    pub fn any<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
            ignore_case: false,
        }
    }

    /// Match prefixes ignoring ASCII case (default: `false`).
    pub fn ignore_case(mut self, enabled: bool) -> Self {
        self.ignore_case = enabled;
        self
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    fn matches(&self, text: &str, prefix: &str) -> bool {
        if self.ignore_case {
            text.get(..prefix.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
        } else {
            text.starts_with(prefix)
        }
    }
}

impl Trigger for Prefix {
    fn triggers(&self, text: &str) -> Option<usize> {
        self.prefixes
            .iter()
            .filter(|p| self.matches(text, p))
            .map(String::len)
            .max()
    }
}
