//! Classifier configuration
//!
//! `ParseConfig` is an immutable value type consumed by [`crate::model::classify`].
//! It carries the capture-eligibility list, the recognized prefix characters,
//! and the negative-number disambiguation toggle. All of its operations are
//! total functions; there is no error path here.

use indexmap::IndexSet;

/// Prefix delimiter accepted by the default configuration.
pub const DEFAULT_PREFIX: char = '-';

/// Configuration for a single classification pass.
///
/// Constructed once per parse (or defaulted) and never mutated afterwards.
/// Callers that need different settings re-parse with a new instance.
#[derive(Debug, Clone)]
pub struct ParseConfig {
    /// Names (long-option strings and single flag characters, without any
    /// prefix) eligible to capture the immediately-following token.
    capture_names: IndexSet<String>,
    /// Characters recognized as prefix delimiters.
    prefix_chars: Vec<char>,
    /// When true, a one-prefix token whose remainder is entirely digits or
    /// `.` is reclassified as a Parameter instead of a flag cluster.
    allow_negative_numbers: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        ParseConfig {
            capture_names: IndexSet::new(),
            prefix_chars: vec![DEFAULT_PREFIX],
            allow_negative_numbers: true,
        }
    }
}

impl ParseConfig {
    /// Build a default-prefix configuration with the given capture names.
    pub fn new<I, S>(capture_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ParseConfig {
            capture_names: capture_names.into_iter().map(Into::into).collect(),
            ..ParseConfig::default()
        }
    }

    /// Replace the recognized prefix characters.
    pub fn with_prefix_chars(mut self, chars: &str) -> Self {
        self.prefix_chars = chars.chars().collect();
        self
    }

    /// Enable or disable negative-number reclassification.
    pub fn with_negative_numbers(mut self, allow: bool) -> Self {
        self.allow_negative_numbers = allow;
        self
    }

    pub fn allow_negative_numbers(&self) -> bool {
        self.allow_negative_numbers
    }

    /// Membership test against the prefix character set.
    pub fn is_delimiter(&self, c: char) -> bool {
        self.prefix_chars.contains(&c)
    }

    /// Count leading prefix delimiters, capped at 2.
    ///
    /// Two-prefix tokens never scan beyond their second delimiter for
    /// classification purposes, so `---x` counts as 2.
    pub fn count_prefix(&self, token: &str) -> usize {
        token
            .chars()
            .take(2)
            .take_while(|c| self.is_delimiter(*c))
            .count()
    }

    /// Check whether a token is eligible to capture the following token.
    ///
    /// Strips exactly the counted prefix before the membership test. An
    /// empty input or an empty capture list always yields false.
    pub fn allows_capture(&self, token: &str) -> bool {
        if token.is_empty() || self.capture_names.is_empty() {
            return false;
        }
        let stripped = strip_chars(token, self.count_prefix(token));
        !stripped.is_empty() && self.capture_names.contains(stripped)
    }

    /// Capture eligibility for a single flag character.
    pub fn allows_capture_char(&self, c: char) -> bool {
        let mut buf = [0u8; 4];
        let s: &str = c.encode_utf8(&mut buf);
        self.capture_names.contains(s)
    }
}

/// Slice off the first `n` characters of a string.
fn strip_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[idx..],
        None => "",
    }
}
