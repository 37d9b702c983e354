//! Query facade over a classified argument sequence
//!
//! [`Params`] wraps the ordered output of the classifier and exposes
//! positional search, membership tests, typed filters, and captured-value
//! lookup. The sequence is immutable after construction and every operation
//! here is read-only; callers needing different content re-parse.

use std::fmt;

use crate::config::ParseConfig;
use crate::errors::{ArgsiftError, Result};
use crate::model::{classify, ArgKind, Argument};

/// Lookup key for search operations.
///
/// String keys match parameter values and option names; single-character
/// string keys additionally match flag symbols. Char keys match flag symbols
/// only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key<'a> {
    Name(&'a str),
    Symbol(char),
}

impl<'a> From<&'a str> for Key<'a> {
    fn from(s: &'a str) -> Self {
        Key::Name(s)
    }
}

impl<'a> From<&'a String> for Key<'a> {
    fn from(s: &'a String) -> Self {
        Key::Name(s)
    }
}

impl From<char> for Key<'_> {
    fn from(c: char) -> Self {
        Key::Symbol(c)
    }
}

/// An immutable, ordered, classified command line.
///
/// Insertion order is the original command-line order; search offsets are
/// plain indices into that order.
#[derive(Debug, Clone, Default)]
pub struct Params {
    /// argv[0], when construction had access to it. Never part of the
    /// classified sequence.
    arg0: Option<String>,
    args: Vec<Argument>,
}

impl Params {
    /// Classify a token sequence under an explicit configuration.
    pub fn parse<S: AsRef<str>>(tokens: &[S], cfg: &ParseConfig) -> Self {
        Params {
            arg0: None,
            args: classify(tokens, cfg),
        }
    }

    /// Convenience form: default configuration with the given capture names.
    pub fn with_captures<S: AsRef<str>>(tokens: &[S], capture_names: &[&str]) -> Self {
        Params::parse(tokens, &ParseConfig::new(capture_names.iter().copied()))
    }

    /// Classify the process argument vector, retaining argv[0] separately.
    pub fn from_env(cfg: &ParseConfig) -> Self {
        let mut argv = std::env::args();
        let arg0 = argv.next();
        let tokens: Vec<String> = argv.collect();
        Params {
            arg0,
            args: classify(&tokens, cfg),
        }
    }

    /// Wrap an already-classified sequence.
    pub fn from_args(args: Vec<Argument>) -> Self {
        Params { arg0: None, args }
    }

    /// The program name, when known.
    pub fn arg0(&self) -> Option<&str> {
        self.arg0.as_deref()
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Argument> {
        self.args.iter()
    }

    pub fn first(&self) -> Option<&Argument> {
        self.args.first()
    }

    pub fn last(&self) -> Option<&Argument> {
        self.args.last()
    }

    /// Positional access; out-of-bounds indices are a recoverable error.
    pub fn get(&self, index: usize) -> Result<&Argument> {
        self.args.get(index).ok_or(ArgsiftError::IndexOutOfRange {
            index,
            len: self.args.len(),
        })
    }

    /// Position of the first argument matching `key`, searching the whole
    /// sequence.
    pub fn find<'a, K: Into<Key<'a>>>(&self, key: K) -> Option<usize> {
        self.find_at(key.into(), 0, false)
    }

    /// Position of the first match at or after `offset`.
    pub fn find_from<'a, K: Into<Key<'a>>>(&self, key: K, offset: usize) -> Option<usize> {
        self.find_at(key.into(), offset, false)
    }

    /// Like [`find_from`](Self::find_from), but string keys also match the
    /// captured values of options and flags.
    pub fn find_with_captures<'a, K: Into<Key<'a>>>(&self, key: K, offset: usize) -> Option<usize> {
        self.find_at(key.into(), offset, true)
    }

    fn find_at(&self, key: Key<'_>, offset: usize, check_captures: bool) -> Option<usize> {
        self.args
            .iter()
            .enumerate()
            .skip(offset)
            .find(|(_, arg)| matches_key(arg, key, check_captures))
            .map(|(pos, _)| pos)
    }

    /// Positions of every match, in ascending order.
    pub fn find_all<'a, K: Into<Key<'a>>>(&self, key: K) -> Vec<usize> {
        let key = key.into();
        let mut hits = Vec::new();
        let mut offset = 0;
        while let Some(pos) = self.find_at(key, offset, false) {
            hits.push(pos);
            offset = pos + 1;
        }
        hits
    }

    pub fn contains<'a, K: Into<Key<'a>>>(&self, key: K) -> bool {
        self.find(key).is_some()
    }

    /// The captured value of the first argument matching `key`, if that
    /// argument captured one.
    pub fn value_of<'a, K: Into<Key<'a>>>(&self, key: K) -> Option<&str> {
        self.value_of_from(key, 0)
    }

    /// Captured-value lookup starting at `offset`; combined with the returned
    /// position of `find_from` this implements "next capture after here".
    pub fn value_of_from<'a, K: Into<Key<'a>>>(&self, key: K, offset: usize) -> Option<&str> {
        self.find_from(key, offset)
            .and_then(|pos| self.args[pos].value())
    }

    /// Whether `key` is present *and* the first match has the given kind.
    pub fn check_kind<'a, K: Into<Key<'a>>>(&self, key: K, kind: ArgKind) -> bool {
        self.find(key)
            .map(|pos| self.args[pos].kind() == kind)
            .unwrap_or(false)
    }

    /// Logical OR of [`contains`](Self::contains) over a key sequence.
    pub fn check_any<'a, I>(&self, keys: I) -> bool
    where
        I: IntoIterator,
        I::Item: Into<Key<'a>>,
    {
        keys.into_iter().any(|key| self.contains(key))
    }

    /// Logical AND of [`contains`](Self::contains) over a key sequence.
    pub fn check_all<'a, I>(&self, keys: I) -> bool
    where
        I: IntoIterator,
        I::Item: Into<Key<'a>>,
    {
        keys.into_iter().all(|key| self.contains(key))
    }

    /// Stable-order filter by kind.
    pub fn all_of_kind(&self, kind: ArgKind) -> Vec<&Argument> {
        self.args.iter().filter(|arg| arg.kind() == kind).collect()
    }

    pub fn parameters(&self) -> Vec<&Argument> {
        self.all_of_kind(ArgKind::Parameter)
    }

    pub fn options(&self) -> Vec<&Argument> {
        self.all_of_kind(ArgKind::Option)
    }

    pub fn flags(&self) -> Vec<&Argument> {
        self.all_of_kind(ArgKind::Flag)
    }
}

fn matches_key(arg: &Argument, key: Key<'_>, check_captures: bool) -> bool {
    match key {
        Key::Symbol(c) => matches!(arg, Argument::Flag { symbol, .. } if *symbol == c),
        Key::Name(s) => match arg {
            Argument::Parameter(value) => value == s,
            Argument::Option { name, value } => {
                name == s || (check_captures && value.as_deref() == Some(s))
            }
            Argument::Flag { symbol, value } => {
                single_char(s) == Some(*symbol)
                    || (check_captures && value.as_deref() == Some(s))
            }
        },
    }
}

/// `Some(c)` when the string is exactly one character long.
fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = &'a Argument;
    type IntoIter = std::slice::Iter<'a, Argument>;

    fn into_iter(self) -> Self::IntoIter {
        self.args.iter()
    }
}

/// Space-joined canonical rendering of the full sequence, in the same shape
/// as the original command line (captures omitted).
impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", arg)?;
        }
        Ok(())
    }
}
