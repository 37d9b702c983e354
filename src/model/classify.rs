//! Token classifier
//!
//! Turns a raw ordered token stream into an ordered sequence of [`Argument`]
//! values under a [`ParseConfig`] rule set. Single pass, one token of
//! lookahead, and total: any input yields some classification.

use tracing::debug;

use super::Argument;
use crate::config::ParseConfig;

/// Classify a token sequence.
///
/// Per token, in order:
/// - two leading prefix chars: an `Option`, which may capture the
///   immediately-following token when its name is capture-eligible and that
///   token is not itself prefixed;
/// - one leading prefix char: a flag cluster, one `Flag` per remaining
///   character, unless negative-number reclassification turns the whole
///   token into a single `Parameter`;
/// - no prefix: a `Parameter`.
///
/// A captured token is consumed and never re-emitted. Output order follows
/// input order; flags within a cluster come out left-to-right.
pub fn classify<S: AsRef<str>>(tokens: &[S], cfg: &ParseConfig) -> Vec<Argument> {
    let mut args = Vec::with_capacity(tokens.len());
    let mut i = 0;

    while i < tokens.len() {
        let token = tokens[i].as_ref();
        match cfg.count_prefix(token) {
            2 => {
                let name = strip_prefix(token, 2);
                let value = if cfg.allows_capture(token) {
                    capture_next(tokens, i, cfg)
                } else {
                    None
                };
                if value.is_some() {
                    debug!(option = name, "captured following token");
                    i += 1;
                }
                args.push(Argument::Option {
                    name: name.to_string(),
                    value,
                });
            }
            1 => {
                let rest = strip_prefix(token, 1);
                if cfg.allow_negative_numbers() && is_numeric_remainder(rest) {
                    // the whole token, prefix included, is one parameter
                    args.push(Argument::Parameter(token.to_string()));
                } else {
                    i += classify_cluster(tokens, i, rest, cfg, &mut args);
                }
            }
            _ => args.push(Argument::Parameter(token.to_string())),
        }
        i += 1;
    }

    args
}

/// Emit one `Flag` per cluster character; at most one of them captures the
/// lookahead token (the first eligible one — later characters in the same
/// cluster never capture, since the lookahead has been consumed).
///
/// Returns 1 if the following token was consumed, else 0.
fn classify_cluster<S: AsRef<str>>(
    tokens: &[S],
    i: usize,
    cluster: &str,
    cfg: &ParseConfig,
    args: &mut Vec<Argument>,
) -> usize {
    let mut consumed = false;
    for symbol in cluster.chars() {
        let value = if !consumed && cfg.allows_capture_char(symbol) {
            capture_next(tokens, i, cfg)
        } else {
            None
        };
        if value.is_some() {
            debug!(flag = %symbol, "captured following token");
            consumed = true;
        }
        args.push(Argument::Flag { symbol, value });
    }
    usize::from(consumed)
}

/// The lookahead token, if it exists and is not itself delimiter-prefixed.
fn capture_next<S: AsRef<str>>(tokens: &[S], i: usize, cfg: &ParseConfig) -> Option<String> {
    let next = tokens.get(i + 1)?.as_ref();
    match next.chars().next() {
        Some(c) if cfg.is_delimiter(c) => None,
        _ => Some(next.to_string()),
    }
}

/// Negative-number test for a one-prefix remainder: entirely digits or `.`,
/// with hexadecimal-looking `0x…` remainders carved out (those stay flags).
fn is_numeric_remainder(rest: &str) -> bool {
    !rest.starts_with("0x") && rest.chars().all(|c| c.is_ascii_digit() || c == '.')
}

/// Slice off the first `n` characters (the counted prefix).
fn strip_prefix(token: &str, n: usize) -> &str {
    match token.char_indices().nth(n) {
        Some((idx, _)) => &token[idx..],
        None => "",
    }
}
