//! Common test utilities for argsift integration tests

#![allow(dead_code)]

use argsift::{ParseConfig, Params};

/// The reference command line exercised across the integration suites.
/// Ordering matters: several tests assert positions into this sequence.
pub const DEFAULT_COMMANDLINE: &[&str] = &[
    "-hvac",
    "--test-inner-dash",
    "--help",
    "Hello",
    "World!",
    "6000",
    "-1024",
    "0x00FE",
];

/// Classify the reference command line with a default configuration.
pub fn default_params() -> Params {
    Params::parse(DEFAULT_COMMANDLINE, &ParseConfig::default())
}

/// Classify arbitrary tokens with the given capture names.
pub fn params_with_captures(tokens: &[&str], captures: &[&str]) -> Params {
    Params::with_captures(tokens, captures)
}
