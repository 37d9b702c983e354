//! argsift library interface
//!
//! This crate classifies a raw sequence of command-line tokens into a typed,
//! ordered, queryable model. Three argument kinds are distinguished: bare
//! values ("parameters"), long-form named options (`--name`, which may
//! capture the following token), and single-character flags (`-s`, which may
//! be bundled as `-hvac` and individually capture a following token).
//!
//! # Module Organization
//!
//! - [`config`] - Classification rule set (ParseConfig)
//! - [`model`] - Typed argument values (Argument, ArgKind) and the classifier
//! - [`params`] - Read-only query facade over a classified sequence (Params)
//! - [`errors`] - Error types (ArgsiftError, Result)
//! - [`env`] - Environment variable collaborator (Env)
//! - [`resolve`] - Executable path resolution through PATH
//! - [`tokens`] - Raw-source-to-token-vector adapters
//! - [`docs`] - Help-text rendering (ArgDoc, HelpWriter)
//!
//! # Example
//!
//! ```
//! use argsift::{ArgKind, Params};
//!
//! let params = Params::with_captures(&["-hv", "--out", "file.txt", "input"], &["out"]);
//! assert!(params.contains('h') && params.contains('v'));
//! assert_eq!(params.value_of("out"), Some("file.txt"));
//! assert!(params.check_kind("input", ArgKind::Parameter));
//! ```

pub mod config;
pub mod docs;
pub mod env;
pub mod errors;
pub mod model;
pub mod params;
pub mod resolve;
pub mod tokens;

pub use config::ParseConfig;
pub use errors::{ArgsiftError, Result};
pub use model::{classify, ArgKind, Argument};
pub use params::{Key, Params};
