//! Error types for argsift

use thiserror::Error;

use crate::model::ArgKind;

/// Main error type for argsift
///
/// Classification itself never fails; these errors come from the query
/// facade's typed accessors, positional access, and the collaborator
/// modules (environment parsing, stream adapters).
#[derive(Error, Debug)]
pub enum ArgsiftError {
    #[error("Kind mismatch: expected {expected}, found {found}")]
    WrongKind { expected: ArgKind, found: ArgKind },

    #[error("Argument index {index} out of range (length {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Malformed environment entry '{0}': missing '=' separator")]
    MalformedEnvEntry(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ArgsiftError>;
