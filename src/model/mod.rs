//! Typed argument model
//!
//! A classified command line is an ordered sequence of [`Argument`] values.
//! The classifier assigns every raw token to exactly one of three variants,
//! enabling exhaustive pattern matching downstream instead of string
//! re-inspection.

mod classify;

use std::fmt;

pub use classify::classify;

use crate::errors::{ArgsiftError, Result};

/// Discriminant for [`Argument`], usable as a standalone search filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgKind {
    Parameter,
    Option,
    Flag,
}

impl fmt::Display for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            ArgKind::Parameter => "Parameter",
            ArgKind::Option => "Option",
            ArgKind::Flag => "Flag",
        })
    }
}

/// One classified command-line argument
///
/// Equality and hashing compare the variant tag and payload together; two
/// arguments of different kinds are never equal even with identical text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Argument {
    /// Bare token with no prefix: a positional value.
    Parameter(String),

    /// Two-prefix named token (`--name`), optionally with a captured value.
    /// The name excludes the prefix.
    Option {
        name: String,
        value: Option<String>,
    },

    /// One-prefix single character (`-s`), optionally with a captured value.
    /// Several flags may originate from one physical token (`-hvac`).
    Flag {
        symbol: char,
        value: Option<String>,
    },
}

impl Argument {
    pub fn kind(&self) -> ArgKind {
        match self {
            Argument::Parameter(_) => ArgKind::Parameter,
            Argument::Option { .. } => ArgKind::Option,
            Argument::Flag { .. } => ArgKind::Flag,
        }
    }

    /// The argument's name: parameter value, option name, or flag symbol
    /// stringified. Empty only for degenerate prefix-only input tokens.
    pub fn name(&self) -> String {
        match self {
            Argument::Parameter(value) => value.clone(),
            Argument::Option { name, .. } => name.clone(),
            Argument::Flag { symbol, .. } => symbol.to_string(),
        }
    }

    /// Whether this argument captured a following token.
    pub fn has_value(&self) -> bool {
        self.value().is_some()
    }

    /// The captured value, if any. Always `None` for parameters.
    pub fn value(&self) -> Option<&str> {
        match self {
            Argument::Parameter(_) => None,
            Argument::Option { value, .. } => value.as_deref(),
            Argument::Flag { value, .. } => value.as_deref(),
        }
    }

    pub fn is_parameter(&self) -> bool {
        matches!(self, Argument::Parameter(_))
    }

    pub fn is_option(&self) -> bool {
        matches!(self, Argument::Option { .. })
    }

    pub fn is_flag(&self) -> bool {
        matches!(self, Argument::Flag { .. })
    }

    /// Extract the parameter value, or a recoverable
    /// [`ArgsiftError::WrongKind`] if this is not a parameter.
    pub fn as_parameter(&self) -> Result<&str> {
        match self {
            Argument::Parameter(value) => Ok(value),
            other => Err(ArgsiftError::WrongKind {
                expected: ArgKind::Parameter,
                found: other.kind(),
            }),
        }
    }

    /// Extract the option name and captured value.
    pub fn as_option(&self) -> Result<(&str, Option<&str>)> {
        match self {
            Argument::Option { name, value } => Ok((name, value.as_deref())),
            other => Err(ArgsiftError::WrongKind {
                expected: ArgKind::Option,
                found: other.kind(),
            }),
        }
    }

    /// Extract the flag symbol and captured value.
    pub fn as_flag(&self) -> Result<(char, Option<&str>)> {
        match self {
            Argument::Flag { symbol, value } => Ok((*symbol, value.as_deref())),
            other => Err(ArgsiftError::WrongKind {
                expected: ArgKind::Flag,
                found: other.kind(),
            }),
        }
    }
}

/// Canonical identity rendering: `value`, `--name`, or `-s`.
///
/// Captured values are not re-emitted; re-classifying the rendered text
/// reproduces the same tags and names, not the captured payloads.
impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Parameter(value) => write!(f, "{}", value),
            Argument::Option { name, .. } => write!(f, "--{}", name),
            Argument::Flag { symbol, .. } => write!(f, "-{}", symbol),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opt(name: &str, value: Option<&str>) -> Argument {
        Argument::Option {
            name: name.into(),
            value: value.map(Into::into),
        }
    }

    #[test]
    fn test_kind_and_name() {
        assert_eq!(Argument::Parameter("x".into()).kind(), ArgKind::Parameter);
        assert_eq!(opt("help", None).kind(), ArgKind::Option);
        assert_eq!(
            Argument::Flag { symbol: 'v', value: None }.kind(),
            ArgKind::Flag
        );
        assert_eq!(Argument::Flag { symbol: 'v', value: None }.name(), "v");
        assert_eq!(opt("help", None).name(), "help");
    }

    #[test]
    fn test_value_projection() {
        assert_eq!(Argument::Parameter("x".into()).value(), None);
        assert_eq!(opt("o", Some("cap")).value(), Some("cap"));
        assert!(opt("o", Some("cap")).has_value());
        assert!(!opt("o", None).has_value());
    }

    #[test]
    fn test_typed_accessors() {
        let param = Argument::Parameter("x".into());
        assert_eq!(param.as_parameter().unwrap(), "x");
        assert!(param.as_option().is_err());
        assert!(param.as_flag().is_err());

        let flag = Argument::Flag { symbol: 'f', value: Some("v".into()) };
        assert_eq!(flag.as_flag().unwrap(), ('f', Some("v")));

        let err = flag.as_parameter().unwrap_err();
        assert!(matches!(
            err,
            crate::errors::ArgsiftError::WrongKind {
                expected: ArgKind::Parameter,
                found: ArgKind::Flag,
            }
        ));
    }

    #[test]
    fn test_cross_kind_inequality() {
        // same text, different tags: never equal
        let param = Argument::Parameter("h".into());
        let flag = Argument::Flag { symbol: 'h', value: None };
        let option = opt("h", None);
        assert_ne!(param, flag.clone());
        assert_ne!(param, option.clone());
        assert_ne!(flag, option);
    }

    #[test]
    fn test_display_omits_captures() {
        assert_eq!(Argument::Parameter("hello".into()).to_string(), "hello");
        assert_eq!(opt("opt", Some("world")).to_string(), "--opt");
        assert_eq!(
            Argument::Flag { symbol: 'f', value: Some("v".into()) }.to_string(),
            "-f"
        );
    }
}
