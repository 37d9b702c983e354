//! Environment variable access
//!
//! Collaborator module: supplies name/value pairs, PATH directories, and the
//! home directory to callers such as [`crate::resolve`]. The classifier never
//! touches this.

use std::path::PathBuf;

use indexmap::IndexMap;

use crate::errors::{ArgsiftError, Result};

/// An immutable snapshot of environment variables, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Env {
    vars: IndexMap<String, String>,
}

impl Env {
    /// Snapshot the process environment.
    pub fn from_os() -> Self {
        Env {
            vars: std::env::vars().collect(),
        }
    }

    /// Parse `NAME=VALUE` entries, e.g. lines of an env file or an `envp`
    /// block. An entry without a `=` separator is malformed and fails the
    /// whole parse.
    pub fn parse_entries<S: AsRef<str>>(entries: &[S]) -> Result<Self> {
        let mut vars = IndexMap::with_capacity(entries.len());
        for entry in entries {
            let entry = entry.as_ref();
            let (name, value) = entry
                .split_once('=')
                .ok_or_else(|| ArgsiftError::MalformedEnvEntry(entry.to_string()))?;
            vars.insert(name.trim().to_string(), value.to_string());
        }
        Ok(Env { vars })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Case-insensitive lookup; first match in insertion order wins.
    pub fn get_ignore_case(&self, name: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The `PATH` directories, in search order. Empty when unset.
    pub fn path_dirs(&self) -> Vec<PathBuf> {
        self.get_ignore_case("PATH")
            .map(|path| std::env::split_paths(path).collect())
            .unwrap_or_default()
    }

    /// The user's home directory (`HOME`, or `USERPROFILE` on Windows).
    pub fn home_dir(&self) -> Option<PathBuf> {
        self.get("HOME")
            .or_else(|| self.get("USERPROFILE"))
            .map(PathBuf::from)
    }
}
