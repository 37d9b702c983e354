//! Help-text rendering
//!
//! Collaborator module: pairs flag/option spellings with documentation and
//! renders an aligned usage listing. Purely presentational; the classifier
//! has no schema and never reads these.

use std::fmt;

use crate::model::ArgKind;
use crate::params::Params;

/// One documented argument: a flag spelling, an option spelling, or both.
#[derive(Debug, Clone)]
pub struct ArgDoc {
    pub flag: Option<char>,
    pub option: Option<String>,
    pub doc: String,
}

impl ArgDoc {
    pub fn flag(flag: char, doc: impl Into<String>) -> Self {
        ArgDoc {
            flag: Some(flag),
            option: None,
            doc: doc.into(),
        }
    }

    pub fn option(option: impl Into<String>, doc: impl Into<String>) -> Self {
        ArgDoc {
            flag: None,
            option: Some(option.into()),
            doc: doc.into(),
        }
    }

    pub fn pair(flag: char, option: impl Into<String>, doc: impl Into<String>) -> Self {
        ArgDoc {
            flag: Some(flag),
            option: Some(option.into()),
            doc: doc.into(),
        }
    }

    /// Whether either spelling appears in a parsed command line, with the
    /// matching kind.
    pub fn present_in(&self, params: &Params) -> bool {
        self.flag
            .map(|f| params.check_kind(f, ArgKind::Flag))
            .unwrap_or(false)
            || self
                .option
                .as_deref()
                .map(|o| params.check_kind(o, ArgKind::Option))
                .unwrap_or(false)
    }

    /// The `-f  --flag` spelling column.
    fn spellings(&self) -> String {
        let mut s = String::new();
        if let Some(flag) = self.flag {
            s.push('-');
            s.push(flag);
        }
        if let Some(option) = &self.option {
            if !s.is_empty() {
                s.push_str("  ");
            }
            s.push_str("--");
            s.push_str(option);
        }
        s
    }
}

/// Renders a list of [`ArgDoc`] entries as aligned lines.
#[derive(Debug, Clone)]
pub struct HelpWriter {
    margin: usize,
    entries: Vec<ArgDoc>,
}

impl HelpWriter {
    /// `margin` is the column where documentation text starts.
    pub fn new(margin: usize) -> Self {
        HelpWriter {
            margin,
            entries: Vec::new(),
        }
    }

    pub fn entry(mut self, doc: ArgDoc) -> Self {
        self.entries.push(doc);
        self
    }

    pub fn entries<I: IntoIterator<Item = ArgDoc>>(mut self, docs: I) -> Self {
        self.entries.extend(docs);
        self
    }
}

impl fmt::Display for HelpWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            let spellings = entry.spellings();
            let pad = self.margin.saturating_sub(spellings.len()).max(2);
            writeln!(f, "  {}{}{}", spellings, " ".repeat(pad), entry.doc)?;
        }
        Ok(())
    }
}
