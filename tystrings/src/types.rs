//! Core, format-agnostic types for tystrings.

use std::{
    collections::HashMap,
    fmt::{Display, Formatter},
};

/// A single `"key" = "value";` line of a strings file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The lookup key, without surrounding quotes.
    pub key: String,
    /// The value, without surrounding quotes.
    pub value: String,
    /// 1-based physical line number in the file it was read from.
    pub line_number: usize,
}

impl Display for Entry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\" = \"{}\";", self.key, self.value)
    }
}

/// Why a line did not parse as an entry.
///
/// None of these are errors: the line is kept verbatim and written back
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unmatched {
    /// Empty or whitespace-only.
    Blank,
    /// A `//` or `/* ... */` comment line, or a continuation of one.
    Comment,
    /// Anything else, including entries with a missing `;`.
    Malformed,
}

/// One physical line of a strings file.
///
/// `raw` always holds the exact original text including its terminator
/// (`\n`, `\r\n`, or nothing for an unterminated last line).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Entry { entry: Entry, raw: String },
    Passthrough { raw: String, reason: Unmatched },
}

impl Line {
    pub fn raw(&self) -> &str {
        match self {
            Line::Entry { raw, .. } | Line::Passthrough { raw, .. } => raw,
        }
    }

    pub fn entry(&self) -> Option<&Entry> {
        match self {
            Line::Entry { entry, .. } => Some(entry),
            Line::Passthrough { .. } => None,
        }
    }

    /// The trailing line terminator of the raw text.
    pub fn terminator(&self) -> &str {
        let raw = self.raw();
        if raw.ends_with("\r\n") {
            "\r\n"
        } else if raw.ends_with('\n') {
            "\n"
        } else {
            ""
        }
    }
}

/// Key to value mapping taken from the strings file as it was before
/// extraction overwrote it.
///
/// When a key occurs more than once, the last occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reference {
    values: HashMap<String, String>,
}

impl Reference {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        let values = entries
            .into_iter()
            .map(|e| (e.key.clone(), e.value.clone()))
            .collect();
        Reference { values }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
