//! Support for the Apple `.strings` localization format.
//!
//! The file is modelled line by line rather than as a set of pairs, so that
//! everything which is not an entry (comments, blank lines, anything the
//! parser does not understand) is written back exactly as it was read.

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    encoding::{Decoded, TextEncoding},
    error::Error,
    traits::Parser,
    types::{Entry, Line, Unmatched},
};

lazy_static! {
    /// `"key" = "value";` with non-greedy captures. Escaped quotes are not
    /// understood: a `";` inside a value ends it early.
    static ref ENTRY_PATTERN: Regex =
        Regex::new(r#"^\s*"(?P<key>.*?)"\s*=\s*"(?P<value>.*?)";"#).unwrap();
}

/// Parses a single line of a strings file.
///
/// Text after the terminating `;` (a trailing comment, say) is ignored.
///
/// ```rust
/// use tystrings::{Unmatched, formats::strings::parse_line};
///
/// assert_eq!(
///     parse_line(r#""greeting" = "a = b";"#),
///     Ok(("greeting".to_string(), "a = b".to_string()))
/// );
/// assert_eq!(parse_line("/* Title */"), Err(Unmatched::Comment));
/// assert_eq!(parse_line("  "), Err(Unmatched::Blank));
/// ```
pub fn parse_line(line: &str) -> Result<(String, String), Unmatched> {
    if let Some(captures) = ENTRY_PATTERN.captures(line) {
        return Ok((captures["key"].to_string(), captures["value"].to_string()));
    }

    let trimmed = line.trim();
    if trimmed.is_empty() {
        Err(Unmatched::Blank)
    } else if trimmed.starts_with("//") || trimmed.starts_with("/*") || trimmed.starts_with('*')
    {
        Err(Unmatched::Comment)
    } else {
        Err(Unmatched::Malformed)
    }
}

/// A `Localizable.strings` file held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringsFile {
    /// Encoding used when writing the file back.
    pub encoding: TextEncoding,
    /// Whether a byte-order mark is written back.
    pub bom: bool,
    lines: Vec<Line>,
}

impl StringsFile {
    /// Creates an empty file that will be written with `encoding`.
    pub fn new(encoding: TextEncoding) -> Self {
        StringsFile {
            encoding,
            bom: encoding != TextEncoding::Utf8,
            lines: Vec::new(),
        }
    }

    /// Splits `text` into lines and classifies each of them.
    pub fn parse(text: &str, encoding: TextEncoding, bom: bool) -> Self {
        let lines = text
            .split_inclusive('\n')
            .enumerate()
            .map(|(index, raw)| match parse_line(raw) {
                Ok((key, value)) => Line::Entry {
                    entry: Entry {
                        key,
                        value,
                        line_number: index + 1,
                    },
                    raw: raw.to_string(),
                },
                Err(reason) => Line::Passthrough {
                    raw: raw.to_string(),
                    reason,
                },
            })
            .collect();

        StringsFile {
            encoding,
            bom,
            lines,
        }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// All entries in file order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.lines.iter().filter_map(Line::entry)
    }

    pub fn entry_count(&self) -> usize {
        self.entries().count()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Replaces the value of the entry at `index` in [`Self::lines`].
    ///
    /// The line is re-serialized as `"key" = "value";` followed by the
    /// original line terminator. Leading indentation and trailing text after
    /// the `;` are not kept.
    pub fn set_value(&mut self, index: usize, value: &str) -> Result<(), Error> {
        let line = self
            .lines
            .get_mut(index)
            .ok_or_else(|| Error::InvalidResource(format!("no line at index {}", index)))?;

        let terminator = line.terminator().to_string();
        match line {
            Line::Entry { entry, raw } => {
                entry.value = value.to_string();
                *raw = format!("{}{}", entry, terminator);
                Ok(())
            }
            Line::Passthrough { .. } => Err(Error::InvalidResource(format!(
                "line {} is not an entry",
                index + 1
            ))),
        }
    }

    /// The full file text, every line concatenated.
    pub fn text(&self) -> String {
        self.lines.iter().map(Line::raw).collect()
    }
}

impl Parser for StringsFile {
    fn from_decoded(decoded: Decoded) -> Self {
        StringsFile::parse(&decoded.text, decoded.encoding, decoded.bom)
    }

    fn to_decoded(&self) -> Decoded {
        Decoded {
            text: self.text(),
            encoding: self.encoding,
            bom: self.bom,
        }
    }
}
