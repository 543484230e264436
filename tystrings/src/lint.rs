//! Duplicate key detection.

use std::collections::HashMap;

use crate::{formats::StringsFile, types::Entry};

/// A key that occurs more than once, with every occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Duplicate {
    pub key: String,
    /// Occurrences in file order; always at least two.
    pub occurrences: Vec<Entry>,
}

impl Duplicate {
    pub fn count(&self) -> usize {
        self.occurrences.len()
    }
}

/// Result of linting one strings file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintReport {
    pub entry_count: usize,
    /// Ordered by the first occurrence of each key.
    pub duplicates: Vec<Duplicate>,
}

impl LintReport {
    pub fn is_clean(&self) -> bool {
        self.duplicates.is_empty()
    }
}

/// Finds every key that appears more than once in `file`.
pub fn lint(file: &StringsFile) -> LintReport {
    let mut order: Vec<&str> = Vec::new();
    let mut by_key: HashMap<&str, Vec<&Entry>> = HashMap::new();
    let mut entry_count = 0;

    for entry in file.entries() {
        entry_count += 1;
        by_key
            .entry(entry.key.as_str())
            .or_insert_with(|| {
                order.push(entry.key.as_str());
                Vec::new()
            })
            .push(entry);
    }

    let duplicates = order
        .into_iter()
        .filter_map(|key| {
            let occurrences = &by_key[key];
            (occurrences.len() > 1).then(|| Duplicate {
                key: key.to_string(),
                occurrences: occurrences.iter().map(|e| (*e).clone()).collect(),
            })
        })
        .collect();

    LintReport {
        entry_count,
        duplicates,
    }
}
