//! Reference synchronization: keep translations across regenerations.
//!
//! Extraction rewrites `Localizable.strings` from source code, which puts the
//! developer's default-language text back into every value. Before that
//! happens the current file is read as a [`Reference`]; afterwards every
//! regenerated entry whose key is in the reference with a different value gets
//! the reference value back. Everything else in the new file is left alone.

use std::path::{Path, PathBuf};

use crate::{
    encoding::TextEncoding,
    error::Error,
    extract::{Extractor, ProcessOutput},
    formats::{StringsFile, strings_path},
    lint::lint,
    logger::Logger,
    traits::Parser,
    types::Reference,
};

/// Behavior switches for a [`Synchronizer`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SyncOptions {
    pub encoding: TextEncoding,
    /// Stop before merging when the extractor exits unsuccessfully.
    ///
    /// Off by default: the merge then runs on whatever the failed extractor
    /// left on disk.
    pub abort_on_extract_failure: bool,
}

impl SyncOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn with_abort_on_extract_failure(mut self, abort: bool) -> Self {
        self.abort_on_extract_failure = abort;
        self
    }
}

/// An entry whose regenerated value was replaced by the reference value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overwrite {
    pub line_number: usize,
    pub key: String,
    /// Value written by extraction.
    pub before: String,
    /// Value restored from the reference.
    pub after: String,
}

/// What a merge did to the regenerated file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Number of keys in the reference.
    pub reference_count: usize,
    pub total_entries: usize,
    pub overwritten: Vec<Overwrite>,
    /// Keys not present in the reference, in file order.
    pub new_keys: Vec<String>,
    /// Entries whose key matched with an identical value.
    pub unchanged: usize,
    /// Keys occurring more than once in the regenerated file.
    pub duplicate_keys: Vec<String>,
    /// Set when the report comes from [`Synchronizer::generate`].
    pub extraction: Option<ProcessOutput>,
}

/// Applies `reference` to `file` in memory.
///
/// Only entries whose key is in the reference *and* whose value differs are
/// rewritten; all other lines keep their exact text.
pub fn merge_reference(file: &mut StringsFile, reference: &Reference) -> Result<SyncReport, Error> {
    let mut report = SyncReport {
        reference_count: reference.len(),
        ..SyncReport::default()
    };
    let mut replacements = Vec::new();

    for (index, line) in file.lines().iter().enumerate() {
        let Some(entry) = line.entry() else {
            continue;
        };
        report.total_entries += 1;

        match reference.get(&entry.key) {
            None => report.new_keys.push(entry.key.clone()),
            Some(value) if value == entry.value => report.unchanged += 1,
            Some(value) => {
                replacements.push((index, value.to_string()));
                report.overwritten.push(Overwrite {
                    line_number: entry.line_number,
                    key: entry.key.clone(),
                    before: entry.value.clone(),
                    after: value.to_string(),
                });
            }
        }
    }

    for (index, value) in replacements {
        file.set_value(index, &value)?;
    }

    report.duplicate_keys = lint(file)
        .duplicates
        .into_iter()
        .map(|d| d.key)
        .collect();
    Ok(report)
}

/// Runs the extract → merge → write cycle for one output directory.
#[derive(Debug)]
pub struct Synchronizer<E: Extractor> {
    directory: PathBuf,
    extractor: E,
    options: SyncOptions,
    logger: Logger,
}

impl<E: Extractor> Synchronizer<E> {
    pub fn new<P: AsRef<Path>>(directory: P, extractor: E, logger: Logger) -> Self {
        Synchronizer {
            directory: directory.as_ref().to_path_buf(),
            extractor,
            options: SyncOptions::default(),
            logger,
        }
    }

    pub fn with_options(mut self, options: SyncOptions) -> Self {
        self.options = options;
        self
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// The strings file this synchronizer reads and writes.
    pub fn path(&self) -> PathBuf {
        strings_path(&self.directory)
    }

    /// Reads the file currently on disk as the reference. A missing file
    /// gives an empty reference.
    pub fn build_reference(&self) -> Result<Reference, Error> {
        let file = StringsFile::read_from(self.path(), self.options.encoding)?;
        let reference = Reference::from_entries(file.entries());

        self.logger.success("Generated Reference");
        self.logger.info(format_args!("count: {}", reference.len()));
        Ok(reference)
    }

    /// Runs the extractor into this synchronizer's directory.
    pub fn extract(&self, files: &[PathBuf]) -> Result<ProcessOutput, Error> {
        let output = self.extractor.extract(files, &self.directory, &self.logger)?;
        if !output.success() {
            self.logger
                .error(format_args!("extraction finished with {}", output));
            if self.options.abort_on_extract_failure {
                return Err(Error::ExtractionFailed {
                    status: output.to_string(),
                    output: output.output,
                });
            }
            self.logger
                .warn("continuing with the strings file left by the extractor");
        }
        Ok(output)
    }

    /// Re-reads the freshly extracted file, restores reference values and
    /// writes the file back in place.
    pub fn merge_and_write(&self, reference: &Reference) -> Result<SyncReport, Error> {
        let path = self.path();
        let mut file = StringsFile::read_from(&path, self.options.encoding)?;
        let report = merge_reference(&mut file, reference)?;

        self.logger.success("Translated Strings");
        self.logger
            .info(format_args!("count: {}", report.overwritten.len()));
        for overwrite in &report.overwritten {
            self.logger.debug(format_args!(
                "{} => {} (was {})",
                overwrite.key, overwrite.after, overwrite.before
            ));
        }
        if !report.duplicate_keys.is_empty() {
            self.logger.warn(format_args!(
                "duplicate keys: {}",
                report.duplicate_keys.join(", ")
            ));
        }

        // Whole-file rewrite without a temporary file: an interrupted write
        // leaves a truncated file behind.
        file.write_to(&path)?;
        self.logger
            .success(format_args!("Write strings file to: {}", path.display()));
        Ok(report)
    }

    /// The whole pipeline: reference, extraction, merge.
    pub fn generate(&self, files: &[PathBuf]) -> Result<SyncReport, Error> {
        self.logger.process(format_args!(
            "Generating {}",
            self.path().display()
        ));
        let reference = self.build_reference()?;
        let extraction = self.extract(files)?;
        let mut report = self.merge_and_write(&reference)?;
        report.extraction = Some(extraction);
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Line;
    use indoc::indoc;

    fn parse(text: &str) -> StringsFile {
        StringsFile::parse(text, TextEncoding::Utf8, false)
    }

    fn reference(text: &str) -> Reference {
        Reference::from_entries(parse(text).entries())
    }

    #[test]
    fn test_selective_overwrite() {
        let reference = reference("\"A\" = \"1\";\n\"B\" = \"2\";\n");
        let mut fresh = parse("\"A\" = \"1\";\n\"B\" = \"3\";\n\"C\" = \"4\";\n");

        let report = merge_reference(&mut fresh, &reference).unwrap();

        assert_eq!(fresh.text(), "\"A\" = \"1\";\n\"B\" = \"2\";\n\"C\" = \"4\";\n");
        assert_eq!(report.total_entries, 3);
        assert_eq!(report.unchanged, 1);
        assert_eq!(report.new_keys, ["C"]);
        assert_eq!(
            report.overwritten,
            [Overwrite {
                line_number: 2,
                key: "B".to_string(),
                before: "3".to_string(),
                after: "2".to_string(),
            }]
        );
    }

    #[test]
    fn test_untouched_lines_keep_original_text() {
        let text = indoc! {r#"
            /* No comment provided by engineer. */
            "A"   =   "1";   // kept as is

            "B" = "3";
        "#};
        let mut fresh = parse(text);
        merge_reference(&mut fresh, &reference("\"A\" = \"1\";\n\"B\" = \"2\";\n")).unwrap();

        let lines: Vec<_> = fresh.lines().iter().map(Line::raw).collect();
        assert_eq!(
            lines,
            [
                "/* No comment provided by engineer. */\n",
                "\"A\"   =   \"1\";   // kept as is\n",
                "\n",
                "\"B\" = \"2\";\n",
            ]
        );
    }

    #[test]
    fn test_empty_reference_changes_nothing() {
        let text = "\"A\" = \"1\";\n// c\n";
        let mut fresh = parse(text);
        let report = merge_reference(&mut fresh, &Reference::new()).unwrap();
        assert_eq!(fresh.text(), text);
        assert!(report.overwritten.is_empty());
        assert_eq!(report.new_keys, ["A"]);
    }

    #[test]
    fn test_second_merge_is_a_no_op() {
        let reference = reference("\"A\" = \"Bonjour\";\n");
        let mut fresh = parse("\"A\" = \"Hello\";\n");
        merge_reference(&mut fresh, &reference).unwrap();

        let again = Reference::from_entries(fresh.entries());
        let mut regenerated = parse("\"A\" = \"Bonjour\";\n");
        let report = merge_reference(&mut regenerated, &again).unwrap();
        assert!(report.overwritten.is_empty());
        assert_eq!(report.unchanged, 1);
    }

    #[test]
    fn test_duplicates_in_fresh_file_are_reported() {
        let mut fresh = parse("\"K\" = \"a\";\n\"K\" = \"b\";\n");
        let report = merge_reference(&mut fresh, &reference("\"K\" = \"t\";\n")).unwrap();
        assert_eq!(report.duplicate_keys, ["K"]);
        assert_eq!(report.overwritten.len(), 2);
        assert_eq!(fresh.text(), "\"K\" = \"t\";\n\"K\" = \"t\";\n");
    }
}
