//! Machine translation of a whole strings file.
//!
//! Values are sent to a [`TranslationBackend`] in batches, and the results
//! are substituted line by line, so comments and layout of the source file
//! carry over to the destination.

pub mod baidu;

use std::path::{Path, PathBuf};

pub use baidu::BaiduTranslator;

use crate::{
    encoding::TextEncoding,
    error::Error,
    formats::{StringsFile, strings_path},
    logger::Logger,
    traits::Parser,
};

/// Default number of values per backend request.
pub const DEFAULT_BATCH_SIZE: usize = 20;

/// A translation service.
pub trait TranslationBackend {
    /// Translates `texts` into `to`. `from = None` asks the backend to
    /// detect the source language.
    ///
    /// Must return exactly one translation per input, in input order.
    fn translate(&self, texts: &[String], from: Option<&str>, to: &str)
    -> Result<Vec<String>, Error>;
}

/// Options of the `translate` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateOptions {
    pub src_lang: Option<String>,
    pub dst_lang: String,
    pub encoding: TextEncoding,
}

impl TranslateOptions {
    pub fn new(dst_lang: impl Into<String>) -> Self {
        TranslateOptions {
            src_lang: None,
            dst_lang: dst_lang.into(),
            encoding: TextEncoding::default(),
        }
    }

    pub fn with_src_lang(mut self, src_lang: Option<String>) -> Self {
        self.src_lang = src_lang;
        self
    }

    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }
}

/// One translated entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translated {
    pub line_number: usize,
    pub key: String,
    pub source: String,
    pub translation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslateReport {
    pub destination: PathBuf,
    pub translated: Vec<Translated>,
    /// Entries with an empty value, which are not sent to the backend.
    pub skipped_empty: usize,
}

/// Where the translated file goes: into `Localizable.strings` when
/// `destination` is an existing directory, otherwise `destination` itself.
pub fn resolve_destination(destination: &Path) -> PathBuf {
    if destination.is_dir() {
        strings_path(destination)
    } else {
        destination.to_path_buf()
    }
}

pub struct Translator<B: TranslationBackend> {
    backend: B,
    batch_size: usize,
    logger: Logger,
}

impl<B: TranslationBackend> Translator<B> {
    pub fn new(backend: B, logger: Logger) -> Self {
        Translator {
            backend,
            batch_size: DEFAULT_BATCH_SIZE,
            logger,
        }
    }

    /// Values per request; zero is treated as one.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Translates every non-empty value of `file` in place.
    pub fn translate_file(
        &self,
        file: &mut StringsFile,
        from: Option<&str>,
        to: &str,
    ) -> Result<TranslateReport, Error> {
        let mut report = TranslateReport::default();
        let mut pending = Vec::new();
        for (index, line) in file.lines().iter().enumerate() {
            let Some(entry) = line.entry() else {
                continue;
            };
            if entry.value.is_empty() {
                report.skipped_empty += 1;
            } else {
                pending.push((index, entry.clone()));
            }
        }

        for (batch_number, batch) in pending.chunks(self.batch_size).enumerate() {
            self.logger.debug(format_args!(
                "batch {}: {} string(s)",
                batch_number + 1,
                batch.len()
            ));
            let texts: Vec<String> = batch.iter().map(|(_, e)| e.value.clone()).collect();
            let translations = self.backend.translate(&texts, from, to)?;
            if translations.len() != texts.len() {
                return Err(Error::translation_error(format!(
                    "expected {} translations, got {}",
                    texts.len(),
                    translations.len()
                )));
            }

            for ((index, entry), translation) in batch.iter().zip(translations) {
                file.set_value(*index, &translation)?;
                self.logger
                    .debug(format_args!("{} => {}", entry.value, translation));
                report.translated.push(Translated {
                    line_number: entry.line_number,
                    key: entry.key.clone(),
                    source: entry.value.clone(),
                    translation,
                });
            }
        }

        Ok(report)
    }

    /// Reads `source`, translates it and writes the result to `destination`
    /// with the source file's encoding.
    pub fn translate(
        &self,
        source: &Path,
        destination: &Path,
        options: &TranslateOptions,
    ) -> Result<TranslateReport, Error> {
        // Unlike generation, a missing source has nothing to translate.
        if !source.is_file() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} does not exist", source.display()),
            )));
        }
        self.logger.process("Parsing Source...");
        let mut file = StringsFile::read_from(source, options.encoding)?;

        self.logger.process(format_args!(
            "Translating {} string(s) to {}...",
            file.entry_count(),
            options.dst_lang
        ));
        let mut report =
            self.translate_file(&mut file, options.src_lang.as_deref(), &options.dst_lang)?;
        self.logger
            .info(format_args!("count: {}", report.translated.len()));

        let destination = resolve_destination(destination);
        file.write_to(&destination)?;
        self.logger.success(format_args!(
            "Write strings file to: {}",
            destination.display()
        ));
        report.destination = destination;
        Ok(report)
    }
}
