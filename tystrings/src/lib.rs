#![forbid(unsafe_code)]
//! Toolkit for Apple `Localizable.strings` files.
//!
//! Regenerating a strings file from source code (with `genstrings`) throws
//! away every translated value. tystrings wraps the regeneration: it reads
//! the existing file first, and afterwards restores the old value of every
//! key whose regenerated value differs.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use tystrings::{Genstrings, Logger, Synchronizer};
//!
//! let sync = Synchronizer::new("fr.lproj", Genstrings::default(), Logger::silent());
//! let report = sync.generate(&[PathBuf::from("Sources/ViewController.m")])?;
//! println!("restored {} translation(s)", report.overwritten.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Features
//!
//! - Line-preserving `.strings` parser (UTF-16 with BOM, or UTF-8)
//! - Reference synchronization around an external extractor
//! - Duplicate key linting
//! - Batch machine translation through a pluggable backend

pub mod encoding;
pub mod error;
pub mod extract;
pub mod formats;
pub mod lint;
pub mod logger;
pub mod sync;
pub mod traits;
pub mod translate;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    encoding::TextEncoding,
    error::Error,
    extract::{Extractor, Genstrings, ProcessOutput, run_process},
    formats::{STRINGS_FILE_NAME, StringsFile, strings_path},
    lint::{Duplicate, LintReport, lint},
    logger::Logger,
    sync::{Overwrite, SyncOptions, SyncReport, Synchronizer, merge_reference},
    translate::{
        BaiduTranslator, TranslateOptions, TranslateReport, TranslationBackend, Translator,
    },
    types::{Entry, Line, Reference, Unmatched},
};
