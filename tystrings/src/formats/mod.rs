//! Localization file formats understood by tystrings.
//!
//! Only Apple `.strings` is supported; the module keeps the format code
//! apart from the pipelines that use it.

pub mod strings;

use std::path::{Path, PathBuf};

pub use strings::StringsFile;

/// File name genstrings writes into its output directory.
pub const STRINGS_FILE_NAME: &str = "Localizable.strings";

/// Path of the strings file inside `dir`.
///
/// An empty `dir` yields the bare file name, i.e. the working directory.
pub fn strings_path<P: AsRef<Path>>(dir: P) -> PathBuf {
    dir.as_ref().join(STRINGS_FILE_NAME)
}
