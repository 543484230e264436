//! Argument validators, used as clap `value_parser`s so that bad input is a
//! usage error (exit code 2) before anything touches the disk.

use std::path::{Path, PathBuf};

/// Source file for `generate`: must exist and must not be a directory.
pub fn validate_source_file(path: &str) -> Result<PathBuf, String> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        return Err(format!("'{}' does not exist", path));
    }

    if path_obj.is_dir() {
        return Err(format!("'{}' is a directory", path));
    }

    Ok(path_obj.to_path_buf())
}

/// Any path that exists.
pub fn validate_existing_path(path: &str) -> Result<PathBuf, String> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        return Err(format!("{} does not exist", path));
    }

    Ok(path_obj.to_path_buf())
}

/// Language codes are passed through to the translation service, which
/// has its own code list (`zh`, `kor`, `cht`, ...), so only the shape is
/// checked here.
pub fn validate_language_code(lang: &str) -> Result<String, String> {
    let lang = lang.trim();
    if lang.is_empty() {
        return Err("Language code cannot be empty".to_string());
    }

    if !lang
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(format!("Invalid language code format: {}", lang));
    }

    Ok(lang.to_string())
}
