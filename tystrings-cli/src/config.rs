//! `tystrings.toml` configuration.
//!
//! Every setting has a default, so the file is optional. It is looked up in
//! the working directory unless `--config` names one explicitly.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tystrings::extract::DEFAULT_EXTRACTOR;
use tystrings::translate::{DEFAULT_BATCH_SIZE, baidu::BAIDU_ENDPOINT};

pub const CONFIG_FILE_NAME: &str = "tystrings.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub extract: ExtractConfig,
    pub translate: TranslateConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractConfig {
    /// Extraction program, invoked like genstrings.
    pub program: String,
    /// Stop `generate` when the extractor exits unsuccessfully.
    pub abort_on_failure: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        ExtractConfig {
            program: DEFAULT_EXTRACTOR.to_string(),
            abort_on_failure: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TranslateConfig {
    pub appid: Option<String>,
    pub secret: Option<String>,
    pub endpoint: String,
    pub batch_size: usize,
}

impl Default for TranslateConfig {
    fn default() -> Self {
        TranslateConfig {
            appid: None,
            secret: None,
            endpoint: BAIDU_ENDPOINT.to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| format!("Invalid config: {}", e))
    }

    /// Loads `explicit` if given (it must exist), else `tystrings.toml` in
    /// the working directory if present, else the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, String> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let default = PathBuf::from(CONFIG_FILE_NAME);
                if !default.is_file() {
                    return Ok(Config::default());
                }
                default
            }
        };

        let content = fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read config '{}': {}", path.display(), e))?;
        Self::from_toml_str(&content)
            .map_err(|e| format!("{} ({})", e, path.display()))
    }
}
