use std::path::PathBuf;

use tystrings::{BaiduTranslator, Logger, TextEncoding, TranslateOptions, Translator};

use crate::config::Config;
use crate::exit_status::ExitStatus;
use crate::report::success_line;

#[derive(Debug, Clone)]
pub struct TranslateCommandOptions {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub dst_lang: String,
    pub src_lang: Option<String>,
    pub encoding: TextEncoding,
    /// Credentials from the command line or environment; they take
    /// precedence over the config file.
    pub appid: Option<String>,
    pub secret: Option<String>,
}

fn credential(
    cli: Option<String>,
    config: &Option<String>,
    name: &str,
    env: &str,
) -> Result<String, String> {
    cli.or_else(|| config.clone())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| {
            format!(
                "Missing Baidu {}: pass --{}, set {} or add it to [translate] in the config file",
                name, name, env
            )
        })
}

/// Run the translate command through the Baidu backend.
pub fn run_translate_command(
    opts: TranslateCommandOptions,
    config: &Config,
    logger: &Logger,
) -> Result<ExitStatus, String> {
    let appid = credential(
        opts.appid,
        &config.translate.appid,
        "appid",
        "TYSTRINGS_BAIDU_APPID",
    )?;
    let secret = credential(
        opts.secret,
        &config.translate.secret,
        "secret",
        "TYSTRINGS_BAIDU_SECRET",
    )?;

    let backend = BaiduTranslator::new(appid, secret).with_endpoint(&config.translate.endpoint);
    let translator =
        Translator::new(backend, logger.clone()).with_batch_size(config.translate.batch_size);
    let options = TranslateOptions::new(opts.dst_lang)
        .with_src_lang(opts.src_lang)
        .with_encoding(opts.encoding);

    let report = translator
        .translate(&opts.source, &opts.destination, &options)
        .map_err(|e| format!("Translation failed: {}", e))?;

    println!(
        "{}",
        success_line(&format!(
            "{} string(s) translated into {}",
            report.translated.len(),
            report.destination.display()
        ))
    );
    logger.success("have fun!");
    Ok(ExitStatus::Success)
}
