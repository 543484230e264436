use std::path::PathBuf;

use tystrings::{Genstrings, Logger, SyncOptions, Synchronizer, TextEncoding};

use crate::config::Config;
use crate::exit_status::ExitStatus;
use crate::report::sync_summary;

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub files: Vec<PathBuf>,
    /// Output directories; the working directory when empty.
    pub outputs: Vec<PathBuf>,
    pub aliases: Vec<String>,
    pub encoding: TextEncoding,
}

/// Run the generate command: extract and synchronize every output directory.
pub fn run_generate_command(
    opts: GenerateOptions,
    config: &Config,
    logger: &Logger,
) -> Result<ExitStatus, String> {
    let outputs = if opts.outputs.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        opts.outputs
    };

    let extractor = Genstrings::new(&config.extract.program).with_aliases(opts.aliases);
    let sync_options = SyncOptions::new()
        .with_encoding(opts.encoding)
        .with_abort_on_extract_failure(config.extract.abort_on_failure);

    for output in &outputs {
        let sync = Synchronizer::new(output, extractor.clone(), logger.clone())
            .with_options(sync_options.clone());
        let path = sync.path();
        let report = sync
            .generate(&opts.files)
            .map_err(|e| format!("Failed to generate '{}': {}", path.display(), e))?;
        println!("{}", sync_summary(&path.display().to_string(), &report));
    }

    logger.success("have fun!");
    Ok(ExitStatus::Success)
}
