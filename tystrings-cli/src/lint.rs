use std::path::Path;

use tystrings::{Logger, StringsFile, TextEncoding, lint, traits::Parser};

use crate::exit_status::ExitStatus;
use crate::report::{detail_table, duplicate_table, failure_line, success_line};

/// Run the lint command: report duplicate keys in one strings file.
pub fn run_lint_command(
    file: &Path,
    encoding: TextEncoding,
    logger: &Logger,
) -> Result<ExitStatus, String> {
    logger.process("Parsing Source Reference...");
    let strings = StringsFile::read_from(file, encoding)
        .map_err(|e| format!("Failed to read '{}': {}", file.display(), e))?;

    logger.process("Check Duplicate Keys...");
    let report = lint(&strings);
    logger.debug(format_args!("{} entries checked", report.entry_count));

    if report.is_clean() {
        println!("{}", success_line("lint success"));
        return Ok(ExitStatus::Success);
    }

    println!("Find the following:");
    print!("{}", duplicate_table(&report));
    println!("Detail:");
    print!("{}", detail_table(&report));
    println!("{}", failure_line("Duplicate Keys"));
    Ok(ExitStatus::Failure)
}
