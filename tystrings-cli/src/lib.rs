//! Command implementations of the `tystrings` binary, exposed as a library
//! for testing purposes.

pub mod config;
pub mod exit_status;
pub mod generate;
pub mod lint;
pub mod report;
pub mod translate;
pub mod validation;

use tracing::{Dispatch, Level};
use tystrings::Logger;

pub use config::Config;
pub use exit_status::ExitStatus;

/// Builds the logger every component receives, writing to stderr.
pub fn init_logger(verbose: bool) -> Logger {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .with_level(verbose)
        .with_writer(std::io::stderr)
        .finish();
    Logger::new(Dispatch::new(subscriber))
}
