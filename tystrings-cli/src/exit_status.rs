use std::process::ExitCode;

/// Exit status of a command that ran to completion.
///
/// - `Success` (0): nothing to report
/// - `Failure` (1): lint violations, or a command that failed at runtime
///
/// Usage errors never get here: clap exits with 2 on its own.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command found problems or failed.
    Failure,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
        }
    }
}
