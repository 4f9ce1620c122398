use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed (sort also exits 0 when some files were skipped)
/// - `Failure` (1): Command refused to run (e.g. config file already exists)
/// - `Error` (2): Command failed due to an error (unreadable input, malformed document, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed.
    Success,
    /// Command refused to run.
    Failure,
    /// Command failed due to an error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
