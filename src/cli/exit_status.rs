use std::process::ExitCode;

/// Exit status for the CLI.
///
/// - `Success` (0): Run completed, slugs printed (possibly zero of them)
/// - `Error` (2): Run failed (registry missing/unreadable, write failure)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Run completed successfully, slugs printed (possibly zero of them).
    Success,
    /// Run failed (registry missing/unreadable, write failure).
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
