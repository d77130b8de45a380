use std::process::ExitCode;

/// Exit status of a placehold run.
///
/// - `Success` (0): Every missing placeholder was written
/// - `Failure` (1): The run finished but some placeholders could not be built
/// - `Error` (2): The run could not start (unreadable or invalid config, bad arguments)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Every missing placeholder was written.
    Success,
    /// Some placeholders could not be built.
    Failure,
    /// The run aborted before generating anything.
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
