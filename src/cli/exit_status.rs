use std::process::ExitCode;

/// Exit status of the CLI.
///
/// - `Success` (0): the document was translated
/// - `Failure` (1): nothing was done, e.g. no input was given
/// - `Error` (2): the run failed (I/O, invalid JSON, invalid config, strict orphan check)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
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
