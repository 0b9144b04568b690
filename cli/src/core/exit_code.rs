/// Exit codes for the postalbro CLI.
///
/// "Nothing to do" outcomes (no matches, aborted confirmation) are not errors
/// and exit with `Success`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// Validation, storage, network or any other failure
    GeneralError = 1,
}

impl ExitCode {
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

impl From<&Box<dyn std::error::Error>> for ExitCode {
    fn from(error: &Box<dyn std::error::Error>) -> Self {
        tracing::debug!("exiting on error: {error:?}");
        ExitCode::GeneralError
    }
}

impl From<&clap::Error> for ExitCode {
    fn from(error: &clap::Error) -> Self {
        match error.kind() {
            clap::error::ErrorKind::DisplayHelp
            | clap::error::ErrorKind::DisplayVersion
            | clap::error::ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                ExitCode::Success
            }
            _ => ExitCode::GeneralError,
        }
    }
}
