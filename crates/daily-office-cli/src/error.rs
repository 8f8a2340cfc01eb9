//! CLI error type and exit codes.

use daily_office_core::{CalendarError, ConfigError, LectionaryError};
use thiserror::Error;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum CliExitCode {
    Success = 0,
    Error = 1,
}

impl From<CliExitCode> for i32 {
    fn from(code: CliExitCode) -> Self {
        code as i32
    }
}

/// Anything that stops a command from producing output.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    #[error(transparent)]
    Lectionary(#[from] LectionaryError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to write output: {0}")]
    Output(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type CliResult<T> = Result<T, CliError>;

/// Exit code for a failed command.
///
/// Every failure is a caller or environment problem; none is partial.
pub fn exit_code_for_error(_err: &CliError) -> CliExitCode {
    CliExitCode::Error
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(i32::from(CliExitCode::Success), 0);
        let err = CliError::InvalidArgument("--plan-day 0".into());
        assert_eq!(i32::from(exit_code_for_error(&err)), 1);
    }

    #[test]
    fn test_wrapped_messages_are_transparent() {
        let err: CliError = LectionaryError::UnknownPlan("mcheyne".into()).into();
        assert_eq!(err.to_string(), LectionaryError::UnknownPlan("mcheyne".into()).to_string());
    }
}
