//! The seam between the service and the external media-status binary.
//!
//! The service only depends on the [`MediaController`] trait. The
//! infrastructure layer implements it by spawning a process; tests implement
//! it with mocks or recording doubles.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::media::{MediaCommand, MediaField};

/// Errors raised while running the status binary.
#[derive(Debug, Error)]
pub enum ControllerError {
    /// The process could not be started.
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The process ran but reported failure.
    #[error("{program} exited with {status}: {stderr}")]
    NonZeroExit {
        program: String,
        status: String,
        stderr: String,
    },

    /// The process did not finish in time and was killed.
    #[error("{program} did not finish within {after:?}")]
    Timeout { program: String, after: Duration },
}

/// One invocation of the status binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerRequest {
    /// `get-raw`: the full dictionary dump.
    GetRaw,
    /// `get <field>`: a single field as plain text.
    Get(MediaField),
    /// A transport command such as `play`.
    Command(MediaCommand),
}

impl ControllerRequest {
    /// Command-line arguments for this request.
    pub fn args(self) -> Vec<&'static str> {
        match self {
            ControllerRequest::GetRaw => vec!["get-raw"],
            ControllerRequest::Get(field) => vec!["get", field.as_str()],
            ControllerRequest::Command(command) => vec![command.as_cli_arg()],
        }
    }
}

/// Runs requests against the media-status tool.
///
/// Implementations return the tool's standard output with surrounding
/// whitespace trimmed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MediaController: Send + Sync {
    async fn execute(&self, request: ControllerRequest) -> Result<String, ControllerError>;
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_arguments() {
        assert_eq!(ControllerRequest::GetRaw.args(), ["get-raw"]);
        assert_eq!(
            ControllerRequest::Get(MediaField::ElapsedTime).args(),
            ["get", "elapsedTime"]
        );
        assert_eq!(
            ControllerRequest::Command(MediaCommand::TogglePlayPause).args(),
            ["togglePlayPause"]
        );
    }

    #[test]
    fn test_non_zero_exit_message_names_program_and_stderr() {
        let err = ControllerError::NonZeroExit {
            program: "nowplaying-cli".to_string(),
            status: "exit status: 1".to_string(),
            stderr: "no player".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "nowplaying-cli exited with exit status: 1: no player"
        );
    }
}
