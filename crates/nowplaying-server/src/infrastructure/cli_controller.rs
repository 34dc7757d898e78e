//! [`MediaController`] backed by the external media-status binary.
//!
//! Each request spawns one short-lived child process with `tokio::process`.
//! The child is killed if it outlives the configured timeout or if the
//! request future is dropped.

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::application::controller::{ControllerError, ControllerRequest, MediaController};

/// Runs the status binary at `program` for every request.
#[derive(Debug, Clone)]
pub struct CliController {
    program: PathBuf,
    timeout: Duration,
}

impl CliController {
    pub fn new(program: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }

    fn program_name(&self) -> String {
        self.program.display().to_string()
    }
}

#[async_trait]
impl MediaController for CliController {
    async fn execute(&self, request: ControllerRequest) -> Result<String, ControllerError> {
        let args = request.args();
        debug!(program = %self.program.display(), ?args, "running status binary");

        let child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output();

        let output = match timeout(self.timeout, child).await {
            Ok(Ok(output)) => output,
            Ok(Err(source)) => {
                return Err(ControllerError::Spawn {
                    program: self.program_name(),
                    source,
                })
            }
            Err(_) => {
                warn!(?args, after = ?self.timeout, "status binary timed out");
                return Err(ControllerError::Timeout {
                    program: self.program_name(),
                    after: self.timeout,
                });
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!(?args, status = %output.status, %stderr, "status binary failed");
            return Err(ControllerError::NonZeroExit {
                program: self.program_name(),
                status: output.status.to_string(),
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
