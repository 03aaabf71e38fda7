//! `gh` subprocess invocation for secret writes.
//!
//! The actual write goes through the GitHub CLI, which is assumed to be
//! installed and authenticated out-of-band. Each upload is one blocking
//! `gh secret set` invocation, awaited to completion before the next.
//!
//! The secret value is passed as a literal argument (`--body`), mirroring
//! the CLI's documented interface. On platforms where process arguments
//! are visible to other users this can expose the value via process
//! listings; swap the client behind [`crate::app_deps::SecretStore`] for a
//! native API implementation if that matters in your environment.

use tokio::process::Command;

use crate::constants;
use crate::errors::UploadError;

/// Client for the external `gh` CLI.
pub struct GhClient {
    program: String,
}

impl Default for GhClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GhClient {
    /// Create a client that invokes `gh` from the PATH.
    pub fn new() -> Self {
        Self::with_program(constants::gh::PROGRAM)
    }

    /// Create a client that invokes an alternative program.
    ///
    /// Used by tests to substitute a fake `gh`.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Set a secret on a repository, waiting for the subprocess to exit.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::Launch`] if the program cannot be started,
    /// or [`UploadError::CommandFailed`] with the captured stderr if it
    /// exits non-zero.
    pub async fn set_secret(
        &self,
        repo: &str,
        key: &str,
        value: &str,
    ) -> Result<(), UploadError> {
        let output = Command::new(&self.program)
            .args(["secret", "set", key, "--repo", repo, "--body", value])
            .output()
            .await
            .map_err(|source| UploadError::Launch {
                program: self.program.clone(),
                source,
            })?;

        if output.status.success() {
            Ok(())
        } else {
            Err(UploadError::CommandFailed {
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            })
        }
    }
}
