use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when reading an env file.
#[derive(Error, Debug)]
pub enum EnvFileError {
    #[error("Failed to open env file {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read line from env file")]
    Read(#[from] std::io::Error),
}

/// Errors that can occur when invoking the external secret-store command.
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("Failed to launch '{program}'")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{}", .stderr.trim_end())]
    CommandFailed { stderr: String },
}
