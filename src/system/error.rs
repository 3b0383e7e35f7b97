use std::path::{Path, PathBuf};
use std::process::ExitStatus;

/// Message carried by every failure a mock is told to force
pub const SIMULATED_FAILURE: &str = "simulated failure";

/// Errors returned by an [`HttpGetter`](crate::system::HttpGetter)
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// Client construction, request construction, transport or body read failed
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// A mock was configured with a response file that could not be read
    #[error("loading response file with path {} failed: {source}", .path.display())]
    BodyFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failure forced by a mock
    #[error("simulated failure")]
    Simulated,
}

impl HttpError {
    /// Create a response file error
    pub fn body_file(path: &Path, source: std::io::Error) -> Self {
        HttpError::BodyFile {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Errors returned by a [`CommandRunner`](crate::system::CommandRunner)
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// The program could not be started at all
    #[error(transparent)]
    Spawn(std::io::Error),

    /// The program ran but exited unsuccessfully; its output is kept
    #[error("{command} exited with {status}")]
    Failed {
        command: String,
        status: ExitStatus,
        stdout: Vec<u8>,
        stderr: Vec<u8>,
    },

    /// Failure forced by a mock
    #[error("simulated failure")]
    Simulated,
}

impl CommandError {
    /// Create a non-zero exit error
    pub fn failed(command: &str, status: ExitStatus, stdout: Vec<u8>, stderr: Vec<u8>) -> Self {
        CommandError::Failed {
            command: command.to_string(),
            status,
            stdout,
            stderr,
        }
    }

    /// Standard output captured before the failure, if the program ran at all
    pub fn stdout(&self) -> Option<&[u8]> {
        match self {
            CommandError::Failed { stdout, .. } => Some(stdout),
            _ => None,
        }
    }
}

/// The io error returned by a mock directory reader forced to fail
pub fn simulated_io_error() -> std::io::Error {
    std::io::Error::other(SIMULATED_FAILURE)
}
