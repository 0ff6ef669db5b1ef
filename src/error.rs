use std::io;
use thiserror::Error;

/// Failure of a single git invocation
#[derive(Debug, Error)]
pub enum GitError {
    #[error("could not run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("`{command}` failed: {stderr}")]
    Failed { command: String, stderr: String },
}

/// Fatal outcomes of the interactive clean session
#[derive(Debug, Error)]
pub enum CleanError {
    #[error("failed to get candidates with git clean -nd")]
    CandidateFetch(#[source] GitError),

    #[error("failed to delete selected files")]
    Deletion(#[source] GitError),

    #[error("terminal I/O failed")]
    Io(#[from] io::Error),
}
