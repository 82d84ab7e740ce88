use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal conditions that abort a run before any rename is performed.
///
/// Per-entry rename failures are not errors; they are reported through
/// [`crate::RenameOutcome`] so the rest of the batch can continue.
#[derive(Debug, Error)]
pub enum RenameditError {
    #[error("{} does not exist", path.display())]
    NotFound { path: PathBuf },

    #[error("{} is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    #[error("{context}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    #[error("cannot edit file name {name:?}: {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("editor error: {0}")]
    Editor(String),

    #[error(
        "number of new and old filenames doesn't match (expected {expected} lines, found {actual})"
    )]
    CountMismatch { expected: usize, actual: usize },

    #[error("interrupted")]
    Interrupted,

    #[error("invalid config file {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl RenameditError {
    pub(crate) fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

/// A single rename that failed. Reported, never fatal.
#[derive(Debug, Error)]
#[error("Failed to rename {from} to {to}: {source}")]
pub struct RenameError {
    pub from: String,
    pub to: String,
    #[source]
    pub source: io::Error,
}

pub type Result<T, E = RenameditError> = std::result::Result<T, E>;
