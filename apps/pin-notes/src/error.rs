//! Note session error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by note session operations.
#[derive(Debug, Error)]
pub enum NoteError {
    /// Save or pin attempted with blank content.
    #[error("Cannot {action} empty note!")]
    EmptyNote { action: &'static str },

    /// Pin attempted while a note is already pinned.
    #[error("A note is already pinned. Delete it before pinning another.")]
    AlreadyPinned,

    /// Delete attempted with nothing pinned.
    #[error("There is no pinned note to delete.")]
    NothingPinned,

    /// File read or write failure.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl NoteError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this is a rejected action rather than an I/O failure.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, Self::Io { .. })
    }
}

/// Result type for note session operations.
pub type NoteResult<T> = Result<T, NoteError>;
