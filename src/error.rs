//! Error types for card creation.

use std::io;
use thiserror::Error;

/// Result type alias using CardError.
pub type Result<T> = std::result::Result<T, CardError>;

/// Errors that abort a card-creation attempt.
#[derive(Debug, Error)]
pub enum CardError {
    /// The QUESTION/ANSWER frames were damaged while editing
    #[error(
        "You deleted header lines! The QUESTION and ANSWER markers must be kept intact, \
         otherwise parsing fails (found {marker_lines} marker lines)"
    )]
    HeaderNotIntact { marker_lines: usize },

    /// The editor could not be started
    #[error("failed to launch editor, full call was: {command}: {source}")]
    EditorLaunch {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}
