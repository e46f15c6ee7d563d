//! Error types for synthesis and encoding.

use std::path::PathBuf;

use arcade_sfx_spec::SpecError;
use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur during synthesis or WAV encoding.
#[derive(Debug, Error)]
pub enum AudioError {
    /// The descriptor was rejected before rendering.
    #[error(transparent)]
    Spec(#[from] SpecError),

    /// The destination could not be written.
    #[error("failed to write WAV to {}: {source}", path.display())]
    EncodingFailure {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl AudioError {
    /// Creates an encoding failure for `path`.
    pub fn encoding(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::EncodingFailure {
            path: path.into(),
            source,
        }
    }

    /// Returns the stable error code.
    pub fn code(&self) -> &'static str {
        match self {
            AudioError::Spec(err) => err.code(),
            AudioError::EncodingFailure { .. } => "SFX_010",
        }
    }

    /// Returns true if the caller must fix the descriptor.
    pub fn is_descriptor_error(&self) -> bool {
        matches!(self, AudioError::Spec(_))
    }
}
