//! Error types for descriptor loading and validation.

use thiserror::Error;

/// Result type for descriptor operations.
pub type SpecResult<T> = Result<T, SpecError>;

/// Errors raised while loading or validating a sound descriptor.
///
/// Validation errors are final: callers must supply a corrected descriptor.
#[derive(Debug, Error)]
pub enum SpecError {
    /// A numeric field is out of range (duration, sample rate, channel count, ...).
    #[error("invalid descriptor field '{field}': {message}")]
    InvalidDescriptor {
        /// JSON-style path of the offending field (e.g. `components[2].weight`).
        field: String,
        /// Human-readable explanation.
        message: String,
    },

    /// A generator, shaper, envelope, or output kind this engine does not implement.
    #[error("unsupported component kind '{kind}' at {path}")]
    UnsupportedComponent {
        /// The unrecognized kind tag.
        kind: String,
        /// JSON-style path of the tagged object.
        path: String,
    },

    /// The descriptor JSON is malformed.
    #[error("descriptor JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SpecError {
    /// Creates an invalid descriptor error.
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidDescriptor {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates an unsupported component error.
    pub fn unsupported(kind: impl Into<String>, path: impl Into<String>) -> Self {
        Self::UnsupportedComponent {
            kind: kind.into(),
            path: path.into(),
        }
    }

    /// Returns the stable error code (e.g. "SFX_001").
    pub fn code(&self) -> &'static str {
        match self {
            SpecError::InvalidDescriptor { .. } => "SFX_001",
            SpecError::UnsupportedComponent { .. } => "SFX_002",
            SpecError::Json(_) => "SFX_003",
        }
    }
}
