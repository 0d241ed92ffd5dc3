use std::{error::Error, fmt, io, path::PathBuf};

/// Failures while loading or validating a serialized artifact.
#[derive(Debug)]
pub enum ArtifactError {
    /// The artifact file could not be read.
    Io { path: PathBuf, source: io::Error },
    /// The file is not valid JSON or does not match the artifact schema.
    Json(serde_json::Error),
    /// The parsed artifact violates a structural invariant.
    Invalid(String),
}

impl fmt::Display for ArtifactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactError::Io { path, source } => {
                write!(f, "cannot read '{}': {source}", path.display())
            }
            ArtifactError::Json(e) => write!(f, "invalid JSON: {e}"),
            ArtifactError::Invalid(msg) => write!(f, "invalid artifact: {msg}"),
        }
    }
}

impl Error for ArtifactError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ArtifactError::Io { source, .. } => Some(source),
            ArtifactError::Json(e) => Some(e),
            ArtifactError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for ArtifactError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Failures while scoring a frame against a loaded artifact.
#[derive(Debug)]
pub enum PredictError {
    /// The frame carries a different number of columns than the artifact
    /// was trained on.
    ColumnCount { got: usize, expected: usize },
    /// A column is missing, renamed or out of order.
    ColumnMismatch {
        position: usize,
        got: String,
        expected: String,
    },
}

impl fmt::Display for PredictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictError::ColumnCount { got, expected } => {
                write!(f, "column count mismatch: got {got}, expected {expected}")
            }
            PredictError::ColumnMismatch {
                position,
                got,
                expected,
            } => write!(
                f,
                "column {position} mismatch: got '{got}', expected '{expected}'"
            ),
        }
    }
}

impl Error for PredictError {}
