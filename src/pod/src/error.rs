use std::path::PathBuf;

use thiserror::Error;

/// A3S Pod error types
#[derive(Error, Debug)]
pub enum PodError {
    /// Pod file does not exist
    #[error("Pod file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Document is not a well-formed pod description
    #[error("Decode error: {0}")]
    Decode(String),

    /// Document exceeds the configured size limit
    #[error("Pod document too large: {size} bytes (limit {limit})")]
    TooLarge { size: usize, limit: usize },

    /// Pod declares no containers
    #[error("Pod has no containers")]
    NoContainers,

    /// A container has no image
    #[error("Container image must be specified")]
    MissingImage,

    /// A top-level volume has no name
    #[error("Volume name must be specified")]
    MissingVolumeName,

    /// Decoder defaults that would break pod invariants
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unrecognized random identifier charset
    #[error("Unknown charset: '{0}' (expected alphanumeric, alphabetic, numeric)")]
    UnknownCharset(String),

    /// The OS random source failed
    #[error("Random source unavailable")]
    RandomSource,

    /// Structural or referential validation failure
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Failures reported by `Pod::validate`.
///
/// Container-scoped variants carry the positional index of the offending
/// container, not its name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("duplicate volume name '{name}'")]
    DuplicateVolumeName { name: String },

    #[error("duplicate file name '{name}'")]
    DuplicateFileName { name: String },

    #[error("in container {container}, volume '{volume}' is mounted more than once")]
    DuplicateVolumeMount { container: usize, volume: String },

    #[error("in container {container}, environment name '{name}' is not unique")]
    DuplicateEnvName { container: usize, name: String },

    #[error("in container {container}, file '{file}' does not exist in file list")]
    DanglingFileReference { container: usize, file: String },

    #[error("in container {container}, volume '{volume}' does not exist in volume list")]
    DanglingVolumeReference { container: usize, volume: String },

    #[error("in container {container}, permission '{perm}' must be '0' or an octal string like '0755'")]
    MalformedPermission { container: usize, perm: String },
}

/// Coarse classification of a `PodError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Io,
    Decode,
    Structural,
    Validation,
    Config,
    Internal,
}

impl PodError {
    /// Classify this error for callers that render (kind, message) pairs.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PodError::NotFound { .. } => ErrorKind::NotFound,
            PodError::Io(_) => ErrorKind::Io,
            PodError::Decode(_) | PodError::TooLarge { .. } => ErrorKind::Decode,
            PodError::NoContainers | PodError::MissingImage | PodError::MissingVolumeName => {
                ErrorKind::Structural
            }
            PodError::Validation(_) => ErrorKind::Validation,
            PodError::Config(_) => ErrorKind::Config,
            PodError::UnknownCharset(_) | PodError::RandomSource => ErrorKind::Internal,
        }
    }
}

impl From<serde_json::Error> for PodError {
    fn from(err: serde_json::Error) -> Self {
        PodError::Decode(err.to_string())
    }
}

impl From<serde_yaml::Error> for PodError {
    fn from(err: serde_yaml::Error) -> Self {
        PodError::Decode(err.to_string())
    }
}

/// Result type alias for A3S Pod operations
pub type Result<T> = std::result::Result<T, PodError>;
