//! Error types for wiring and updating devices.

use pf_core::StreamId;
use thiserror::Error;

/// Fieldless discriminant of [`NetworkError`], for callers that only match on kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InputLimitExceeded,
    OutputLimitExceeded,
    NoOutputsConfigured,
    MissingElement,
    UnknownStream,
}

/// Errors raised by devices and the stream registry.
///
/// The limit variants carry the device-specific message text; the kind is
/// the same for every device.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("{message}")]
    InputLimitExceeded {
        message: &'static str,
        capacity: usize,
    },

    #[error("{message}")]
    OutputLimitExceeded {
        message: &'static str,
        capacity: usize,
    },

    #[error("{message}")]
    NoOutputsConfigured { message: &'static str },

    #[error("Missing {what} (index={index}, len={len})")]
    MissingElement {
        what: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Unknown stream {id}")]
    UnknownStream { id: StreamId },
}

pub type NetworkResult<T> = Result<T, NetworkError>;

impl NetworkError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            NetworkError::InputLimitExceeded { .. } => ErrorKind::InputLimitExceeded,
            NetworkError::OutputLimitExceeded { .. } => ErrorKind::OutputLimitExceeded,
            NetworkError::NoOutputsConfigured { .. } => ErrorKind::NoOutputsConfigured,
            NetworkError::MissingElement { .. } => ErrorKind::MissingElement,
            NetworkError::UnknownStream { .. } => ErrorKind::UnknownStream,
        }
    }
}
