use thiserror::Error;

pub type LogResult<T> = Result<T, LogError>;

/// Fatal problems that stop a file from being loaded.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LogError {
    #[error("file could not be decoded as UTF-16: {reason}")]
    Decode { reason: String },

    #[error("file contains no data")]
    EmptyFile,

    #[error("file does not match the TEXA export layout: {reason}. Use the original export, not a copy edited in a spreadsheet.")]
    FormatMismatch { reason: String },
}

impl LogError {
    pub(crate) fn decode(reason: impl Into<String>) -> Self {
        LogError::Decode {
            reason: reason.into(),
        }
    }

    pub(crate) fn format_mismatch(reason: impl Into<String>) -> Self {
        LogError::FormatMismatch {
            reason: reason.into(),
        }
    }
}

/// Non-fatal conditions reported alongside a successful load.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Warning {
    #[error("no relative time column found, falling back to the sample index")]
    NoTimeAxis,
}
