//! Per-file failure taxonomy. Anything here aborts one file's pipeline, never the run.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    /// Fewer bytes were available than a fixed-width field or record requires.
    #[error("truncated {what}")]
    Truncated { what: &'static str },

    /// Bytes were present but cannot be interpreted.
    #[error("malformed {what}: {reason}")]
    Malformed { what: &'static str, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("XML serialization failed: {0}")]
    Xml(String),
}

impl DecodeError {
    /// Map a fixed-width read failure: short reads become [`DecodeError::Truncated`], anything else stays I/O.
    pub fn from_read(err: io::Error, what: &'static str) -> Self {
        match err.kind() {
            io::ErrorKind::UnexpectedEof => DecodeError::Truncated { what },
            _ => DecodeError::Io(err),
        }
    }

    pub fn is_truncated(&self) -> bool {
        matches!(self, DecodeError::Truncated { .. })
    }
}

/// Extension for reads that should report the field they were decoding.
pub trait ReadContext<T> {
    fn field(self, what: &'static str) -> Result<T, DecodeError>;
}

impl<T> ReadContext<T> for io::Result<T> {
    fn field(self, what: &'static str) -> Result<T, DecodeError> {
        self.map_err(|e| DecodeError::from_read(e, what))
    }
}
