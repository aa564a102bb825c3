//! Error types for the wire format

use thiserror::Error;

/// Wire format error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WireError {
    #[error("Missing '{0}' separator")]
    MissingSeparator(char),

    #[error("Invalid hex in {field}: {reason}")]
    InvalidHex { field: &'static str, reason: String },

    #[error("Invalid {field} length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{field} is too long: at most {max} hex characters, got {actual}")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("Ciphertext of {0} bytes is not a positive multiple of the block size")]
    UnalignedCiphertext(usize),
}

/// Result type alias for wire operations
pub type WireResult<T> = Result<T, WireError>;
