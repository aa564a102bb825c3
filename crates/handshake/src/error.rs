//! Handshake error types

use handshake_wire::WireError;
use thiserror::Error;

/// Key agreement or payload encryption error
#[derive(Debug, Error)]
pub enum HandshakeError {
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Invalid point: public key is not on the curve")]
    InvalidPoint,

    #[error("Malformed envelope: {0}")]
    MalformedEnvelope(#[from] WireError),

    #[error("Decryption failed: {0}")]
    Decryption(String),

    #[error("Unsupported curve: {0}")]
    UnsupportedCurve(String),
}

impl HandshakeError {
    pub(crate) fn invalid_key(err: impl ToString) -> Self {
        Self::InvalidKey(err.to_string())
    }
}

pub type HandshakeResult<T> = Result<T, HandshakeError>;
