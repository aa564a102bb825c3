//! Handshake - Key Agreement and Payload Encryption
//!
//! Provides elliptic-curve key generation and ECDH over a configured curve,
//! with AES-256-CBC encryption keyed from the shared secret.
//!
//! The payload cipher is confidentiality only: there is no MAC, so a
//! modified ciphertext is detected only when it happens to break the
//! padding. Callers that need integrity must add it around the envelope.

mod cipher;
mod curve;
mod ecdh;
mod error;
mod handshake;
mod padding;

pub use cipher::{DerivedKey, KEY_SIZE, derive_key};
pub use curve::*;
pub use error::*;
pub use handshake::*;
pub use padding::{pad, unpad};

pub use handshake_wire::{
    BLOCK_SIZE, CipherEnvelope, IV_SIZE, KeyPair, SHARED_SECRET_HEX_LEN, WireError,
};

/// Generate a key pair on the default curve
pub fn generate() -> KeyPair {
    Handshake::default().generate()
}

/// Rebuild a key pair on the default curve
pub fn generate_from_private(private_key_hex: &str) -> HandshakeResult<KeyPair> {
    Handshake::default().generate_from_private(private_key_hex)
}

/// Derive a shared secret on the default curve
pub fn secret(private_key_hex: &str, other_public_key_hex: &str) -> HandshakeResult<String> {
    Handshake::default().secret(private_key_hex, other_public_key_hex)
}

/// Encrypt a message under a shared secret
pub fn encrypt(message: &str, shared_secret_hex: &str) -> HandshakeResult<String> {
    cipher::encrypt(message, shared_secret_hex)
}

/// Decrypt an envelope under a shared secret
pub fn decrypt(envelope: &str, shared_secret_hex: &str) -> HandshakeResult<String> {
    cipher::decrypt(envelope, shared_secret_hex)
}
