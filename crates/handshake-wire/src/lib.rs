//! Wire Format Definitions for Handshake
//!
//! This crate contains the textual encodings exchanged with a peer:
//! hex-encoded keys, the key pair value and the `<iv>:<ciphertext>`
//! envelope produced by encryption.

mod codec;
mod envelope;
mod error;
mod keys;

pub use codec::*;
pub use envelope::*;
pub use error::*;
pub use keys::*;

/// Block size of the symmetric cipher (AES, 128 bits)
pub const BLOCK_SIZE: usize = 16;

/// Initialization vector size (one cipher block)
pub const IV_SIZE: usize = BLOCK_SIZE;

/// Shared secret size (256 bits / 32 bytes)
pub const SHARED_SECRET_SIZE: usize = 32;

/// Hex length of an encoded shared secret
pub const SHARED_SECRET_HEX_LEN: usize = SHARED_SECRET_SIZE * 2;

/// Separator between the IV and the ciphertext in an envelope
pub const ENVELOPE_SEPARATOR: char = ':';

/// SEC1 tag byte of an uncompressed curve point
pub const UNCOMPRESSED_POINT_TAG: u8 = 0x04;
