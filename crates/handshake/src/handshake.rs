//! Stateless key agreement and payload protection over a configured curve

use handshake_wire::KeyPair;
use k256::Secp256k1;
use p256::NistP256;
use tracing::debug;

use crate::{Curve, HandshakeConfig, HandshakeResult, cipher, ecdh};

/// Handshake context
///
/// Holds only the curve choice; every operation is a pure transform of its
/// arguments, so a single value can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Handshake {
    curve: Curve,
}

impl Handshake {
    pub fn new(config: HandshakeConfig) -> Self {
        Self::with_curve(config.curve)
    }

    pub fn with_curve(curve: Curve) -> Self {
        Self { curve }
    }

    pub fn curve(&self) -> Curve {
        self.curve
    }

    /// Generate a fresh key pair
    pub fn generate(&self) -> KeyPair {
        let pair = match self.curve {
            Curve::Secp256k1 => ecdh::generate::<Secp256k1>(),
            Curve::P256 => ecdh::generate::<NistP256>(),
        };
        debug!(curve = %self.curve, "Generated key pair");
        pair
    }

    /// Rebuild the key pair belonging to a hex private key
    pub fn generate_from_private(&self, private_key_hex: &str) -> HandshakeResult<KeyPair> {
        match self.curve {
            Curve::Secp256k1 => ecdh::from_private::<Secp256k1>(private_key_hex),
            Curve::P256 => ecdh::from_private::<NistP256>(private_key_hex),
        }
    }

    /// Derive the 64-hex-character shared secret with a peer
    ///
    /// # Arguments
    /// * `private_key_hex` - Our private scalar
    /// * `other_public_key_hex` - The peer's uncompressed public point
    pub fn secret(
        &self,
        private_key_hex: &str,
        other_public_key_hex: &str,
    ) -> HandshakeResult<String> {
        let secret = match self.curve {
            Curve::Secp256k1 => {
                ecdh::shared_secret::<Secp256k1>(private_key_hex, other_public_key_hex)
            }
            Curve::P256 => ecdh::shared_secret::<NistP256>(private_key_hex, other_public_key_hex),
        }?;
        debug!(curve = %self.curve, "Derived shared secret");
        Ok(secret)
    }

    /// Encrypt a message under the shared secret
    ///
    /// Returns: `<32-hex iv>:<hex ciphertext>`
    pub fn encrypt(&self, message: &str, shared_secret_hex: &str) -> HandshakeResult<String> {
        cipher::encrypt(message, shared_secret_hex)
    }

    /// Decrypt an envelope produced by [`Handshake::encrypt`]
    pub fn decrypt(&self, envelope: &str, shared_secret_hex: &str) -> HandshakeResult<String> {
        cipher::decrypt(envelope, shared_secret_hex)
    }

    /// Encrypt raw bytes under the shared secret, same envelope as [`Handshake::encrypt`]
    pub fn encrypt_bytes(&self, data: &[u8], shared_secret_hex: &str) -> HandshakeResult<String> {
        cipher::encrypt_bytes(data, shared_secret_hex)
    }

    /// Decrypt an envelope to raw bytes without requiring UTF-8
    pub fn decrypt_bytes(&self, envelope: &str, shared_secret_hex: &str) -> HandshakeResult<Vec<u8>> {
        cipher::decrypt_bytes(envelope, shared_secret_hex)
    }
}
