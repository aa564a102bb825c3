//! AES-256-CBC payload encryption keyed from an ECDH shared secret

use aes::Aes256;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit, block_padding::NoPadding};
use handshake_wire::{CipherEnvelope, IV_SIZE, SHARED_SECRET_SIZE, decode_hex_exact};
use rand::{RngCore, rngs::OsRng};
use sha2::{Digest, Sha256};
use tracing::trace;
use zeroize::Zeroizing;

use crate::{HandshakeError, HandshakeResult, padding};

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Symmetric key size (256 bits / 32 bytes)
pub const KEY_SIZE: usize = 32;

/// Symmetric key derived from a shared secret, wiped on drop
pub type DerivedKey = Zeroizing<[u8; KEY_SIZE]>;

/// Derive the AES key: SHA-256 over the decoded shared-secret bytes
///
/// The shared secret must be exactly 64 hex characters.
pub fn derive_key(shared_secret_hex: &str) -> HandshakeResult<DerivedKey> {
    let secret = Zeroizing::new(
        decode_hex_exact::<SHARED_SECRET_SIZE>("shared secret", shared_secret_hex)
            .map_err(HandshakeError::invalid_key)?,
    );

    let digest = Sha256::digest(secret.as_slice());
    let mut key = Zeroizing::new([0u8; KEY_SIZE]);
    key.copy_from_slice(&digest[..KEY_SIZE]);
    Ok(key)
}

/// Encrypt raw bytes under a fresh random IV
///
/// Returns the `<ivHex>:<ciphertextHex>` envelope text.
pub fn encrypt_bytes(plaintext: &[u8], shared_secret_hex: &str) -> HandshakeResult<String> {
    let key = derive_key(shared_secret_hex)?;

    let mut iv = [0u8; IV_SIZE];
    OsRng.fill_bytes(&mut iv);

    let padded = Zeroizing::new(padding::pad(plaintext));
    let ciphertext = Aes256CbcEnc::new_from_slices(key.as_slice(), &iv)
        .map_err(HandshakeError::invalid_key)?
        .encrypt_padded_vec_mut::<NoPadding>(&padded);

    trace!(
        plaintext_len = plaintext.len(),
        ciphertext_len = ciphertext.len(),
        "Encrypted payload"
    );

    let envelope = CipherEnvelope::new(iv, ciphertext)?;
    Ok(envelope.to_string())
}

/// Decrypt an envelope back to raw bytes
pub fn decrypt_bytes(envelope: &str, shared_secret_hex: &str) -> HandshakeResult<Vec<u8>> {
    let (iv, ciphertext) = CipherEnvelope::parse(envelope)?.into_parts();
    let key = derive_key(shared_secret_hex)?;

    let padded = Zeroizing::new(
        Aes256CbcDec::new_from_slices(key.as_slice(), &iv)
            .map_err(HandshakeError::invalid_key)?
            .decrypt_padded_vec_mut::<NoPadding>(&ciphertext)
            .map_err(|_| HandshakeError::Decryption("ciphertext is not block aligned".into()))?,
    );

    let plaintext = padding::unpad(&padded)?.to_vec();
    trace!(plaintext_len = plaintext.len(), "Decrypted payload");

    Ok(plaintext)
}

/// Encrypt a UTF-8 message
pub fn encrypt(message: &str, shared_secret_hex: &str) -> HandshakeResult<String> {
    encrypt_bytes(message.as_bytes(), shared_secret_hex)
}

/// Decrypt an envelope holding a UTF-8 message
pub fn decrypt(envelope: &str, shared_secret_hex: &str) -> HandshakeResult<String> {
    let bytes = decrypt_bytes(envelope, shared_secret_hex)?;
    String::from_utf8(bytes)
        .map_err(|_| HandshakeError::Decryption("plaintext is not valid UTF-8".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "2b7e151628aed2a6abf7158809cf4f3c2b7e151628aed2a6abf7158809cf4f3c";

    #[test]
    fn test_derive_key_is_sha256_of_secret_bytes() {
        let key = derive_key(&"00".repeat(32)).unwrap();
        // SHA-256 of 32 zero bytes
        assert_eq!(
            handshake_wire::encode_hex(key.as_slice()),
            "66687aadf862bd776c8fc18b8e9f8e20089714856ee233b3902a591d0d5f2925"
        );
    }

    #[test]
    fn test_derive_key_requires_full_width_secret() {
        assert!(matches!(
            derive_key("abcd"),
            Err(HandshakeError::InvalidKey(_))
        ));
        assert!(matches!(
            derive_key(&"zz".repeat(32)),
            Err(HandshakeError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_decrypt_with_wrong_key_never_returns_message() {
        let other = "11".repeat(32);
        let envelope = encrypt("attack at dawn", SECRET).unwrap();
        let result = decrypt(&envelope, &other);
        assert!(!matches!(result, Ok(ref m) if m == "attack at dawn"));
    }

    #[test]
    fn test_non_utf8_bytes_roundtrip() {
        let payload = [0xff, 0xfe, 0x00, 0x80];
        let envelope = encrypt_bytes(&payload, SECRET).unwrap();
        assert_eq!(decrypt_bytes(&envelope, SECRET).unwrap(), payload);
        assert!(matches!(
            decrypt(&envelope, SECRET),
            Err(HandshakeError::Decryption(_))
        ));
    }
}
