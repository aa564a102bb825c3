//! Encrypted payload envelope

use std::fmt;
use std::str::FromStr;

use crate::{
    BLOCK_SIZE, ENVELOPE_SEPARATOR, IV_SIZE, WireError, WireResult, decode_hex, decode_hex_exact,
    encode_hex,
};

/// An encrypted payload as it travels on the wire
///
/// Text form: `<ivHex>:<ciphertextHex>`, where the IV is 32 hex characters
/// and the ciphertext is a positive multiple of the block size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherEnvelope {
    iv: [u8; IV_SIZE],
    ciphertext: Vec<u8>,
}

impl CipherEnvelope {
    /// Build an envelope, checking the ciphertext is block aligned
    pub fn new(iv: [u8; IV_SIZE], ciphertext: Vec<u8>) -> WireResult<Self> {
        check_alignment(ciphertext.len())?;
        Ok(Self { iv, ciphertext })
    }

    /// Parse the `<ivHex>:<ciphertextHex>` text form
    ///
    /// Splits on the first separator only; anything after it must be hex.
    pub fn parse(input: &str) -> WireResult<Self> {
        let (iv_hex, ciphertext_hex) = input
            .split_once(ENVELOPE_SEPARATOR)
            .ok_or(WireError::MissingSeparator(ENVELOPE_SEPARATOR))?;

        let iv = decode_hex_exact::<IV_SIZE>("iv", iv_hex)?;
        let ciphertext = decode_hex("ciphertext", ciphertext_hex)?;

        Self::new(iv, ciphertext)
    }

    pub fn iv(&self) -> &[u8; IV_SIZE] {
        &self.iv
    }

    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    /// Split into IV and ciphertext
    pub fn into_parts(self) -> ([u8; IV_SIZE], Vec<u8>) {
        (self.iv, self.ciphertext)
    }
}

fn check_alignment(len: usize) -> WireResult<()> {
    if len == 0 || len % BLOCK_SIZE != 0 {
        return Err(WireError::UnalignedCiphertext(len));
    }
    Ok(())
}

impl FromStr for CipherEnvelope {
    type Err = WireError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CipherEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            encode_hex(self.iv),
            ENVELOPE_SEPARATOR,
            encode_hex(&self.ciphertext)
        )
    }
}
