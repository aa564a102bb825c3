//! Key pair value exchanged with callers

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Hex-encoded elliptic-curve key pair
///
/// The private key is the raw scalar, zero-padded to the field width. The
/// public key is the uncompressed SEC1 point (`04 || X || Y`). Both are
/// lowercase hex without a `0x` prefix.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct KeyPair {
    private_key: String,
    #[zeroize(skip)]
    public_key: String,
}

impl KeyPair {
    pub fn new(private_key: String, public_key: String) -> Self {
        Self {
            private_key,
            public_key,
        }
    }

    /// Hex-encoded private scalar
    pub fn private_key(&self) -> &str {
        &self.private_key
    }

    /// Hex-encoded uncompressed public point
    pub fn public_key(&self) -> &str {
        &self.public_key
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("private_key", &"[REDACTED]")
            .field("public_key", &self.public_key)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> KeyPair {
        KeyPair::new("11".repeat(32), format!("04{}", "22".repeat(64)))
    }

    #[test]
    fn test_debug_redacts_private_key() {
        let debug = format!("{:?}", sample());
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains(&"11".repeat(32)));
        assert!(debug.contains(&"22".repeat(64)));
    }

    #[test]
    fn test_json_uses_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["privateKey"], "11".repeat(32));
        assert_eq!(json["publicKey"], format!("04{}", "22".repeat(64)));

        let back: KeyPair = serde_json::from_value(json).unwrap();
        assert_eq!(back, sample());
    }
}
