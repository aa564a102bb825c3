//! Curve selection and handshake configuration

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::HandshakeError;

/// Named elliptic curve used for key agreement
///
/// Both curves have 32-byte field elements, so shared secrets are always
/// 64 hex characters. Configuration accepts the same names as [`FromStr`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Curve {
    /// secp256k1 (Koblitz curve)
    #[default]
    Secp256k1,
    /// NIST P-256 (secp256r1 / prime256v1)
    P256,
}

impl Curve {
    pub fn name(&self) -> &'static str {
        match self {
            Curve::Secp256k1 => "secp256k1",
            Curve::P256 => "p256",
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Curve {
    type Err = HandshakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "secp256k1" | "k256" => Ok(Curve::Secp256k1),
            "p256" | "p-256" | "secp256r1" | "prime256v1" => Ok(Curve::P256),
            other => Err(HandshakeError::UnsupportedCurve(other.to_string())),
        }
    }
}

impl TryFrom<String> for Curve {
    type Error = HandshakeError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

/// Construction-time settings for a [`Handshake`](crate::Handshake)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandshakeConfig {
    /// Curve for key generation and agreement
    pub curve: Curve,
}

impl HandshakeConfig {
    pub fn new(curve: Curve) -> Self {
        Self { curve }
    }
}
