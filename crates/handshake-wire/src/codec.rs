//! Hex encoding helpers

use zeroize::Zeroizing;

use crate::{WireError, WireResult};

/// Encode bytes as lowercase hex without a prefix
pub fn encode_hex(bytes: impl AsRef<[u8]>) -> String {
    hex::encode(bytes)
}

/// Decode a hex string of any even length
///
/// Upper- and lowercase digits are both accepted.
pub fn decode_hex(field: &'static str, input: &str) -> WireResult<Vec<u8>> {
    hex::decode(input).map_err(|e| WireError::InvalidHex {
        field,
        reason: e.to_string(),
    })
}

/// Decode a hex string that must hold exactly `N` bytes
pub fn decode_hex_exact<const N: usize>(field: &'static str, input: &str) -> WireResult<[u8; N]> {
    let bytes = decode_hex(field, input)?;
    let actual = bytes.len();
    bytes.try_into().map_err(|_| WireError::InvalidLength {
        field,
        expected: N,
        actual,
    })
}

/// Decode a big-endian hex number into exactly `width` bytes
///
/// Short (and odd-length) input is left-padded with zeros, the way a
/// numeric scalar is written without leading zeros. The padded copy is
/// wiped once decoded.
pub fn decode_hex_padded(
    field: &'static str,
    input: &str,
    width: usize,
) -> WireResult<Zeroizing<Vec<u8>>> {
    let max = width * 2;
    if input.is_empty() {
        return Err(WireError::InvalidLength {
            field,
            expected: width,
            actual: 0,
        });
    }
    if input.len() > max {
        return Err(WireError::TooLong {
            field,
            max,
            actual: input.len(),
        });
    }

    // Report bad characters against the caller's input, not the padded copy
    if let Some((index, c)) = input.char_indices().find(|(_, c)| !c.is_ascii_hexdigit()) {
        return Err(WireError::InvalidHex {
            field,
            reason: hex::FromHexError::InvalidHexCharacter { c, index }.to_string(),
        });
    }

    let mut padded = Zeroizing::new(String::with_capacity(max));
    padded.extend(std::iter::repeat_n('0', max - input.len()));
    padded.push_str(input);

    decode_hex(field, &padded).map(Zeroizing::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_is_lowercase() {
        assert_eq!(encode_hex([0xAB, 0x01]), "ab01");
    }

    #[test]
    fn test_decode_exact_length_mismatch() {
        let err = decode_hex_exact::<4>("iv", "abcd").unwrap_err();
        assert_eq!(
            err,
            WireError::InvalidLength {
                field: "iv",
                expected: 4,
                actual: 2
            }
        );
    }

    #[test]
    fn test_decode_rejects_non_hex() {
        assert!(matches!(
            decode_hex("key", "zz"),
            Err(WireError::InvalidHex { field: "key", .. })
        ));
    }

    #[test]
    fn test_padded_left_fills_short_input() {
        let bytes = decode_hex_padded("key", "1", 4).unwrap();
        assert_eq!(bytes.as_slice(), &[0, 0, 0, 1]);

        let bytes = decode_hex_padded("key", "ABC", 2).unwrap();
        assert_eq!(bytes.as_slice(), &[0x0a, 0xbc]);
    }

    #[test]
    fn test_padded_reports_position_in_input() {
        for (input, position) in [("zz", 0), ("0x01", 1), ("abcq", 3)] {
            let Err(WireError::InvalidHex { reason, .. }) = decode_hex_padded("key", input, 32) else {
                panic!("{input} should be rejected");
            };
            assert!(
                reason.ends_with(&format!("at position {position}")),
                "{input}: {reason}"
            );
        }
    }

    #[test]
    fn test_padded_rejects_empty_and_overlong() {
        assert!(matches!(
            decode_hex_padded("key", "", 32),
            Err(WireError::InvalidLength { .. })
        ));
        assert!(matches!(
            decode_hex_padded("key", "000", 1),
            Err(WireError::TooLong { max: 2, actual: 3, .. })
        ));
    }
}
