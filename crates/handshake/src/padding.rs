//! PKCS#7 padding over the cipher block size

use handshake_wire::BLOCK_SIZE;

use crate::{HandshakeError, HandshakeResult};

/// Pad `data` to a positive multiple of the block size
///
/// Always adds between 1 and `BLOCK_SIZE` bytes, each equal to the number
/// of bytes added.
pub fn pad(data: &[u8]) -> Vec<u8> {
    let pad_len = BLOCK_SIZE - data.len() % BLOCK_SIZE;
    let mut out = Vec::with_capacity(data.len() + pad_len);
    out.extend_from_slice(data);
    out.resize(data.len() + pad_len, pad_len as u8);
    out
}

/// Strip PKCS#7 padding
///
/// The last byte gives the pad length; it must be in `1..=BLOCK_SIZE` and
/// every pad byte must carry that same value.
pub fn unpad(data: &[u8]) -> HandshakeResult<&[u8]> {
    let Some(&last) = data.last() else {
        return Err(HandshakeError::Decryption("empty plaintext".into()));
    };

    let pad_len = last as usize;
    if pad_len == 0 || pad_len > BLOCK_SIZE || pad_len > data.len() {
        return Err(HandshakeError::Decryption(format!(
            "invalid padding length {pad_len}"
        )));
    }

    let (body, padding) = data.split_at(data.len() - pad_len);
    if padding.iter().any(|&b| b != last) {
        return Err(HandshakeError::Decryption("inconsistent padding bytes".into()));
    }

    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_lengths_at_block_boundaries() {
        for (len, padded_len) in [(0, 16), (1, 16), (15, 16), (16, 32), (17, 32), (1000, 1008)] {
            let data = vec![0x61; len];
            let padded = pad(&data);
            assert_eq!(padded.len(), padded_len, "input of {len} bytes");

            let pad_len = padded_len - len;
            assert!(padded[len..].iter().all(|&b| b as usize == pad_len));
            assert_eq!(unpad(&padded).unwrap(), data.as_slice());
        }
    }

    #[test]
    fn test_full_block_of_padding() {
        let padded = pad(&[]);
        assert_eq!(padded, vec![16u8; 16]);
        assert!(unpad(&padded).unwrap().is_empty());
    }

    #[test]
    fn test_unpad_rejects_zero_length_byte() {
        let mut block = [7u8; 16];
        block[15] = 0;
        assert!(matches!(unpad(&block), Err(HandshakeError::Decryption(_))));
    }

    #[test]
    fn test_unpad_rejects_length_above_block_size() {
        let block = [17u8; 32];
        assert!(matches!(unpad(&block), Err(HandshakeError::Decryption(_))));
    }

    #[test]
    fn test_unpad_rejects_inconsistent_bytes() {
        let mut block = [0x61u8; 16];
        block[13] = 3;
        block[14] = 9;
        block[15] = 3;
        assert!(matches!(unpad(&block), Err(HandshakeError::Decryption(_))));
    }

    #[test]
    fn test_unpad_rejects_empty() {
        assert!(matches!(unpad(&[]), Err(HandshakeError::Decryption(_))));
    }
}
