//! Key generation and ECDH agreement, generic over SEC1 curves

use elliptic_curve::{
    AffinePoint, CurveArithmetic, FieldBytesSize, PublicKey, SecretKey,
    ecdh::diffie_hellman,
    generic_array::typenum::Unsigned,
    sec1::{FromEncodedPoint, ModulusSize, ToEncodedPoint},
};
use handshake_wire::{KeyPair, UNCOMPRESSED_POINT_TAG, decode_hex, decode_hex_padded, encode_hex};
use rand::rngs::OsRng;

use crate::{HandshakeError, HandshakeResult};

/// Generate a fresh key pair from the OS random source
pub(crate) fn generate<C>() -> KeyPair
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let secret = SecretKey::<C>::random(&mut OsRng);
    key_pair(&secret)
}

/// Rebuild a key pair from its hex private scalar
pub(crate) fn from_private<C>(private_hex: &str) -> HandshakeResult<KeyPair>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let secret = parse_secret::<C>(private_hex)?;
    Ok(key_pair(&secret))
}

/// x-coordinate of `private * peer_public`, hex encoded at full field width
pub(crate) fn shared_secret<C>(private_hex: &str, public_hex: &str) -> HandshakeResult<String>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let secret = parse_secret::<C>(private_hex)?;
    let public = parse_public::<C>(public_hex)?;

    let shared = diffie_hellman(secret.to_nonzero_scalar(), public.as_affine());
    Ok(encode_hex(shared.raw_secret_bytes()))
}

fn key_pair<C>(secret: &SecretKey<C>) -> KeyPair
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let public = secret.public_key().to_encoded_point(false);
    KeyPair::new(encode_hex(secret.to_bytes()), encode_hex(public.as_bytes()))
}

fn parse_secret<C>(private_hex: &str) -> HandshakeResult<SecretKey<C>>
where
    C: CurveArithmetic,
{
    let width = <FieldBytesSize<C> as Unsigned>::USIZE;
    let bytes =
        decode_hex_padded("private key", private_hex, width).map_err(HandshakeError::invalid_key)?;

    SecretKey::<C>::from_slice(&bytes).map_err(|_| {
        HandshakeError::InvalidKey("private key is not a valid scalar for the curve".into())
    })
}

fn parse_public<C>(public_hex: &str) -> HandshakeResult<PublicKey<C>>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let bytes = decode_hex("public key", public_hex).map_err(HandshakeError::invalid_key)?;

    let expected = 1 + 2 * <FieldBytesSize<C> as Unsigned>::USIZE;
    if bytes.len() != expected {
        return Err(HandshakeError::InvalidKey(format!(
            "public key must be {expected} bytes, got {}",
            bytes.len()
        )));
    }
    if bytes[0] != UNCOMPRESSED_POINT_TAG {
        return Err(HandshakeError::InvalidKey(
            "public key is not an uncompressed point".into(),
        ));
    }

    PublicKey::<C>::from_sec1_bytes(&bytes).map_err(|_| HandshakeError::InvalidPoint)
}
