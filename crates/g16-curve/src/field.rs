// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Field arithmetic layer for BLS12-381.
//!
//! Arithmetic (add, sub, mul, neg, square root) is provided by the arkworks
//! field types re-exported here. This module pins down the byte formats the
//! verifier accepts and rejects anything that is not a canonical encoding.
//!
//! # Byte order
//!
//! - **`Fq` / `Fr`**: fixed-width big-endian, 48 and 32 bytes.
//! - **`Fq2`**: `c1 ‖ c0`, each a 48-byte `Fq` (inside point encodings).
//!
//! Hex strings are lowercase on output, no `0x` prefix. Decoding accepts
//! either case.

use ark_ff::{BigInteger, Field, PrimeField};

pub use ark_bls12_381::{Fq, Fq2, Fr};

/// Encoded size of a base-field element.
pub const FQ_BYTES: usize = 48;

/// Encoded size of a scalar-field element.
pub const FR_BYTES: usize = 32;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("expected {expected} bytes, got {got}")]
    Length { expected: usize, got: usize },

    #[error("value is not below the field modulus")]
    NonCanonical,

    #[error("zero has no inverse")]
    NotInvertible,
}

/// Decode a fixed-width big-endian element, rejecting values `>= modulus`.
pub fn from_be_bytes<F: PrimeField>(bytes: &[u8]) -> Result<F, FieldError> {
    let modulus = F::MODULUS.to_bytes_be();
    if bytes.len() != modulus.len() {
        return Err(FieldError::Length {
            expected: modulus.len(),
            got: bytes.len(),
        });
    }
    // equal-length big-endian byte strings compare like the integers they encode
    if bytes >= modulus.as_slice() {
        return Err(FieldError::NonCanonical);
    }
    Ok(F::from_be_bytes_mod_order(bytes))
}

/// Fixed-width big-endian encoding of a prime-field element.
pub fn to_be_bytes<F: PrimeField>(x: &F) -> Vec<u8> {
    x.into_bigint().to_bytes_be()
}

/// Decode an `Fr` from 64 hex chars (big-endian).
pub fn fr_from_hex(s: &str) -> Result<Fr, FieldError> {
    let bytes = hex::decode(s)?;
    from_be_bytes(&bytes)
}

/// Encode an `Fr` as 64 lowercase hex chars (big-endian).
pub fn fr_to_hex(x: &Fr) -> String {
    hex::encode(to_be_bytes(x))
}

/// Multiplicative inverse; only zero fails.
pub fn inverse<F: Field>(x: &F) -> Result<F, FieldError> {
    x.inverse().ok_or(FieldError::NotInvertible)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ff::{One, UniformRand, Zero};
    use ark_std::rand::{rngs::StdRng, SeedableRng};

    const FR_MODULUS_HEX: &str =
        "73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001";

    #[test]
    fn fr_hex_roundtrip() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10 {
            let x = Fr::rand(&mut rng);
            let hex = fr_to_hex(&x);
            assert_eq!(hex.len(), 64);
            assert_eq!(fr_from_hex(&hex).unwrap(), x);
        }
    }

    #[test]
    fn fr_hex_is_lowercase_fixed_width() {
        let hex = fr_to_hex(&Fr::from(0xabu64));
        assert_eq!(
            hex,
            "00000000000000000000000000000000000000000000000000000000000000ab"
        );
        assert_eq!(fr_from_hex(&hex.to_uppercase()).unwrap(), Fr::from(0xabu64));
    }

    #[test]
    fn modulus_is_rejected() {
        assert_eq!(fr_from_hex(FR_MODULUS_HEX), Err(FieldError::NonCanonical));
        assert_eq!(
            fr_from_hex(&"ff".repeat(32)),
            Err(FieldError::NonCanonical)
        );
    }

    #[test]
    fn modulus_minus_one_is_accepted() {
        let hex = format!("{}0", &FR_MODULUS_HEX[..63]);
        assert_eq!(fr_from_hex(&hex).unwrap(), -Fr::one());
    }

    #[test]
    fn wrong_width_is_rejected() {
        assert_eq!(
            fr_from_hex("01"),
            Err(FieldError::Length {
                expected: 32,
                got: 1
            })
        );
        assert!(matches!(fr_from_hex("0x01"), Err(FieldError::Hex(_))));
        assert!(matches!(fr_from_hex("abc"), Err(FieldError::Hex(_))));
    }

    #[test]
    fn inverse_of_zero_fails() {
        assert_eq!(inverse(&Fr::zero()), Err(FieldError::NotInvertible));
        assert_eq!(inverse(&Fq::zero()), Err(FieldError::NotInvertible));
    }

    #[test]
    fn inverse_times_self_is_one() {
        let mut rng = StdRng::seed_from_u64(7);
        let x = Fq2::rand(&mut rng);
        assert_eq!(inverse(&x).unwrap() * x, Fq2::one());
    }
}
