// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Group layer: point validation and gnark-compatible encodings for G1 and G2.
//!
//! # Encoding
//!
//! The top three bits of the first byte carry the form of the point:
//!
//! | Flag  | Meaning                                   | G1 bytes | G2 bytes |
//! |-------|-------------------------------------------|----------|----------|
//! | `000` | uncompressed `x ‖ y`                      | 96       | 192      |
//! | `010` | uncompressed point at infinity            | 96       | 192      |
//! | `100` | compressed `x`, lexicographically smaller `y` | 48   | 96       |
//! | `101` | compressed `x`, lexicographically larger `y`  | 48   | 96       |
//! | `110` | compressed point at infinity              | 48       | 96       |
//!
//! Byte layout and flags are the zcash format that `ark-serialize` implements
//! for BLS12-381, so encoding and decoding go through arkworks. This module
//! only reads the flag to pick the form and length, and reports failures as
//! [`PointError`].
//!
//! Every decoded point is checked against the curve equation and the
//! prime-order subgroup. The arkworks decoder is run with `Validate::No`
//! because its BLS12-381 check skips the curve equation for uncompressed
//! input; [`GnarkPoint::validate`] does both checks.

use ark_ec::short_weierstrass::{Affine, SWCurveConfig};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize, Compress, SerializationError, Validate};

use crate::field::FQ_BYTES;

pub use ark_bls12_381::{G1Affine, G1Projective, G2Affine, G2Projective};

const FLAG_MASK: u8 = 0b111 << 5;
const FLAG_UNCOMPRESSED: u8 = 0b000 << 5;
const FLAG_UNCOMPRESSED_INFINITY: u8 = 0b010 << 5;
const FLAG_COMPRESSED_SMALLEST: u8 = 0b100 << 5;
const FLAG_COMPRESSED_LARGEST: u8 = 0b101 << 5;
const FLAG_COMPRESSED_INFINITY: u8 = 0b110 << 5;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PointError {
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("expected {expected} bytes, got {got}")]
    Length { expected: usize, got: usize },

    #[error("unknown encoding flag {0:#04x}")]
    InvalidFlag(u8),

    #[error("point at infinity has a non-zero payload")]
    NonZeroInfinity,

    /// A coordinate is not below the modulus, or a compressed `x` has no `y`.
    #[error("invalid coordinate encoding")]
    InvalidCoordinate,

    #[error("point codec: {0}")]
    Codec(String),

    #[error("point is not on the curve")]
    NotOnCurve,

    #[error("point is not in the prime-order subgroup")]
    NotInSubgroup,
}

impl From<SerializationError> for PointError {
    fn from(e: SerializationError) -> Self {
        match e {
            SerializationError::InvalidData => PointError::InvalidCoordinate,
            other => PointError::Codec(other.to_string()),
        }
    }
}

/// Curves whose points travel in the gnark encoding.
pub trait GnarkCurve: SWCurveConfig {
    /// Width of one encoded coordinate.
    const COORDINATE_LEN: usize;
}

impl GnarkCurve for ark_bls12_381::g1::Config {
    const COORDINATE_LEN: usize = FQ_BYTES;
}

impl GnarkCurve for ark_bls12_381::g2::Config {
    const COORDINATE_LEN: usize = 2 * FQ_BYTES;
}

/// gnark-compatible codec and validation for an affine curve point.
pub trait GnarkPoint: Sized {
    const UNCOMPRESSED_LEN: usize;
    const COMPRESSED_LEN: usize;

    /// Raw form: `x ‖ y`, flags `000`, or `010` for infinity.
    fn to_uncompressed(&self) -> Vec<u8>;

    /// Compressed form: `x` with the sign of `y` in the flags.
    fn to_compressed(&self) -> Vec<u8>;

    /// Decode one point from the front of `bytes`, returning it with the
    /// number of bytes consumed. The form is taken from the flag bits.
    fn read_gnark(bytes: &[u8]) -> Result<(Self, usize), PointError>;

    /// On-curve and subgroup check.
    fn validate(&self) -> Result<(), PointError>;

    /// Decode a buffer holding exactly one point.
    fn from_gnark_bytes(bytes: &[u8]) -> Result<Self, PointError> {
        let (point, used) = Self::read_gnark(bytes)?;
        if used != bytes.len() {
            return Err(PointError::Length {
                expected: used,
                got: bytes.len(),
            });
        }
        Ok(point)
    }
}

impl<P: GnarkCurve> GnarkPoint for Affine<P> {
    const UNCOMPRESSED_LEN: usize = 2 * P::COORDINATE_LEN;
    const COMPRESSED_LEN: usize = P::COORDINATE_LEN;

    fn to_uncompressed(&self) -> Vec<u8> {
        encode(self, Compress::No, Self::UNCOMPRESSED_LEN)
    }

    fn to_compressed(&self) -> Vec<u8> {
        encode(self, Compress::Yes, Self::COMPRESSED_LEN)
    }

    fn read_gnark(bytes: &[u8]) -> Result<(Self, usize), PointError> {
        let first = *bytes.first().ok_or(PointError::Length {
            expected: Self::COMPRESSED_LEN,
            got: 0,
        })?;
        let flag = first & FLAG_MASK;
        let (compress, len) = match flag {
            FLAG_UNCOMPRESSED | FLAG_UNCOMPRESSED_INFINITY => (Compress::No, Self::UNCOMPRESSED_LEN),
            FLAG_COMPRESSED_SMALLEST | FLAG_COMPRESSED_LARGEST | FLAG_COMPRESSED_INFINITY => {
                (Compress::Yes, Self::COMPRESSED_LEN)
            }
            other => return Err(PointError::InvalidFlag(other)),
        };
        if bytes.len() < len {
            return Err(PointError::Length {
                expected: len,
                got: bytes.len(),
            });
        }
        let buf = &bytes[..len];
        let infinity = flag == FLAG_UNCOMPRESSED_INFINITY || flag == FLAG_COMPRESSED_INFINITY;
        if infinity && (buf[0] & !FLAG_MASK != 0 || buf[1..].iter().any(|b| *b != 0)) {
            return Err(PointError::NonZeroInfinity);
        }
        let point = Self::deserialize_with_mode(buf, compress, Validate::No)?;
        point.validate()?;
        Ok((point, len))
    }

    fn validate(&self) -> Result<(), PointError> {
        if self.infinity {
            return Ok(());
        }
        if !self.is_on_curve() {
            return Err(PointError::NotOnCurve);
        }
        if !self.is_in_correct_subgroup_assuming_on_curve() {
            return Err(PointError::NotInSubgroup);
        }
        Ok(())
    }
}

fn encode<P: GnarkCurve>(point: &Affine<P>, compress: Compress, len: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(len);
    point
        .serialize_with_mode(&mut out, compress)
        .expect("serializing into a Vec cannot fail");
    out
}

/// Decode a single point from hex.
pub fn point_from_hex<T: GnarkPoint>(s: &str) -> Result<T, PointError> {
    let bytes = hex::decode(s)?;
    T::from_gnark_bytes(&bytes)
}

/// Uncompressed lowercase hex of a point.
pub fn point_to_hex<T: GnarkPoint>(point: &T) -> String {
    hex::encode(point.to_uncompressed())
}
