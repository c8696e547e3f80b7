// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Pairing layer: bilinear map `e: G1 × G2 → GT` and product checks.
//!
//! A product check runs one multi-Miller loop over all pairs followed by a
//! single final exponentiation. The parallel variant splits the pairs into
//! two Miller loops on the rayon pool and multiplies the results before the
//! shared final exponentiation.

use ark_bls12_381::{Bls12_381, G1Affine, G2Affine};
use ark_ec::pairing::{MillerLoopOutput, Pairing, PairingOutput};
use ark_ff::One;

/// A G2 point with its line coefficients precomputed.
pub type G2Prepared = <Bls12_381 as Pairing>::G2Prepared;

/// Target group element.
pub type Gt = PairingOutput<Bls12_381>;

/// Below this many pairs the parallel check falls back to one Miller loop.
const PARALLEL_THRESHOLD: usize = 4;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PairingError {
    #[error("{g1} G1 points but {g2} G2 points")]
    LengthMismatch { g1: usize, g2: usize },

    #[error("Miller loop output has no final exponentiation")]
    DegenerateMillerLoop,
}

/// `e(p, q)`.
pub fn pairing(p: &G1Affine, q: &G2Affine) -> Gt {
    Bls12_381::pairing(*p, *q)
}

/// `∏ e(pᵢ, qᵢ)`.
pub fn multi_pairing(ps: &[G1Affine], qs: &[G2Prepared]) -> Result<Gt, PairingError> {
    check_lengths(ps, qs)?;
    let ml = Bls12_381::multi_miller_loop(ps.iter().copied(), qs.iter().cloned());
    Bls12_381::final_exponentiation(ml).ok_or(PairingError::DegenerateMillerLoop)
}

/// Whether `∏ e(pᵢ, qᵢ) = 1` in GT.
pub fn pairing_product_equals_identity(
    ps: &[G1Affine],
    qs: &[G2Prepared],
) -> Result<bool, PairingError> {
    Ok(multi_pairing(ps, qs)?.0.is_one())
}

/// [`pairing_product_equals_identity`] with the Miller loops split across
/// two rayon tasks.
pub fn pairing_product_equals_identity_par(
    ps: &[G1Affine],
    qs: &[G2Prepared],
) -> Result<bool, PairingError> {
    check_lengths(ps, qs)?;
    if ps.len() < PARALLEL_THRESHOLD {
        return pairing_product_equals_identity(ps, qs);
    }
    let mid = ps.len() / 2;
    let (left, right) = rayon::join(
        || Bls12_381::multi_miller_loop(ps[..mid].iter().copied(), qs[..mid].iter().cloned()),
        || Bls12_381::multi_miller_loop(ps[mid..].iter().copied(), qs[mid..].iter().cloned()),
    );
    let ml = MillerLoopOutput(left.0 * right.0);
    let out = Bls12_381::final_exponentiation(ml).ok_or(PairingError::DegenerateMillerLoop)?;
    Ok(out.0.is_one())
}

fn check_lengths(ps: &[G1Affine], qs: &[G2Prepared]) -> Result<(), PairingError> {
    if ps.len() != qs.len() {
        return Err(PairingError::LengthMismatch {
            g1: ps.len(),
            g2: qs.len(),
        });
    }
    Ok(())
}
