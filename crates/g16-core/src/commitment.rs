// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Pedersen commitment binding (BSB22).
//!
//! Each commitment `Cᵢ` is hashed together with the public inputs it binds
//! to give an extra public input `hᵢ`. The commitments carry one batched
//! proof of knowledge checked against the Pedersen verifying key:
//!
//! ```text
//! F = C₀                      (one commitment)
//! F = Σ ρⁱ·Cᵢ                 (several, ρ from a SHA-256 transcript over hᵢ)
//! e(F, G) · e(pok, GRootSigmaNeg) = 1
//! ```

use ark_ec::{CurveGroup, VariableBaseMSM};
use ark_ff::{Field, PrimeField};
use g16_curve::{
    field, pairing_product_equals_identity, pairing_product_equals_identity_par, Fr, G1Affine,
    G1Projective, G2Prepared, GnarkPoint,
};

use crate::error::{VerificationError, VerificationResult};
use crate::hash_to_field::HashToField;
use crate::transcript::Transcript;

/// Transcript challenge used to fold several commitments.
const FOLD_CHALLENGE: &str = "r";

/// `hᵢ` for one commitment: `hash_to_field(raw(C) ‖ be32(pub[j-1])…)`.
pub fn commitment_hash(
    commitment: &G1Affine,
    wires: &[u32],
    public_inputs: &[Fr],
    dst: &str,
) -> VerificationResult<Fr> {
    let mut h = HashToField::new(dst.as_bytes());
    h.write(&commitment.to_uncompressed());
    for &j in wires {
        let input = (j as usize)
            .checked_sub(1)
            .and_then(|k| public_inputs.get(k))
            .ok_or_else(|| VerificationError::malformed(format!("committed wire {j} out of range")))?;
        h.write(&field::to_be_bytes(input));
    }
    Ok(h.sum()?)
}

/// One hash per commitment, in order.
pub fn commitment_hashes(
    commitments: &[G1Affine],
    committed: &[Vec<u32>],
    public_inputs: &[Fr],
    dst: &str,
) -> VerificationResult<Vec<Fr>> {
    if commitments.len() != committed.len() {
        return Err(VerificationError::malformed(format!(
            "{} commitments for {} committed sets",
            commitments.len(),
            committed.len()
        )));
    }
    commitments
        .iter()
        .zip(committed)
        .map(|(c, wires)| commitment_hash(c, wires, public_inputs, dst))
        .collect()
}

/// Fold challenge `ρ` for more than one commitment.
pub fn fold_challenge(hashes: &[Fr]) -> VerificationResult<Fr> {
    let mut transcript = Transcript::new([FOLD_CHALLENGE]);
    for h in hashes {
        transcript.bind(FOLD_CHALLENGE, &field::to_be_bytes(h))?;
    }
    let rho = transcript.compute_challenge(FOLD_CHALLENGE)?;
    Ok(Fr::from_be_bytes_mod_order(&rho))
}

/// `F` from the module docs. Zero commitments fold to the identity.
pub fn fold_commitments(commitments: &[G1Affine], hashes: &[Fr]) -> VerificationResult<G1Affine> {
    match commitments {
        [] => Ok(G1Affine::identity()),
        [single] => Ok(*single),
        _ => {
            let rho = fold_challenge(hashes)?;
            let powers: Vec<Fr> = std::iter::successors(Some(Fr::ONE), |p| Some(*p * rho))
                .take(commitments.len())
                .collect();
            let folded = G1Projective::msm(commitments, &powers)
                .map_err(|_| VerificationError::malformed("commitment fold length mismatch"))?;
            Ok(folded.into_affine())
        }
    }
}

/// Pairing check for the batched proof of knowledge.
pub fn verify_knowledge(
    folded: &G1Affine,
    pok: &G1Affine,
    g: &G2Prepared,
    g_root_sigma_neg: &G2Prepared,
    parallel: bool,
) -> VerificationResult<bool> {
    let ps = [*folded, *pok];
    let qs = [g.clone(), g_root_sigma_neg.clone()];
    let ok = if parallel {
        pairing_product_equals_identity_par(&ps, &qs)?
    } else {
        pairing_product_equals_identity(&ps, &qs)?
    };
    Ok(ok)
}

/// Hash, fold and check every commitment in a proof.
///
/// Returns the commitment hashes to append to the public inputs. A failed
/// check carries the commitment index when there is only one.
pub fn verify_commitments(
    commitments: &[G1Affine],
    pok: &G1Affine,
    committed: &[Vec<u32>],
    public_inputs: &[Fr],
    key: (&G2Prepared, &G2Prepared),
    dst: &str,
    parallel: bool,
) -> VerificationResult<Vec<Fr>> {
    let hashes = commitment_hashes(commitments, committed, public_inputs, dst)?;
    if commitments.is_empty() {
        return Ok(hashes);
    }

    let folded = fold_commitments(commitments, &hashes)?;
    if !verify_knowledge(&folded, pok, key.0, key.1, parallel)? {
        let index = (commitments.len() == 1).then_some(0);
        return Err(VerificationError::CommitmentVerificationFailed { index });
    }
    Ok(hashes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::DEFAULT_COMMITMENT_DST;
    use ark_ec::AffineRepr;
    use g16_curve::G2Affine;

    fn g1(k: u64) -> G1Affine {
        (G1Affine::generator() * Fr::from(k)).into_affine()
    }

    /// `G = g2`, `GRootSigmaNeg = -(1/σ)·g2`; a valid pok for `C` is `σ·C`.
    fn key(sigma: Fr) -> (G2Prepared, G2Prepared) {
        let g = G2Affine::generator();
        let root = (g * -sigma.inverse().unwrap()).into_affine();
        (g.into(), root.into())
    }

    #[test]
    fn hash_binds_commitment_and_inputs() {
        let inputs = [Fr::from(5u64), Fr::from(6u64)];
        let base = commitment_hash(&g1(1), &[1], &inputs, DEFAULT_COMMITMENT_DST).unwrap();
        assert_ne!(
            base,
            commitment_hash(&g1(2), &[1], &inputs, DEFAULT_COMMITMENT_DST).unwrap()
        );
        assert_ne!(
            base,
            commitment_hash(&g1(1), &[2], &inputs, DEFAULT_COMMITMENT_DST).unwrap()
        );
        assert_ne!(base, commitment_hash(&g1(1), &[1], &inputs, "other").unwrap());
    }

    #[test]
    fn hash_rejects_wire_out_of_range() {
        let inputs = [Fr::from(1u64)];
        for j in [0, 2] {
            assert!(matches!(
                commitment_hash(&g1(1), &[j], &inputs, DEFAULT_COMMITMENT_DST),
                Err(VerificationError::MalformedInput(_))
            ));
        }
    }

    #[test]
    fn fold_of_one_is_identity_map() {
        let c = g1(9);
        assert_eq!(fold_commitments(&[c], &[Fr::from(1u64)]).unwrap(), c);
        assert!(fold_commitments(&[], &[]).unwrap().is_zero());
    }

    #[test]
    fn fold_of_two_uses_challenge_powers() {
        let cs = [g1(3), g1(4)];
        let hs = [Fr::from(10u64), Fr::from(11u64)];
        let rho = fold_challenge(&hs).unwrap();
        let want = (G1Affine::generator() * (Fr::from(3u64) + rho * Fr::from(4u64))).into_affine();
        assert_eq!(fold_commitments(&cs, &hs).unwrap(), want);
    }

    #[test]
    fn single_commitment_pok() {
        let sigma = Fr::from(1234u64);
        let (g, root) = key(sigma);
        let c = g1(77);
        let pok = (c * sigma).into_affine();
        let inputs = [Fr::from(8u64)];

        let hashes = verify_commitments(
            &[c],
            &pok,
            &[vec![1]],
            &inputs,
            (&g, &root),
            DEFAULT_COMMITMENT_DST,
            false,
        )
        .unwrap();
        assert_eq!(
            hashes,
            vec![commitment_hash(&c, &[1], &inputs, DEFAULT_COMMITMENT_DST).unwrap()]
        );

        let forged = (g1(78) * sigma).into_affine();
        assert_eq!(
            verify_commitments(
                &[c],
                &forged,
                &[vec![1]],
                &inputs,
                (&g, &root),
                DEFAULT_COMMITMENT_DST,
                true,
            ),
            Err(VerificationError::CommitmentVerificationFailed { index: Some(0) })
        );
    }

    #[test]
    fn batched_pok_over_two_commitments() {
        let sigma = Fr::from(99u64);
        let (g, root) = key(sigma);
        let cs = [g1(5), g1(6)];
        let inputs = [Fr::from(1u64), Fr::from(2u64)];
        let committed = [vec![1], vec![2]];

        let hashes = commitment_hashes(&cs, &committed, &inputs, DEFAULT_COMMITMENT_DST).unwrap();
        let folded = fold_commitments(&cs, &hashes).unwrap();
        let pok = (folded * sigma).into_affine();
        assert!(verify_commitments(
            &cs,
            &pok,
            &committed,
            &inputs,
            (&g, &root),
            DEFAULT_COMMITMENT_DST,
            false
        )
        .is_ok());

        // same commitments, different public inputs: ρ changes, pok no longer fits
        let other_inputs = [Fr::from(1u64), Fr::from(3u64)];
        assert_eq!(
            verify_commitments(
                &cs,
                &pok,
                &committed,
                &other_inputs,
                (&g, &root),
                DEFAULT_COMMITMENT_DST,
                false
            ),
            Err(VerificationError::CommitmentVerificationFailed { index: None })
        );
    }

    #[test]
    fn no_commitments_skips_pairing() {
        let (g, root) = key(Fr::from(2u64));
        let hashes = verify_commitments(
            &[],
            &g1(1),
            &[],
            &[],
            (&g, &root),
            DEFAULT_COMMITMENT_DST,
            false,
        )
        .unwrap();
        assert!(hashes.is_empty());
    }
}
