// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Groth16 verifier over BLS12-381
//!
//! Algorithm:
//! 1. Shape checks (lengths, committed wire indices)
//! 2. On-curve and subgroup checks for key and proof points
//! 3. Commitment binding: hashes `hᵢ` and the batched proof of knowledge
//! 4. L = IC[0] + MSM(IC[1..], public_inputs ‖ hashes) + ΣCᵢ
//! 5. Check: e(A,B) * e(-L,gamma) * e(-C,delta) * e(-alpha,beta) == 1

use ark_ec::{CurveGroup, VariableBaseMSM};
use g16_curve::{
    pairing_product_equals_identity, pairing_product_equals_identity_par, Fr, G1Affine,
    G1Projective, G2Prepared,
};

use crate::commitment;
use crate::error::{VerificationError, VerificationResult};
use crate::options::VerifierOptions;
use crate::types::{check_shape, Proof, VerifyingKey};

/// A validated verifying key with its G2 operands prepared for pairing.
#[derive(Clone, Debug)]
pub struct PreparedVerifyingKey {
    vk: VerifyingKey,
    neg_alpha_g1: G1Affine,
    beta_g2: G2Prepared,
    gamma_g2: G2Prepared,
    delta_g2: G2Prepared,
    commitment_g: G2Prepared,
    commitment_g_root_sigma_neg: G2Prepared,
    digest: [u8; 32],
}

impl PreparedVerifyingKey {
    /// Validate every key point and prepare the pairing operands.
    pub fn new(vk: VerifyingKey) -> VerificationResult<Self> {
        vk.validate()?;
        Ok(Self {
            neg_alpha_g1: -vk.alpha_g1,
            beta_g2: vk.beta_g2.into(),
            gamma_g2: vk.gamma_g2.into(),
            delta_g2: vk.delta_g2.into(),
            commitment_g: vk.commitment_key.g.into(),
            commitment_g_root_sigma_neg: vk.commitment_key.g_root_sigma_neg.into(),
            digest: vk.digest(),
            vk,
        })
    }

    pub fn vk(&self) -> &VerifyingKey {
        &self.vk
    }

    pub fn digest(&self) -> &[u8; 32] {
        &self.digest
    }

    pub fn digest_hex(&self) -> String {
        hex::encode(self.digest)
    }
}

/// `L = IC[0] + Σ wᵢ·IC[i+1] + ΣCᵢ` with `w = public_inputs ‖ hashes`.
pub fn prepare_inputs(
    vk: &VerifyingKey,
    public_inputs: &[Fr],
    hashes: &[Fr],
    commitments: &[G1Affine],
) -> VerificationResult<G1Affine> {
    let (ic_0, ic_rest) = vk
        .gamma_abc_g1
        .split_first()
        .ok_or_else(|| VerificationError::malformed("gamma_abc_g1 is empty"))?;

    let scalars: Vec<Fr> = public_inputs.iter().chain(hashes).copied().collect();
    if scalars.len() != ic_rest.len() {
        return Err(VerificationError::malformed(format!(
            "{} scalars for {} input points",
            scalars.len(),
            ic_rest.len()
        )));
    }

    let mut l = G1Projective::msm(ic_rest, &scalars)
        .map_err(|_| VerificationError::malformed("input MSM length mismatch"))?;
    l += ic_0;
    for c in commitments {
        l += c;
    }
    Ok(l.into_affine())
}

/// Verify a proof against a prepared key.
#[tracing::instrument(
    skip_all,
    name = "Groth16Verifier::verify",
    fields(
        key = %pvk.digest_hex(),
        inputs = proof.public_inputs.len(),
        commitments = proof.commitments.len(),
    )
)]
pub fn verify_prepared(
    pvk: &PreparedVerifyingKey,
    proof: &Proof,
    options: &VerifierOptions,
) -> VerificationResult {
    let result = run_checks(pvk, proof, options);
    match &result {
        Ok(()) => tracing::debug!("proof accepted"),
        Err(e) if e.is_rejection() => tracing::debug!(error = %e, "proof rejected"),
        Err(e) => tracing::warn!(error = %e, "verification input invalid"),
    }
    result
}

fn run_checks(
    pvk: &PreparedVerifyingKey,
    proof: &Proof,
    options: &VerifierOptions,
) -> VerificationResult {
    let vk = &pvk.vk;

    // Step 1: shape
    check_shape(vk, proof)?;

    // Step 2: points (key points were checked in `PreparedVerifyingKey::new`)
    if options.validate_proof_points {
        proof.validate()?;
    }

    // Step 3: commitments
    let hashes = commitment::verify_commitments(
        &proof.commitments,
        &proof.commitment_pok,
        &vk.public_and_commitment_committed,
        &proof.public_inputs,
        (&pvk.commitment_g, &pvk.commitment_g_root_sigma_neg),
        &options.commitment_dst,
        options.parallel_pairings,
    )?;

    // Step 4: L
    let l = prepare_inputs(vk, &proof.public_inputs, &hashes, &proof.commitments)?;

    // Step 5: e(A,B) * e(-L,gamma) * e(-C,delta) * e(-alpha,beta) == 1
    let g1_points = [proof.pi_a, -l, -proof.pi_c, pvk.neg_alpha_g1];
    let g2_points = [
        G2Prepared::from(proof.pi_b),
        pvk.gamma_g2.clone(),
        pvk.delta_g2.clone(),
        pvk.beta_g2.clone(),
    ];
    let ok = if options.parallel_pairings {
        pairing_product_equals_identity_par(&g1_points, &g2_points)?
    } else {
        pairing_product_equals_identity(&g1_points, &g2_points)?
    };

    if ok {
        Ok(())
    } else {
        Err(VerificationError::PairingCheckFailed)
    }
}

/// Verify with default options.
pub fn verify(vk: &VerifyingKey, proof: &Proof) -> VerificationResult {
    verify_with_options(vk, proof, &VerifierOptions::default())
}

/// One-shot verification. Shape problems surface before the key is prepared.
pub fn verify_with_options(
    vk: &VerifyingKey,
    proof: &Proof,
    options: &VerifierOptions,
) -> VerificationResult {
    check_shape(vk, proof)?;
    let pvk = PreparedVerifyingKey::new(vk.clone())?;
    verify_prepared(&pvk, proof, options)
}

/// A prepared key bundled with its options, for verifying many proofs.
#[derive(Clone, Debug)]
pub struct Groth16Verifier {
    pvk: PreparedVerifyingKey,
    options: VerifierOptions,
}

impl Groth16Verifier {
    pub fn new(vk: VerifyingKey) -> VerificationResult<Self> {
        Self::with_options(vk, VerifierOptions::default())
    }

    pub fn with_options(vk: VerifyingKey, options: VerifierOptions) -> VerificationResult<Self> {
        Ok(Self {
            pvk: PreparedVerifyingKey::new(vk)?,
            options,
        })
    }

    pub fn prepared_key(&self) -> &PreparedVerifyingKey {
        &self.pvk
    }

    pub fn options(&self) -> &VerifierOptions {
        &self.options
    }

    pub fn verify(&self, proof: &Proof) -> VerificationResult {
        verify_prepared(&self.pvk, proof, &self.options)
    }

    pub fn verify_batch(&self, proofs: &[Proof]) -> Vec<VerificationResult> {
        crate::batch::verify_batch(&self.pvk, proofs, &self.options)
    }
}
