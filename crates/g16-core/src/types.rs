// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Verifying key and proof for Groth16 with Pedersen input commitments.
//!
//! Both are plain immutable values. Points held here have been through the
//! checked decoder or come from arkworks; the verifier re-validates them
//! before any pairing.

use ark_bls12_381::Bls12_381;
use g16_curve::{field, Fr, G1Affine, G2Affine, GnarkPoint};
use sha2::{Digest, Sha256};

use crate::error::{VerificationError, VerificationResult};

/// Pedersen verifying key: `G` and `-(1/σ)·G`, both in G2.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PedersenVerifyingKey {
    pub g: G2Affine,
    pub g_root_sigma_neg: G2Affine,
}

impl PedersenVerifyingKey {
    /// `G ‖ GRootSigmaNeg`, uncompressed.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = self.g.to_uncompressed();
        out.extend(self.g_root_sigma_neg.to_uncompressed());
        out
    }

    /// Two G2 points, each compressed or uncompressed as its flags say.
    /// The buffer must be consumed exactly.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, g16_curve::PointError> {
        let (g, used) = G2Affine::read_gnark(bytes)?;
        let rest = &bytes[used..];
        let g_root_sigma_neg = G2Affine::from_gnark_bytes(rest)?;
        Ok(Self {
            g,
            g_root_sigma_neg,
        })
    }
}

impl Default for PedersenVerifyingKey {
    /// The key of a circuit without commitments: both points at infinity.
    fn default() -> Self {
        Self {
            g: G2Affine::identity(),
            g_root_sigma_neg: G2Affine::identity(),
        }
    }
}

/// Groth16 verifying key over BLS12-381
///
/// `gamma_abc_g1[0]` is the constant term, then one point per public input,
/// then one per commitment (the coefficient of its hash).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifyingKey {
    pub alpha_g1: G1Affine,
    pub beta_g2: G2Affine,
    pub gamma_g2: G2Affine,
    pub delta_g2: G2Affine,
    pub gamma_abc_g1: Vec<G1Affine>,
    pub commitment_key: PedersenVerifyingKey,
    /// Per commitment, the 1-based public wires it binds.
    pub public_and_commitment_committed: Vec<Vec<u32>>,
}

impl VerifyingKey {
    pub fn num_commitments(&self) -> usize {
        self.public_and_commitment_committed.len()
    }

    /// Public inputs the key expects from the prover (excludes commitment hashes).
    pub fn num_public_inputs(&self) -> Option<usize> {
        self.gamma_abc_g1
            .len()
            .checked_sub(1 + self.num_commitments())
    }

    /// On-curve and subgroup check for every key point.
    pub fn validate(&self) -> VerificationResult {
        if self.gamma_abc_g1.is_empty() {
            return Err(VerificationError::malformed("gamma_abc_g1 is empty"));
        }
        check_point(&self.alpha_g1, "alpha_g1")?;
        check_point(&self.beta_g2, "beta_g2")?;
        check_point(&self.gamma_g2, "gamma_g2")?;
        check_point(&self.delta_g2, "delta_g2")?;
        for (i, p) in self.gamma_abc_g1.iter().enumerate() {
            check_point(p, &format!("gamma_abc_g1[{i}]"))?;
        }
        if self.num_commitments() > 0 {
            check_point(&self.commitment_key.g, "CommitmentKey.G")?;
            check_point(
                &self.commitment_key.g_root_sigma_neg,
                "CommitmentKey.GRootSigmaNeg",
            )?;
        }
        Ok(())
    }

    /// SHA-256 over every key point (uncompressed), the Pedersen key and the
    /// committed-wire table.
    pub fn digest(&self) -> [u8; 32] {
        let mut h = Sha256::new();
        h.update(self.alpha_g1.to_uncompressed());
        h.update(self.beta_g2.to_uncompressed());
        h.update(self.gamma_g2.to_uncompressed());
        h.update(self.delta_g2.to_uncompressed());
        h.update((self.gamma_abc_g1.len() as u32).to_be_bytes());
        for p in &self.gamma_abc_g1 {
            h.update(p.to_uncompressed());
        }
        h.update(self.commitment_key.to_bytes());
        h.update((self.public_and_commitment_committed.len() as u32).to_be_bytes());
        for wires in &self.public_and_commitment_committed {
            h.update((wires.len() as u32).to_be_bytes());
            for w in wires {
                h.update(w.to_be_bytes());
            }
        }
        h.finalize().into()
    }
}

impl From<&ark_groth16::VerifyingKey<Bls12_381>> for VerifyingKey {
    fn from(vk: &ark_groth16::VerifyingKey<Bls12_381>) -> Self {
        Self {
            alpha_g1: vk.alpha_g1,
            beta_g2: vk.beta_g2,
            gamma_g2: vk.gamma_g2,
            delta_g2: vk.delta_g2,
            gamma_abc_g1: vk.gamma_abc_g1.clone(),
            commitment_key: PedersenVerifyingKey::default(),
            public_and_commitment_committed: Vec::new(),
        }
    }
}

/// Groth16 proof with its public inputs and commitments
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Proof {
    pub pi_a: G1Affine,
    pub pi_b: G2Affine,
    pub pi_c: G1Affine,
    pub commitments: Vec<G1Affine>,
    /// Batched proof of knowledge for all commitments.
    pub commitment_pok: G1Affine,
    pub public_inputs: Vec<Fr>,
}

impl Proof {
    /// Wrap an arkworks proof (no commitments).
    pub fn from_arkworks(proof: &ark_groth16::Proof<Bls12_381>, public_inputs: &[Fr]) -> Self {
        Self {
            pi_a: proof.a,
            pi_b: proof.b,
            pi_c: proof.c,
            commitments: Vec::new(),
            commitment_pok: G1Affine::identity(),
            public_inputs: public_inputs.to_vec(),
        }
    }

    /// On-curve and subgroup check for every proof point.
    pub fn validate(&self) -> VerificationResult {
        check_point(&self.pi_a, "pi_a")?;
        check_point(&self.pi_b, "pi_b")?;
        check_point(&self.pi_c, "pi_c")?;
        for (i, c) in self.commitments.iter().enumerate() {
            check_point(c, &format!("Commitments[{i}]"))?;
        }
        check_point(&self.commitment_pok, "CommitmentPok")
    }

    /// Public inputs as big-endian hex, in order.
    pub fn public_inputs_hex(&self) -> Vec<String> {
        self.public_inputs.iter().map(field::fr_to_hex).collect()
    }
}

fn check_point<P: GnarkPoint>(p: &P, element: &str) -> VerificationResult {
    p.validate()
        .map_err(|source| VerificationError::InvalidEncoding {
            element: element.to_string(),
            source,
        })
}

/// Shape rules, checked before any cryptography.
///
/// With `n` public inputs and `m` commitment slots:
/// `|gamma_abc_g1| = n + 1 + m`, `|commitments| = m`, and every committed
/// wire lies in `1..=n`.
pub fn check_shape(vk: &VerifyingKey, proof: &Proof) -> VerificationResult {
    let n = proof.public_inputs.len();
    let m = vk.num_commitments();

    if vk.gamma_abc_g1.is_empty() {
        return Err(VerificationError::malformed("gamma_abc_g1 is empty"));
    }
    if vk.gamma_abc_g1.len() != n + 1 + m {
        return Err(VerificationError::malformed(format!(
            "gamma_abc_g1 has {} points, expected {} ({n} public inputs + 1 + {m} commitments)",
            vk.gamma_abc_g1.len(),
            n + 1 + m,
        )));
    }
    if proof.commitments.len() != m {
        return Err(VerificationError::malformed(format!(
            "proof has {} commitments, key declares {m}",
            proof.commitments.len()
        )));
    }
    for (i, wires) in vk.public_and_commitment_committed.iter().enumerate() {
        if let Some(bad) = wires.iter().find(|&&j| j == 0 || j as usize > n) {
            return Err(VerificationError::malformed(format!(
                "commitment {i} binds wire {bad}, valid wires are 1..={n}"
            )));
        }
    }
    Ok(())
}
