// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Trapdoor setup for tests: a verifying key whose discrete logs are known,
//! so proofs for any statement (with commitments) can be simulated without a
//! circuit.
//!
//! Enabled with the `testutils` feature.

use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::{Field, Zero};
use ark_std::rand::Rng;
use ark_std::UniformRand;
use g16_curve::{Fr, G1Affine, G2Affine};

use crate::commitment;
use crate::options::DEFAULT_COMMITMENT_DST;
use crate::types::{PedersenVerifyingKey, Proof, VerifyingKey};

/// Largest number of private values one commitment can hold.
pub const MAX_COMMITTED_VALUES: usize = 8;

pub struct TrapdoorSetup {
    alpha: Fr,
    beta: Fr,
    gamma: Fr,
    delta: Fr,
    /// Discrete logs of `gamma_abc_g1`.
    ic: Vec<Fr>,
    /// Pedersen `G = g·g2`.
    g: Fr,
    sigma: Fr,
    /// Pedersen basis (last entry is the blinding base).
    basis: Vec<Fr>,
    n_public: usize,
    committed: Vec<Vec<u32>>,
    dst: String,
}

fn nonzero<R: Rng + ?Sized>(rng: &mut R) -> Fr {
    loop {
        let x = Fr::rand(rng);
        if !x.is_zero() {
            return x;
        }
    }
}

fn g1(k: Fr) -> G1Affine {
    (G1Affine::generator() * k).into_affine()
}

fn g2(k: Fr) -> G2Affine {
    (G2Affine::generator() * k).into_affine()
}

impl TrapdoorSetup {
    /// `committed[i]` lists the 1-based public wires commitment `i` binds.
    pub fn new<R: Rng + ?Sized>(n_public: usize, committed: Vec<Vec<u32>>, rng: &mut R) -> Self {
        let m = committed.len();
        Self {
            alpha: nonzero(rng),
            beta: nonzero(rng),
            gamma: nonzero(rng),
            delta: nonzero(rng),
            ic: (0..n_public + 1 + m).map(|_| Fr::rand(rng)).collect(),
            g: nonzero(rng),
            sigma: nonzero(rng),
            basis: (0..=MAX_COMMITTED_VALUES).map(|_| nonzero(rng)).collect(),
            n_public,
            committed,
            dst: DEFAULT_COMMITMENT_DST.to_string(),
        }
    }

    /// Hash commitments under a different domain separation tag.
    pub fn with_dst(mut self, dst: &str) -> Self {
        self.dst = dst.to_string();
        self
    }

    pub fn verifying_key(&self) -> VerifyingKey {
        let sigma_inv = self.sigma.inverse().unwrap_or_default();
        VerifyingKey {
            alpha_g1: g1(self.alpha),
            beta_g2: g2(self.beta),
            gamma_g2: g2(self.gamma),
            delta_g2: g2(self.delta),
            gamma_abc_g1: self.ic.iter().map(|k| g1(*k)).collect(),
            commitment_key: PedersenVerifyingKey {
                g: g2(self.g),
                g_root_sigma_neg: g2(-(self.g * sigma_inv)),
            },
            public_and_commitment_committed: self.committed.clone(),
        }
    }

    /// Discrete log of a blinded Pedersen commitment to `values`.
    fn commit<R: Rng + ?Sized>(&self, values: &[Fr], rng: &mut R) -> Fr {
        assert!(values.len() <= MAX_COMMITTED_VALUES, "too many committed values");
        let blinding = Fr::rand(rng) * self.basis[MAX_COMMITTED_VALUES];
        values
            .iter()
            .zip(&self.basis)
            .fold(blinding, |acc, (v, b)| acc + *v * b)
    }

    /// Simulate an honest proof for `public_inputs`, committing to
    /// `committed_values[i]` in commitment `i`.
    pub fn prove<R: Rng + ?Sized>(
        &self,
        public_inputs: &[Fr],
        committed_values: &[Vec<Fr>],
        rng: &mut R,
    ) -> Proof {
        assert_eq!(public_inputs.len(), self.n_public, "public input count");
        assert_eq!(committed_values.len(), self.committed.len(), "commitment count");

        let dlogs: Vec<Fr> = committed_values
            .iter()
            .map(|values| self.commit(values, rng))
            .collect();
        let commitments: Vec<G1Affine> = dlogs.iter().map(|c| g1(*c)).collect();
        let hashes = commitment::commitment_hashes(
            &commitments,
            &self.committed,
            public_inputs,
            &self.dst,
        )
        .expect("committed wires are in range");
        let folded = commitment::fold_commitments(&commitments, &hashes)
            .expect("one hash per commitment");
        let commitment_pok = (folded * self.sigma).into_affine();

        // x = dlog(L)
        let x = public_inputs
            .iter()
            .chain(&hashes)
            .zip(&self.ic[1..])
            .fold(self.ic[0], |acc, (w, k)| acc + *w * k)
            + dlogs.iter().sum::<Fr>();

        let a = nonzero(rng);
        let b = nonzero(rng);
        let delta_inv = self.delta.inverse().unwrap_or_default();
        let c = (a * b - self.alpha * self.beta - x * self.gamma) * delta_inv;

        Proof {
            pi_a: g1(a),
            pi_b: g2(b),
            pi_c: g1(c),
            commitments,
            commitment_pok,
            public_inputs: public_inputs.to_vec(),
        }
    }
}
