// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Independent proofs against one key, verified on the rayon pool.

use rayon::prelude::*;

use crate::error::VerificationResult;
use crate::options::VerifierOptions;
use crate::types::Proof;
use crate::verifier::{verify_prepared, PreparedVerifyingKey};

/// One verdict per proof, in input order.
#[tracing::instrument(skip_all, name = "verify_batch", fields(proofs = proofs.len()))]
pub fn verify_batch(
    pvk: &PreparedVerifyingKey,
    proofs: &[Proof],
    options: &VerifierOptions,
) -> Vec<VerificationResult> {
    let results: Vec<VerificationResult> = proofs
        .par_iter()
        .map(|proof| verify_prepared(pvk, proof, options))
        .collect();
    let accepted = results.iter().filter(|r| r.is_ok()).count();
    tracing::debug!(accepted, rejected = results.len() - accepted, "batch done");
    results
}
