// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! # g16-sdk
//!
//! String-in entry points for the **g16** Groth16 verifier: hand it a proof
//! and a verifying key as JSON documents, get back `Ok(())` or a typed
//! [`VerificationError`].
//!
//! ## Crate layout
//!
//! | Module | Purpose |
//! |---|---|
//! | *crate root* | `verify_json`, `verifier_from_json`, re-exported core types |
//! | [`serialize`] | JSON ↔ [`VerifyingKey`] / [`Proof`] |
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use g16_sdk::{verify_json, VerificationError};
//!
//! # fn example(proof_json: &str, vk_json: &str) {
//! match verify_json(proof_json, vk_json) {
//!     Ok(()) => println!("valid"),
//!     Err(e) if e.is_rejection() => println!("invalid proof: {e}"),
//!     Err(e) => println!("bad input: {e}"),
//! }
//! # }
//! ```
//!
//! For many proofs against one key, build the verifier once:
//!
//! ```rust,no_run
//! # fn example(vk_json: &str, proofs: &[g16_sdk::Proof]) -> Result<(), g16_sdk::VerificationError> {
//! let verifier = g16_sdk::verifier_from_json(vk_json, Default::default())?;
//! let verdicts = verifier.verify_batch(proofs);
//! # Ok(())
//! # }
//! ```

pub mod serialize;

pub use g16_core::{
    verify, verify_with_options, Groth16Verifier, PedersenVerifyingKey, PreparedVerifyingKey,
    Proof, VerificationError, VerificationResult, VerifierOptions, VerifyingKey,
};
pub use serialize::{parse_proof, parse_verifying_key, proof_to_json, verifying_key_to_json};

/// Verify a proof document against a verifying-key document.
pub fn verify_json(proof_json: &str, vk_json: &str) -> VerificationResult {
    verify_json_with_options(proof_json, vk_json, &VerifierOptions::default())
}

pub fn verify_json_with_options(
    proof_json: &str,
    vk_json: &str,
    options: &VerifierOptions,
) -> VerificationResult {
    let vk = parse_verifying_key(vk_json)?;
    let proof = parse_proof(proof_json)?;
    verify_with_options(&vk, &proof, options)
}

/// Parse and prepare a verifying key for repeated use.
pub fn verifier_from_json(
    vk_json: &str,
    options: VerifierOptions,
) -> VerificationResult<Groth16Verifier> {
    let vk = parse_verifying_key(vk_json)?;
    let verifier = Groth16Verifier::with_options(vk, options)?;
    tracing::info!(key = %verifier.prepared_key().digest_hex(), "verifier ready");
    Ok(verifier)
}
