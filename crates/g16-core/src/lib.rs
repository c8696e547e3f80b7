// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! g16-core: Groth16 verifier with Pedersen input commitments over BLS12-381

pub mod batch;
pub mod commitment;
pub mod error;
pub mod hash_to_field;
pub mod options;
pub mod transcript;
mod types;
mod verifier;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

pub use batch::verify_batch;
pub use error::{VerificationError, VerificationResult};
pub use options::{VerifierOptions, DEFAULT_COMMITMENT_DST};
pub use types::*;
pub use verifier::*;
