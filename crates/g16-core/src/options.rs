// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Verifier configuration.
//!
//! ```
//! use g16_core::VerifierOptions;
//!
//! let opts = VerifierOptions::from_json(r#"{"parallel_pairings": false}"#).unwrap();
//! assert_eq!(opts.commitment_dst, "bsb22-commitment");
//! assert!(!opts.parallel_pairings);
//! ```

use serde::{Deserialize, Serialize};

/// Domain separation tag for hashing commitments into public inputs.
pub const DEFAULT_COMMITMENT_DST: &str = "bsb22-commitment";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifierOptions {
    /// DST fed to `expand_message_xmd` when deriving commitment hashes.
    pub commitment_dst: String,
    /// Split Miller loops across the rayon pool.
    pub parallel_pairings: bool,
    /// Run on-curve and subgroup checks on proof points before pairing.
    /// Only turn off for proofs whose points came through the checked decoder.
    pub validate_proof_points: bool,
}

impl Default for VerifierOptions {
    fn default() -> Self {
        Self {
            commitment_dst: DEFAULT_COMMITMENT_DST.to_string(),
            parallel_pairings: true,
            validate_proof_points: true,
        }
    }
}

impl VerifierOptions {
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    pub fn to_json(&self) -> String {
        // a struct of strings and bools always serializes
        serde_json::to_string(self).unwrap_or_default()
    }
}
