// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Fiat–Shamir transcript over SHA-256.
//!
//! Challenges are declared up front and computed in order. Challenge `k` is
//! `SHA-256(id_k ‖ value_{k-1} ‖ bindings_k…)`; the first one has no
//! previous value.

use sha2::{Digest, Sha256};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranscriptError {
    #[error("unknown challenge `{0}`")]
    UnknownChallenge(String),

    #[error("challenge `{0}` is already computed")]
    AlreadyComputed(String),

    #[error("challenge before `{0}` has not been computed")]
    PreviousNotComputed(String),
}

#[derive(Debug, Clone)]
struct Challenge {
    id: String,
    bindings: Vec<Vec<u8>>,
    value: Option<[u8; 32]>,
}

#[derive(Debug, Clone)]
pub struct Transcript {
    challenges: Vec<Challenge>,
}

impl Transcript {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            challenges: ids
                .into_iter()
                .map(|id| Challenge {
                    id: id.into(),
                    bindings: Vec::new(),
                    value: None,
                })
                .collect(),
        }
    }

    fn position(&self, id: &str) -> Result<usize, TranscriptError> {
        self.challenges
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| TranscriptError::UnknownChallenge(id.to_string()))
    }

    pub fn bind(&mut self, id: &str, binding: &[u8]) -> Result<(), TranscriptError> {
        let pos = self.position(id)?;
        let challenge = &mut self.challenges[pos];
        if challenge.value.is_some() {
            return Err(TranscriptError::AlreadyComputed(id.to_string()));
        }
        challenge.bindings.push(binding.to_vec());
        Ok(())
    }

    /// Compute (or return the cached) challenge `id`.
    pub fn compute_challenge(&mut self, id: &str) -> Result<[u8; 32], TranscriptError> {
        let pos = self.position(id)?;
        if let Some(value) = self.challenges[pos].value {
            return Ok(value);
        }

        let mut h = Sha256::new();
        h.update(id.as_bytes());
        if pos > 0 {
            let prev = self.challenges[pos - 1]
                .value
                .ok_or_else(|| TranscriptError::PreviousNotComputed(id.to_string()))?;
            h.update(prev);
        }
        for binding in &self.challenges[pos].bindings {
            h.update(binding);
        }

        let value: [u8; 32] = h.finalize().into();
        self.challenges[pos].value = Some(value);
        Ok(value)
    }
}
