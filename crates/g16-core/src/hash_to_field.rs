// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Hashing arbitrary bytes into `Fr` (RFC 9380 §5, `expand_message_xmd` with
//! SHA-256).
//!
//! Each field element consumes `L = 48` uniform bytes (`ceil((255 + 128) / 8)`),
//! read big-endian and reduced mod `r`.
//!
//! `ark_ff::field_hashers::DefaultFieldHasher` is not a substitute: in ark-ff
//! 0.5 its `b0` prefix is `L` zero bytes instead of the 64-byte SHA-256 block,
//! so its output matches neither RFC 9380 nor gnark.

use ark_ff::PrimeField;
use g16_curve::Fr;
use sha2::{Digest, Sha256};

/// SHA-256 output size (`b_in_bytes`).
const B_IN_BYTES: usize = 32;
/// SHA-256 block size (`s_in_bytes`).
const S_IN_BYTES: usize = 64;
/// Uniform bytes per `Fr` element.
pub const L: usize = 48;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashToFieldError {
    #[error("domain separation tag must not be empty")]
    EmptyDst,

    #[error("domain separation tag is {0} bytes, at most 255 allowed")]
    DstTooLong(usize),

    #[error("cannot expand to {0} bytes")]
    OutputTooLong(usize),
}

/// `expand_message_xmd(msg, dst, len_in_bytes)` with SHA-256.
pub fn expand_message_xmd(
    msg: &[u8],
    dst: &[u8],
    len_in_bytes: usize,
) -> Result<Vec<u8>, HashToFieldError> {
    if dst.is_empty() {
        return Err(HashToFieldError::EmptyDst);
    }
    if dst.len() > 255 {
        return Err(HashToFieldError::DstTooLong(dst.len()));
    }
    let ell = len_in_bytes.div_ceil(B_IN_BYTES);
    if ell > 255 || len_in_bytes > u16::MAX as usize {
        return Err(HashToFieldError::OutputTooLong(len_in_bytes));
    }

    let dst_len = [dst.len() as u8];

    let b0 = Sha256::new()
        .chain_update([0u8; S_IN_BYTES])
        .chain_update(msg)
        .chain_update((len_in_bytes as u16).to_be_bytes())
        .chain_update([0u8])
        .chain_update(dst)
        .chain_update(dst_len)
        .finalize();

    let mut out = Vec::with_capacity(ell * B_IN_BYTES);
    let mut prev = Sha256::new()
        .chain_update(b0)
        .chain_update([1u8])
        .chain_update(dst)
        .chain_update(dst_len)
        .finalize();
    out.extend_from_slice(&prev);

    for i in 2..=ell {
        let mut mixed = [0u8; B_IN_BYTES];
        for (m, (a, b)) in mixed.iter_mut().zip(b0.iter().zip(prev.iter())) {
            *m = a ^ b;
        }
        prev = Sha256::new()
            .chain_update(mixed)
            .chain_update([i as u8])
            .chain_update(dst)
            .chain_update(dst_len)
            .finalize();
        out.extend_from_slice(&prev);
    }

    out.truncate(len_in_bytes);
    Ok(out)
}

/// `hash_to_field(msg, count)` over `Fr`.
pub fn hash_to_field(msg: &[u8], dst: &[u8], count: usize) -> Result<Vec<Fr>, HashToFieldError> {
    let uniform = expand_message_xmd(msg, dst, count * L)?;
    Ok(uniform
        .chunks_exact(L)
        .map(Fr::from_be_bytes_mod_order)
        .collect())
}

/// Streaming front end: write the message in pieces, then `sum` to a
/// single field element.
#[derive(Debug, Clone)]
pub struct HashToField {
    dst: Vec<u8>,
    buf: Vec<u8>,
}

impl HashToField {
    pub fn new(dst: impl Into<Vec<u8>>) -> Self {
        Self {
            dst: dst.into(),
            buf: Vec::new(),
        }
    }

    pub fn write(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    pub fn sum(&self) -> Result<Fr, HashToFieldError> {
        let mut out = hash_to_field(&self.buf, &self.dst, 1)?;
        // count = 1 always yields exactly one element
        out.pop().ok_or(HashToFieldError::OutputTooLong(L))
    }

    pub fn reset(&mut self) {
        self.buf.clear();
    }
}
