// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Typed failures for parsing and verification.
//!
//! Only [`VerificationError::CommitmentVerificationFailed`] and
//! [`VerificationError::PairingCheckFailed`] mean "the proof is invalid".
//! Everything else is a problem with the inputs themselves.

use g16_curve::{FieldError, PairingError, PointError};

use crate::hash_to_field::HashToFieldError;
use crate::transcript::TranscriptError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VerificationError {
    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("missing field `{0}`")]
    MissingField(String),

    #[error("`{field}`: expected {expected}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
    },

    #[error("`{field}`: {source}")]
    FieldDecode { field: String, source: FieldError },

    #[error("`{field}`: {source}")]
    PointDecode { field: String, source: PointError },

    #[error("invalid {element}: {source}")]
    InvalidEncoding { element: String, source: PointError },

    #[error("commitment proof of knowledge rejected{}", fmt_index(.index))]
    CommitmentVerificationFailed { index: Option<usize> },

    #[error("pairing check failed")]
    PairingCheckFailed,
}

fn fmt_index(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!(" (commitment {i})"),
        None => String::new(),
    }
}

impl VerificationError {
    /// Whether this is a verdict on a well-formed proof rather than an
    /// input or configuration problem.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::CommitmentVerificationFailed { .. } | Self::PairingCheckFailed
        )
    }

    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedInput(msg.into())
    }
}

impl From<PairingError> for VerificationError {
    fn from(e: PairingError) -> Self {
        Self::MalformedInput(e.to_string())
    }
}

impl From<HashToFieldError> for VerificationError {
    fn from(e: HashToFieldError) -> Self {
        Self::MalformedInput(format!("commitment hash: {e}"))
    }
}

impl From<TranscriptError> for VerificationError {
    fn from(e: TranscriptError) -> Self {
        Self::MalformedInput(format!("transcript: {e}"))
    }
}

pub type VerificationResult<T = ()> = Result<T, VerificationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_verdicts_are_rejections() {
        assert!(VerificationError::PairingCheckFailed.is_rejection());
        assert!(VerificationError::CommitmentVerificationFailed { index: None }.is_rejection());
        assert!(!VerificationError::malformed("x").is_rejection());
        assert!(!VerificationError::MissingField("pi_a".into()).is_rejection());
        assert!(!VerificationError::InvalidEncoding {
            element: "pi_b".into(),
            source: PointError::NotInSubgroup,
        }
        .is_rejection());
    }

    #[test]
    fn display_names_the_failing_commitment() {
        let e = VerificationError::CommitmentVerificationFailed { index: Some(0) };
        assert_eq!(
            e.to_string(),
            "commitment proof of knowledge rejected (commitment 0)"
        );
        let e = VerificationError::CommitmentVerificationFailed { index: None };
        assert_eq!(e.to_string(), "commitment proof of knowledge rejected");
    }

    #[test]
    fn decode_errors_carry_the_field() {
        let e = VerificationError::FieldDecode {
            field: "public_inputs[1]".into(),
            source: FieldError::NonCanonical,
        };
        assert_eq!(
            e.to_string(),
            "`public_inputs[1]`: value is not below the field modulus"
        );
    }
}
