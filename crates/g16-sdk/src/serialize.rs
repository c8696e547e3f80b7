// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! JSON ↔ verifying key / proof.
//!
//! The documents use the gnark field names and hex layout:
//!
//! | Key                            | Shape                                   |
//! |--------------------------------|-----------------------------------------|
//! | `alpha_g1`, `pi_a`, `pi_c`     | `[x, y]`                                |
//! | `beta_g2`, `gamma_g2`, `delta_g2`, `pi_b` | `[[x.c0, x.c1], [y.c0, y.c1]]` |
//! | `gamma_abc_g1`                 | array of `[x, y]`                       |
//! | `CommitmentKey`                | hex, `G ‖ GRootSigmaNeg` (two G2)       |
//! | `PublicAndCommitmentCommitted` | array of arrays of wire indices         |
//! | `Commitments`                  | hex, concatenated G1 points             |
//! | `CommitmentPok`                | hex, one G1 point                       |
//! | `public_inputs`                | array of 64-char hex `Fr`               |
//!
//! # Byte order
//!
//! - **Coordinates**: 48-byte big-endian hex; the flag bits ride on `x`
//!   (on `x.c1` for G2).
//! - **Fr scalars**: 32-byte big-endian hex.
//!
//! Unknown keys are ignored. Output is compact with keys in the order the
//! gnark producer emits, so documents from that producer round-trip
//! byte-for-byte.
//!
//! # Example
//!
//! ```rust,no_run
//! use g16_sdk::serialize::{parse_proof, parse_verifying_key, proof_to_json};
//!
//! # fn example(vk_json: &str, proof_json: &str) -> Result<(), g16_core::VerificationError> {
//! let vk = parse_verifying_key(vk_json)?;
//! let proof = parse_proof(proof_json)?;
//! assert_eq!(proof_to_json(&proof), proof_json);
//! g16_core::verify(&vk, &proof)
//! # }
//! ```

use g16_core::{PedersenVerifyingKey, Proof, VerificationError, VerificationResult, VerifyingKey};
use g16_curve::field::FQ_BYTES;
use g16_curve::{fr_from_hex, fr_to_hex, Fr, G1Affine, G2Affine, GnarkPoint, PointError};
use serde::Serialize;
use serde_json::{Map, Value};

// ── Documents (field order is the output key order) ──

#[derive(Serialize)]
struct VerifyingKeyDocument {
    #[serde(rename = "CommitmentKey")]
    commitment_key: String,
    #[serde(rename = "PublicAndCommitmentCommitted")]
    public_and_commitment_committed: Vec<Vec<u32>>,
    alpha_g1: [String; 2],
    beta_g2: [[String; 2]; 2],
    delta_g2: [[String; 2]; 2],
    gamma_abc_g1: Vec<[String; 2]>,
    gamma_g2: [[String; 2]; 2],
}

#[derive(Serialize)]
struct ProofDocument {
    #[serde(rename = "CommitmentPok")]
    commitment_pok: String,
    #[serde(rename = "Commitments")]
    commitments: String,
    pi_a: [String; 2],
    pi_b: [[String; 2]; 2],
    pi_c: [String; 2],
    public_inputs: Vec<String>,
}

// ── Point ↔ JSON ──

/// `[x, y]` hex of a G1 point.
pub fn g1_to_json(p: &G1Affine) -> [String; 2] {
    let raw = p.to_uncompressed();
    let (x, y) = raw.split_at(FQ_BYTES);
    [hex::encode(x), hex::encode(y)]
}

/// `[[x.c0, x.c1], [y.c0, y.c1]]` hex of a G2 point.
pub fn g2_to_json(p: &G2Affine) -> [[String; 2]; 2] {
    // raw is x.c1 ‖ x.c0 ‖ y.c1 ‖ y.c0
    let raw = p.to_uncompressed();
    let limb = |i: usize| hex::encode(&raw[i * FQ_BYTES..(i + 1) * FQ_BYTES]);
    [[limb(1), limb(0)], [limb(3), limb(2)]]
}

fn point_err(field: &str) -> impl Fn(PointError) -> VerificationError + '_ {
    move |source| VerificationError::PointDecode {
        field: field.to_string(),
        source,
    }
}

/// Decode one 48-byte coordinate limb.
fn limb(v: &Value, field: &str) -> VerificationResult<Vec<u8>> {
    let s = as_str(v, field)?;
    let bytes = hex::decode(s).map_err(|e| point_err(field)(e.into()))?;
    if bytes.len() != FQ_BYTES {
        return Err(point_err(field)(PointError::Length {
            expected: FQ_BYTES,
            got: bytes.len(),
        }));
    }
    Ok(bytes)
}

fn pair<'a>(v: &'a Value, field: &str, expected: &'static str) -> VerificationResult<[&'a Value; 2]> {
    match v.as_array().map(Vec::as_slice) {
        Some([a, b]) => Ok([a, b]),
        _ => Err(VerificationError::TypeMismatch {
            field: field.to_string(),
            expected,
        }),
    }
}

fn g1_from_json(v: &Value, field: &str) -> VerificationResult<G1Affine> {
    const SHAPE: &str = "[x, y] hex pair";
    let [x, y] = pair(v, field, SHAPE)?;
    let mut raw = limb(x, field)?;
    raw.extend(limb(y, field)?);
    G1Affine::from_gnark_bytes(&raw).map_err(point_err(field))
}

fn g2_from_json(v: &Value, field: &str) -> VerificationResult<G2Affine> {
    const SHAPE: &str = "[[x.c0, x.c1], [y.c0, y.c1]] hex pairs";
    let [x, y] = pair(v, field, SHAPE)?;
    let [x0, x1] = pair(x, field, SHAPE)?;
    let [y0, y1] = pair(y, field, SHAPE)?;
    let mut raw = Vec::with_capacity(4 * FQ_BYTES);
    for c in [x1, x0, y1, y0] {
        raw.extend(limb(c, field)?);
    }
    G2Affine::from_gnark_bytes(&raw).map_err(point_err(field))
}

// ── Value helpers ──

fn as_str<'a>(v: &'a Value, field: &str) -> VerificationResult<&'a str> {
    v.as_str().ok_or_else(|| VerificationError::TypeMismatch {
        field: field.to_string(),
        expected: "hex string",
    })
}

fn as_array<'a>(v: &'a Value, field: &str) -> VerificationResult<&'a [Value]> {
    v.as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| VerificationError::TypeMismatch {
            field: field.to_string(),
            expected: "array",
        })
}

fn get<'a>(obj: &'a Map<String, Value>, key: &str) -> VerificationResult<&'a Value> {
    obj.get(key)
        .ok_or_else(|| VerificationError::MissingField(key.to_string()))
}

fn object(json: &str) -> VerificationResult<Map<String, Value>> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| VerificationError::MalformedInput(format!("invalid JSON: {e}")))?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(VerificationError::TypeMismatch {
            field: "$".to_string(),
            expected: "object",
        }),
    }
}

fn hex_bytes(v: &Value, field: &str) -> VerificationResult<Vec<u8>> {
    hex::decode(as_str(v, field)?).map_err(|e| point_err(field)(e.into()))
}

fn committed_table(v: &Value) -> VerificationResult<Vec<Vec<u32>>> {
    const FIELD: &str = "PublicAndCommitmentCommitted";
    as_array(v, FIELD)?
        .iter()
        .enumerate()
        .map(|(i, wires)| {
            let name = format!("{FIELD}[{i}]");
            as_array(wires, &name)?
                .iter()
                .map(|w| {
                    w.as_u64()
                        .and_then(|w| u32::try_from(w).ok())
                        .ok_or_else(|| VerificationError::TypeMismatch {
                            field: name.clone(),
                            expected: "array of wire indices",
                        })
                })
                .collect::<VerificationResult<Vec<u32>>>()
        })
        .collect()
}

// ── Verifying key ──

/// Parse a verifying-key document.
pub fn parse_verifying_key(json: &str) -> VerificationResult<VerifyingKey> {
    let doc = object(json)?;

    let gamma_abc_g1 = as_array(get(&doc, "gamma_abc_g1")?, "gamma_abc_g1")?
        .iter()
        .enumerate()
        .map(|(i, p)| g1_from_json(p, &format!("gamma_abc_g1[{i}]")))
        .collect::<VerificationResult<Vec<_>>>()?;

    let key_bytes = hex_bytes(get(&doc, "CommitmentKey")?, "CommitmentKey")?;
    let commitment_key =
        PedersenVerifyingKey::from_bytes(&key_bytes).map_err(point_err("CommitmentKey"))?;

    let vk = VerifyingKey {
        alpha_g1: g1_from_json(get(&doc, "alpha_g1")?, "alpha_g1")?,
        beta_g2: g2_from_json(get(&doc, "beta_g2")?, "beta_g2")?,
        gamma_g2: g2_from_json(get(&doc, "gamma_g2")?, "gamma_g2")?,
        delta_g2: g2_from_json(get(&doc, "delta_g2")?, "delta_g2")?,
        gamma_abc_g1,
        commitment_key,
        public_and_commitment_committed: committed_table(get(
            &doc,
            "PublicAndCommitmentCommitted",
        )?)?,
    };
    tracing::debug!(
        points = vk.gamma_abc_g1.len(),
        commitments = vk.num_commitments(),
        "parsed verifying key"
    );
    Ok(vk)
}

/// Encode a verifying key as a compact JSON document.
pub fn verifying_key_to_json(vk: &VerifyingKey) -> String {
    let doc = VerifyingKeyDocument {
        commitment_key: hex::encode(vk.commitment_key.to_bytes()),
        public_and_commitment_committed: vk.public_and_commitment_committed.clone(),
        alpha_g1: g1_to_json(&vk.alpha_g1),
        beta_g2: g2_to_json(&vk.beta_g2),
        delta_g2: g2_to_json(&vk.delta_g2),
        gamma_abc_g1: vk.gamma_abc_g1.iter().map(g1_to_json).collect(),
        gamma_g2: g2_to_json(&vk.gamma_g2),
    };
    // strings and integers only, serialization cannot fail
    serde_json::to_string(&doc).unwrap_or_default()
}

// ── Proof ──

/// Parse a proof document.
pub fn parse_proof(json: &str) -> VerificationResult<Proof> {
    let doc = object(json)?;

    let raw = hex_bytes(get(&doc, "Commitments")?, "Commitments")?;
    let mut commitments = Vec::new();
    let mut rest = raw.as_slice();
    while !rest.is_empty() {
        let field = format!("Commitments[{}]", commitments.len());
        let (c, used) = G1Affine::read_gnark(rest).map_err(point_err(&field))?;
        commitments.push(c);
        rest = &rest[used..];
    }

    let pok_bytes = hex_bytes(get(&doc, "CommitmentPok")?, "CommitmentPok")?;
    let commitment_pok =
        G1Affine::from_gnark_bytes(&pok_bytes).map_err(point_err("CommitmentPok"))?;

    let public_inputs = as_array(get(&doc, "public_inputs")?, "public_inputs")?
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let field = format!("public_inputs[{i}]");
            fr_from_hex(as_str(v, &field)?)
                .map_err(|source| VerificationError::FieldDecode { field, source })
        })
        .collect::<VerificationResult<Vec<Fr>>>()?;

    Ok(Proof {
        pi_a: g1_from_json(get(&doc, "pi_a")?, "pi_a")?,
        pi_b: g2_from_json(get(&doc, "pi_b")?, "pi_b")?,
        pi_c: g1_from_json(get(&doc, "pi_c")?, "pi_c")?,
        commitments,
        commitment_pok,
        public_inputs,
    })
}

/// Encode a proof as a compact JSON document.
pub fn proof_to_json(proof: &Proof) -> String {
    let doc = ProofDocument {
        commitment_pok: hex::encode(proof.commitment_pok.to_uncompressed()),
        commitments: hex::encode(
            proof
                .commitments
                .iter()
                .flat_map(|c| c.to_uncompressed())
                .collect::<Vec<u8>>(),
        ),
        pi_a: g1_to_json(&proof.pi_a),
        pi_b: g2_to_json(&proof.pi_b),
        pi_c: g1_to_json(&proof.pi_c),
        public_inputs: proof.public_inputs.iter().map(fr_to_hex).collect(),
    };
    serde_json::to_string(&doc).unwrap_or_default()
}
