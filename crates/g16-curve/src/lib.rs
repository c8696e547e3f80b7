// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! g16-curve: BLS12-381 field, group and pairing layer for Groth16 verification

pub mod field;
pub mod group;
pub mod pairing;

pub use field::{fr_from_hex, fr_to_hex, FieldError, Fq, Fq2, Fr};
pub use group::{
    point_from_hex, point_to_hex, G1Affine, G1Projective, G2Affine, G2Projective, GnarkCurve,
    GnarkPoint, PointError,
};
pub use pairing::{
    multi_pairing, pairing, pairing_product_equals_identity,
    pairing_product_equals_identity_par, G2Prepared, Gt, PairingError,
};
