// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Cross-check against proofs from the arkworks Groth16 prover.
//! Circuit: y = x² + 5, public y = 14, private x = 3

use ark_bls12_381::{Bls12_381, Fr};
use ark_groth16::Groth16;
use ark_relations::{
    lc,
    r1cs::{ConstraintSynthesizer, ConstraintSystemRef, SynthesisError, Variable},
};
use ark_snark::SNARK;
use ark_std::rand::{rngs::StdRng, SeedableRng};
use g16_core::{verify, Groth16Verifier, Proof, VerificationError, VerifyingKey};

#[derive(Clone)]
struct SquarePlusFive {
    x: Option<Fr>,
    y: Fr,
}

impl ConstraintSynthesizer<Fr> for SquarePlusFive {
    fn generate_constraints(self, cs: ConstraintSystemRef<Fr>) -> Result<(), SynthesisError> {
        let y_var = cs.new_input_variable(|| Ok(self.y))?;
        let x_var = cs.new_witness_variable(|| self.x.ok_or(SynthesisError::AssignmentMissing))?;
        let x_squared_var = cs.new_witness_variable(|| {
            let x = self.x.ok_or(SynthesisError::AssignmentMissing)?;
            Ok(x * x)
        })?;

        // x_squared = x * x
        cs.enforce_constraint(lc!() + x_var, lc!() + x_var, lc!() + x_squared_var)?;

        // (x_squared + 5) * 1 = y
        cs.enforce_constraint(
            lc!() + x_squared_var + (Fr::from(5u64), Variable::One),
            lc!() + Variable::One,
            lc!() + y_var,
        )?;
        Ok(())
    }
}

fn setup_and_prove() -> (
    ark_groth16::VerifyingKey<Bls12_381>,
    ark_groth16::Proof<Bls12_381>,
    Fr,
) {
    let mut rng = StdRng::seed_from_u64(42);
    let y = Fr::from(14u64);
    let (pk, vk) = Groth16::<Bls12_381>::circuit_specific_setup(
        SquarePlusFive { x: None, y },
        &mut rng,
    )
    .unwrap();
    let proof = Groth16::<Bls12_381>::prove(
        &pk,
        SquarePlusFive {
            x: Some(Fr::from(3u64)),
            y,
        },
        &mut rng,
    )
    .unwrap();
    assert!(Groth16::<Bls12_381>::verify(&vk, &[y], &proof).unwrap());
    (vk, proof, y)
}

#[test]
fn arkworks_proof_verifies() {
    let (vk, proof, y) = setup_and_prove();
    let vk = VerifyingKey::from(&vk);
    let proof = Proof::from_arkworks(&proof, &[y]);
    assert_eq!(vk.num_commitments(), 0);
    assert_eq!(verify(&vk, &proof), Ok(()));
}

#[test]
fn arkworks_proof_wrong_statement_is_rejected() {
    let (vk, proof, _) = setup_and_prove();
    let vk = VerifyingKey::from(&vk);
    let proof = Proof::from_arkworks(&proof, &[Fr::from(15u64)]);
    assert_eq!(verify(&vk, &proof), Err(VerificationError::PairingCheckFailed));
}

#[test]
fn arkworks_proof_swapped_elements_are_rejected() {
    let (vk, proof, y) = setup_and_prove();
    let verifier = Groth16Verifier::new(VerifyingKey::from(&vk)).unwrap();

    let mut swapped = Proof::from_arkworks(&proof, &[y]);
    std::mem::swap(&mut swapped.pi_a, &mut swapped.pi_c);
    assert_eq!(
        verifier.verify(&swapped),
        Err(VerificationError::PairingCheckFailed)
    );

    let mut negated = Proof::from_arkworks(&proof, &[y]);
    negated.pi_a = -negated.pi_a;
    assert_eq!(
        verifier.verify(&negated),
        Err(VerificationError::PairingCheckFailed)
    );
}

#[test]
fn arkworks_proof_with_extra_input_is_malformed() {
    let (vk, proof, y) = setup_and_prove();
    let vk = VerifyingKey::from(&vk);
    let proof = Proof::from_arkworks(&proof, &[y, y]);
    assert!(matches!(
        verify(&vk, &proof),
        Err(VerificationError::MalformedInput(_))
    ));
}
