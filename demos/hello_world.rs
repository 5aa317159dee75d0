//! Basic usage example of DLEQ proofs.
//!
//! This example demonstrates:
//! - Choosing a curve and two generators
//! - Computing the public points from a secret exponent
//! - Generating a non-interactive proof
//! - Transmitting the proof as bytes and as JSON
//! - Verifying the proof

use std::sync::Arc;

use dleq::{random_scalar, Curve, EncodedProof, HashAlgorithm, NistP256, Point, Proof, SecureRng};

fn main() {
    println!("DLEQ Proof: Basic Example\n");

    println!("Step 1: Choose a curve and generators");
    let curve: Arc<dyn Curve> = Arc::new(NistP256::new());
    let mut rng = SecureRng::new();
    let g = Point::generator(Arc::clone(&curve));
    let (_, k) = random_scalar(&*curve, &mut rng).expect("Sampling should succeed");
    let m = g.mul(&k).expect("Scalar multiplication should succeed");
    println!("  Using {} with G = base point and M = kG\n", curve.name());

    println!("Step 2: Prover samples a secret exponent");
    let (_, x) = random_scalar(&*curve, &mut rng).expect("Sampling should succeed");
    println!("  Secret x generated\n");

    println!("Step 3: Compute public points");
    let h = g.mul(&x).expect("Scalar multiplication should succeed");
    let z = m.mul(&x).expect("Scalar multiplication should succeed");
    println!("  H = xG, Z = xM");
    println!("  (The secret x remains hidden)\n");

    println!("Step 4: Generate DLEQ proof");
    let proof = Proof::new(HashAlgorithm::Sha256, &g, &h, &m, &z, &x, &mut rng)
        .expect("Proof generation should succeed");
    println!("  Proof generated using Fiat-Shamir transform\n");

    println!("Step 5: Serialize proof for transmission");
    let proof_bytes = proof.to_bytes().expect("Serialization should succeed");
    println!("  Proof size: {} bytes", proof_bytes.len());
    let json = serde_json::to_string_pretty(
        &EncodedProof::from_proof(&proof).expect("Encoding should succeed"),
    )
    .expect("JSON encoding should succeed");
    println!("  JSON form:\n{json}\n");

    println!("Step 6: Deserialize proof");
    let received_proof =
        Proof::from_bytes(Arc::clone(&curve), &proof_bytes).expect("Deserialization should succeed");
    println!("  Proof deserialized successfully\n");

    println!("Step 7: Verify the proof");
    if received_proof.verify() {
        println!("  Proof is VALID");
    } else {
        println!("  Proof is INVALID");
    }

    println!("\nThe verifier is convinced that log_G(H) == log_M(Z)");
    println!("without learning anything about the value of x.");
}
