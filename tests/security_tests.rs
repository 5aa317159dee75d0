mod common;

use std::sync::Arc;

use common::{init_tracing, p256, secp256k1, seeded, statement, toy_curve};
use dleq::{random_scalar, EncodedProof, Error, HashAlgorithm, Proof};

fn valid_proof() -> Proof {
    let s = statement(p256(), 0x0bad_cafe, 0x00c0_ffee);
    Proof::new(HashAlgorithm::Sha256, &s.g, &s.h, &s.m, &s.z, &s.x, &mut seeded(42))
        .expect("Proof generation should succeed")
}

#[test]
fn scalar_sampler_is_unbiased_on_small_group() {
    // Order 1009 needs 10 bits, so half of the top byte is masked away and
    // 15 of every 1024 candidates are rejected.
    let curve = toy_curve();
    let order = 1009usize;
    let draws_per_bucket = 100usize;
    let draws = order * draws_per_bucket;

    let mut counts = vec![0usize; order];
    let mut rng = seeded(0x5a5a);
    for _ in 0..draws {
        let (_, value) = random_scalar(&*curve, &mut rng).expect("Sampling should succeed");
        let index: usize = value.try_into().expect("value below the order");
        counts[index] += 1;
    }

    let expected = draws_per_bucket as f64;
    let chi_squared: f64 = counts
        .iter()
        .map(|&observed| {
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum();

    // 1008 degrees of freedom: mean 1008, standard deviation about 45.
    assert!(
        chi_squared < 1008.0 + 7.0 * 45.0,
        "chi-squared statistic {chi_squared} indicates a biased sampler"
    );
    assert!(
        chi_squared > 1008.0 - 7.0 * 45.0,
        "chi-squared statistic {chi_squared} is suspiciously uniform"
    );

    // The top of the range must be reachable; a biased mask would starve it.
    assert!(counts[order - 1] > 0);
    assert!(counts[order - 16..].iter().sum::<usize>() > 0);
}

#[test]
fn reject_proof_with_swapped_generators() {
    init_tracing();
    let proof = valid_proof();
    let swapped = Proof::from_parts(
        proof.hash(),
        proof.m().clone(),
        proof.z().clone(),
        proof.g().clone(),
        proof.h().clone(),
        proof.r().clone(),
        proof.c().clone(),
    );
    assert!(!swapped.verify());
}

#[test]
fn reject_proof_replayed_for_other_statement() {
    let proof = valid_proof();
    let other = statement(p256(), 0x0bad_cafe, 0x00c0_fff0);
    let replayed = Proof::from_parts(
        proof.hash(),
        other.g,
        other.h,
        other.m,
        other.z,
        proof.r().clone(),
        proof.c().clone(),
    );
    assert!(!replayed.verify());
}

#[test]
fn reject_proof_mixing_curves() {
    let proof = valid_proof();
    let foreign = statement(secp256k1(), 1, 1);
    let mixed = Proof::from_parts(
        proof.hash(),
        proof.g().clone(),
        proof.h().clone(),
        proof.m().clone(),
        foreign.z,
        proof.r().clone(),
        proof.c().clone(),
    );
    assert!(!mixed.verify());
}

#[test]
fn reject_trivial_forgery_with_zero_scalars() {
    use num_bigint::BigUint;

    let proof = valid_proof();
    let zeroed = Proof::from_parts(
        proof.hash(),
        proof.g().clone(),
        proof.h().clone(),
        proof.m().clone(),
        proof.z().clone(),
        BigUint::from(0u32),
        BigUint::from(0u32),
    );
    assert!(!zeroed.verify());
}

#[test]
fn reject_every_truncation_of_binary_proof() {
    let curve = p256();
    let bytes = valid_proof().to_bytes().unwrap();

    for len in 0..bytes.len() {
        assert!(
            matches!(
                Proof::from_bytes(Arc::clone(&curve), &bytes[..len]),
                Err(Error::MalformedProof(_))
            ),
            "truncation to {len} bytes should be rejected"
        );
    }
}

#[test]
fn binary_proof_corruption_never_verifies() {
    init_tracing();
    let curve = p256();
    let bytes = valid_proof().to_bytes().unwrap();

    // Corrupt one byte in every field: header, the four points and both scalars.
    for position in [0, 1, 2, 40, 70, 140, 200, 262, 280, 300, bytes.len() - 1] {
        let mut corrupted = bytes.clone();
        corrupted[position] ^= 0x01;
        if let Ok(proof) = Proof::from_bytes(Arc::clone(&curve), &corrupted) {
            assert!(!proof.verify(), "corruption at byte {position} was accepted");
        }
    }
}

#[test]
fn binary_proof_is_bound_to_its_curve() {
    let bytes = valid_proof().to_bytes().unwrap();

    // Same encoded width, different group: the points do not lie on secp256k1.
    let proof = Proof::from_bytes(secp256k1(), &bytes).expect("encodings are well-formed");
    assert!(!proof.verify());
}

#[test]
fn incomplete_encoded_proofs_are_invalid() {
    let full = EncodedProof::from_proof(&valid_proof()).unwrap();
    assert!(full.verify());

    let clear: [fn(&mut EncodedProof); 8] = [
        |p| p.curve = None,
        |p| p.hash = None,
        |p| p.g = None,
        |p| p.h = None,
        |p| p.m = None,
        |p| p.z = None,
        |p| p.r = None,
        |p| p.c = None,
    ];
    for remove in clear {
        let mut partial = full.clone();
        remove(&mut partial);
        assert!(!partial.is_complete());
        assert!(!partial.verify());
    }

    let empty: EncodedProof = serde_json::from_str("{}").unwrap();
    assert!(!empty.verify());
}

#[test]
fn malformed_json_fields_are_invalid() {
    let full = EncodedProof::from_proof(&valid_proof()).unwrap();

    let mut unknown_curve = full.clone();
    unknown_curve.curve = Some("curve25519".to_string());
    assert!(matches!(unknown_curve.decode(), Err(Error::UnknownCurve(_))));
    assert!(!unknown_curve.verify());

    let mut short_scalar = full.clone();
    short_scalar.r = Some("01".to_string());
    assert!(matches!(short_scalar.decode(), Err(Error::InvalidScalar(_))));
    assert!(!short_scalar.verify());

    let mut odd_hex = full.clone();
    odd_hex.z = Some("abc".to_string());
    assert!(!odd_hex.verify());

    let bad_hash = serde_json::from_str::<EncodedProof>("{\"hash\":\"md5\"}");
    assert!(bad_hash.is_err());
}

#[test]
fn secret_does_not_appear_in_proof() {
    let s = statement(p256(), 0x1111, 0x7777_7777_7777_7777);
    let proof = Proof::new(HashAlgorithm::Sha256, &s.g, &s.h, &s.m, &s.z, &s.x, &mut seeded(1))
        .unwrap();
    let bytes = proof.to_bytes().unwrap();
    let secret = s.x.to_bytes_be();

    assert!(!bytes.windows(secret.len()).any(|w| w == secret.as_slice()));
    assert_ne!(proof.r(), &s.x);
    assert!(proof.r() < s.g.curve().order());
}
