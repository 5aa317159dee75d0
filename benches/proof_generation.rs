use std::hint::black_box;
use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion};
use dleq::{
    random_scalar, Curve, CurveParams, EncodedProof, HashAlgorithm, NistP256, Point, Proof,
    SecureRng,
};

struct Statement {
    g: Point,
    h: Point,
    m: Point,
    z: Point,
    x: num_bigint::BigUint,
}

fn statement(curve: Arc<dyn Curve>, rng: &mut SecureRng) -> Statement {
    let g = Point::generator(Arc::clone(&curve));
    let (_, k) = random_scalar(&*curve, rng).unwrap();
    let (_, x) = random_scalar(&*curve, rng).unwrap();
    let m = g.mul(&k).unwrap();
    let h = g.mul(&x).unwrap();
    let z = m.mul(&x).unwrap();
    Statement { g, h, m, z, x }
}

fn bench_p256_proof_generation(c: &mut Criterion) {
    let mut rng = SecureRng::new();
    let s = statement(Arc::new(NistP256::new()), &mut rng);

    c.bench_function("p256_proof_generation", |b| {
        b.iter(|| {
            Proof::new(
                HashAlgorithm::Sha256,
                &s.g,
                &s.h,
                &s.m,
                &s.z,
                black_box(&s.x),
                black_box(&mut rng),
            )
            .unwrap()
        })
    });
}

fn bench_p256_proof_verification(c: &mut Criterion) {
    let mut rng = SecureRng::new();
    let s = statement(Arc::new(NistP256::new()), &mut rng);
    let proof = Proof::new(HashAlgorithm::Sha256, &s.g, &s.h, &s.m, &s.z, &s.x, &mut rng).unwrap();

    c.bench_function("p256_proof_verification", |b| {
        b.iter(|| black_box(&proof).verify())
    });
}

fn bench_secp256k1_proof_verification(c: &mut Criterion) {
    let mut rng = SecureRng::new();
    let s = statement(Arc::new(CurveParams::secp256k1()), &mut rng);
    let proof = Proof::new(HashAlgorithm::Sha256, &s.g, &s.h, &s.m, &s.z, &s.x, &mut rng).unwrap();

    let mut group = c.benchmark_group("secp256k1");
    group.sample_size(10);
    group.bench_function("proof_verification", |b| {
        b.iter(|| black_box(&proof).verify())
    });
    group.finish();
}

fn bench_proof_serialization(c: &mut Criterion) {
    let mut rng = SecureRng::new();
    let curve: Arc<dyn Curve> = Arc::new(NistP256::new());
    let s = statement(Arc::clone(&curve), &mut rng);
    let proof = Proof::new(HashAlgorithm::Sha256, &s.g, &s.h, &s.m, &s.z, &s.x, &mut rng).unwrap();
    let bytes = proof.to_bytes().unwrap();

    c.bench_function("proof_to_bytes", |b| b.iter(|| black_box(&proof).to_bytes().unwrap()));
    c.bench_function("proof_from_bytes", |b| {
        b.iter(|| Proof::from_bytes(Arc::clone(&curve), black_box(&bytes)).unwrap())
    });
    c.bench_function("encoded_proof_json", |b| {
        b.iter(|| {
            let encoded = EncodedProof::from_proof(black_box(&proof)).unwrap();
            serde_json::to_string(&encoded).unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_p256_proof_generation,
    bench_p256_proof_verification,
    bench_secp256k1_proof_verification,
    bench_proof_serialization
);
criterion_main!(benches);
