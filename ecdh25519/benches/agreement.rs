//! X25519 key generation and agreement benchmarks

use criterion::{
    BenchmarkGroup, Criterion, criterion_group, criterion_main, measurement::Measurement,
};
use ecdh25519::{
    PublicKey, compute_shared_secret, derive_public_key, generate_key_pair, rand_core::OsRng,
};
use hex_literal::hex;
use std::hint::black_box;

const PRIVATE_KEY: [u8; 32] =
    hex!("77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a");

fn peer_public_key() -> PublicKey {
    PublicKey::from(hex!(
        "de9edb7d7b7dc1b4d35b61c2ece435373f8343c85b78674dadfc7e146f882b4f"
    ))
}

fn bench_generate_key_pair<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.bench_function("generate key pair", |b| {
        b.iter(|| generate_key_pair(&mut OsRng).unwrap())
    });
}

fn bench_derive_public_key<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.bench_function("derive public key", |b| {
        b.iter(|| derive_public_key(black_box(PRIVATE_KEY)).unwrap())
    });
}

fn bench_compute_shared_secret<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let public_key = peer_public_key();
    group.bench_function("compute shared secret", |b| {
        b.iter(|| compute_shared_secret(black_box(PRIVATE_KEY), black_box(public_key)).unwrap())
    });
}

fn bench_agreement(c: &mut Criterion) {
    let mut group = c.benchmark_group("x25519 agreement");
    bench_generate_key_pair(&mut group);
    bench_derive_public_key(&mut group);
    bench_compute_shared_secret(&mut group);
    group.finish();
}

criterion_group!(benches, bench_agreement);
criterion_main!(benches);
