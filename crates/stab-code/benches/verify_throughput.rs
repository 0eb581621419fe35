use criterion::{criterion_group, criterion_main, Criterion};
use stab_code::catalog;
use stab_code::{thread_pool, verify, CommutationVerifier, SynthesisOptions};

fn bench_verify(c: &mut Criterion) {
    let sequential = SynthesisOptions::default();
    let parallel = SynthesisOptions {
        parallel_verification: true,
        threads: 4,
        ..SynthesisOptions::default()
    };
    let block = catalog::grid_16_6_4().build(&sequential).expect("grid code");

    c.bench_function("verify_grid_sequential", |b| {
        b.iter(|| {
            let _ = verify(block.group(), block.logical_pairs(), &sequential).expect("verify");
        });
    });
    c.bench_function("verify_grid_parallel", |b| {
        b.iter(|| {
            let _ = verify(block.group(), block.logical_pairs(), &parallel).expect("verify");
        });
    });
    let pool = thread_pool(&parallel).expect("pool");
    let verifier = CommutationVerifier::new(block.group(), block.logical_pairs()).expect("verifier");
    c.bench_function("verify_grid_shared_pool", |b| {
        b.iter(|| {
            let _ = verifier.verify_in(&pool).expect("verify");
        });
    });
}

criterion_group!(benches, bench_verify);
criterion_main!(benches);
