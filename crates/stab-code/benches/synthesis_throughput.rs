use criterion::{criterion_group, criterion_main, Criterion};
use stab_code::catalog;
use stab_code::{synthesize, SynthesisOptions};

fn bench_synthesis(c: &mut Criterion) {
    let options = SynthesisOptions::default();
    let grid = catalog::grid_16_6_4().group(&options).expect("grid code");
    c.bench_function("synthesis_grid_16_6_4", |b| {
        b.iter(|| {
            let _ = synthesize(&grid, &options).expect("synthesize");
        });
    });

    let repetition = catalog::repetition(64).group(&options).expect("repetition code");
    c.bench_function("synthesis_repetition_64", |b| {
        b.iter(|| {
            let _ = synthesize(&repetition, &options).expect("synthesize");
        });
    });
}

criterion_group!(benches, bench_synthesis);
criterion_main!(benches);
