// In benches/split_bench.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pistream::kernels::series;
use pistream::series_pipeline::{assemble_pi, working_precision, SplitEngine};

// Term counts corresponding to roughly 10k and 50k decimal digits.
const SMALL_TERMS: u64 = 706;
const LARGE_TERMS: u64 = 3_526;

fn bench_split_engine(c: &mut Criterion) {
    let sequential = SplitEngine::new(1).unwrap();
    let parallel = SplitEngine::new(4).unwrap();
    let eager = SplitEngine::with_threshold(4, 64).unwrap();

    let mut group = c.benchmark_group("Binary Split");

    group.bench_function("Sequential (10k digits)", |b| {
        b.iter(|| black_box(sequential.compute(black_box(SMALL_TERMS))))
    });
    group.bench_function("4 workers (10k digits)", |b| {
        b.iter(|| black_box(parallel.compute(black_box(SMALL_TERMS))))
    });
    group.bench_function("4 workers, eager forking (10k digits)", |b| {
        b.iter(|| black_box(eager.compute(black_box(SMALL_TERMS))))
    });
    group.bench_function("4 workers (50k digits)", |b| {
        b.iter(|| black_box(parallel.compute(black_box(LARGE_TERMS))))
    });

    group.finish();
}

fn bench_assembly(c: &mut Criterion) {
    let engine = SplitEngine::new(4).unwrap();
    let digits = (SMALL_TERMS as f64 * series::DIGITS_PER_TERM) as u64;
    let result = engine.compute(SMALL_TERMS);
    let precision = working_precision(digits, &result);

    c.bench_function("Assemble pi (10k digits)", |b| {
        b.iter(|| black_box(assemble_pi(black_box(&result), black_box(precision))))
    });
}

criterion_group!(benches, bench_split_engine, bench_assembly);
criterion_main!(benches);
