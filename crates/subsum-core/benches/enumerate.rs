use criterion::{Criterion, black_box, criterion_group, criterion_main};
use subsum_core::enumerate_subsets;

fn bench_enumerate(c: &mut Criterion) {
    // Mid-size mixed pool with duplicates and negatives; enough branch
    // points to exercise anchoring and the correction sub-search.
    let values: Vec<f64> = vec![
        1.0, 2.0, 3.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, -2.0, -3.0, -5.0,
    ];

    c.bench_function("enumerate_target_24", |b| {
        b.iter(|| enumerate_subsets(black_box(&values), black_box(24.0)))
    });

    c.bench_function("enumerate_no_match", |b| {
        b.iter(|| enumerate_subsets(black_box(&values), black_box(1000.5)))
    });
}

criterion_group!(benches, bench_enumerate);
criterion_main!(benches);
