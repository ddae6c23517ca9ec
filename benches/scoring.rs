use academic_scores::{calc_weighted_grade, percentile, GradeComponent};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_weighted_grade(c: &mut Criterion) {
    let items: Vec<GradeComponent> = (0..10)
        .map(|i| GradeComponent::new(50.0 + i as f64 * 5.0, 0.1))
        .collect();

    c.bench_function("weighted_grade_10_components", |b| {
        b.iter(|| calc_weighted_grade(black_box(&items)))
    });
}

fn bench_percentile(c: &mut Criterion) {
    let mut group = c.benchmark_group("percentile");
    for n in [10usize, 1_000, 100_000] {
        // Deterministic scrambled data
        let values: Vec<f64> = (0..n).map(|i| ((i * 7919) % n) as f64 * 0.37).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, values| {
            b.iter(|| percentile(black_box(90.0), black_box(values)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_weighted_grade, bench_percentile);
criterion_main!(benches);
