//! Criterion benchmarks for cube graph construction.
//! Focus widths: n in {3, 8, 16, 32}.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use cubetour::api::{build_cube, check_embedding, move_table, TurnRule};

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("cube");
    for &n in &[3usize, 8, 16, 32] {
        group.bench_with_input(BenchmarkId::new("build_cube", n), &n, |b, &n| {
            b.iter(|| build_cube(n).unwrap())
        });

        let cube = build_cube(n).unwrap();
        group.bench_with_input(BenchmarkId::new("check_embedding", n), &cube, |b, cube| {
            b.iter(|| check_embedding(cube).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("move_table", n), &cube, |b, cube| {
            b.iter(|| move_table(cube, TurnRule::AsGiven))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build);
criterion_main!(benches);
