//! Criterion benches for the planarity pipeline.
//!
//! - palm: numbering plus lowpoints on grids.
//! - check: both strategies on grids, random trees, and maximal planar graphs.
//!
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use planarity::api::{
    check_planarity, grid, random_maximal_planar, random_tree, LowPoints, PalmTree, PlanarityCfg,
    Strategy,
};

fn bench_palm(c: &mut Criterion) {
    let mut group = c.benchmark_group("palm");
    for &side in &[10usize, 30, 100] {
        let g = grid(side, side).unwrap();
        group.bench_with_input(BenchmarkId::new("build+lowpoints", side * side), &g, |b, g| {
            b.iter(|| {
                let palm = PalmTree::build(g).unwrap();
                LowPoints::compute(&palm)
            })
        });
    }
    group.finish();
}

fn bench_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("check");
    for strategy in [Strategy::LeftRight, Strategy::IntervalBuckets] {
        let cfg = PlanarityCfg {
            strategy,
            ..PlanarityCfg::default()
        };
        let name = format!("{strategy:?}");
        for &n in &[100usize, 1_000, 10_000] {
            group.bench_with_input(BenchmarkId::new(format!("{name}/tree"), n), &n, |b, &n| {
                b.iter_batched(
                    || random_tree(n, 7).unwrap(),
                    |g| check_planarity(&g, cfg).unwrap(),
                    BatchSize::SmallInput,
                )
            });
        }
        let g = grid(40, 40).unwrap();
        group.bench_function(BenchmarkId::new(format!("{name}/grid"), 1_600), |b| {
            b.iter(|| check_planarity(&g, cfg).unwrap())
        });
    }
    for &n in &[100usize, 1_000, 10_000] {
        let g = random_maximal_planar(n, 3).unwrap();
        group.bench_with_input(BenchmarkId::new("LeftRight/maximal_planar", n), &g, |b, g| {
            b.iter(|| check_planarity(g, PlanarityCfg::default()).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_palm, bench_check);
criterion_main!(benches);
