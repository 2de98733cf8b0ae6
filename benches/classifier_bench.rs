use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use recursolve::catalog::solve_catalog;
use recursolve::solver::Solver;
use recursolve::theorems::{find_root, RootFinding};
use recursolve::{akra_bazzi, master};
use std::hint::black_box;

fn bench_master(c: &mut Criterion) {
    c.bench_function("master_classify", |b| {
        b.iter(|| master(black_box(7.0), black_box(2.0), black_box(2.0)))
    });
}

fn bench_root_finding(c: &mut Criterion) {
    let settings = RootFinding::default();
    let mut group = c.benchmark_group("akra_bazzi_root");

    for branches in [2usize, 8, 32].iter() {
        let a: Vec<f64> = (0..*branches).map(|i| 1.0 + i as f64 % 3.0).collect();
        let b: Vec<f64> = (0..*branches).map(|i| 2.0 + i as f64 % 5.0).collect();
        group.bench_with_input(BenchmarkId::new("branches", branches), &(a, b), |bench, (a, b)| {
            bench.iter(|| find_root(black_box(a), black_box(b), &settings))
        });
    }

    group.finish();
}

fn bench_akra_bazzi(c: &mut Criterion) {
    c.bench_function("akra_bazzi_classify", |b| {
        b.iter(|| akra_bazzi(black_box(&[3.0, 2.0]), black_box(&[2.0, 3.0]), black_box(1.0)))
    });
}

fn bench_catalog(c: &mut Criterion) {
    let solver = Solver::default();
    c.bench_function("solve_catalog", |b| b.iter(|| solve_catalog(black_box(&solver))));
}

criterion_group!(
    benches,
    bench_master,
    bench_root_finding,
    bench_akra_bazzi,
    bench_catalog
);
criterion_main!(benches);
