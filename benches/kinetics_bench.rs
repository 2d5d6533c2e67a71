//! Grid-search fit and molecule build benchmarks.
#![allow(missing_docs)]

use biolab::kinetics::{fit, generate, KineticsParams};
use biolab::molecules::MoleculeKind;
use biolab::options::FitGrid;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn fit_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_fit");
    let grid = FitGrid::default();

    for step in [50.0, 10.0, 2.0] {
        let params = KineticsParams {
            enzyme: 1.0,
            kcat: 100.0,
            km: 50.0,
            smax: 300.0,
            step,
        };
        let data =
            generate(&params, Some(0.08), &mut StdRng::seed_from_u64(1));
        group.bench_function(format!("{}_points", data.len()), |b| {
            b.iter(|| black_box(fit(black_box(&data), &grid)));
        });
    }
    group.finish();
}

fn build_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("molecule_build");
    for kind in [
        MoleculeKind::Glucose,
        MoleculeKind::Cholesterol,
        MoleculeKind::Atp,
        MoleculeKind::AlphaHelix,
    ] {
        group.bench_function(kind.id(), |b| {
            b.iter(|| black_box(black_box(kind).build()));
        });
    }
    group.finish();
}

criterion_group!(benches, fit_benchmark, build_benchmark);
criterion_main!(benches);
