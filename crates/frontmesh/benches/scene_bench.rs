//! Criterion microbenches for the motion side: scene generation and stepping.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use frontmesh::prelude::*;

fn bench_scene(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene");
    for &bodies in &[128usize, 1024] {
        let cfg = SceneCfg {
            bodies,
            ..SceneCfg::default()
        };
        group.bench_with_input(BenchmarkId::new("random", bodies), &cfg, |b, &cfg| {
            b.iter(|| Scene::random(cfg, 2025).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("step", bodies), &cfg, |b, &cfg| {
            b.iter_batched(
                || Scene::random(cfg, 2025).unwrap(),
                |mut scene| scene.step(1.0 / 60.0),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_scene);
criterion_main!(benches);
