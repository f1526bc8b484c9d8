//! Benchmarks for the armorial pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use armorial::{BuiltinArtwork, Catalog, Composer, Renderer};

// -- Composition benchmarks --

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");
    let catalog = Catalog::standard();
    let composer = Composer::new(catalog);

    group.bench_function("compose_orphan", |b| {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        b.iter(|| composer.compose(black_box(&mut rng), None, 0.0, 0.0, None))
    });

    group.bench_function("compose_heir", |b| {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let parent = composer.compose(&mut rng, None, 0.0, 0.0, None);
        b.iter(|| composer.compose(black_box(&mut rng), Some(&parent), 0.6, 0.4, None))
    });

    group.finish();
}

// -- Rendering benchmarks --

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let catalog = Catalog::standard();
    let composer = Composer::new(catalog);
    let artwork = BuiltinArtwork::new();
    let renderer = Renderer::new(catalog, &artwork);

    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let emblems: Vec<_> = (0..16)
        .map(|_| composer.compose(&mut rng, None, 0.0, 0.0, None))
        .collect();

    group.bench_function("render_batch", |b| {
        b.iter(|| {
            for (index, emblem) in emblems.iter().enumerate() {
                let id = format!("bench{index}");
                let _ = renderer.render(black_box(&id), emblem, "heater");
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_compose, bench_render);
criterion_main!(benches);
