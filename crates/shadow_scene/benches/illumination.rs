mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use shadow_scene::prelude::*;

const ANGLES: [f64; 4] = [15.0, 45.0, 75.0, 89.0];

fn illumination_benches(c: &mut Criterion) {
    let scene_size = (1000, 1000);
    let config = SceneConfig::new(500).with_scene_size(scene_size);
    let mut rng = StdRng::seed_from_u64(0xB0_1D3);
    let mut scene = Scene::generate(&config, &mut rng).expect("scene fits");

    let mut group = c.benchmark_group("scene/illuminate");
    group.throughput(common::cells_throughput(scene_size));

    for &angle in &ANGLES {
        group.bench_with_input(BenchmarkId::from_parameter(angle), &angle, |b, &angle| {
            b.iter(|| {
                let raster = scene.illuminate(angle).expect("valid angle");
                black_box(raster.count(CellClass::Shadow));
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = illumination_benches
}
criterion_main!(benches);
