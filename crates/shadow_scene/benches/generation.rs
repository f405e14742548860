mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use shadow_scene::prelude::*;

const BOULDER_COUNTS: [usize; 3] = [10, 100, 500];

fn generation_benches(c: &mut Criterion) {
    let scene_size = (1000, 1000);
    let mut group = c.benchmark_group("scene/generate");
    group.throughput(common::cells_throughput(scene_size));

    for &count in &BOULDER_COUNTS {
        let config = SceneConfig::new(count).with_scene_size(scene_size);
        group.bench_with_input(BenchmarkId::from_parameter(count), &config, |b, config| {
            b.iter_batched(
                || StdRng::seed_from_u64(0x5EED ^ count as u64),
                |mut rng| {
                    let scene = Scene::generate(config, &mut rng).expect("scene fits");
                    black_box(scene.boulders().len());
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = generation_benches
}
criterion_main!(benches);
