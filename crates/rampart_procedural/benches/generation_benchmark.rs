//! Benchmark for card art generation.
//!
//! TARGET: full catalog (~90 cards) regenerated well under a millisecond
//!
//! Run with: cargo bench --package rampart_procedural --bench generation_benchmark

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rampart_procedural::{
    render_image, CardIdentity, DamageType, Rarity, VisualConfig, VisualParameterGenerator,
};

fn catalog_identities(count: usize) -> Vec<CardIdentity> {
    (0..count)
        .map(|i| {
            CardIdentity::new(
                format!("c{i:02}"),
                DamageType::ALL[i % DamageType::ALL.len()],
                Rarity::ALL[i % Rarity::ALL.len()],
            )
        })
        .collect()
}

fn benchmark_single_parameters(c: &mut Criterion) {
    let config = VisualConfig::default();
    let generator = VisualParameterGenerator::new(&config);
    let identity = CardIdentity::new("c01", DamageType::Kinetic, Rarity::Common);

    c.bench_function("single_visual_parameters", |b| {
        b.iter(|| black_box(generator.generate(black_box(&identity))));
    });
}

fn benchmark_single_render(c: &mut Criterion) {
    let config = VisualConfig::default();
    let generator = VisualParameterGenerator::new(&config);
    let params = generator.generate(&CardIdentity::new("t17", DamageType::Void, Rarity::Legendary));

    c.bench_function("single_render_image", |b| {
        b.iter(|| black_box(render_image(black_box(&params))));
    });
}

fn benchmark_full_catalog(c: &mut Criterion) {
    let config = VisualConfig::default();
    let generator = VisualParameterGenerator::new(&config);
    let identities = catalog_identities(90);

    let mut group = c.benchmark_group("full_catalog");
    group.throughput(Throughput::Elements(identities.len() as u64));

    group.bench_function("90_cards_params_and_svg", |b| {
        b.iter(|| {
            for identity in &identities {
                black_box(render_image(&generator.generate(identity)));
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_parameters,
    benchmark_single_render,
    benchmark_full_catalog,
);
criterion_main!(benches);
