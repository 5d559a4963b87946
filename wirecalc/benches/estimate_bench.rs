//! Benchmarks for extraction and the full estimate pass.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wirecalc::{
    extract_from_text, select_gauge, ElectricalAssumptions, EstimateCore, EstimateRequest,
    Material, Run, SlackParams,
};

const PRODUCT_TEXT: &str = "SOOW 6/4 Portable Cord | Flexible 6 AWG stranded copper | \
    600 V rated jacket | Oil resistant | Packaging: 250 ft reel | \
    Suitable for portable tools and equipment";

fn bench_extract(c: &mut Criterion) {
    c.bench_function("extract_from_text", |b| {
        b.iter(|| extract_from_text(black_box(PRODUCT_TEXT)))
    });
}

fn bench_select_gauge(c: &mut Criterion) {
    c.bench_function("select_gauge", |b| {
        b.iter(|| {
            select_gauge(
                black_box(Material::Copper),
                black_box(20.0),
                black_box(120.0),
                black_box(100.0),
                black_box(3.0),
            )
        })
    });
}

fn bench_estimate(c: &mut Criterion) {
    let request = EstimateRequest {
        project_name: "Bench".into(),
        product: Some(extract_from_text(PRODUCT_TEXT)),
        assumptions: ElectricalAssumptions {
            system_voltage_v: 120.0,
            current_a: 20.0,
            max_drop_pct: 3.0,
            material_override: None,
        },
        round_trip: true,
        conductor_count: 4,
        runs: (1..=25)
            .map(|i| Run::new(format!("Run {}", i), (i as f64) * 10.0))
            .collect(),
        slack: SlackParams::default(),
        pack_override: None,
        foot_rounding_ft: None,
    };

    c.bench_function("estimate_full_pass", |b| {
        b.iter(|| EstimateCore::estimate(black_box(&request)).unwrap())
    });
}

criterion_group!(benches, bench_extract, bench_select_gauge, bench_estimate);
criterion_main!(benches);
