//! Benchmark tests for curve shaping.
//!
//! Run with: cargo bench --bench curve_benchmarks

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use joymap_curves::{TransferCurve, ZoneRange};

fn unit_inputs() -> Vec<f32> {
    (0..=1000).map(|i| i as f32 / 1000.0).collect()
}

fn bench_curve_evaluate(c: &mut Criterion) {
    let inputs = unit_inputs();
    let mut group = c.benchmark_group("evaluate");
    group.throughput(Throughput::Elements(inputs.len() as u64));

    for curve in TransferCurve::ALL {
        group.bench_function(curve.name(), |b| {
            b.iter(|| {
                for &u in &inputs {
                    std::hint::black_box(curve.evaluate(std::hint::black_box(u), 2.0));
                }
            });
        });
    }
    group.finish();
}

fn bench_zone_shape(c: &mut Criterion) {
    let zones = ZoneRange::new(3000, 30000);
    let magnitudes: Vec<i32> = (0..=32767).step_by(33).collect();

    c.bench_function("zone_shape_quadratic", |b| {
        b.iter(|| {
            for &m in &magnitudes {
                std::hint::black_box(zones.shape(
                    std::hint::black_box(m),
                    TransferCurve::Quadratic,
                    1.0,
                ));
            }
        });
    });
}

criterion_group!(benches, bench_curve_evaluate, bench_zone_shape);
criterion_main!(benches);
