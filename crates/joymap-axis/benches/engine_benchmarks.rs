//! Benchmarks for the sample and tick paths.
//!
//! Run with: cargo bench --bench engine_benchmarks

use criterion::{Criterion, criterion_group, criterion_main};
use joymap_axis::{
    AxisConfig, AxisEngine, AxisMode, AxisProfile, EngineLimits, FakeEvent, Interpretation,
    MouseAxis, MouseDirection, TickSet,
};

fn bench_gradient_mouse_tick(c: &mut Criterion) {
    let config = AxisConfig {
        interpretation: Interpretation::Gradient,
        mode: AxisMode::Mouse(MouseAxis::new(MouseDirection::Horizontal, false)),
        ..AxisConfig::default()
    };
    let mut engine = AxisEngine::new(0, config, EngineLimits::default());
    let mut events: Vec<FakeEvent> = Vec::with_capacity(1024);
    let mut ticks = TickSet::new();
    engine.jsevent(15000, &mut events, &mut ticks);

    c.bench_function("gradient_mouse_tick", |b| {
        b.iter(|| {
            events.clear();
            engine.tick(&mut events);
            std::hint::black_box(&events);
        });
    });
    engine.shutdown(&mut events, &mut ticks);
}

fn bench_zero_one_samples(c: &mut Criterion) {
    let mut engine = AxisEngine::new(0, AxisConfig::default(), EngineLimits::default());
    let mut events: Vec<FakeEvent> = Vec::with_capacity(1024);
    let mut ticks = TickSet::new();
    let samples: Vec<i32> = (-32767..=32767).step_by(257).collect();

    c.bench_function("zero_one_sample_sweep", |b| {
        b.iter(|| {
            events.clear();
            for &raw in &samples {
                engine.jsevent(std::hint::black_box(raw), &mut events, &mut ticks);
            }
        });
    });
    engine.shutdown(&mut events, &mut ticks);
}

fn bench_profile_tick_fan_out(c: &mut Criterion) {
    let text: String = (1..=8)
        .map(|n| format!("Axis {n}: gradient, mouse+h, tcurve 3\n"))
        .collect();
    let mut events: Vec<FakeEvent> = Vec::with_capacity(1024);
    let Ok(mut profile) = AxisProfile::parse(&text, 8, EngineLimits::default()) else {
        return;
    };
    for axis in 0..8 {
        if profile.jsevent(axis, 20000, &mut events).is_err() {
            return;
        }
    }

    c.bench_function("profile_tick_8_axes", |b| {
        b.iter(|| {
            events.clear();
            profile.tick(&mut events);
        });
    });
    profile.shutdown(&mut events);
}

criterion_group!(
    benches,
    bench_gradient_mouse_tick,
    bench_zero_one_samples,
    bench_profile_tick_fan_out
);
criterion_main!(benches);
