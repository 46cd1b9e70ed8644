//! Performance benchmarks for binding and rendering the throw card
//!
//! Run with: cargo bench

use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use throwcard::binder::ThrowBinder;
use throwcard::models::{SensorId, SensorState, Snapshot, ATTR_BEARING, ATTR_THROW_TIME};
use throwcard::ui::{render, render_to_text};

/// Full snapshot with every sensor reporting
fn full_snapshot() -> Snapshot {
    Snapshot::new()
        .with_value(SensorId::Speed, "55.2")
        .with_value(SensorId::Spin, "1820.4")
        .with_value(SensorId::Wobble, "3.5")
        .with_value(SensorId::Hyzer, "-4.3")
        .with_value(SensorId::Nose, "1.0")
        .with_value(SensorId::LaunchAngle, "9.0")
        .with_value(SensorId::Distance, "310.9")
        .with(
            SensorId::ThrowType,
            SensorState::new("Forehand Flat")
                .with_attribute(ATTR_THROW_TIME, 1_700_000_000)
                .with_attribute(ATTR_BEARING, 182.6),
        )
}

/// Benchmark binding alone
fn bench_bind(c: &mut Criterion) {
    let binder = ThrowBinder::with_timezone("en_US", Utc);
    let mut group = c.benchmark_group("bind");

    let cases = [
        ("full", full_snapshot()),
        ("unavailable", Snapshot::all_unavailable()),
    ];
    for (name, snapshot) in cases.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(name), snapshot, |b, snapshot| {
            b.iter(|| black_box(binder.bind(black_box(snapshot))));
        });
    }

    group.finish();
}

/// Benchmark bind + render + draw into a buffer at several widths
fn bench_draw(c: &mut Criterion) {
    let binder = ThrowBinder::with_timezone("en_US", Utc);
    let snapshot = full_snapshot();
    let mut group = c.benchmark_group("bind_render_draw");

    for width in [40u16, 80, 120].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(width), width, |b, &width| {
            b.iter(|| {
                let card = render(&binder.bind(&snapshot), "Latest Throw");
                let area = Rect::new(0, 0, width, card.preferred_height(width));
                let mut buf = Buffer::empty(area);
                (&card).render(area, &mut buf);
                black_box(buf)
            });
        });
    }

    group.finish();
}

/// Benchmark the plain-text path used by --print
fn bench_render_to_text(c: &mut Criterion) {
    let binder = ThrowBinder::with_timezone("en_US", Utc);
    let card = render(&binder.bind(&full_snapshot()), "Latest Throw");

    c.bench_function("render_to_text_80", |b| {
        b.iter(|| black_box(render_to_text(black_box(&card), 80)));
    });
}

criterion_group!(benches, bench_bind, bench_draw, bench_render_to_text);
criterion_main!(benches);
