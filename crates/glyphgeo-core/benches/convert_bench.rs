//! Benchmarks for the conversion hot path

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glyphgeo_core::{
    convert, flatten,
    types::{GlyphOutline, PathCommand, Point},
    ConvertParams, StaticOutlines,
};

/// A glyph built from quadratic arcs, like a TrueType outline
fn round_glyph() -> GlyphOutline {
    let mut commands = vec![PathCommand::MoveTo(Point::new(300.0, 0.0))];
    let corners = [
        (Point::new(0.0, 0.0), Point::new(0.0, -350.0)),
        (Point::new(0.0, -700.0), Point::new(300.0, -700.0)),
        (Point::new(600.0, -700.0), Point::new(600.0, -350.0)),
        (Point::new(600.0, 0.0), Point::new(300.0, 0.0)),
    ];
    for (ctrl, end) in corners {
        commands.push(PathCommand::QuadTo(ctrl, end));
    }
    commands.push(PathCommand::Close);
    GlyphOutline::new(commands, 650.0)
}

fn font() -> StaticOutlines {
    StaticOutlines::new(1000)
        .with_fallback(round_glyph())
        .with_glyph(' ', GlyphOutline::blank(250.0))
}

fn bench_flatten(c: &mut Criterion) {
    c.bench_function("flatten_cubic_10", |b| {
        b.iter(|| {
            flatten::cubic(
                black_box(Point::new(0.0, 0.0)),
                black_box(Point::new(0.0, 10.0)),
                black_box(Point::new(10.0, 10.0)),
                black_box(Point::new(10.0, 0.0)),
                10,
            )
            .count()
        })
    });
}

fn bench_convert(c: &mut Criterion) {
    let font = font();
    let params = ConvertParams::default().with_anchor(114.364, 30.513);

    c.bench_function("convert_short_label", |b| {
        b.iter(|| convert(&font, black_box("Old Town"), &params))
    });

    let long_text = "Lorem ipsum dolor sit amet ".repeat(20);
    c.bench_function("convert_long_label", |b| {
        b.iter(|| convert(&font, black_box(long_text.as_str()), &params))
    });
}

criterion_group!(benches, bench_flatten, bench_convert);
criterion_main!(benches);
