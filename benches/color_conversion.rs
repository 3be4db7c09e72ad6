use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lazy_color::{Color, ColorConverter};

fn benchmark_conversions(c: &mut Criterion) {
    let converter = ColorConverter::new();

    c.bench_function("hex_to_rgb", |b| {
        b.iter(|| converter.hex_to_rgb(black_box("#336699")).ok())
    });

    c.bench_function("rgb_to_hsv", |b| {
        b.iter(|| converter.rgb_to_hsv(black_box([51.0, 102.0, 153.0])))
    });

    c.bench_function("hsv_to_rgb", |b| {
        b.iter(|| converter.hsv_to_rgb(black_box([210.0, 67.0, 60.0])))
    });
}

fn benchmark_color_value(c: &mut Criterion) {
    c.bench_function("parse_rgba", |b| {
        b.iter(|| Color::new(black_box("rgba(10, 20, 30, 0.5)")))
    });

    c.bench_function("hex_to_hsv_cold", |b| {
        b.iter(|| {
            let color = Color::from_hex(black_box("#336699")).unwrap();
            color.hsv()
        })
    });

    let color = Color::new("#336699").unwrap();
    let _ = color.hsv();
    c.bench_function("hex_to_hsv_cached", |b| b.iter(|| black_box(&color).hsv()));

    let reference = Color::new("hsv(0,0,50)").unwrap();
    c.bench_function("brighter_or_darker_than", |b| {
        b.iter(|| {
            let mut color = Color::from_hsv([210.0, 67.0, 60.0]);
            color.brighter_or_darker_than(black_box(&reference), 20.0);
            color.value()
        })
    });
}

criterion_group!(benches, benchmark_conversions, benchmark_color_value);
criterion_main!(benches);
