//! Benchmarks for the imgrid transform engine.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use imgrid::{Component, FilterKind, Grid, Pixel, TransformKind};

/// Build a deterministic width x height gradient grid.
fn gradient(width: usize, height: usize) -> Grid {
    let rows = (0..height)
        .map(|row| {
            (0..width)
                .map(|col| {
                    Pixel::rgb(
                        (row * 255 / height) as u8,
                        (col * 255 / width) as u8,
                        ((row + col) % 256) as u8,
                    )
                })
                .collect()
        })
        .collect();
    Grid::from_rows(rows).unwrap()
}

fn bench_tone(c: &mut Criterion) {
    let mut group = c.benchmark_group("tone");
    let grid = gradient(128, 128);

    group.bench_function("brighten_128", |b| {
        b.iter(|| black_box(&grid).brighten(black_box(40)))
    });

    group.bench_function("luma_128", |b| {
        b.iter(|| black_box(&grid).channel_component(Component::Luma))
    });

    group.bench_function("sepia_128", |b| {
        b.iter(|| black_box(&grid).color_transformation(TransformKind::Sepia))
    });

    group.finish();
}

fn bench_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry");
    let grid = gradient(128, 128);

    group.bench_function("flip_vertical_128", |b| {
        b.iter(|| black_box(&grid).flip_vertical())
    });

    group.bench_function("flip_horizontal_128", |b| {
        b.iter(|| black_box(&grid).flip_horizontal())
    });

    group.finish();
}

fn bench_convolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("convolution");

    let small = gradient(32, 32);
    let large = gradient(128, 128);

    group.bench_function("blur_32", |b| {
        b.iter(|| black_box(&small).filter(FilterKind::Blur))
    });

    group.bench_function("blur_128", |b| {
        b.iter(|| black_box(&large).filter(FilterKind::Blur))
    });

    group.bench_function("sharpen_128", |b| {
        b.iter(|| black_box(&large).filter(FilterKind::Sharpen))
    });

    group.finish();
}

fn bench_resample(c: &mut Criterion) {
    let mut group = c.benchmark_group("resample");
    let grid = gradient(256, 256);

    group.bench_function("downscale_half_256", |b| {
        b.iter(|| black_box(&grid).downscale(50, 50).unwrap())
    });

    group.bench_function("downscale_tenth_256", |b| {
        b.iter(|| black_box(&grid).downscale(10, 10).unwrap())
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_tone,
    bench_geometry,
    bench_convolution,
    bench_resample
);
criterion_main!(benches);
