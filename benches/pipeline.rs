//! Benchmarks for the assetgen request pipeline.

use std::io::Cursor;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{ImageBuffer, ImageFormat, Rgba, RgbaImage};

use assetgen::generate::{ImageResizer, PngResizer};
use assetgen::{compose_prompt, slugify, AssetType, ProjectConfig, Size, StyleTemplate};

// -- Resolution benchmarks --

fn bench_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolution");

    let prompt = "a glowing login button with rounded corners for the dashboard 登录按钮";
    let project = ProjectConfig::from_template(StyleTemplate::Glass);

    group.bench_function("classify", |b| {
        b.iter(|| AssetType::classify(black_box(prompt)))
    });

    group.bench_function("compose_prompt", |b| {
        b.iter(|| compose_prompt(black_box(prompt), AssetType::Component, Some(&project)))
    });

    group.bench_function("slugify", |b| b.iter(|| slugify(black_box(prompt))));

    group.bench_function("size_parse", |b| {
        b.iter(|| Size::parse(black_box("1920x1080")).unwrap())
    });

    group.finish();
}

// -- Resize benchmarks --

fn png(width: u32, height: u32) -> Vec<u8> {
    let img: RgbaImage = ImageBuffer::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
    });
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png).unwrap();
    out.into_inner()
}

fn bench_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("resize");
    group.sample_size(20);

    let source = png(1024, 1024);

    group.bench_function("icon_64", |b| {
        b.iter(|| PngResizer.resize(black_box(&source), Size::new(64, 64)).unwrap())
    });

    group.bench_function("component_400x200", |b| {
        b.iter(|| {
            PngResizer
                .resize(black_box(&source), Size::new(400, 200))
                .unwrap()
        })
    });

    group.bench_function("same_size_reencode", |b| {
        b.iter(|| {
            PngResizer
                .resize(black_box(&source), Size::new(1024, 1024))
                .unwrap()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_resolution, bench_resize);
criterion_main!(benches);
