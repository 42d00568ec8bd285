//! Benchmark for parsing the fixture FIGlet font and compositing text.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use figcanvas::{render_colored, Canvas, FigFont};

const SMALL_FLF: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/tests/fonts/small.flf"
));

fn bench_parse(c: &mut Criterion) {
    c.bench_function("figfont_parse_small", |b| {
        b.iter(|| FigFont::from_bytes(black_box(SMALL_FLF.as_bytes())).unwrap())
    });
}

fn bench_render(c: &mut Criterion) {
    let font = FigFont::from_bytes(SMALL_FLF.as_bytes()).unwrap();
    c.bench_function("render_colored_small", |b| {
        b.iter(|| {
            let mut canvas = Canvas::default();
            render_colored(&mut canvas, &font, black_box("THE QUICK BROWN FOX"));
            canvas
        })
    });
}

criterion_group!(benches, bench_parse, bench_render);
criterion_main!(benches);
