use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mobius::MobiusStrip;

fn bench_surface_area(c: &mut Criterion) {
    let mut group = c.benchmark_group("surface_area");
    for n in [50usize, 200, 400] {
        let strip = MobiusStrip::new(1.0, 0.4, n).expect("valid parameters");
        group.bench_with_input(BenchmarkId::from_parameter(n), &strip, |b, strip| {
            b.iter(|| black_box(strip.surface_area()))
        });
    }
    group.finish();
}

fn bench_edge_length(c: &mut Criterion) {
    let strip = MobiusStrip::new(1.0, 0.4, 200).expect("valid parameters");
    c.bench_function("edge_length_200", |b| b.iter(|| black_box(strip.edge_length())));
}

fn bench_construction(c: &mut Criterion) {
    c.bench_function("build_200", |b| {
        b.iter(|| black_box(MobiusStrip::new(1.0, 0.4, 200)))
    });
}

criterion_group!(benches, bench_surface_area, bench_edge_length, bench_construction);
criterion_main!(benches);
