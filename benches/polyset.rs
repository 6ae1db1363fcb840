//! Benchmarks for boolean operations, offsetting, fracturing and containment.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use polyset::{LineChain, Point2, PolygonMode, PolygonSet};

fn square(x: i32, y: i32, size: i32) -> LineChain {
    LineChain::closed_from(vec![
        Point2::new(x, y),
        Point2::new(x + size, y),
        Point2::new(x + size, y + size),
        Point2::new(x, y + size),
    ])
}

/// A large plate perforated by a `grid` x `grid` array of square holes.
fn generate_perforated_plate(grid: i32) -> PolygonSet {
    let pitch = 100;
    let mut set = PolygonSet::new();
    set.add_outline(square(0, 0, grid * pitch + pitch));
    for row in 0..grid {
        for col in 0..grid {
            set.add_hole(square(pitch + col * pitch - 30, pitch + row * pitch - 30, 60), 0);
        }
    }
    set
}

/// A star-shaped outline with `spikes` points.
fn generate_star(spikes: usize) -> PolygonSet {
    let n = spikes * 2;
    let outline = (0..n)
        .map(|i| {
            let angle = i as f64 / n as f64 * 2.0 * std::f64::consts::PI;
            let radius = if i % 2 == 0 { 10_000.0 } else { 4_000.0 };
            Point2::from_f64(radius * angle.cos(), radius * angle.sin())
        })
        .collect();
    let mut set = PolygonSet::new();
    set.add_outline(outline);
    set
}

/// Overlapping squares along a diagonal.
fn generate_staircase(count: i32) -> PolygonSet {
    let mut set = PolygonSet::new();
    for i in 0..count {
        set.add_outline(square(i * 50, i * 50, 80));
    }
    set
}

fn bench_simplify(c: &mut Criterion) {
    let mut group = c.benchmark_group("simplify");

    for count in [10, 100, 1000] {
        let set = generate_staircase(count);
        group.throughput(Throughput::Elements(count as u64));

        for (name, mode) in [("fast", PolygonMode::Fast), ("strict", PolygonMode::StrictlySimple)] {
            group.bench_with_input(BenchmarkId::new(name, count), &set, |b, set| {
                b.iter(|| {
                    let mut set = set.clone();
                    set.simplify(black_box(mode));
                    set
                })
            });
        }
    }

    group.finish();
}

fn bench_fracture(c: &mut Criterion) {
    let mut group = c.benchmark_group("fracture");

    for grid in [4, 16, 32] {
        let set = generate_perforated_plate(grid);
        group.throughput(Throughput::Elements((grid * grid) as u64));

        group.bench_with_input(BenchmarkId::new("perforated_plate", grid), &set, |b, set| {
            b.iter(|| {
                let mut set = set.clone();
                set.fracture(PolygonMode::Fast);
                set
            })
        });
    }

    group.finish();
}

fn bench_inflate(c: &mut Criterion) {
    let mut group = c.benchmark_group("inflate");

    for spikes in [8, 64, 256] {
        let set = generate_star(spikes);
        group.throughput(Throughput::Elements(spikes as u64 * 2));

        group.bench_with_input(BenchmarkId::new("grow", spikes), &set, |b, set| {
            b.iter(|| {
                let mut set = set.clone();
                set.inflate(black_box(200), black_box(16));
                set
            })
        });
        group.bench_with_input(BenchmarkId::new("shrink", spikes), &set, |b, set| {
            b.iter(|| {
                let mut set = set.clone();
                set.inflate(black_box(-200), black_box(16));
                set
            })
        });
    }

    group.finish();
}

fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains");

    for grid in [4, 16, 32] {
        let set = generate_perforated_plate(grid);
        let points: Vec<Point2> = (0..1000)
            .map(|i| Point2::new((i * 37) % (grid * 100 + 100), (i * 53) % (grid * 100 + 100)))
            .collect();
        group.throughput(Throughput::Elements(points.len() as u64));

        group.bench_with_input(BenchmarkId::new("perforated_plate", grid), &set, |b, set| {
            b.iter(|| points.iter().filter(|&&p| set.contains(black_box(p))).count())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_simplify, bench_fracture, bench_inflate, bench_contains);
criterion_main!(benches);
