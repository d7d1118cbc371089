// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `understory_view3d`.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use glam::DVec3;
use kurbo::Point;
use understory_view3d::{OrbitAxis, OrbitViewport, OrbitViewportParams, PixelOrigin};

fn params() -> OrbitViewportParams {
    OrbitViewportParams::new(1920, 1080, 50.0)
        .with_rotation(-30.0, 30.0)
        .with_orbit_axis(OrbitAxis::Y)
        .with_look_at(DVec3::new(1.0, 2.0, 3.0))
        .with_clip_planes(0.1, 1000.0)
}

/// Deterministic cloud of points around the look-at point.
fn points(len: usize) -> Vec<DVec3> {
    let mut state = 0x2545_f491_u32;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        f64::from(state) / f64::from(u32::MAX) * 20.0 - 10.0
    };
    (0..len)
        .map(|_| DVec3::new(next(), next(), next()))
        .collect()
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("view3d/construct");
    let base = params();

    group.bench_function("new", |b| {
        b.iter(|| OrbitViewport::new(black_box(base.clone())).unwrap());
    });

    let vp = OrbitViewport::new(base).unwrap();
    group.bench_function("fit_bounds", |b| {
        b.iter(|| vp.fit_bounds(black_box(DVec3::new(8.0, 4.0, 6.0))).unwrap());
    });

    group.finish();
}

fn bench_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("view3d/project");
    let vp = OrbitViewport::new(params()).unwrap();

    for len in [1_024usize, 65_536] {
        let world = points(len);
        let pixels: Vec<DVec3> = world
            .iter()
            .map(|p| vp.project(*p, PixelOrigin::TopLeft))
            .collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("project", len), &world, |b, world| {
            b.iter(|| {
                for p in world {
                    black_box(vp.project(*p, PixelOrigin::TopLeft));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("unproject", len), &pixels, |b, pixels| {
            b.iter(|| {
                for p in pixels {
                    black_box(vp.unproject(*p, PixelOrigin::TopLeft));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("pixel_ray", len), &pixels, |b, pixels| {
            b.iter(|| {
                for p in pixels {
                    black_box(vp.pixel_ray(Point::new(p.x, p.y), PixelOrigin::TopLeft));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_construction, bench_projection);
criterion_main!(benches);
