// Copyright 2025 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use bramble_rtree::{Point, RTree as BrambleTree, Rect};
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};

use rstar::primitives::Rectangle;
use rstar::{AABB, RTree};

fn rect(lo: [f64; 2], hi: [f64; 2]) -> Rect {
    Rect::new(Point::new(lo.to_vec()), Point::new(hi.to_vec()))
}

fn gen_grid_rects(n: usize, cell: f64) -> Vec<Rect> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as f64 * cell;
            let y0 = y as f64 * cell;
            out.push(rect([x0, y0], [x0 + cell, y0 + cell]));
        }
    }
    out
}

fn to_rstar_rects(v: &[Rect]) -> Vec<Rectangle<[f64; 2]>> {
    v.iter()
        .map(|r| {
            Rectangle::from_corners(
                [r.lo().coord(0), r.lo().coord(1)],
                [r.hi().coord(0), r.hi().coord(1)],
            )
        })
        .collect()
}

fn bench_rtree_external_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree_external_compare");
    for &n in &[64usize, 128] {
        let rects = gen_grid_rects(n, 10.0);
        let query = rect([100.0, 100.0], [400.0, 400.0]);
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("bramble_build_contains_n{}", n), |b| {
            b.iter_batched(
                || rects.clone(),
                |rects| {
                    let mut tree = BrambleTree::new();
                    for r in rects {
                        let _ = tree.insert(r);
                    }
                    let hits = tree.contains(&query).len();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_query_bulk_n{}", n), |b| {
            b.iter_batched(
                || to_rstar_rects(&rects),
                |rectangles| {
                    let tree = RTree::bulk_load(rectangles);
                    let aabb = AABB::from_corners([100.0, 100.0], [400.0, 400.0]);
                    let hits: usize = tree.locate_in_envelope_intersecting(&aabb).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });

        let mut bramble = BrambleTree::new();
        for r in &rects {
            let _ = bramble.insert(r.clone());
        }
        let rstar_tree = RTree::bulk_load(to_rstar_rects(&rects));
        group.throughput(Throughput::Elements(1));

        group.bench_function(format!("bramble_nearest_k10_n{}", n), |b| {
            b.iter(|| black_box(bramble.nearest_n(&Point::new(vec![317.0, 283.0]), 10).len()))
        });

        group.bench_function(format!("rstar_nearest_k10_n{}", n), |b| {
            b.iter(|| {
                let hits: usize = rstar_tree
                    .nearest_neighbor_iter(&[317.0, 283.0])
                    .take(10)
                    .count();
                black_box(hits);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rtree_external_compare);
criterion_main!(benches);
