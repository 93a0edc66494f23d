// Copyright 2025 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bramble_rtree::{Point, RTree, Rect};
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};

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

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_random_rects(count: usize, world: f64, rect_w: f64, rect_h: f64) -> Vec<Rect> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    for _ in 0..count {
        let x0 = rng.next_f64() * (world - rect_w).max(1.0);
        let y0 = rng.next_f64() * (world - rect_h).max(1.0);
        out.push(rect([x0, y0], [x0 + rect_w, y0 + rect_h]));
    }
    out
}

fn build_tree(rects: &[Rect]) -> RTree {
    let mut tree = RTree::new();
    for r in rects {
        let _ = tree.insert(r.clone());
    }
    tree
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree_build");
    for &n in &[32usize, 64] {
        let rects = gen_grid_rects(n, 10.0);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("grid_insert_n{}", n), |b| {
            b.iter_batched(
                || rects.clone(),
                |rects| black_box(build_tree(&rects)),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree_nearest");
    for &count in &[1_000usize, 10_000] {
        let rects = gen_random_rects(count, 1_000.0, 4.0, 4.0);
        let tree = build_tree(&rects);
        let mut rng = Rng::new(0xDEAD_BEEF);
        group.throughput(Throughput::Elements(1));
        for &k in &[1usize, 10] {
            group.bench_function(format!("nearest_k{}_count{}", k, count), |b| {
                b.iter(|| {
                    let p = Point::new(vec![
                        rng.next_f64() * 1_000.0,
                        rng.next_f64() * 1_000.0,
                    ]);
                    black_box(tree.nearest_n(&p, k).len())
                })
            });
        }
    }
    group.finish();
}

fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree_contains");
    for &n in &[32usize, 64] {
        let rects = gen_grid_rects(n, 10.0);
        let tree = build_tree(&rects);
        let query = rect([100.0, 100.0], [400.0, 400.0]);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("grid_contains_n{}", n), |b| {
            b.iter(|| black_box(tree.contains(&query).len()))
        });
    }
    group.finish();
}

fn bench_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree_churn");
    let rects = gen_random_rects(2_000, 500.0, 3.0, 3.0);
    group.throughput(Throughput::Elements(rects.len() as u64));
    group.bench_function("insert_remove_half", |b| {
        b.iter_batched(
            || rects.clone(),
            |rects| {
                let mut tree = RTree::new();
                let keys: Vec<_> = rects.iter().map(|r| tree.insert(r.clone())).collect();
                for key in keys.iter().step_by(2) {
                    let _ = tree.remove(*key);
                }
                black_box(tree.len())
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_nearest, bench_contains, bench_churn);
criterion_main!(benches);
