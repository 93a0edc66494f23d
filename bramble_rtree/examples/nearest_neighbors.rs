// Copyright 2025 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nearest-neighbor queries: rank stored boxes by distance to a point.

use bramble_rtree::{Point, RTree, Rect};

fn unit_rect(x: f64, y: f64) -> Rect {
    Rect::new(Point::new(vec![x, y]), Point::new(vec![x + 1.0, y + 1.0]))
}

fn main() {
    // A 16x16 grid of unit boxes, spaced two units apart.
    let mut tree = RTree::with_capacity_bounds(8, 4);
    for y in 0..16 {
        for x in 0..16 {
            let _ = tree.insert(unit_rect(x as f64 * 2.0, y as f64 * 2.0));
        }
    }

    let query = Point::new(vec![13.2, 17.8]);
    for k in [1, 3, 8] {
        let hits = tree.nearest_n(&query, k);
        println!("{k} nearest to {:?}:", query.coords());
        for key in hits {
            let rect = tree.get(key).expect("hit is live");
            println!(
                "  {:?}..{:?} at distance {:.3}",
                rect.lo().coords(),
                rect.hi().coords(),
                rect.distance_to_point(&query)
            );
        }
    }

    // Ties at the k-th distance are all reported, so the result can exceed k.
    let center = Point::new(vec![15.5, 15.5]);
    let hits = tree.nearest_n(&center, 1);
    println!("asked for 1 near the grid center, got {} (ties kept)", hits.len());
}
