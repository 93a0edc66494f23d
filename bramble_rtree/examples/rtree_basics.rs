// Copyright 2025 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of the Bramble R-tree: insert, query, and remove.

use bramble_rtree::{Point, RTree, Rect};

fn rect(lo: [f64; 2], hi: [f64; 2]) -> Rect {
    Rect::new(Point::new(lo.to_vec()), Point::new(hi.to_vec()))
}

fn main() {
    let mut tree = RTree::new();
    let k1 = tree.insert(rect([0.0, 0.0], [10.0, 10.0]));
    let _k2 = tree.insert(rect([5.0, 5.0], [15.0, 15.0]));
    let k3 = tree.insert(rect([40.0, 40.0], [41.0, 41.0]));

    println!("tree: {tree:?}");
    println!("bounds: {:?}", tree.bounds());

    // Which boxes fall entirely inside a query window?
    let contained = tree.contains(&rect([-1.0, -1.0], [20.0, 20.0]));
    println!("contained in window: {} of {}", contained.len(), tree.len());

    // Remove one box through its handle.
    assert!(tree.remove(k3));
    assert!(!tree.remove(k3), "handles go stale after removal");
    println!("after remove: len={}, bounds={:?}", tree.len(), tree.bounds());

    println!("k1 still resolves: {:?}", tree.get(k1));
}
