// Copyright 2025 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bramble_rtree --heading-base-level=0

//! Bramble R-tree: an in-memory n-dimensional R-tree with k-nearest-neighbor
//! search.
//!
//! Bramble is a reusable building block for spatial retrieval over
//! axis-aligned rectangles of any fixed dimension.
//!
//! - Insert and remove rectangles addressed by stable [`EntryKey`] handles.
//! - Query the k nearest rectangles to a point, with exact distance bounds
//!   pruning the descent and equidistant ties preserved.
//! - Test the stored set against a query box with [`RTree::intersects`] and
//!   [`RTree::contains`].
//!
//! Insertion follows Guttman's quadratic split; deletion condenses the tree
//! by reinserting the children of under-full nodes at their original level,
//! so all leaves stay at uniform depth. The index lives entirely in main
//! memory, mutates synchronously, and leaves concurrency control to the
//! caller.
//!
//! # Example
//!
//! ```rust
//! use bramble_rtree::{Point, RTree, Rect};
//!
//! // Index a few boxes in the plane.
//! let mut tree = RTree::new();
//! let a = tree.insert(Rect::new(Point::new(vec![0.0, 0.0]), Point::new(vec![2.0, 2.0])));
//! let b = tree.insert(Rect::new(Point::new(vec![5.0, 5.0]), Point::new(vec![6.0, 7.0])));
//! let _c = tree.insert(Rect::new(Point::new(vec![9.0, 0.0]), Point::new(vec![10.0, 1.0])));
//!
//! // The nearest box to the origin is `a`, which covers it.
//! let hits = tree.nearest_n(&Point::new(vec![0.5, 0.5]), 1);
//! assert_eq!(hits, vec![a]);
//!
//! // Removal goes through the handle; stale handles report false.
//! assert!(tree.remove(b));
//! assert!(!tree.remove(b));
//! assert_eq!(tree.len(), 2);
//! ```
//!
//! # Dimensionality
//!
//! The first inserted rectangle fixes the index's dimensionality; every
//! later rectangle and query point must match it or the operation panics.
//! Emptying the index resets it. One index never mixes dimensions.
//!
//! # Float semantics
//!
//! Coordinates are `f64` and assumed free of NaNs. Distances used for
//! ranking are squared Euclidean distances; no precision is lost to square
//! roots on the hot path.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("bramble_rtree requires either the `std` or `libm` feature");

pub mod heap;
mod node;
pub mod tree;
pub mod types;

pub use heap::{RankedHeap, SortOrder};
pub use tree::{EntryKey, RTree};
pub use types::{Point, Rect};

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    fn rect(lo: &[f64], hi: &[f64]) -> Rect {
        Rect::new(Point::new(lo.to_vec()), Point::new(hi.to_vec()))
    }

    #[test]
    fn insert_query_remove_roundtrip() {
        let mut tree = RTree::new().with_consistency_checking();
        let keys: Vec<EntryKey> = (0..25)
            .map(|i| {
                let x = (i % 5) as f64 * 4.0;
                let y = (i / 5) as f64 * 4.0;
                tree.insert(rect(&[x, y], &[x + 2.0, y + 2.0]))
            })
            .collect();
        assert_eq!(tree.len(), 25);
        assert_eq!(tree.dims(), 2);
        assert_eq!(tree.bounds(), Some(rect(&[0.0, 0.0], &[18.0, 18.0])));

        let hits = tree.nearest_n(&Point::new(vec![9.0, 9.0]), 1);
        assert_eq!(hits.len(), 1);
        assert_eq!(tree.get(hits[0]), Some(&rect(&[8.0, 8.0], &[10.0, 10.0])));

        for key in keys {
            assert!(tree.remove(key));
        }
        assert!(tree.is_empty());
        assert_eq!(tree.bounds(), None);
        assert!(tree.check_consistency());
    }

    #[test]
    fn three_dimensional_index() {
        let mut tree = RTree::with_capacity_bounds(4, 2).with_consistency_checking();
        for z in 0..4 {
            for y in 0..4 {
                for x in 0..4 {
                    let lo = [x as f64 * 2.0, y as f64 * 2.0, z as f64 * 2.0];
                    let hi = [lo[0] + 1.0, lo[1] + 1.0, lo[2] + 1.0];
                    let _ = tree.insert(rect(&lo, &hi));
                }
            }
        }
        assert_eq!(tree.len(), 64);
        assert_eq!(tree.dims(), 3);
        assert!(tree.check_consistency());

        let hits = tree.nearest_n(&Point::new(vec![0.0, 0.0, 0.0]), 1);
        assert_eq!(tree.get(hits[0]), Some(&rect(&[0.0, 0.0, 0.0], &[1.0, 1.0, 1.0])));

        let contained = tree.contains(&rect(&[0.0, 0.0, 0.0], &[3.5, 3.5, 3.5]));
        assert_eq!(contained.len(), 8);
    }
}
