// Copyright 2025 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The R-tree engine: insertion with quadratic splits, condense-tree
//! deletion, and branch-and-bound nearest-neighbor search.

use alloc::vec;
use alloc::vec::Vec;

use crate::heap::{RankedHeap, SortOrder};
use crate::node::{Node, NodeId};
use crate::types::{Point, Rect};

/// Generational handle for stored rectangles.
///
/// Returned by [`RTree::insert`] and required by [`RTree::remove`]; a key
/// goes stale once its rectangle is removed, after which lookups return
/// `None` and removal returns `false`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct EntryKey(u32, u32);

impl EntryKey {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Entry keys are intentionally 32-bit; higher bits are truncated by design."
    )]
    const fn new(idx: usize, generation: u32) -> Self {
        Self(idx as u32, generation)
    }

    const fn idx(self) -> usize {
        self.0 as usize
    }

    const fn generation(self) -> u32 {
        self.1
    }
}

#[derive(Clone, Debug)]
struct Entry {
    rect: Rect,
    /// The level-0 wrapper node holding this rectangle.
    node: NodeId,
}

/// An in-memory n-dimensional R-tree.
///
/// Rectangles are inserted one at a time and addressed by the returned
/// [`EntryKey`]. The dimensionality of the index is fixed by the first
/// insertion and enforced on every operation until the index empties again.
///
/// Not safe for concurrent mutation; callers must serialize externally.
pub struct RTree {
    max_entries: usize,
    min_entries: usize,
    root: NodeId,
    nodes: Vec<Option<Node>>,
    node_free: Vec<usize>,
    entries: Vec<Option<Entry>>,
    entry_generations: Vec<u32>,
    entry_free: Vec<usize>,
    dims: Option<usize>,
    check_on_mutate: bool,
}

impl Default for RTree {
    fn default() -> Self {
        Self::new()
    }
}

impl RTree {
    /// Default node fan-out.
    pub const DEFAULT_MAX_ENTRIES: usize = 10;

    /// Create an empty tree with the default capacity bounds.
    pub fn new() -> Self {
        Self::with_capacity_bounds(Self::DEFAULT_MAX_ENTRIES, Self::DEFAULT_MAX_ENTRIES / 2)
    }

    /// Create an empty tree with explicit capacity bounds.
    ///
    /// `max_entries` is the node fan-out and must be at least 2 for splits
    /// to be meaningful. `min_entries` is clamped to `max_entries / 2` when
    /// 0 or larger than that.
    pub fn with_capacity_bounds(max_entries: usize, min_entries: usize) -> Self {
        assert!(
            max_entries >= 2,
            "a node must hold at least two entries to be splittable"
        );
        let min_entries = if min_entries < 1 || min_entries > max_entries / 2 {
            max_entries / 2
        } else {
            min_entries
        };
        let root_node = Node::branch(1);
        Self {
            max_entries,
            min_entries,
            root: NodeId::new(0),
            nodes: vec![Some(root_node)],
            node_free: Vec::new(),
            entries: Vec::new(),
            entry_generations: Vec::new(),
            entry_free: Vec::new(),
            dims: None,
            check_on_mutate: false,
        }
    }

    /// Run the full structural audit after every mutation, as a debug aid.
    /// The audit itself is a `debug_assert!` and compiles out of release
    /// builds.
    pub fn with_consistency_checking(mut self) -> Self {
        self.check_on_mutate = true;
        self
    }

    /// Number of stored rectangles.
    pub fn len(&self) -> usize {
        self.entries.len() - self.entry_free.len()
    }

    /// True when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Dimensionality of the index, 0 while empty.
    pub fn dims(&self) -> usize {
        self.dims.unwrap_or(0)
    }

    /// The bounding box of everything stored, or `None` while empty.
    pub fn bounds(&self) -> Option<Rect> {
        if self.is_empty() {
            return None;
        }
        Some(self.node(self.root).mbr.clone())
    }

    /// The rectangle stored under `key`, or `None` for a stale key.
    pub fn get(&self, key: EntryKey) -> Option<&Rect> {
        self.entry(key).map(|e| &e.rect)
    }

    /// Insert a rectangle, returning its handle.
    ///
    /// # Panics
    ///
    /// Panics when the rectangle's dimensionality differs from the index's
    /// established dimensionality.
    pub fn insert(&mut self, rect: Rect) -> EntryKey {
        assert!(rect.dim() >= 1, "cannot index a dimensionless rectangle");
        match self.dims {
            Some(d) => assert_eq!(rect.dim(), d, "rectangle dimension mismatch"),
            None => self.dims = Some(rect.dim()),
        }

        let key = self.alloc_entry(rect.clone());
        let wrapper = self.alloc_node(Node::wrapper(key, rect));
        self.entries[key.idx()]
            .as_mut()
            .expect("freshly allocated entry slot")
            .node = wrapper;

        self.insert_at(wrapper, 1);

        if self.check_on_mutate {
            debug_assert!(self.check_consistency(), "tree inconsistent after insert");
        }
        key
    }

    /// Remove the rectangle under `key`. Returns `false` for a stale or
    /// unknown key.
    pub fn remove(&mut self, key: EntryKey) -> bool {
        let Some(entry) = self.entry(key) else {
            return false;
        };
        let wrapper = entry.node;
        let leaf = self
            .node(wrapper)
            .parent
            .expect("entry wrapper has a leaf parent");

        self.detach(leaf, wrapper);
        self.free_node(wrapper);
        self.free_entry(key);
        self.condense_tree(leaf);

        // The tree shrinks while the root holds a single non-leaf subtree.
        while self.node(self.root).len() == 1 && self.node(self.root).level > 1 {
            let child = self.node(self.root).children[0];
            let old_root = self.root;
            self.free_node(old_root);
            self.root = child;
            self.node_mut(child).parent = None;
        }

        if self.is_empty() {
            self.dims = None;
        }
        if self.check_on_mutate {
            debug_assert!(self.check_consistency(), "tree inconsistent after remove");
        }
        true
    }

    /// The keys of all rectangles among the `k` nearest to `p`, ascending by
    /// distance. Rectangles tied with the k-th distance are all included, so
    /// the result may hold more than `k` keys.
    pub fn nearest_n(&self, p: &Point, k: usize) -> Vec<EntryKey> {
        let mut found = RankedHeap::new(SortOrder::Descending);
        if k > 0 && !self.is_empty() {
            let dims = self.dims.expect("non-empty index has dimensionality");
            assert_eq!(p.dim(), dims, "query point dimension mismatch");
            self.nearest_descend(p, k, self.root, &mut found);
        }

        found.set_order(SortOrder::Ascending);
        let mut out = Vec::with_capacity(found.len());
        while let Some(key) = found.pop() {
            out.push(key);
        }
        out
    }

    /// Whether the query rectangle intersects the bounds of anything stored.
    pub fn intersects(&self, r: &Rect) -> bool {
        if self.is_empty() {
            return false;
        }
        assert_eq!(r.dim(), self.dims(), "query rectangle dimension mismatch");
        self.node(self.root).mbr.intersects(r)
    }

    /// The keys of all stored rectangles fully contained by `r`.
    ///
    /// Iterative depth-first traversal with an explicit node/cursor stack;
    /// subtrees whose box misses the query are skipped whole.
    pub fn contains(&self, r: &Rect) -> Vec<EntryKey> {
        let mut result = Vec::new();
        if self.is_empty() {
            return result;
        }
        assert_eq!(r.dim(), self.dims(), "query rectangle dimension mismatch");

        let mut stack: Vec<NodeId> = vec![self.root];
        let mut cursor: Vec<usize> = vec![0];
        while let Some(&top) = stack.last() {
            let node = self.node(top);
            if !node.is_leaf() {
                let start = *cursor.last().expect("cursor tracks the node stack");
                let mut descended = false;
                for i in start..node.children.len() {
                    let child = node.children[i];
                    if r.intersects(&self.node(child).mbr) {
                        // Resume after this child once its subtree is done.
                        *cursor.last_mut().expect("cursor tracks the node stack") = i + 1;
                        stack.push(child);
                        cursor.push(0);
                        descended = true;
                        break;
                    }
                }
                if descended {
                    continue;
                }
            } else {
                for &child in &node.children {
                    let wrapper = self.node(child);
                    if r.contains(&wrapper.mbr) {
                        result.push(wrapper.entry.expect("level-0 child carries its entry key"));
                    }
                }
            }
            let _ = stack.pop();
            let _ = cursor.pop();
        }
        result
    }

    /// Full structural audit: level monotonicity, parent back-references,
    /// capacity bounds (root exempt), box tightness, and entry registration.
    /// O(n); a verification aid, not a production control-flow path.
    pub fn check_consistency(&self) -> bool {
        if self.nodes.get(self.root.get()).map(Option::is_some) != Some(true) {
            return false;
        }
        if self.node(self.root).parent.is_some() {
            return false;
        }
        self.check_node(self.root)
    }

    fn check_node(&self, n: NodeId) -> bool {
        let node = self.node(n);
        let mut ok = true;

        if node.is_wrapper() {
            if !node.children.is_empty() {
                return false;
            }
            // The wrapper must agree with its slot in the entry registry.
            return match node.entry.and_then(|key| self.entry(key)) {
                Some(entry) => entry.node == n && entry.rect == node.mbr,
                None => false,
            };
        }

        if node.entry.is_some() {
            ok = false;
        }
        if n != self.root {
            if node.len() < self.min_entries || node.len() > self.max_entries {
                ok = false;
            }
            if node.children.is_empty() {
                ok = false;
            }
        }

        let mut union = Rect::empty();
        for &c in &node.children {
            let child = self.node(c);
            if child.parent != Some(n) {
                ok = false;
            }
            if child.level + 1 != node.level {
                ok = false;
            }
            if !self.check_node(c) {
                ok = false;
            }
            union.enlarge(&child.mbr);
        }
        if node.children.is_empty() {
            if !node.mbr.is_empty() {
                ok = false;
            }
        } else if union != node.mbr {
            ok = false;
        }
        ok
    }

    // ---- arena plumbing ----------------------------------------------------

    fn node(&self, id: NodeId) -> &Node {
        self.nodes[id.get()].as_ref().expect("live node handle")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes[id.get()].as_mut().expect("live node handle")
    }

    fn alloc_node(&mut self, node: Node) -> NodeId {
        if let Some(idx) = self.node_free.pop() {
            self.nodes[idx] = Some(node);
            NodeId::new(idx)
        } else {
            self.nodes.push(Some(node));
            NodeId::new(self.nodes.len() - 1)
        }
    }

    fn free_node(&mut self, id: NodeId) {
        self.nodes[id.get()] = None;
        self.node_free.push(id.get());
    }

    fn entry(&self, key: EntryKey) -> Option<&Entry> {
        let slot = self.entries.get(key.idx())?.as_ref()?;
        (self.entry_generations[key.idx()] == key.generation()).then_some(slot)
    }

    fn alloc_entry(&mut self, rect: Rect) -> EntryKey {
        // The wrapper node is allocated right after; until then the slot
        // points nowhere.
        let node = NodeId::new(usize::MAX);
        if let Some(idx) = self.entry_free.pop() {
            let generation = self.entry_generations[idx].wrapping_add(1);
            self.entry_generations[idx] = generation;
            self.entries[idx] = Some(Entry { rect, node });
            EntryKey::new(idx, generation)
        } else {
            self.entries.push(Some(Entry { rect, node }));
            self.entry_generations.push(1);
            EntryKey::new(self.entries.len() - 1, 1)
        }
    }

    fn free_entry(&mut self, key: EntryKey) {
        self.entries[key.idx()] = None;
        self.entry_free.push(key.idx());
    }

    // ---- box maintenance ---------------------------------------------------

    // Add `child` under `parent`, growing boxes up the ancestor chain. The
    // walk stops at the first ancestor whose box is unchanged.
    fn attach(&mut self, parent: NodeId, child: NodeId) {
        debug_assert!(self.node(parent).len() < self.max_entries, "node over capacity");
        debug_assert_eq!(
            self.node(parent).level,
            self.node(child).level + 1,
            "child level must sit one below its parent"
        );
        let rect = self.node(child).mbr.clone();
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.push(child);
        self.enlarge_upward(parent, &rect);
    }

    // Unlink `child` from `parent` and rebuild boxes from `parent` upward.
    // A shrink cannot be inferred incrementally, so the parent's box is
    // recomputed from a full scan of the remaining children.
    fn detach(&mut self, parent: NodeId, child: NodeId) {
        let pos = self
            .node(parent)
            .children
            .iter()
            .position(|&c| c == child)
            .expect("child is attached to its parent");
        let _ = self.node_mut(parent).children.remove(pos);
        self.node_mut(child).parent = None;
        self.rebuild_mbr(parent);
    }

    fn enlarge_upward(&mut self, start: NodeId, rect: &Rect) {
        let mut cur = Some(start);
        while let Some(id) = cur {
            let node = self.node_mut(id);
            let before = node.mbr.clone();
            node.mbr.enlarge(rect);
            if node.mbr == before {
                break;
            }
            cur = node.parent;
        }
    }

    fn rebuild_mbr(&mut self, start: NodeId) {
        let mut cur = Some(start);
        while let Some(id) = cur {
            let mut fresh = Rect::empty();
            for &c in &self.node(id).children {
                fresh.enlarge(&self.node(c).mbr);
            }
            let node = self.node_mut(id);
            if node.mbr == fresh {
                break;
            }
            node.mbr = fresh;
            cur = node.parent;
        }
    }

    // ---- insertion ---------------------------------------------------------

    // Insert an existing node as an entry of some node at `level`. Level 1
    // receives fresh rectangles; higher levels receive subtrees orphaned by
    // condense_tree.
    fn insert_at(&mut self, child: NodeId, level: u32) {
        let rect = self.node(child).mbr.clone();
        let target = self.choose_node(&rect, level);

        let split = if self.node(target).len() < self.max_entries {
            self.attach(target, child);
            None
        } else {
            Some(self.split_node(target, child))
        };

        if let Some(sibling) = self.adjust_tree(target, split) {
            // The split reached the root: grow the tree one level.
            let old_root = self.root;
            let new_root = self.alloc_node(Node::branch(self.node(old_root).level + 1));
            self.root = new_root;
            self.attach(new_root, sibling);
            self.attach(new_root, old_root);
        }
    }

    // Descend from the root to the node at `level` whose box needs the least
    // enlargement to absorb `rect`, breaking ties by smaller area.
    fn choose_node(&self, rect: &Rect, level: u32) -> NodeId {
        let mut n = self.root;
        while self.node(n).level != level {
            let mut best: Option<NodeId> = None;
            let mut least = f64::MAX;
            for &c in &self.node(n).children {
                let child = &self.node(c).mbr;
                let enlargement = child.enlargement(rect);
                let better = match best {
                    None => true,
                    Some(b) => {
                        enlargement < least
                            || (enlargement == least && child.area() < self.node(b).mbr.area())
                    }
                };
                if better {
                    best = Some(c);
                    least = enlargement;
                }
            }
            n = best.expect("descent node has children");
        }
        n
    }

    // Ascend from `n` to the root, repairing boxes and pushing a split
    // sibling into the parent at each step. Returns a node only when the
    // root itself was split; the caller then grows the tree.
    fn adjust_tree(&mut self, mut n: NodeId, mut split: Option<NodeId>) -> Option<NodeId> {
        while n != self.root {
            let parent = self.node(n).parent.expect("non-root node has a parent");
            self.rebuild_mbr(parent);

            let promoted = if let Some(sibling) = split {
                if self.node(parent).len() < self.max_entries {
                    self.attach(parent, sibling);
                    None
                } else {
                    Some(self.split_node(parent, sibling))
                }
            } else {
                None
            };

            n = parent;
            split = promoted;
        }
        split
    }

    // ---- quadratic split ---------------------------------------------------

    // Split a full node that must also accept `extra`, distributing the
    // entries over the node and a fresh sibling per Guttman's quadratic
    // algorithm. Returns the sibling.
    fn split_node(&mut self, n: NodeId, extra: NodeId) -> NodeId {
        debug_assert_eq!(self.node(n).len(), self.max_entries, "split requires a full node");
        let level = self.node(n).level;
        let extra_rect = self.node(extra).mbr.clone();

        // Seed picking normalizes by the node's extent as if it already
        // covered the incoming entry.
        self.enlarge_upward(n, &extra_rect);
        let (seed_sibling, seed_original) = self.pick_seeds(n, extra);

        let mut pool = core::mem::take(&mut self.node_mut(n).children);
        pool.push(extra);
        self.node_mut(n).mbr = Rect::empty();
        let sibling = self.alloc_node(Node::branch(level));

        // `None` stands for the incoming entry, which sits last in the pool.
        let first = seed_sibling.unwrap_or(pool[pool.len() - 1]);
        let pos = pool
            .iter()
            .position(|&c| c == first)
            .expect("seed is drawn from the pool");
        let _ = pool.remove(pos);
        self.attach(sibling, first);

        let second = seed_original.unwrap_or(pool[pool.len() - 1]);
        let pos = pool
            .iter()
            .position(|&c| c == second)
            .expect("seed is drawn from the pool");
        let _ = pool.remove(pos);
        self.attach(n, second);

        let total = self.max_entries + 1;
        while !pool.is_empty() {
            // Once a group must absorb every leftover to reach min_entries,
            // assign them in bulk.
            if total - self.node(sibling).len() == self.min_entries {
                let rest = core::mem::take(&mut pool);
                for c in rest {
                    self.attach(n, c);
                }
                break;
            }
            if total - self.node(n).len() == self.min_entries {
                let rest = core::mem::take(&mut pool);
                for c in rest {
                    self.attach(sibling, c);
                }
                break;
            }

            let (idx, to_sibling) = self.pick_next(n, sibling, &pool);
            let c = pool.remove(idx);
            if to_sibling {
                self.attach(sibling, c);
            } else {
                self.attach(n, c);
            }
        }

        debug_assert_eq!(
            self.node(n).len() + self.node(sibling).len(),
            total,
            "entries lost during split"
        );
        sibling
    }

    // Pick the two most separated entries as group seeds: per dimension the
    // highest low side and the lowest high side, normalized by the node's
    // extent. `None` denotes the incoming entry itself.
    fn pick_seeds(&self, n: NodeId, extra: NodeId) -> (Option<NodeId>, Option<NodeId>) {
        let node = self.node(n);
        let extra_rect = &self.node(extra).mbr;
        let dim = extra_rect.dim();

        let mut max_separation = -1.0;
        let mut highest_low: Option<NodeId> = None;
        let mut lowest_high: Option<NodeId> = None;

        for axis in 0..dim {
            let mut best_low = extra_rect.lo().coord(axis);
            let mut best_low_id: Option<NodeId> = None;
            let mut best_high = extra_rect.hi().coord(axis);
            let mut best_high_id: Option<NodeId> = None;

            for &c in &node.children {
                let child = &self.node(c).mbr;
                let low = child.lo().coord(axis);
                let high = child.hi().coord(axis);
                if low >= best_low {
                    best_low = low;
                    best_low_id = Some(c);
                }
                if high <= best_high {
                    best_high = high;
                    best_high_id = Some(c);
                }
            }

            let len = node.mbr.extent(axis);
            let separation = if len == 0.0 {
                1.0
            } else {
                (best_low - best_high) / len
            };
            // Negative separation means overlap; such pairs still qualify
            // when nothing better exists.
            if separation >= max_separation {
                highest_low = best_low_id;
                lowest_high = best_high_id;
                max_separation = separation;
            }
        }

        if highest_low == lowest_high {
            // Every entry overlaps the incoming one; fall back to coordinate
            // extremes over distinct entries.
            highest_low = None;
            let mut min_low = extra_rect.lo().min_coord();
            lowest_high = Some(node.children[0]);
            let mut max_high = self.node(node.children[0]).mbr.hi().max_coord();
            for &c in &node.children[1..] {
                let low = self.node(c).mbr.lo().min_coord();
                let high = self.node(c).mbr.hi().max_coord();
                if low < min_low {
                    min_low = low;
                    highest_low = Some(c);
                } else if high > max_high {
                    max_high = high;
                    lowest_high = Some(c);
                }
            }
        }

        debug_assert_ne!(highest_low, lowest_high, "split seeds collapsed to one entry");
        (highest_low, lowest_high)
    }

    // Pick the pool entry with the greatest enlargement-cost difference
    // between the two groups and the group it should join: the cheaper one,
    // ties by smaller area, then by fewer entries.
    fn pick_next(&self, n: NodeId, sibling: NodeId, pool: &[NodeId]) -> (usize, bool) {
        let original_mbr = &self.node(n).mbr;
        let sibling_mbr = &self.node(sibling).mbr;

        let mut best_idx = 0;
        let mut to_sibling = false;
        let mut max_difference = f64::NEG_INFINITY;

        for (i, &c) in pool.iter().enumerate() {
            let rect = &self.node(c).mbr;
            let original_cost = original_mbr.enlargement(rect);
            let sibling_cost = sibling_mbr.enlargement(rect);
            let difference = (original_cost - sibling_cost).abs();
            if difference > max_difference {
                best_idx = i;
                to_sibling = if sibling_cost < original_cost {
                    true
                } else if original_cost < sibling_cost {
                    false
                } else if sibling_mbr.area() < original_mbr.area() {
                    true
                } else if original_mbr.area() < sibling_mbr.area() {
                    false
                } else {
                    self.node(sibling).len() < self.node(n).len()
                };
                max_difference = difference;
            }
        }
        (best_idx, to_sibling)
    }

    // ---- deletion repair ---------------------------------------------------

    // Ascend from a leaf to the root, detaching under-full nodes whole and
    // repairing boxes, then reinsert every child of every detached node at
    // its original level so leaves stay at uniform depth.
    fn condense_tree(&mut self, leaf: NodeId) {
        debug_assert_eq!(self.node(leaf).level, 1, "condense starts at a leaf");
        let mut eliminated: Vec<NodeId> = Vec::new();

        let mut n = leaf;
        while n != self.root {
            let parent = self.node(n).parent.expect("non-root node has a parent");
            if self.node(n).len() < self.min_entries {
                self.detach(parent, n);
                eliminated.push(n);
            }
            n = parent;
            self.rebuild_mbr(n);
        }

        // Highest eliminated node first; its children re-enter one level
        // below it, keeping the leaf depth uniform rather than flattening
        // subtrees to leaf level.
        while let Some(e) = eliminated.pop() {
            let level = self.node(e).level;
            let orphans = core::mem::take(&mut self.node_mut(e).children);
            self.free_node(e);
            for orphan in orphans {
                self.insert_at(orphan, level);
            }
        }
    }

    // ---- nearest neighbors -------------------------------------------------

    // Branch-and-bound descent. `found` ranks the best candidates so far in
    // descending order, so its top is the current k-th-best distance.
    fn nearest_descend(&self, p: &Point, k: usize, n: NodeId, found: &mut RankedHeap<EntryKey>) {
        let node = self.node(n);
        if !node.is_leaf() {
            // Active branch list: children ranked by MINDIST, worst on top.
            let mut abl = RankedHeap::new(SortOrder::Descending);
            for &c in &node.children {
                abl.insert(c, self.node(c).mbr.min_dist_sq(p));
            }

            // Downward pruning may discard every branch.
            self.prune_branches(k, found, &mut abl);
            while !abl.is_empty() {
                abl.set_order(SortOrder::Ascending);
                let child = abl.pop().expect("branch list is non-empty");
                self.nearest_descend(p, k, child, found);
                // Visiting the child may have tightened the bound; prune
                // the remaining branches again on the way up.
                abl.set_order(SortOrder::Descending);
                self.prune_branches(k, found, &mut abl);
            }
        } else {
            let mut furthest = f64::MAX;
            if found.len() >= k {
                furthest = found.peek_priority().expect("k is positive");
            }
            for &c in &node.children {
                let dist = self.node(c).mbr.min_dist_sq(p);
                if furthest >= dist {
                    found.insert(
                        self.node(c).entry.expect("level-0 child carries its entry key"),
                        dist,
                    );
                }
            }
            found.prune(k);
        }
    }

    // Drop branches that cannot beat the current k-th-best distance.
    fn prune_branches(&self, k: usize, found: &RankedHeap<EntryKey>, abl: &mut RankedHeap<NodeId>) {
        if found.len() >= k {
            let max_dist = found.peek_priority().expect("k is positive");
            while let Some(top) = abl.peek_priority() {
                if top > max_dist {
                    let _ = abl.pop();
                } else {
                    break;
                }
            }
        }
    }
}

impl core::fmt::Debug for RTree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let height = self.node(self.root).level;
        f.debug_struct("RTree")
            .field("len", &self.len())
            .field("dims", &self.dims)
            .field("height", &height)
            .field("max_entries", &self.max_entries)
            .field("min_entries", &self.min_entries)
            .field("arena_nodes", &self.nodes.len())
            .finish_non_exhaustive()
    }
}
