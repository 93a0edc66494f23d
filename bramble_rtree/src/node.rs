// Copyright 2025 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arena-resident tree nodes.
//!
//! Nodes are addressed by [`NodeId`] handles into the tree's slot arena. A
//! node exclusively owns its children; the parent link is a non-owning
//! back-reference used only for upward propagation, never for traversal.

use alloc::vec::Vec;

use crate::tree::EntryKey;
use crate::types::Rect;

/// Handle of a node slot in the tree's arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

impl NodeId {
    pub(crate) const fn new(i: usize) -> Self {
        Self(i)
    }

    pub(crate) const fn get(self) -> usize {
        self.0
    }
}

/// A tree node. `level` fixes the role: 0 wraps a stored rectangle, 1 is a
/// leaf whose children are wrappers, higher levels are internal.
///
/// Invariant: `mbr` equals the union of the children's boxes (for wrappers,
/// the stored rectangle itself). The tree repairs it on every mutation.
#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) level: u32,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) mbr: Rect,
    /// Stored-entry key, present exactly at level 0.
    pub(crate) entry: Option<EntryKey>,
}

impl Node {
    /// A branch node (leaf when `level == 1`) with no children yet.
    pub(crate) fn branch(level: u32) -> Self {
        debug_assert!(level >= 1, "level 0 is reserved for entry wrappers");
        Self {
            level,
            parent: None,
            children: Vec::new(),
            mbr: Rect::empty(),
            entry: None,
        }
    }

    /// A level-0 wrapper around a stored rectangle.
    pub(crate) fn wrapper(key: EntryKey, rect: Rect) -> Self {
        Self {
            level: 0,
            parent: None,
            children: Vec::new(),
            mbr: rect,
            entry: Some(key),
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.level == 1
    }

    pub(crate) fn is_wrapper(&self) -> bool {
        self.level == 0
    }

    pub(crate) fn len(&self) -> usize {
        self.children.len()
    }
}
