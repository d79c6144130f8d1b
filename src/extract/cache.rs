//! Identity cache — one canonical node per underlying source entity.
//!
//! Each entity kind has its own cache mapping the frontend identity to the
//! node built for it. Callers insert a freshly allocated node *before*
//! populating its fields, so a recursive reference met while populating
//! resolves to the same node instead of recursing forever.

use std::hash::Hash;

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::graph::NodeId;

#[derive(Debug, Clone)]
pub struct IdentityCache<K> {
    /// Insertion order doubles as the entity's sequential ordinal.
    nodes: IndexMap<K, NodeId>,
}

impl<K> Default for IdentityCache<K> {
    fn default() -> Self {
        Self {
            nodes: IndexMap::new(),
        }
    }
}

impl<K: Hash + Eq + Copy> IdentityCache<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: K) -> Option<NodeId> {
        self.nodes.get(&key).copied()
    }

    /// Register the canonical node for `key`. The first registration wins;
    /// the canonical node is returned either way.
    pub fn insert(&mut self, key: K, node: NodeId) -> NodeId {
        match self.nodes.entry(key) {
            Entry::Occupied(existing) => *existing.get(),
            Entry::Vacant(slot) => *slot.insert(node),
        }
    }

    /// Sequential id assigned to `key` on first encounter.
    pub fn ordinal(&self, key: K) -> Option<usize> {
        self.nodes.get_index_of(&key)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Canonical nodes in first-encounter order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.values().copied()
    }
}
