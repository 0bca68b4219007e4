// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Arena-allocated, weight-annotated character trie.
//!
//! Nodes live in one `Vec` and refer to each other by index. Because terms
//! arrive sorted, every node is created after its parent and every edge is
//! appended in ascending label order, which gives us two properties for free:
//!
//! - **Children sort themselves**: `edges` is ordered by `char` without a sort.
//! - **Bottom-up is a reverse scan**: walking node indices backwards visits
//!   every child before its parent, so `subtree_max` is one pass.
//!
//! Each node also remembers `first`, the smallest [`TermId`] below it. Since
//! the term table is sorted by text, id order *is* text order, and `first`
//! is a lower bound on the text of anything in the subtree. Best-first search
//! uses `(subtree_max, first)` as its bound, which is what lets it emit
//! results already in final ranking order.

use crate::types::{TermId, TermTable};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

pub type NodeId = u32;

pub const ROOT: NodeId = 0;

#[derive(Debug, Clone, Default)]
struct Node {
    /// Outgoing edges, ascending by label.
    edges: Vec<(char, NodeId)>,
    /// Term ending exactly here.
    terminal: Option<TermId>,
    /// Largest weight of any term in this subtree.
    subtree_max: u64,
    /// Smallest term id in this subtree.
    first: TermId,
}

#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<Node>,
}

impl Default for Trie {
    fn default() -> Self {
        Self {
            nodes: vec![Node::default()],
        }
    }
}

impl Trie {
    /// Insert every term of `table` (already sorted) and annotate weights.
    pub fn build(table: &TermTable) -> Self {
        let mut trie = Trie::default();

        for (id, entry) in table.iter() {
            let mut node = ROOT;
            for c in entry.text.chars() {
                let next = match trie.nodes[node as usize].edges.last() {
                    Some(&(label, child)) if label == c => child,
                    _ => {
                        let child = trie.nodes.len() as NodeId;
                        trie.nodes.push(Node {
                            first: id,
                            ..Node::default()
                        });
                        trie.nodes[node as usize].edges.push((c, child));
                        child
                    }
                };
                node = next;
            }
            trie.nodes[node as usize].terminal = Some(id);
            trie.nodes[node as usize].subtree_max = entry.weight;
        }

        for i in (0..trie.nodes.len()).rev() {
            let best_child = trie.nodes[i]
                .edges
                .iter()
                .map(|&(_, c)| trie.nodes[c as usize].subtree_max)
                .max()
                .unwrap_or(0);
            let node = &mut trie.nodes[i];
            node.subtree_max = node.subtree_max.max(best_child);
        }

        trie
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Follow `c` out of `node`.
    #[inline]
    pub fn child(&self, node: NodeId, c: char) -> Option<NodeId> {
        let edges = &self.nodes[node as usize].edges;
        edges
            .binary_search_by(|&(label, _)| label.cmp(&c))
            .ok()
            .map(|i| edges[i].1)
    }

    /// Follow every character of `path` out of `node`.
    pub fn walk(&self, node: NodeId, path: &str) -> Option<NodeId> {
        path.chars().try_fold(node, |n, c| self.child(n, c))
    }

    #[inline]
    pub fn edges(&self, node: NodeId) -> &[(char, NodeId)] {
        &self.nodes[node as usize].edges
    }

    #[inline]
    pub fn terminal(&self, node: NodeId) -> Option<TermId> {
        self.nodes[node as usize].terminal
    }

    #[inline]
    pub fn subtree_max(&self, node: NodeId) -> u64 {
        self.nodes[node as usize].subtree_max
    }

    #[inline]
    pub fn first(&self, node: NodeId) -> TermId {
        self.nodes[node as usize].first
    }

    /// The `k` best terms below `start`, weight descending then text ascending.
    ///
    /// Best-first over `(subtree_max, first)`: a node's key ranks no worse
    /// than any term beneath it, so terms come off the heap in final order
    /// and we stop after the `k`-th.
    pub fn top_k(&self, table: &TermTable, start: NodeId, k: usize) -> Vec<TermId> {
        let mut out = Vec::with_capacity(k.min(64));
        if k == 0 {
            return out;
        }

        let mut heap = BinaryHeap::new();
        heap.push(Frontier {
            weight: self.subtree_max(start),
            rank: self.first(start),
            item: Item::Node(start),
        });

        while let Some(Frontier { item, .. }) = heap.pop() {
            match item {
                Item::Term(id) => {
                    out.push(id);
                    if out.len() == k {
                        break;
                    }
                }
                Item::Node(node) => {
                    if let Some(id) = self.terminal(node) {
                        let weight = table.get(id).map_or(0, |e| e.weight);
                        heap.push(Frontier {
                            weight,
                            rank: id,
                            item: Item::Term(id),
                        });
                    }
                    for &(_, child) in self.edges(node) {
                        heap.push(Frontier {
                            weight: self.subtree_max(child),
                            rank: self.first(child),
                            item: Item::Node(child),
                        });
                    }
                }
            }
        }
        out
    }

    /// Check that no child claims a larger subtree max than its parent.
    pub fn check_subtree_max(&self) -> bool {
        self.nodes.iter().all(|n| {
            n.edges
                .iter()
                .all(|&(_, c)| self.nodes[c as usize].subtree_max <= n.subtree_max)
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Item {
    Term(TermId),
    Node(NodeId),
}

/// Heap entry. Greater = explored sooner.
#[derive(Debug, PartialEq, Eq)]
struct Frontier {
    weight: u64,
    rank: TermId,
    item: Item,
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| other.rank.cmp(&self.rank))
            .then_with(|| match (self.item, other.item) {
                (Item::Term(_), Item::Node(_)) => Ordering::Greater,
                (Item::Node(_), Item::Term(_)) => Ordering::Less,
                (Item::Node(a), Item::Node(b)) => b.cmp(&a),
                (Item::Term(a), Item::Term(b)) => b.cmp(&a),
            })
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
