// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Generalised `m`-way Karmarkar-Karp (KK) differencing strategy.
//!
//! Classic two-way KK repeatedly replaces the two largest numbers by their
//! difference. The `m`-way form works on partial partitions instead: every
//! merged node holds `m` buckets sorted ascending by sum, labelled with its
//! spread (`sums[m-1] - sums[0]`). The two nodes with the largest labels are merged
//! by pairing bucket `p` of the first with bucket `m-1-p` of the second, so
//! heavy buckets absorb light ones:
//!
//! ```text
//! node1: [ 0,  9, 10]        node2: [ 0,  0,  8]
//!          │   │   │                  │   │   │
//!          │   │   └──────── + ───────┘   │   │
//!          │   └──────────── + ───────────┘   │
//!          └──────────────── + ───────────────┘
//! merged:  [ 8,  9, 10]  (re-sorted, label 2)
//! ```
//!
//! Each item starts as its own node, with the item alone in the last bucket
//! and label `w - 0`. Seeds skip the re-sort, so a negative item keeps a
//! negative label and is merged late. Merging continues until a single node remains; its buckets are
//! the answer.
//!
//! # Tie-breaking
//! Nodes with equal labels are taken oldest first: seed nodes carry their
//! item index as sequence number, merged nodes get `n, n+1, ...` in creation
//! order. Merged buckets with equal sums keep their pairing order (stable
//! sort). Together this makes the result a pure function of the weights.
//!
//! # Complexity
//! `n - 1` merges of `O(m log m)` each plus `O(log n)` queue work per merge.

use crate::strategy::PartitionStrategy;
use crate::Partition;
use npp_instance::{Instance, Weight};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Karmarkar-Karp differencing: merge the two most unbalanced partial
/// partitions, largest bucket with smallest, until one remains.
#[derive(Debug, Clone, Default)]
pub struct KarmarkarKarp;

impl KarmarkarKarp {
    pub fn new() -> Self {
        Self
    }
}

impl<W: Weight> PartitionStrategy<W> for KarmarkarKarp {
    fn name(&self) -> &str {
        "karmarkar-karp"
    }

    fn partition(&self, instance: &Instance<W>) -> Partition {
        tracing::debug!(
            "karmarkar-karp: {} items into {} buckets",
            instance.num_items(),
            instance.num_partitions(),
        );

        let root = differencing(instance.weights(), instance.num_partitions(), |a, b, merged| {
            tracing::trace!(
                "merge labels {a} + {b} -> {} (sums {:?})",
                merged.label,
                merged.sums,
            );
        });
        tracing::debug!("karmarkar-karp: final label {}", root.label);

        Partition::new(PartitionStrategy::<W>::name(self), root.parts)
    }
}

/// A partial partition of `m` buckets. Merged nodes keep them sorted
/// ascending by sum.
#[derive(Debug, Clone)]
pub(crate) struct Node<W> {
    /// Spread of this node: `sums[m-1] - sums[0]`.
    pub(crate) label: W,
    /// Creation order, used to break label ties.
    seq: usize,
    pub(crate) sums: Vec<W>,
    pub(crate) parts: Vec<Vec<usize>>,
}

impl<W: Weight> Node<W> {
    /// A single item alone in the last bucket, all others empty.
    ///
    /// Seeds are not re-sorted: a negative weight stays in the last bucket
    /// and gives the seed a negative label.
    pub(crate) fn seed(item: usize, weight: W, num_partitions: usize) -> Self {
        let mut sums = vec![W::zero(); num_partitions];
        let mut parts = vec![Vec::new(); num_partitions];
        sums[num_partitions - 1] = weight;
        parts[num_partitions - 1].push(item);
        let label = sums[num_partitions - 1] - sums[0];
        Self {
            label,
            seq: item,
            sums,
            parts,
        }
    }

    /// Sorts buckets ascending by sum (stable) and derives the label.
    fn from_buckets(seq: usize, mut buckets: Vec<(W, Vec<usize>)>) -> Self {
        buckets.sort_by(|a, b| a.0.cmp(&b.0));
        let (sums, parts): (Vec<W>, Vec<Vec<usize>>) = buckets.into_iter().unzip();
        let label = sums[sums.len() - 1] - sums[0];
        Self {
            label,
            seq,
            sums,
            parts,
        }
    }

    /// Pairs bucket `p` of `self` with bucket `m-1-p` of `other`.
    fn merge(self, mut other: Self, seq: usize) -> Self {
        let m = self.sums.len();
        debug_assert_eq!(m, other.sums.len(), "merging nodes of different widths");

        let buckets: Vec<(W, Vec<usize>)> = self
            .sums
            .into_iter()
            .zip(self.parts)
            .enumerate()
            .map(|(p, (sum, mut part))| {
                let q = m - 1 - p;
                part.append(&mut other.parts[q]);
                (sum + other.sums[q], part)
            })
            .collect();

        Self::from_buckets(seq, buckets)
    }
}

impl<W: Weight> Ord for Node<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        // 1. Largest label first
        self.label
            .cmp(&other.label)
            // 2. Oldest node first
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<W: Weight> PartialOrd for Node<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Weight> PartialEq for Node<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: Weight> Eq for Node<W> {}

/// Runs the differencing loop and returns the final node.
///
/// `on_merge` sees the labels of both popped nodes and their merge result,
/// in merge order.
///
/// # Panics
/// Panics if `weights` is empty or `num_partitions` is zero (both ruled out
/// by [`Instance`]), or if the loop ends with other than one node.
pub(crate) fn differencing<W, F>(weights: &[W], num_partitions: usize, mut on_merge: F) -> Node<W>
where
    W: Weight,
    F: FnMut(W, W, &Node<W>),
{
    let mut queue: BinaryHeap<Node<W>> = weights
        .iter()
        .enumerate()
        .map(|(item, &w)| Node::seed(item, w, num_partitions))
        .collect();
    let mut next_seq = weights.len();

    while queue.len() >= 2 {
        let first = queue.pop().expect("queue holds at least two nodes");
        let second = queue.pop().expect("queue holds at least two nodes");
        let (first_label, second_label) = (first.label, second.label);
        let merged = first.merge(second, next_seq);
        on_merge(first_label, second_label, &merged);
        next_seq += 1;
        queue.push(merged);
    }

    assert_eq!(queue.len(), 1, "differencing must end with exactly one node");
    queue.pop().expect("queue holds the final node")
}
