// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Greedy Longest-Processing-Time (LPT) partitioning strategy.
//!
//! Items are visited heaviest first, and each one goes to the bucket with
//! the smallest running sum at that moment. The running sums live in a
//! min-priority-queue of `(sum, bucket_id)` pairs:
//!
//! ```text
//! for item in items sorted by weight (descending):
//!     (sum, id) = queue.pop_min()
//!     buckets[id].push(item)
//!     queue.push((sum + weight(item), id))
//! ```
//!
//! # Determinism
//! Equal running sums are resolved by the lower bucket id. Equal item
//! weights keep ascending index order (the sort is stable), but callers
//! should not rely on the relative order of equal-weight items.
//!
//! # Complexity
//! `O(n log n)` for the sort plus `O(n log m)` for the queue.

use crate::strategy::PartitionStrategy;
use crate::Partition;
use npp_instance::{Instance, Weight};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Greedy LPT: heaviest item into the currently lightest bucket.
#[derive(Debug, Clone, Default)]
pub struct GreedyLpt;

impl GreedyLpt {
    pub fn new() -> Self {
        Self
    }
}

impl<W: Weight> PartitionStrategy<W> for GreedyLpt {
    fn name(&self) -> &str {
        "greedy-lpt"
    }

    fn partition(&self, instance: &Instance<W>) -> Partition {
        let m = instance.num_partitions();
        let weights = instance.weights();
        tracing::debug!(
            "greedy-lpt: {} items into {m} buckets",
            instance.num_items()
        );

        let mut buckets: Vec<Vec<usize>> = vec![Vec::new(); m];
        let mut queue: BinaryHeap<Reverse<(W, usize)>> =
            (0..m).map(|id| Reverse((W::zero(), id))).collect();

        for item in assignment_order(weights) {
            let Reverse((sum, id)) = queue
                .pop()
                .expect("queue holds one entry per bucket");
            let new_sum = sum + weights[item];
            tracing::trace!("item {item} (weight {}) -> bucket {id}, sum {new_sum}", weights[item]);

            buckets[id].push(item);
            queue.push(Reverse((new_sum, id)));
        }

        Partition::new(PartitionStrategy::<W>::name(self), buckets)
    }
}

/// Returns item indices ordered by weight, heaviest first.
pub(crate) fn assignment_order<W: Weight>(weights: &[W]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..weights.len()).collect();
    order.sort_by(|&a, &b| weights[b].cmp(&weights[a]));
    order
}
