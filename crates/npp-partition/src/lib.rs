// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # npp-partition
//!
//! Splits an [`Instance`] into `m` buckets with sums as even as possible,
//! using pluggable heuristics.
//!
//! # Strategies
//!
//! | Strategy | Idea | Cost | Typical spread |
//! |---|---|---|---|
//! | [`GreedyLpt`] | Heaviest item into lightest bucket | `O(n log n)` | Good |
//! | [`KarmarkarKarp`] | Merge the two most unbalanced partial partitions | `O(n (log n + m log m))` | Better |
//!
//! Neither is exact; NPP is NP-hard.
//!
//! # Trait-Based Extensibility
//!
//! Both heuristics implement [`PartitionStrategy`], so the runtime can pick
//! one by name and new heuristics slot in without touching it:
//!
//! ```ignore
//! struct RoundRobin;
//! impl<W: Weight> PartitionStrategy<W> for RoundRobin {
//!     fn name(&self) -> &str { "round-robin" }
//!     fn partition(&self, instance: &Instance<W>) -> Partition { /* ... */ }
//! }
//! ```
//!
//! # Example
//! ```
//! use npp_instance::Instance;
//! use npp_partition::Solve;
//!
//! let instance = Instance::from_weights(3, (1..=10).collect::<Vec<i64>>()).unwrap();
//! let greedy = instance.solve_greedy();
//! let kk = instance.solve_differencing();
//! assert_eq!(greedy.bucket_sums(instance.weights()), vec![19, 18, 18]);
//! assert_eq!(kk.spread(instance.weights()), 1);
//! ```

mod error;
mod partition;
pub mod strategy;

pub use error::PartitionError;
pub use partition::Partition;
pub use strategy::differencing::KarmarkarKarp;
pub use strategy::greedy::GreedyLpt;
pub use strategy::PartitionStrategy;

use npp_instance::{Instance, Weight};

/// Solver entry points on [`Instance`].
///
/// Both take `&self`, so an instance can be solved any number of times and
/// is never modified by a solve.
pub trait Solve<W: Weight> {
    /// Partitions with [`GreedyLpt`].
    fn solve_greedy(&self) -> Partition;

    /// Partitions with [`KarmarkarKarp`].
    fn solve_differencing(&self) -> Partition;
}

impl<W: Weight> Solve<W> for Instance<W> {
    fn solve_greedy(&self) -> Partition {
        GreedyLpt::new().partition(self)
    }

    fn solve_differencing(&self) -> Partition {
        KarmarkarKarp::new().partition(self)
    }
}

/// Runs both heuristics and keeps the better partition.
///
/// The partition with the smaller spread wins. On equal spread the
/// differencing result is returned.
pub fn solve_best<W: Weight>(instance: &Instance<W>) -> Partition {
    let weights = instance.weights();
    let greedy = instance.solve_greedy();
    let kk = instance.solve_differencing();
    let (greedy_spread, kk_spread) = (greedy.spread(weights), kk.spread(weights));

    if greedy_spread < kk_spread {
        tracing::info!(
            "greedy-lpt spread {greedy_spread} beats karmarkar-karp spread {kk_spread} → using greedy-lpt"
        );
        greedy
    } else {
        tracing::info!(
            "karmarkar-karp spread {kk_spread} vs greedy-lpt spread {greedy_spread} → using karmarkar-karp"
        );
        kk
    }
}
