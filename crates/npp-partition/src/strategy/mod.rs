// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The [`PartitionStrategy`] trait and strategy implementations.

pub mod differencing;
pub mod greedy;

use crate::Partition;
use npp_instance::{Instance, Weight};

/// Trait for partition strategies.
///
/// Each strategy takes an instance and produces a [`Partition`] with exactly
/// `m` buckets covering every item once. Strategies are purely algorithmic
/// (no I/O) and never mutate the instance, so one strategy value can serve
/// many instances, including from several threads at once.
pub trait PartitionStrategy<W: Weight>: Send + Sync {
    /// Human-readable name of this strategy.
    fn name(&self) -> &str;

    /// Partitions the instance's items into `instance.num_partitions()` buckets.
    fn partition(&self, instance: &Instance<W>) -> Partition;
}
