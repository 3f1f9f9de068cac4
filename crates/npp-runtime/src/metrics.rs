// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Solve metrics.
//!
//! [`SolveMetrics`] records how balanced a partition is and, when profiling
//! is enabled, how long the strategy took. These are what the CLI prints
//! when comparing strategies.

use npp_instance::{Instance, Weight};
use npp_partition::Partition;
use std::time::Duration;

/// Quality and timing of a single solve.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SolveMetrics<W> {
    /// Name of the strategy that produced the partition.
    pub strategy_name: String,
    /// Wall-clock solve time; `None` when profiling is disabled.
    pub duration: Option<Duration>,
    /// Number of items in the instance.
    pub num_items: usize,
    /// Number of buckets.
    pub num_partitions: usize,
    /// Sum of each bucket, in bucket order.
    pub bucket_sums: Vec<W>,
    /// Largest bucket sum minus the smallest.
    pub spread: W,
}

impl<W: Weight> SolveMetrics<W> {
    /// Computes metrics for `partition` over `instance`.
    pub fn new(instance: &Instance<W>, partition: &Partition, duration: Option<Duration>) -> Self {
        let weights = instance.weights();
        Self {
            strategy_name: partition.strategy_name.clone(),
            duration,
            num_items: instance.num_items(),
            num_partitions: partition.num_buckets(),
            bucket_sums: partition.bucket_sums(weights),
            spread: partition.spread(weights),
        }
    }

    /// Returns the heaviest bucket sum.
    pub fn max_sum(&self) -> W {
        self.bucket_sums.iter().copied().max().unwrap_or_else(W::zero)
    }

    /// Returns the lightest bucket sum.
    pub fn min_sum(&self) -> W {
        self.bucket_sums.iter().copied().min().unwrap_or_else(W::zero)
    }

    /// Returns the solve time in milliseconds, or zero when not profiled.
    pub fn duration_ms(&self) -> f64 {
        self.duration
            .map(|d| d.as_secs_f64() * 1000.0)
            .unwrap_or(0.0)
    }

    /// Returns a human-readable summary suitable for CLI output.
    pub fn summary(&self) -> String {
        let timing = match self.duration {
            Some(_) => format!("{:.3}ms", self.duration_ms()),
            None => "not profiled".to_string(),
        };
        format!(
            "Solve '{}': {} items into {} buckets, spread {} (max {}, min {}), {}",
            self.strategy_name,
            self.num_items,
            self.num_partitions,
            self.spread,
            self.max_sum(),
            self.min_sum(),
            timing,
        )
    }
}
