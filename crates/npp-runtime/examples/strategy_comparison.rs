// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Example: Compare partitioning strategies on seeded random instances.
//!
//! Greedy LPT and Karmarkar-Karp differencing trade a little solve time for
//! balance. This sweeps a few instance shapes, prints the spread each
//! heuristic reaches, then runs one instance through the engine pipeline.
//!
//! ```bash
//! cargo run -p npp-runtime --example strategy_comparison
//! ```

use npp_instance::gen_weights::random_weights;
use npp_instance::Instance;
use npp_partition::{GreedyLpt, KarmarkarKarp, PartitionStrategy};
use npp_runtime::{SolverConfig, SolverEngine};
use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialise tracing.
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .init();

    let strategies: Vec<Box<dyn PartitionStrategy<i64>>> =
        vec![Box::new(GreedyLpt::new()), Box::new(KarmarkarKarp::new())];

    // (items, partitions)
    let shapes = [(20, 2), (100, 4), (1_000, 8), (10_000, 32)];

    println!(
        "{:<16} {:>8} {:>6} {:>14} {:>12}",
        "Strategy", "Items", "m", "Spread", "Time (ms)",
    );
    println!("{}", "-".repeat(60));

    for (seed, &(n, m)) in shapes.iter().enumerate() {
        let instance = Instance::from_weights(m, random_weights(n, 1, 1_000_000, seed as u64))?;
        for strategy in &strategies {
            let start = Instant::now();
            let partition = strategy.partition(&instance);
            let ms = start.elapsed().as_secs_f64() * 1000.0;
            println!(
                "{:<16} {:>8} {:>6} {:>14} {:>12.3}",
                strategy.name(),
                n,
                m,
                partition.spread(instance.weights()),
                ms,
            );
        }
    }

    // Run the best-of-both strategy through the engine.
    println!("\n--- Solving 500 items into 6 buckets with 'best' ---\n");
    let instance = Instance::from_weights(6, random_weights(500, 1i64, 10_000, 42))?;
    let config = SolverConfig {
        instance_path: "<generated>".into(),
        strategy: "best".into(),
        ..Default::default()
    };

    let output = SolverEngine::from_instance(config, instance).solve()?;
    println!("Winner: {}", output.partition.strategy_name);
    println!("Metrics: {}", output.metrics.summary());

    Ok(())
}
