// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `npp compare` command: run every heuristic on one instance.
//!
//! The instance comes from a file or from seeded random weights, and the
//! results are printed as a table of spread, bucket extremes, and time.

use npp_instance::gen_weights::random_weights;
use npp_instance::{Instance, InstanceLoader};
use npp_runtime::{SolverConfig, SolverEngine};
use std::path::PathBuf;

const DEFAULT_PARTITIONS: usize = 2;

pub fn execute(
    instance: Option<PathBuf>,
    random: Option<usize>,
    partitions: Option<usize>,
    seed: u64,
    max_weight: i64,
) -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║             npp · Strategy Comparison                ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    let (instance_path, label, instance) =
        select_instance(instance, random, partitions, seed, max_weight)?;

    println!("  Instance: {label}");
    println!("   {}", instance.summary());
    println!();

    let config = SolverConfig {
        instance_path,
        num_partitions: Some(instance.num_partitions()),
        ..Default::default()
    };
    let engine = SolverEngine::from_instance(config, instance);
    let outputs = engine.compare()?;

    // ── Results Table ──────────────────────────────────────────
    println!(
        "  {:<16} {:>14} {:>14} {:>14} {:>10}",
        "Strategy", "Spread", "Max", "Min", "Time",
    );
    println!("  {}", "-".repeat(72));

    for output in &outputs {
        let m = &output.metrics;
        println!(
            "  {:<16} {:>14} {:>14} {:>14} {:>8.3}ms",
            m.strategy_name,
            m.spread,
            m.max_sum(),
            m.min_sum(),
            m.duration_ms(),
        );
    }
    println!();

    // ── Summary ────────────────────────────────────────────────
    // Later strategies win ties, so differencing is preferred at equal spread.
    if let Some(best) = outputs.iter().rev().min_by_key(|o| o.metrics.spread) {
        println!(
            "  Best: {} (spread {})",
            best.metrics.strategy_name, best.metrics.spread,
        );
        println!();
    }

    Ok(())
}

/// Picks the instance to compare on.
///
/// Returns the path recorded in the config, a display label, and the
/// instance. Random instances are recorded as `<random>`.
fn select_instance(
    instance: Option<PathBuf>,
    random: Option<usize>,
    partitions: Option<usize>,
    seed: u64,
    max_weight: i64,
) -> anyhow::Result<(PathBuf, String, Instance<i64>)> {
    match (instance, random) {
        (Some(path), _) => {
            let inst = InstanceLoader::load::<i64>(&path, partitions)?;
            let label = path.display().to_string();
            Ok((path, label, inst))
        }
        (None, Some(n)) => {
            if max_weight < 1 {
                anyhow::bail!("--max-weight must be at least 1, got {max_weight}");
            }
            let m = partitions.unwrap_or(DEFAULT_PARTITIONS);
            let inst = Instance::from_weights(m, random_weights(n, 1, max_weight, seed))?;
            let label = format!("random (n={n}, seed={seed}, max={max_weight})");
            Ok((PathBuf::from("<random>"), label, inst))
        }
        (None, None) => anyhow::bail!("either --instance or --random is required"),
    }
}
