// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `npp solve` command: partition one instance and print the buckets.
//!
//! Runs the full type-state pipeline:
//! ```text
//! SolverEngine<Idle> → load_instance → <Loaded> → solve
//! ```
//! Without an instance file (from the CLI or the config) it solves a
//! built-in demo: weights `1..=10` into 3 buckets.

use npp_instance::Instance;
use npp_runtime::{SolveOutput, SolverConfig, SolverEngine};
use std::path::PathBuf;

const DEMO_PARTITIONS: usize = 3;

pub fn execute(
    config_path: Option<PathBuf>,
    instance: Option<PathBuf>,
    partitions: Option<usize>,
    strategy: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    // ── Configuration ──────────────────────────────────────────
    let has_config = config_path.is_some();
    let mut config = match config_path {
        Some(path) => SolverConfig::from_file(&path)?,
        None => SolverConfig::default(),
    };
    let use_demo = instance.is_none() && !has_config;
    if let Some(path) = instance {
        config.instance_path = path;
    }
    if partitions.is_some() {
        config.num_partitions = partitions;
    }
    if let Some(name) = strategy {
        config.strategy = name;
    }

    // ── Type-State Pipeline ────────────────────────────────────
    let engine = if use_demo {
        tracing::info!("no instance given, solving the built-in demo");
        let m = config.num_partitions.unwrap_or(DEMO_PARTITIONS);
        config.instance_path = PathBuf::from("<demo>");
        SolverEngine::from_instance(config, Instance::from_weights(m, (1..=10).collect())?)
    } else {
        SolverEngine::<i64>::new(config).load_instance()?
    };

    let output = engine.solve()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("╔══════════════════════════════════════════════════════╗");
    println!("║               npp · Partition Solver                 ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    println!("  Config:");
    println!("   Instance: {}", engine.config().instance_path.display());
    println!("   Strategy: {}", engine.config().strategy);
    println!("   {}", engine.instance().summary());
    println!();

    print_buckets(engine.instance(), &output);
    Ok(())
}

fn print_buckets(instance: &Instance<i64>, output: &SolveOutput<i64>) {
    let weights = instance.weights();
    let partition = &output.partition;

    println!("  Buckets ({}):", partition.strategy_name);
    for i in 0..partition.num_buckets() {
        println!("   [{i}] {}", partition.describe_bucket(i, weights));
    }
    println!();
    println!("  Spread: {}", output.metrics.spread);
    println!("  Metrics:");
    println!("   {}", output.metrics.summary());
    println!();
}
