// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Integration tests: end-to-end solve pipeline.
//!
//! These tests exercise the complete flow from instance files on disk →
//! strategy selection → partitioning → validation → metrics, proving that
//! the three crates compose correctly and that the type-state transitions
//! work end-to-end.

use npp_instance::gen_weights::{random_weights, uniform_weights};
use npp_instance::{Instance, InstanceManifest};
use npp_partition::{solve_best, GreedyLpt, KarmarkarKarp, PartitionStrategy, Solve};
use npp_runtime::{RuntimeError, SolverConfig, SolverEngine};
use std::path::PathBuf;

// ── Helpers ────────────────────────────────────────────────────

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("npp-it-{}-{name}", std::process::id()))
}

fn write_temp(name: &str, content: &str) -> PathBuf {
    let path = temp_path(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn config(path: PathBuf, m: Option<usize>, strategy: &str) -> SolverConfig {
    SolverConfig {
        instance_path: path,
        num_partitions: m,
        strategy: strategy.into(),
        enable_profiling: true,
    }
}

fn strategies() -> Vec<Box<dyn PartitionStrategy<i64>>> {
    vec![Box::new(GreedyLpt::new()), Box::new(KarmarkarKarp::new())]
}

// ── Full Pipeline Tests ────────────────────────────────────────

#[test]
fn test_end_to_end_json_manifest() {
    let path = write_temp(
        "ten.json",
        r#"{ "name": "ten", "num_partitions": 3, "weights": [1, 2, 3, 4, 5, 6, 7, 8, 9, 10] }"#,
    );

    let engine = SolverEngine::<i64>::new(config(path.clone(), None, "karmarkar-karp"))
        .load_instance()
        .unwrap();
    let output = engine.solve().unwrap();

    assert_eq!(engine.instance().num_partitions(), 3);
    assert_eq!(output.metrics.bucket_sums, vec![18, 18, 19]);
    assert_eq!(output.metrics.spread, 1);
    assert_eq!(output.partition.total_items(), 10);
    std::fs::remove_file(path).ok();
}

#[test]
fn test_end_to_end_manifest_override() {
    let path = write_temp(
        "override.json",
        r#"{ "num_partitions": 5, "weights": [4, 4, 4, 4] }"#,
    );

    let engine = SolverEngine::<i64>::new(config(path.clone(), Some(2), "greedy"))
        .load_instance()
        .unwrap();
    let output = engine.solve().unwrap();

    assert_eq!(output.partition.num_buckets(), 2);
    assert_eq!(output.metrics.bucket_sums, vec![8, 8]);
    std::fs::remove_file(path).ok();
}

#[test]
fn test_end_to_end_text_list_unsigned() {
    let path = write_temp("list.txt", "8 7 6  # heavy\n5\n4\n");

    let engine = SolverEngine::<u64>::new(config(path.clone(), Some(2), "best"))
        .load_instance()
        .unwrap();
    let output = engine.solve().unwrap();

    assert_eq!(output.partition.strategy_name, "karmarkar-karp");
    assert_eq!(output.metrics.spread, 2);
    std::fs::remove_file(path).ok();
}

#[test]
fn test_missing_instance_file() {
    let result = SolverEngine::<i64>::new(config(temp_path("absent.json"), None, "greedy"))
        .load_instance();
    assert!(matches!(result, Err(RuntimeError::InstanceError(_))));
}

#[test]
fn test_config_file_drives_engine() {
    let instance_path = write_temp("cfg-weights.txt", "3 1 4 1 5 9 2 6\n");
    let cfg_path = write_temp(
        "npp.toml",
        &format!(
            "instance_path = {:?}\nnum_partitions = 2\nstrategy = \"kk\"\nenable_profiling = false\n",
            instance_path.display().to_string(),
        ),
    );

    let cfg = SolverConfig::from_file(&cfg_path).unwrap();
    let output = SolverEngine::<i64>::new(cfg)
        .load_instance()
        .unwrap()
        .solve()
        .unwrap();

    assert_eq!(output.partition.strategy_name, "karmarkar-karp");
    assert_eq!(output.metrics.duration, None);
    assert_eq!(output.metrics.bucket_sums.iter().sum::<i64>(), 31);

    std::fs::remove_file(instance_path).ok();
    std::fs::remove_file(cfg_path).ok();
}

// ── Property: Every Item Exactly Once ──────────────────────────

#[test]
fn test_partitions_always_valid() {
    // (n, m, max_weight)
    let cases: Vec<(usize, usize, i64)> = vec![
        (1, 1, 10),
        (1, 4, 10),
        (3, 7, 100),
        (10, 3, 10),
        (50, 2, 1_000),
        (200, 8, 1_000_000),
        (500, 31, 50),
    ];

    for (seed, &(n, m, max)) in cases.iter().enumerate() {
        let instance = Instance::from_weights(m, random_weights(n, 0, max, seed as u64)).unwrap();
        let total = instance.total_weight();

        for strategy in &strategies() {
            let partition = strategy.partition(&instance);
            partition.validate(m, n).unwrap_or_else(|e| {
                panic!("strategy '{}' failed for n={n}, m={m}: {e}", strategy.name())
            });

            let mut covered: Vec<usize> = partition.buckets.iter().flatten().copied().collect();
            covered.sort_unstable();
            assert_eq!(covered, (0..n).collect::<Vec<_>>());

            let sums = partition.bucket_sums(instance.weights());
            assert_eq!(
                sums.iter().sum::<i64>(),
                total,
                "strategy '{}' lost weight for n={n}, m={m}",
                strategy.name(),
            );
        }
    }
}

#[test]
fn test_engine_compare_matches_direct_calls() {
    let instance = Instance::from_weights(4, random_weights(120, 1i64, 500, 99)).unwrap();
    let engine = SolverEngine::from_instance(SolverConfig::default(), instance.clone());
    let outputs = engine.compare().unwrap();

    assert_eq!(outputs[0].partition, instance.solve_greedy());
    assert_eq!(outputs[1].partition, instance.solve_differencing());
    let best = solve_best(&instance).spread(instance.weights());
    assert_eq!(best, outputs.iter().map(|o| o.metrics.spread).min().unwrap());
}

#[test]
fn test_resolve_again_after_set_weight() {
    let mut instance = Instance::from_weights(2, uniform_weights(4, 1i64)).unwrap();
    assert_eq!(instance.solve_differencing().spread(instance.weights()), 0);

    instance.set_weight(3, 7).unwrap();
    for strategy in &strategies() {
        let p = strategy.partition(&instance);
        assert_eq!(p.bucket_sums(instance.weights()).iter().sum::<i64>(), 10);
        assert_eq!(p.spread(instance.weights()), 4, "{}", strategy.name());
    }
}

// ── Manifest Roundtrip ─────────────────────────────────────────

#[test]
fn test_manifest_into_engine() {
    let manifest: InstanceManifest<i64> =
        InstanceManifest::from_json(r#"{ "num_partitions": 2, "weights": [10, 10, 1] }"#).unwrap();
    assert_eq!(manifest.name, "unnamed");

    let engine = SolverEngine::from_instance(SolverConfig::default(), manifest.into_instance().unwrap());
    let output = engine.solve().unwrap();
    assert_eq!(output.metrics.spread, 1);
}

#[test]
fn test_config_toml_roundtrip() {
    let config = SolverConfig::default();
    let toml = config.to_toml().unwrap();
    let back = SolverConfig::from_toml(&toml).unwrap();
    assert_eq!(back.strategy, config.strategy);
    assert_eq!(back.instance_path, config.instance_path);
}
