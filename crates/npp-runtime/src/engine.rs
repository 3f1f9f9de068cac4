// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The solver engine with a type-state–enforced pipeline.
//!
//! ```text
//! SolverEngine<W, Idle>
//!     │  .load_instance()   (or SolverEngine::from_instance)
//!     ▼
//! SolverEngine<W, Loaded>
//!     │  .solve() / .compare()
//!     ▼
//!   SolveOutput<W>
//! ```
//!
//! Each state transition consumes the old value and returns a new one,
//! making invalid state sequences a compile error.

use crate::{RuntimeError, SolveMetrics, SolverConfig};
use npp_instance::{Instance, InstanceLoader, Weight};
use npp_partition::{GreedyLpt, KarmarkarKarp, Partition, PartitionStrategy};
use serde::de::DeserializeOwned;
use std::str::FromStr;
use std::time::Instant;

// ── Type-state markers ─────────────────────────────────────────

/// Engine is created but no instance is loaded.
#[derive(Debug)]
pub struct Idle;

/// An instance is loaded and ready to solve.
#[derive(Debug)]
pub struct Loaded;

/// Sealed trait for engine states.
pub trait EngineState: std::fmt::Debug {}
impl EngineState for Idle {}
impl EngineState for Loaded {}

// ── Solve output ───────────────────────────────────────────────

/// The result of a single solve.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SolveOutput<W> {
    /// The validated partition.
    pub partition: Partition,
    /// Balance and timing metrics.
    pub metrics: SolveMetrics<W>,
}

// ── Engine ─────────────────────────────────────────────────────

/// The primary solver engine.
///
/// `S` is a type-state marker that enforces the pipeline ordering at
/// compile time: `.solve()` does not exist on an `Idle` engine.
///
/// # Example
/// ```no_run
/// use npp_runtime::{SolverConfig, SolverEngine};
///
/// # fn example() -> Result<(), npp_runtime::RuntimeError> {
/// let engine = SolverEngine::<i64>::new(SolverConfig::default()).load_instance()?;
/// let output = engine.solve()?;
/// println!("{}", output.metrics.summary());
/// # Ok(())
/// # }
/// ```
pub struct SolverEngine<W: Weight, S: EngineState = Idle> {
    config: SolverConfig,
    _state: std::marker::PhantomData<S>,
    instance: Option<Instance<W>>,
}

// ── Idle → Loaded ──────────────────────────────────────────────

impl<W: Weight> SolverEngine<W, Idle> {
    /// Creates a new engine from the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        tracing::info!("engine created with strategy '{}'", config.strategy);
        Self {
            config,
            _state: std::marker::PhantomData,
            instance: None,
        }
    }

    /// Loads the instance named by the config.
    /// Transitions to the `Loaded` state.
    pub fn load_instance(self) -> Result<SolverEngine<W, Loaded>, RuntimeError>
    where
        W: DeserializeOwned + FromStr,
    {
        let instance = InstanceLoader::load(&self.config.instance_path, self.config.num_partitions)?;
        Ok(Self::from_instance(self.config, instance))
    }

    /// Convenience: starts from an instance already in memory.
    pub fn from_instance(config: SolverConfig, instance: Instance<W>) -> SolverEngine<W, Loaded> {
        check_instance(&instance);
        SolverEngine {
            config,
            _state: std::marker::PhantomData,
            instance: Some(instance),
        }
    }
}

// ── Loaded: solve ──────────────────────────────────────────────

impl<W: Weight> SolverEngine<W, Loaded> {
    /// Returns the loaded instance.
    pub fn instance(&self) -> &Instance<W> {
        self.instance
            .as_ref()
            .expect("instance exists in Loaded state")
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solves the instance with the configured strategy.
    pub fn solve(&self) -> Result<SolveOutput<W>, RuntimeError> {
        let strategy = self.config.create_strategy::<W>()?;
        tracing::info!("using strategy: {}", strategy.name());

        let output = self.run(strategy.as_ref())?;
        tracing::info!("{}", output.metrics.summary());
        Ok(output)
    }

    /// Solves the instance with every built-in heuristic.
    ///
    /// Outputs come back in a fixed order: greedy LPT, then Karmarkar-Karp.
    pub fn compare(&self) -> Result<Vec<SolveOutput<W>>, RuntimeError> {
        let strategies: Vec<Box<dyn PartitionStrategy<W>>> =
            vec![Box::new(GreedyLpt::new()), Box::new(KarmarkarKarp::new())];

        strategies
            .iter()
            .map(|s| -> Result<SolveOutput<W>, RuntimeError> {
                let output = self.run(s.as_ref())?;
                tracing::info!("{}", output.metrics.summary());
                Ok(output)
            })
            .collect()
    }

    // ── Private helpers ────────────────────────────────────────

    fn run(&self, strategy: &dyn PartitionStrategy<W>) -> Result<SolveOutput<W>, RuntimeError> {
        let instance = self.instance();
        let start = Instant::now();
        let partition = strategy.partition(instance);
        let elapsed = start.elapsed();

        partition
            .validate(instance.num_partitions(), instance.num_items())
            .map_err(|source| RuntimeError::InvalidPartition {
                strategy: strategy.name().to_string(),
                source,
            })?;

        let duration = self.config.enable_profiling.then_some(elapsed);
        let metrics = SolveMetrics::new(instance, &partition, duration);
        Ok(SolveOutput { partition, metrics })
    }
}

/// Logs warnings for instances that solve trivially or oddly.
fn check_instance<W: Weight>(instance: &Instance<W>) {
    tracing::info!("{}", instance.summary());
    if instance.weights().iter().all(|w| *w == W::zero()) {
        tracing::warn!("all item weights are zero; every partition is balanced");
    }
    if instance.has_surplus_partitions() {
        tracing::warn!(
            "{} partitions for {} items; at least {} buckets stay empty",
            instance.num_partitions(),
            instance.num_items(),
            instance.num_partitions() - instance.num_items(),
        );
    }
}

impl<W: Weight, S: EngineState> std::fmt::Debug for SolverEngine<W, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SolverEngine")
            .field("state", &std::any::type_name::<S>())
            .field("strategy", &self.config.strategy)
            .field("has_instance", &self.instance.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config(strategy: &str) -> SolverConfig {
        SolverConfig {
            strategy: strategy.into(),
            ..Default::default()
        }
    }

    fn ten_items() -> Instance<i64> {
        Instance::from_weights(3, (1..=10).collect()).unwrap()
    }

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("npp-engine-{}-{name}", std::process::id()));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_from_instance() {
        let engine = SolverEngine::from_instance(config("greedy"), ten_items());
        assert_eq!(engine.instance().num_items(), 10);
        assert_eq!(engine.config().strategy, "greedy");
    }

    #[test]
    fn test_solve_greedy() {
        let engine = SolverEngine::from_instance(config("greedy-lpt"), ten_items());
        let output = engine.solve().unwrap();
        assert_eq!(output.partition.strategy_name, "greedy-lpt");
        assert_eq!(output.metrics.bucket_sums, vec![19, 18, 18]);
        assert_eq!(output.metrics.spread, 1);
        assert!(output.metrics.duration.is_some());
    }

    #[test]
    fn test_solve_differencing() {
        let engine = SolverEngine::from_instance(config("kk"), ten_items());
        let output = engine.solve().unwrap();
        assert_eq!(
            output.partition.buckets,
            vec![vec![1, 0, 9, 4], vec![2, 8, 5], vec![3, 7, 6]]
        );
        assert_eq!(output.metrics.bucket_sums, vec![18, 18, 19]);
    }

    #[test]
    fn test_solve_unknown_strategy() {
        let engine = SolverEngine::from_instance(config("annealing"), ten_items());
        assert!(matches!(engine.solve(), Err(RuntimeError::ConfigError(_))));
    }

    #[test]
    fn test_profiling_disabled() {
        let cfg = SolverConfig {
            enable_profiling: false,
            ..config("greedy")
        };
        let output = SolverEngine::from_instance(cfg, ten_items()).solve().unwrap();
        assert_eq!(output.metrics.duration, None);
    }

    #[test]
    fn test_compare_runs_both() {
        let engine = SolverEngine::from_instance(config("best"), ten_items());
        let outputs = engine.compare().unwrap();
        let names: Vec<&str> = outputs
            .iter()
            .map(|o| o.partition.strategy_name.as_str())
            .collect();
        assert_eq!(names, vec!["greedy-lpt", "karmarkar-karp"]);
        assert!(outputs.iter().all(|o| o.metrics.spread == 1));
    }

    #[test]
    fn test_load_instance_text() {
        let path = temp_file("weights.txt", "# demo\n1 2 3 4 5\n6 7 8 9 10\n");
        let cfg = SolverConfig {
            instance_path: path.clone(),
            num_partitions: Some(3),
            ..config("differencing")
        };
        let engine = SolverEngine::<i64>::new(cfg).load_instance().unwrap();
        assert_eq!(engine.instance(), &ten_items());
        assert_eq!(engine.solve().unwrap().metrics.spread, 1);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_instance_missing_partition_count() {
        let path = temp_file("no-m.txt", "4 5 6\n");
        let cfg = SolverConfig {
            instance_path: path.clone(),
            ..config("greedy")
        };
        let result = SolverEngine::<i64>::new(cfg).load_instance();
        assert!(matches!(result, Err(RuntimeError::InstanceError(_))));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_debug_format() {
        let engine = SolverEngine::<i64>::new(config("best"));
        let debug = format!("{engine:?}");
        assert!(debug.contains("SolverEngine"));
        assert!(debug.contains("best"));
        assert!(debug.contains("Idle"));
    }
}
