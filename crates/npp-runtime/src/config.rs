// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Solver configuration loaded from TOML files or constructed programmatically.
//!
//! # TOML Format
//! ```toml
//! instance_path = "./instances/ten.json"
//! num_partitions = 3
//! strategy = "karmarkar-karp"
//! enable_profiling = true
//! ```

use npp_instance::{Instance, Weight};
use npp_partition::{solve_best, GreedyLpt, KarmarkarKarp, Partition, PartitionStrategy};
use std::path::{Path, PathBuf};

/// Configuration for the solve pipeline.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SolverConfig {
    /// Path to the instance file (`.json` manifest or plain weight list).
    pub instance_path: PathBuf,
    /// Partition count; overrides the manifest and is required for plain lists.
    pub num_partitions: Option<usize>,
    /// Strategy name: `"greedy-lpt"`, `"karmarkar-karp"`, or `"best"`.
    pub strategy: String,
    /// Whether to record solve durations.
    #[serde(default = "default_true")]
    pub enable_profiling: bool,
}

fn default_true() -> bool {
    true
}

impl SolverConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, super::RuntimeError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            super::RuntimeError::ConfigError(format!(
                "cannot read config '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, super::RuntimeError> {
        toml::from_str(toml_str).map_err(|e| {
            super::RuntimeError::ConfigError(format!("TOML parse error: {e}"))
        })
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, super::RuntimeError> {
        toml::to_string_pretty(self).map_err(|e| {
            super::RuntimeError::ConfigError(format!("TOML serialise error: {e}"))
        })
    }

    /// Creates the partition strategy specified by this config.
    pub fn create_strategy<W: Weight>(
        &self,
    ) -> Result<Box<dyn PartitionStrategy<W>>, super::RuntimeError> {
        match self.strategy.to_lowercase().as_str() {
            "greedy-lpt" | "greedy" => Ok(Box::new(GreedyLpt::new())),
            "karmarkar-karp" | "differencing" | "kk" => Ok(Box::new(KarmarkarKarp::new())),
            "best" => Ok(Box::new(BestOfBoth)),
            other => Err(super::RuntimeError::ConfigError(format!(
                "unknown strategy '{other}'; expected 'greedy-lpt', 'karmarkar-karp', or 'best'"
            ))),
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            instance_path: PathBuf::from("./instance.json"),
            num_partitions: None,
            strategy: "karmarkar-karp".to_string(),
            enable_profiling: true,
        }
    }
}

/// Runs both heuristics via [`solve_best`]. The returned partition keeps
/// the name of whichever heuristic won.
struct BestOfBoth;

impl<W: Weight> PartitionStrategy<W> for BestOfBoth {
    fn name(&self) -> &str {
        "best"
    }

    fn partition(&self, instance: &Instance<W>) -> Partition {
        solve_best(instance)
    }
}
