// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # npp-runtime
//!
//! The solve pipeline that ties instance loading and the partitioning
//! heuristics together.
//!
//! The runtime takes:
//! - A [`SolverConfig`] naming the instance file and the strategy.
//! - An `Instance` loaded from disk by `npp-instance` (or handed in directly).
//! - A `PartitionStrategy` from `npp-partition`, selected by name.
//!
//! And produces a validated `Partition` together with [`SolveMetrics`].
//!
//! # Type-State Pipeline
//! ```text
//! SolverEngine<W, Idle> → SolverEngine<W, Loaded> → SolveOutput<W>
//! ```
//! Transitions are compile-time checked.

mod config;
mod engine;
mod error;
mod metrics;

pub use config::SolverConfig;
pub use engine::{EngineState, Idle, Loaded, SolveOutput, SolverEngine};
pub use error::RuntimeError;
pub use metrics::SolveMetrics;
