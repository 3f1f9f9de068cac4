// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # npp
//!
//! Command-line interface for the balanced number partitioning heuristics.
//!
//! ## Usage
//! ```bash
//! # Solve the built-in demo (weights 1..10 into 3 buckets)
//! npp solve
//!
//! # Solve a weight list into 4 buckets with Karmarkar-Karp
//! npp solve --instance ./weights.txt -m 4 --strategy karmarkar-karp
//!
//! # Compare both heuristics on 10 000 random weights
//! npp compare --random 10000 -m 8 --seed 7
//!
//! # Inspect an instance
//! npp inspect --instance ./instance.json
//! ```

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "npp",
    about = "Balanced m-way number partitioning with greedy LPT and Karmarkar-Karp",
    version,
    author
)]
struct Cli {
    /// Path to a TOML solver configuration (CLI arguments override it).
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Partition an instance and print each bucket.
    Solve {
        /// Instance file: `.json` manifest or whitespace-separated weights.
        #[arg(short, long)]
        instance: Option<std::path::PathBuf>,

        /// Number of partitions (required for plain weight lists).
        #[arg(short = 'm', long)]
        partitions: Option<usize>,

        /// Strategy: greedy-lpt, karmarkar-karp, best.
        #[arg(short, long)]
        strategy: Option<String>,

        /// Print the partition and metrics as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Run every heuristic on one instance and compare the spreads.
    Compare {
        /// Instance file to compare on.
        #[arg(short, long, conflicts_with = "random")]
        instance: Option<std::path::PathBuf>,

        /// Generate this many random weights instead of reading a file.
        #[arg(long)]
        random: Option<usize>,

        /// Number of partitions.
        #[arg(short = 'm', long)]
        partitions: Option<usize>,

        /// Seed for `--random`.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Largest weight drawn by `--random`.
        #[arg(long, default_value_t = 1000)]
        max_weight: i64,
    },

    /// Inspect an instance: sizes, totals, and balance bounds.
    Inspect {
        /// Instance file to inspect.
        #[arg(short, long)]
        instance: std::path::PathBuf,

        /// Number of partitions (required for plain weight lists).
        #[arg(short = 'm', long)]
        partitions: Option<usize>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging based on verbosity.
    commands::init_tracing(cli.verbose);

    match cli.command {
        Commands::Solve {
            instance,
            partitions,
            strategy,
            json,
        } => commands::solve::execute(cli.config, instance, partitions, strategy, json),
        Commands::Compare {
            instance,
            random,
            partitions,
            seed,
            max_weight,
        } => commands::compare::execute(instance, random, partitions, seed, max_weight),
        Commands::Inspect {
            instance,
            partitions,
        } => commands::inspect::execute(instance, partitions),
    }
}
