// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `npp inspect` command: display an instance and its balance bounds.

use npp_instance::InstanceLoader;
use std::path::PathBuf;

const PREVIEW_ITEMS: usize = 12;

pub fn execute(instance: PathBuf, partitions: Option<usize>) -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║              npp · Instance Inspector                ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    let inst = InstanceLoader::load::<i64>(&instance, partitions).map_err(|e| {
        anyhow::anyhow!("failed to load instance from '{}': {e}", instance.display())
    })?;

    // ── Summary ────────────────────────────────────────────────
    let m = inst.num_partitions();
    let total = inst.total_weight();
    println!("  Instance: {}", instance.display());
    println!("  Items: {}", inst.num_items());
    println!("  Partitions: {m}");
    println!("  Total weight: {total}");
    println!("  Heaviest item: {}", inst.max_weight());

    let preview: Vec<String> = inst
        .weights()
        .iter()
        .take(PREVIEW_ITEMS)
        .map(i64::to_string)
        .collect();
    println!(
        "  Weights: [{}{}]",
        preview.join(", "),
        if inst.num_items() > PREVIEW_ITEMS { ", ..." } else { "" },
    );
    println!();

    // ── Balance Bounds ─────────────────────────────────────────
    // The heaviest bucket carries at least the mean. With no negative
    // weights it also carries at least the heaviest item.
    let ideal = total as f64 / m as f64;
    let mut lower = (total + m as i64 - 1).div_euclid(m as i64);
    if inst.weights().iter().all(|&w| w >= 0) {
        lower = lower.max(inst.max_weight());
    }

    println!("  Balance Bounds:");
    println!("   Ideal bucket sum:          {ideal:.2}");
    println!("   Heaviest bucket at least:  {lower}");
    if inst.has_surplus_partitions() {
        println!(
            "   Note: {} partitions for {} items, some buckets stay empty.",
            m,
            inst.num_items(),
        );
    }
    println!();

    Ok(())
}
