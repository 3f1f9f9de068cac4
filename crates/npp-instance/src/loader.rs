// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Instance loading from disk.
//!
//! Two file formats are accepted:
//! - `*.json`: an [`InstanceManifest`] carrying the partition count and weights.
//! - anything else: a plain list of weights separated by whitespace, one or
//!   many per line. Text after `#` on a line is a comment. Plain lists carry
//!   no partition count, so the caller must supply one.

use crate::{Instance, InstanceError, InstanceManifest, Weight};
use serde::de::DeserializeOwned;
use std::path::Path;
use std::str::FromStr;

/// Loads instances from JSON manifests or plain weight lists.
///
/// # Example
/// ```no_run
/// use npp_instance::InstanceLoader;
/// use std::path::Path;
///
/// let instance = InstanceLoader::load::<i64>(Path::new("./weights.txt"), Some(4)).unwrap();
/// println!("{}", instance.summary());
/// ```
pub struct InstanceLoader;

impl InstanceLoader {
    /// Loads an instance from `path`.
    ///
    /// `num_partitions` overrides the manifest's partition count for JSON
    /// files and is required for plain weight lists.
    pub fn load<W>(path: &Path, num_partitions: Option<usize>) -> Result<Instance<W>, InstanceError>
    where
        W: Weight + DeserializeOwned + FromStr,
    {
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        let instance = if is_json {
            let mut manifest = InstanceManifest::<W>::from_file(path)?;
            if let Some(m) = num_partitions {
                tracing::debug!(
                    "overriding manifest partition count {} with {m}",
                    manifest.num_partitions,
                );
                manifest.num_partitions = m;
            }
            manifest.into_instance()?
        } else {
            let content = std::fs::read_to_string(path)?;
            Self::from_text(&content, num_partitions)?
        };

        tracing::info!("loaded '{}': {}", path.display(), instance.summary());
        Ok(instance)
    }

    /// Builds an instance from a plain weight list.
    pub fn from_text<W>(content: &str, num_partitions: Option<usize>) -> Result<Instance<W>, InstanceError>
    where
        W: Weight + FromStr,
    {
        let m = num_partitions.ok_or_else(|| {
            InstanceError::InvalidManifest(
                "plain weight lists need an explicit partition count".into(),
            )
        })?;
        let weights = Self::parse_weights(content)?;
        Instance::from_weights(m, weights)
    }

    /// Parses whitespace-separated weights, skipping `#` comments.
    pub fn parse_weights<W>(content: &str) -> Result<Vec<W>, InstanceError>
    where
        W: Weight + FromStr,
    {
        let mut weights = Vec::new();
        for (line_no, line) in content.lines().enumerate() {
            let data = line.split('#').next().unwrap_or("");
            for token in data.split_whitespace() {
                let w = token.parse::<W>().map_err(|_| InstanceError::InvalidWeight {
                    line: line_no + 1,
                    token: token.to_string(),
                })?;
                weights.push(w);
            }
        }
        Ok(weights)
    }
}
