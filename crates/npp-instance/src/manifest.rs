// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! JSON instance manifest parsing.
//!
//! # Format
//! ```json
//! {
//!   "name": "ten-items",
//!   "num_partitions": 3,
//!   "weights": [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]
//! }
//! ```

use crate::{Instance, InstanceError, Weight};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Top-level instance manifest, deserialized from a `.json` file.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct InstanceManifest<W> {
    /// Human-readable instance name.
    #[serde(default = "default_name")]
    pub name: String,
    /// Number of target partitions (`m`).
    pub num_partitions: usize,
    /// Item weights in index order.
    pub weights: Vec<W>,
}

fn default_name() -> String {
    "unnamed".to_string()
}

impl<W> InstanceManifest<W>
where
    W: Weight + DeserializeOwned,
{
    /// Loads a manifest from a JSON file path.
    pub fn from_file(path: &Path) -> Result<Self, InstanceError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parses a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, InstanceError> {
        let manifest: Self = serde_json::from_str(json)?;
        Ok(manifest)
    }

    /// Validates that the manifest describes a solvable instance.
    ///
    /// Checks:
    /// - At least one partition is requested.
    /// - At least one weight is listed.
    pub fn validate(&self) -> Result<(), InstanceError> {
        if self.num_partitions == 0 {
            return Err(InstanceError::InvalidManifest(format!(
                "'{}' requests zero partitions",
                self.name
            )));
        }
        if self.weights.is_empty() {
            return Err(InstanceError::InvalidManifest(format!(
                "'{}' lists no weights",
                self.name
            )));
        }

        if self.weights.iter().all(|w| w.is_zero()) {
            tracing::warn!(
                "manifest '{}' has only zero weights; every partition is trivially balanced",
                self.name,
            );
        }

        Ok(())
    }

    /// Validates the manifest and converts it into an [`Instance`].
    pub fn into_instance(self) -> Result<Instance<W>, InstanceError> {
        self.validate()?;
        Instance::from_weights(self.num_partitions, self.weights)
    }
}
