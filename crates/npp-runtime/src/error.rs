// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the solve pipeline.

/// Errors that can occur while loading or solving an instance.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// A strategy returned a partition that does not cover the instance.
    #[error("invalid partition from '{strategy}': {source}")]
    InvalidPartition {
        strategy: String,
        #[source]
        source: npp_partition::PartitionError,
    },

    /// Instance loading or construction failed.
    #[error("instance error: {0}")]
    InstanceError(#[from] npp_instance::InstanceError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),
}
