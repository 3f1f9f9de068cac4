// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for instance construction and loading.

/// Errors that can occur when building or loading an [`crate::Instance`].
#[derive(Debug, thiserror::Error)]
pub enum InstanceError {
    /// The requested partition count is zero.
    #[error("an instance needs at least one partition")]
    NoPartitions,

    /// The instance has no items to partition.
    #[error("an instance needs at least one item")]
    NoItems,

    /// A weight index lies outside `0..len`.
    #[error("item index {index} out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    /// The instance file could not be read.
    #[error("failed to read instance: {0}")]
    ManifestReadError(#[from] std::io::Error),

    /// The JSON manifest is malformed.
    #[error("failed to parse manifest: {0}")]
    ManifestParseError(#[from] serde_json::Error),

    /// A token in a plain weight list is not a valid weight.
    #[error("invalid weight '{token}' on line {line}")]
    InvalidWeight { line: usize, token: String },

    /// The manifest parsed but describes an unusable instance.
    #[error("invalid manifest: {0}")]
    InvalidManifest(String),
}
