// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for partition validation.

/// Ways a [`crate::Partition`] can fail to cover an instance exactly once.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PartitionError {
    /// The partition does not have one bucket per target partition.
    #[error("expected {expected} buckets, got {actual}")]
    BucketCountMismatch { expected: usize, actual: usize },

    /// A bucket references an item that does not exist.
    #[error("item {item} out of range for {num_items} items")]
    ItemOutOfRange { item: usize, num_items: usize },

    /// An item was assigned to more than one bucket (or twice to one).
    #[error("item {item} assigned more than once")]
    DuplicateItem { item: usize },

    /// An item was not assigned to any bucket.
    #[error("item {item} not assigned to any bucket")]
    MissingItem { item: usize },
}
