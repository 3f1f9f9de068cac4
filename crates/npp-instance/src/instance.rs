// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The partitioning instance: a partition count and a fixed-length weight vector.
//!
//! Construction fails fast on a zero partition count or an empty item set,
//! so every `Instance` that exists is solvable. The number of items is fixed
//! after construction; individual weights may be replaced any number of
//! times through [`Instance::set_weight`].

use crate::weight::{sum_weights, Weight};
use crate::InstanceError;
use std::fmt;

/// `m` target partitions and `n` item weights, with `m >= 1` and `n >= 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance<W: Weight> {
    num_partitions: usize,
    weights: Vec<W>,
}

impl<W: Weight> Instance<W> {
    /// Creates an instance of `num_items` items, all weighing zero.
    pub fn new(num_partitions: usize, num_items: usize) -> Result<Self, InstanceError> {
        if num_items == 0 {
            return Err(InstanceError::NoItems);
        }
        Self::from_weights(num_partitions, vec![W::zero(); num_items])
    }

    /// Creates an instance from an explicit weight vector; `n` is its length.
    pub fn from_weights(num_partitions: usize, weights: Vec<W>) -> Result<Self, InstanceError> {
        if num_partitions == 0 {
            return Err(InstanceError::NoPartitions);
        }
        if weights.is_empty() {
            return Err(InstanceError::NoItems);
        }
        Ok(Self {
            num_partitions,
            weights,
        })
    }

    /// Replaces the weight of item `index`.
    ///
    /// The instance is left untouched when `index` is out of range.
    pub fn set_weight(&mut self, index: usize, value: W) -> Result<(), InstanceError> {
        let len = self.weights.len();
        let slot = self
            .weights
            .get_mut(index)
            .ok_or(InstanceError::IndexOutOfRange { index, len })?;
        *slot = value;
        Ok(())
    }

    /// Returns the number of target partitions (`m`).
    pub fn num_partitions(&self) -> usize {
        self.num_partitions
    }

    /// Returns the number of items (`n`).
    pub fn num_items(&self) -> usize {
        self.weights.len()
    }

    /// Returns all item weights in index order.
    pub fn weights(&self) -> &[W] {
        &self.weights
    }

    /// Returns the weight of item `index`, if it exists.
    pub fn weight(&self, index: usize) -> Option<W> {
        self.weights.get(index).copied()
    }

    /// Returns the sum of all item weights.
    pub fn total_weight(&self) -> W {
        sum_weights(&self.weights)
    }

    /// Returns the heaviest item weight.
    pub fn max_weight(&self) -> W {
        // Non-empty by construction.
        self.weights
            .iter()
            .copied()
            .max()
            .unwrap_or_else(W::zero)
    }

    /// Returns `true` if more partitions than items were requested, which
    /// guarantees that some buckets stay empty.
    pub fn has_surplus_partitions(&self) -> bool {
        self.num_partitions > self.weights.len()
    }

    /// Returns a one-line description of the instance.
    pub fn summary(&self) -> String {
        format!(
            "Instance: {} items into {} partitions, total weight {}, heaviest item {}",
            self.num_items(),
            self.num_partitions,
            self.total_weight(),
            self.max_weight(),
        )
    }
}

impl<W: Weight> fmt::Display for Instance<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Instance (m = {}, n = {}):",
            self.num_partitions,
            self.weights.len()
        )?;
        for (i, w) in self.weights.iter().enumerate() {
            writeln!(f, "  [{i}] {w}")?;
        }
        Ok(())
    }
}
