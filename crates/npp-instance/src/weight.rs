// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The numeric bound shared by instances and solvers.

use num_traits::Zero;
use std::fmt::{Debug, Display};
use std::ops::{Add, Sub};

/// A trait alias for item weight types.
///
/// Both heuristics only ever add weights, subtract bucket sums from each
/// other, compare them, and start from the additive identity. Every signed
/// and unsigned integer primitive qualifies. Floating-point types do not,
/// since they lack a total order; wrap them in a totally ordered newtype
/// if needed.
///
/// With unsigned types, subtraction only ever happens as `max - min` over
/// bucket sums, so it cannot underflow.
pub trait Weight:
    Copy + Ord + Zero + Add<Output = Self> + Sub<Output = Self> + Debug + Display + Send + Sync
{
}

impl<T> Weight for T where
    T: Copy
        + Ord
        + Zero
        + Add<Output = T>
        + Sub<Output = T>
        + Debug
        + Display
        + Send
        + Sync
{
}

/// Sums a slice of weights, starting from the additive identity.
pub(crate) fn sum_weights<W: Weight>(weights: &[W]) -> W {
    weights.iter().fold(W::zero(), |acc, &w| acc + w)
}
