// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Weight generators for benchmarks, property sweeps, and the CLI demo mode.

use crate::Weight;
use rand::distributions::uniform::SampleUniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generates `n` items that all weigh `value`.
pub fn uniform_weights<W: Weight>(n: usize, value: W) -> Vec<W> {
    vec![value; n]
}

/// Generates `n` weights drawn uniformly from `min..=max`.
///
/// The same `seed` always yields the same weights.
///
/// # Panics
/// Panics if `max < min`.
pub fn random_weights<W>(n: usize, min: W, max: W, seed: u64) -> Vec<W>
where
    W: Weight + SampleUniform,
{
    assert!(
        min <= max,
        "called `random_weights` with max ({max}) below min ({min})"
    );
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(min..=max)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_weights() {
        assert_eq!(uniform_weights(4, 7i64), vec![7, 7, 7, 7]);
        assert!(uniform_weights::<u32>(0, 1).is_empty());
    }

    #[test]
    fn test_random_weights_in_range() {
        let w = random_weights(500, 10i64, 20, 42);
        assert_eq!(w.len(), 500);
        assert!(w.iter().all(|&x| (10..=20).contains(&x)));
    }

    #[test]
    fn test_random_weights_deterministic() {
        assert_eq!(
            random_weights(64, 1u64, 1000, 7),
            random_weights(64, 1u64, 1000, 7)
        );
        assert_ne!(
            random_weights(64, 1u64, 1000, 7),
            random_weights(64, 1u64, 1000, 8)
        );
    }

    #[test]
    fn test_random_weights_degenerate_range() {
        assert_eq!(random_weights(3, 5i32, 5, 0), vec![5, 5, 5]);
    }

    #[test]
    #[should_panic(expected = "below min")]
    fn test_random_weights_inverted_range() {
        let _ = random_weights(3, 10i32, 1, 0);
    }
}
