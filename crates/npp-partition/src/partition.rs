// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Partition: the output shared by every strategy.
//!
//! A partition is an ordered list of `m` buckets, each an ordered list of
//! 0-based item indices into the instance's weights. Bucket sums are never
//! stored; they are derived on demand from the weights, so a partition holds
//! no reference back to the instance that produced it.

use crate::PartitionError;
use npp_instance::Weight;

/// An assignment of item indices to `m` ordered buckets.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Partition {
    /// Strategy name that produced this partition.
    pub strategy_name: String,
    /// Item indices per bucket.
    pub buckets: Vec<Vec<usize>>,
}

impl Partition {
    /// Creates a partition from finished buckets.
    pub fn new(strategy_name: &str, buckets: Vec<Vec<usize>>) -> Self {
        Self {
            strategy_name: strategy_name.to_string(),
            buckets,
        }
    }

    /// Returns the number of buckets.
    pub fn num_buckets(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the total number of items across all buckets.
    pub fn total_items(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Returns the item indices of bucket `index`, if it exists.
    pub fn bucket(&self, index: usize) -> Option<&[usize]> {
        self.buckets.get(index).map(Vec::as_slice)
    }

    /// Returns the index of the bucket holding `item`, if any.
    pub fn bucket_of(&self, item: usize) -> Option<usize> {
        self.buckets.iter().position(|b| b.contains(&item))
    }

    /// Consumes the partition and returns the raw buckets.
    pub fn into_buckets(self) -> Vec<Vec<usize>> {
        self.buckets
    }

    /// Returns the sum of each bucket's weights. Empty buckets sum to zero.
    ///
    /// # Panics
    /// Panics if a bucket references an index outside `weights`; call
    /// [`Partition::validate`] first for untrusted partitions.
    pub fn bucket_sums<W: Weight>(&self, weights: &[W]) -> Vec<W> {
        self.buckets
            .iter()
            .map(|b| b.iter().fold(W::zero(), |acc, &i| acc + weights[i]))
            .collect()
    }

    /// Returns the heaviest bucket sum (zero for a partition with no buckets).
    pub fn max_sum<W: Weight>(&self, weights: &[W]) -> W {
        self.bucket_sums(weights)
            .into_iter()
            .max()
            .unwrap_or_else(W::zero)
    }

    /// Returns the lightest bucket sum (zero for a partition with no buckets).
    pub fn min_sum<W: Weight>(&self, weights: &[W]) -> W {
        self.bucket_sums(weights)
            .into_iter()
            .min()
            .unwrap_or_else(W::zero)
    }

    /// Returns the largest bucket sum minus the smallest.
    pub fn spread<W: Weight>(&self, weights: &[W]) -> W {
        let sums = self.bucket_sums(weights);
        match (sums.iter().max(), sums.iter().min()) {
            (Some(&max), Some(&min)) => max - min,
            _ => W::zero(),
        }
    }

    /// Checks that the partition covers `0..num_items` exactly once with
    /// exactly `num_partitions` buckets.
    pub fn validate(&self, num_partitions: usize, num_items: usize) -> Result<(), PartitionError> {
        if self.buckets.len() != num_partitions {
            return Err(PartitionError::BucketCountMismatch {
                expected: num_partitions,
                actual: self.buckets.len(),
            });
        }

        let mut seen = vec![false; num_items];
        for &item in self.buckets.iter().flatten() {
            let slot = seen
                .get_mut(item)
                .ok_or(PartitionError::ItemOutOfRange { item, num_items })?;
            if *slot {
                return Err(PartitionError::DuplicateItem { item });
            }
            *slot = true;
        }

        match seen.iter().position(|&s| !s) {
            Some(item) => Err(PartitionError::MissingItem { item }),
            None => Ok(()),
        }
    }

    /// Renders one bucket as `w1 + w2 + ... = sum`, or `(empty) = 0`.
    pub fn describe_bucket<W: Weight>(&self, index: usize, weights: &[W]) -> String {
        let Some(bucket) = self.buckets.get(index) else {
            return String::new();
        };
        let sum = bucket.iter().fold(W::zero(), |acc, &i| acc + weights[i]);
        if bucket.is_empty() {
            return format!("(empty) = {sum}");
        }
        let terms: Vec<String> = bucket.iter().map(|&i| weights[i].to_string()).collect();
        format!("{} = {sum}", terms.join(" + "))
    }

    /// Returns a human-readable summary of the partition.
    pub fn summary<W: Weight>(&self, weights: &[W]) -> String {
        let sums = self.bucket_sums(weights);
        let sizes: Vec<usize> = self.buckets.iter().map(Vec::len).collect();
        format!(
            "Partition '{}': {} buckets, {} items, spread {}, sums {:?}, sizes {:?}",
            self.strategy_name,
            self.num_buckets(),
            self.total_items(),
            self.spread(weights),
            sums,
            sizes,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_partition() -> Partition {
        Partition::new("test", vec![vec![0, 3], vec![1], vec![2, 4]])
    }

    const WEIGHTS: [i64; 5] = [4, 7, 1, 2, 5];

    #[test]
    fn test_validate_ok() {
        sample_partition().validate(3, 5).unwrap();
    }

    #[test]
    fn test_validate_bucket_count() {
        assert_eq!(
            sample_partition().validate(2, 5),
            Err(PartitionError::BucketCountMismatch {
                expected: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn test_validate_missing() {
        let p = Partition::new("gap", vec![vec![0, 1], vec![3]]);
        assert_eq!(p.validate(2, 4), Err(PartitionError::MissingItem { item: 2 }));
    }

    #[test]
    fn test_validate_duplicate() {
        let p = Partition::new("dup", vec![vec![0, 1], vec![1]]);
        assert_eq!(p.validate(2, 2), Err(PartitionError::DuplicateItem { item: 1 }));
    }

    #[test]
    fn test_validate_out_of_range() {
        let p = Partition::new("oob", vec![vec![0], vec![9]]);
        assert_eq!(
            p.validate(2, 2),
            Err(PartitionError::ItemOutOfRange {
                item: 9,
                num_items: 2
            })
        );
    }

    #[test]
    fn test_validate_empty_buckets_allowed() {
        let p = Partition::new("sparse", vec![vec![], vec![0], vec![]]);
        p.validate(3, 1).unwrap();
    }

    #[test]
    fn test_bucket_sums_and_spread() {
        let p = sample_partition();
        assert_eq!(p.bucket_sums(&WEIGHTS), vec![6, 7, 6]);
        assert_eq!(p.spread(&WEIGHTS), 1);
        assert_eq!(p.max_sum(&WEIGHTS), 7);
        assert_eq!(p.min_sum(&WEIGHTS), 6);
    }

    #[test]
    fn test_empty_bucket_sums_to_zero() {
        let p = Partition::new("sparse", vec![vec![], vec![0]]);
        assert_eq!(p.bucket_sums(&[9u32]), vec![0, 9]);
        assert_eq!(p.spread(&[9u32]), 9);
    }

    #[test]
    fn test_accessors() {
        let p = sample_partition();
        assert_eq!(p.num_buckets(), 3);
        assert_eq!(p.total_items(), 5);
        assert_eq!(p.bucket(2), Some(&[2, 4][..]));
        assert_eq!(p.bucket(3), None);
        assert_eq!(p.bucket_of(3), Some(0));
        assert_eq!(p.bucket_of(8), None);
    }

    #[test]
    fn test_describe_bucket() {
        let p = Partition::new("render", vec![vec![0, 3], vec![]]);
        assert_eq!(p.describe_bucket(0, &WEIGHTS), "4 + 2 = 6");
        assert_eq!(p.describe_bucket(1, &WEIGHTS), "(empty) = 0");
        assert_eq!(p.describe_bucket(5, &WEIGHTS), "");
    }

    #[test]
    fn test_summary() {
        let s = sample_partition().summary(&WEIGHTS);
        assert!(s.contains("'test'"));
        assert!(s.contains("3 buckets"));
        assert!(s.contains("spread 1"));
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&sample_partition()).unwrap();
        assert!(json.contains("\"strategy_name\":\"test\""));
        assert!(json.contains("\"buckets\":[[0,3],[1],[2,4]]"));
    }
}
