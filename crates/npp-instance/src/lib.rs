// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # npp-instance
//!
//! The problem side of balanced number partitioning: `n` weighted items that
//! must be split into `m` groups with sums as close to each other as possible.
//!
//! - [`Weight`]: the numeric capabilities a weight type must provide
//!   (addition, subtraction, a total order, and an additive identity).
//! - [`Instance`]: the partition count plus the item weights, validated on
//!   construction and mutable weight-by-weight before solving.
//! - [`InstanceManifest`]: the JSON instance descriptor.
//! - [`InstanceLoader`]: loads instances from JSON manifests or plain
//!   whitespace-separated weight lists.
//! - [`gen_weights`]: deterministic weight generators for benchmarks and demos.
//!
//! # Example
//! ```
//! use npp_instance::Instance;
//!
//! let mut instance = Instance::from_weights(3, vec![1i64, 2, 3, 4, 5]).unwrap();
//! instance.set_weight(0, 7).unwrap();
//! assert_eq!(instance.total_weight(), 21);
//! assert!(instance.set_weight(5, 1).is_err());
//! ```

mod error;
pub mod gen_weights;
mod instance;
mod loader;
mod manifest;
mod weight;

pub use error::InstanceError;
pub use instance::Instance;
pub use loader::InstanceLoader;
pub use manifest::InstanceManifest;
pub use weight::Weight;
