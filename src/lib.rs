// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

//! A K.I.S.S. hash table over integer keys, using separate chaining.
//!
//! ##### About
//!
//! This crate exports a [`Table`] with a fixed number of buckets (its capacity).
//! Each key is placed into the bucket at `key mod capacity`; keys that land in
//! the same bucket (collisions) are chained one after another in insertion order.
//!
//! Lookups first locate the bucket (_O(1)_), then scan its chain linearly
//! (_O(chain length)_). The table never grows, so the capacity should be chosen
//! with the expected key count in mind: the more keys pile up in one bucket, the
//! slower lookups into that bucket become.
//!
//! For anything beyond experimentation, the standard [`std::collections::HashMap`]
//! is the better choice: it hashes arbitrary keys, resizes itself and handles
//! collisions behind the scenes.
//!
//! ```
//! use chained_hash_table::Table;
//!
//! let mut table = Table::new(5)?;
//!
//! for key in [12, 22, 37] {
//!     table.insert(key);
//! }
//!
//! assert!(table.contains(22));
//! assert!(!table.contains(99));
//!
//! // All three keys collide in bucket 2
//! assert_eq!(&[12, 22, 37], &**table.bucket(2).expect("should exist"));
//! #
//! # Ok::<(), chained_hash_table::Error>(())
//! ```
//!
//! ##### Negative keys
//!
//! Bucket indexes are computed with the Euclidean remainder, so negative keys
//! wrap around into a valid bucket (`-3` lands in bucket `2` of a 5-bucket table).

#![deny(clippy::all, missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::indexing_slicing)]
#![warn(clippy::pedantic, clippy::nursery)]
#![warn(clippy::expect_used)]
#![allow(clippy::missing_const_for_fn)]
#![warn(clippy::multiple_crate_versions)]
#![allow(clippy::option_if_let_else)]
#![warn(clippy::redundant_feature_names)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

#[doc(hidden)]
pub type HashMap<K, V> = std::collections::HashMap<K, V, rustc_hash::FxBuildHasher>;

mod bucket;

/// Configuration
pub mod config;

mod error;

mod hash;

mod table;

/// User defined key
pub type Key = i32;

pub use {
    bucket::Bucket,
    config::Config,
    error::{Error, Result},
    table::Table,
};
