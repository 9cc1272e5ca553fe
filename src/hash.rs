// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

use crate::Key;

/// Maps a key to its bucket, `key mod capacity`.
///
/// Uses the Euclidean remainder, so the result is always in `0..capacity`,
/// also for negative keys (`-3 mod 5 = 2`).
///
/// # Panics
///
/// Panics if `capacity` is zero; [`crate::Config`] rejects such tables.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn bucket_index(key: Key, capacity: usize) -> usize {
    debug_assert!(capacity > 0, "capacity should be non-zero");

    // NOTE: Capacities beyond i64::MAX cannot be allocated anyway
    let capacity = i64::try_from(capacity).unwrap_or(i64::MAX);

    // rem_euclid of a positive modulus is in 0..capacity, so the casts are lossless
    i64::from(key).rem_euclid(capacity) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn bucket_index_positive() {
        assert_eq!(2, bucket_index(12, 5));
        assert_eq!(2, bucket_index(22, 5));
        assert_eq!(2, bucket_index(37, 5));
        assert_eq!(4, bucket_index(99, 5));
        assert_eq!(0, bucket_index(0, 5));
    }

    #[test]
    fn bucket_index_single_bucket() {
        for key in [-100, -1, 0, 1, 7, Key::MAX, Key::MIN] {
            assert_eq!(0, bucket_index(key, 1));
        }
    }

    #[test]
    fn bucket_index_negative_wraps() {
        assert_eq!(2, bucket_index(-3, 5));
        assert_eq!(4, bucket_index(-1, 5));
        assert_eq!(0, bucket_index(-5, 5));
        assert_eq!(3, bucket_index(-12, 5));
    }

    #[test]
    fn bucket_index_extremes_in_range() {
        for capacity in [1, 2, 3, 7, 64, 1_000] {
            assert!(bucket_index(Key::MIN, capacity) < capacity);
            assert!(bucket_index(Key::MAX, capacity) < capacity);
        }
    }

    #[test]
    #[should_panic]
    fn bucket_index_zero_capacity_panics() {
        let _ = bucket_index(7, 0);
    }

    #[test]
    fn bucket_index_capacity_above_key_range() {
        let capacity = usize::try_from(u32::MAX).expect("should fit") + 10;
        assert_eq!(5, bucket_index(5, capacity));
        assert_eq!(capacity - 5, bucket_index(-5, capacity));
    }
}
