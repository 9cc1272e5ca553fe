// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

use crate::{hash::bucket_index, Bucket, Config, Key};

/// A fixed-capacity hash table over integer keys, using separate chaining
///
/// Every key lives in the bucket at [`Table::bucket_index`]. Colliding keys
/// are appended to the bucket's chain, so lookups scan at most one chain.
///
/// The table never resizes and keys cannot be removed.
///
/// # Examples
///
/// ```
/// use chained_hash_table::Table;
///
/// let mut table = Table::new(5)?;
/// table.insert(12);
/// table.insert(22);
/// table.insert(37);
///
/// assert_eq!(
///     "Bucket 0: \nBucket 1: \nBucket 2: 12 22 37 \nBucket 3: \nBucket 4: \n",
///     table.to_string(),
/// );
/// #
/// # Ok::<(), chained_hash_table::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Table {
    buckets: Box<[Bucket]>,

    /// Amount of stored keys, including duplicates
    len: usize,
}

impl Table {
    /// Creates an empty table with `capacity` buckets.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] if the capacity is zero.
    pub fn new(capacity: usize) -> crate::Result<Self> {
        Config::new(capacity).build()
    }

    /// Allocates the buckets, the config must have been validated.
    pub(crate) fn with_config(config: &Config) -> Self {
        log::debug!("Allocating hash table with {} buckets", config.capacity);

        let buckets = std::iter::repeat_with(Bucket::default)
            .take(config.capacity)
            .collect();

        Self { buckets, len: 0 }
    }

    /// Returns the amount of buckets.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the amount of stored keys, counting duplicates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no key was inserted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the index of the bucket the key belongs to.
    #[must_use]
    pub fn bucket_index(&self, key: Key) -> usize {
        bucket_index(key, self.capacity())
    }

    /// Returns the bucket at the given index, or `None` if out of range.
    #[must_use]
    pub fn bucket(&self, index: usize) -> Option<&Bucket> {
        self.buckets.get(index)
    }

    /// Returns the length of the longest chain.
    #[must_use]
    pub fn max_chain_len(&self) -> usize {
        self.buckets.iter().map(|b| b.len()).max().unwrap_or_default()
    }

    /// Appends a key to the end of its bucket's chain.
    ///
    /// Duplicates are not detected, inserting a key twice stores it twice.
    pub fn insert(&mut self, key: Key) {
        let index = self.bucket_index(key);

        log::trace!("Inserting key {key} into bucket {index}");

        // bucket_index is always in 0..capacity
        if let Some(bucket) = self.buckets.get_mut(index) {
            bucket.push(key);
            self.len += 1;
        }
    }

    /// Returns `true` if the key was inserted before.
    #[must_use]
    pub fn contains(&self, key: Key) -> bool {
        self.bucket(self.bucket_index(key))
            .is_some_and(|bucket| bucket.contains(&key))
    }

    /// Prints every bucket and its chain to stdout, one line per bucket.
    pub fn print_table(&self) {
        print!("{self}");
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, bucket) in self.buckets.iter().enumerate() {
            writeln!(f, "Bucket {idx}: {bucket}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use test_log::test;

    fn chain(table: &Table, index: usize) -> Vec<Key> {
        table.bucket(index).expect("should exist").to_vec()
    }

    #[test]
    fn table_new_is_empty() -> crate::Result<()> {
        let table = Table::new(5)?;

        assert_eq!(5, table.capacity());
        assert_eq!(0, table.len());
        assert!(table.is_empty());
        assert_eq!(0, table.max_chain_len());

        for idx in 0..5 {
            assert!(chain(&table, idx).is_empty());
        }
        assert!(table.bucket(5).is_none());

        Ok(())
    }

    #[test]
    fn table_zero_capacity() {
        assert!(matches!(
            Table::new(0),
            Err(crate::Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn table_collisions_chain_in_order() -> crate::Result<()> {
        let mut table = Table::new(5)?;
        table.insert(12);
        table.insert(22);
        table.insert(37);

        assert_eq!(vec![12, 22, 37], chain(&table, 2));
        for idx in [0, 1, 3, 4] {
            assert!(chain(&table, idx).is_empty());
        }

        assert_eq!(3, table.len());
        assert_eq!(3, table.max_chain_len());

        Ok(())
    }

    #[test]
    fn table_contains() -> crate::Result<()> {
        let mut table = Table::new(5)?;
        table.insert(12);
        table.insert(22);
        table.insert(37);

        assert!(table.contains(22));
        assert!(!table.contains(99));
        assert!(!table.contains(2));

        Ok(())
    }

    #[test]
    fn table_duplicates() -> crate::Result<()> {
        let mut table = Table::new(5)?;
        table.insert(4);
        table.insert(4);

        assert_eq!(vec![4, 4], chain(&table, 4));
        assert_eq!(2, table.len());
        assert!(table.contains(4));

        Ok(())
    }

    #[test]
    fn table_negative_key_wraps() -> crate::Result<()> {
        let mut table = Table::new(5)?;
        table.insert(-3);

        assert_eq!(2, table.bucket_index(-3));
        assert_eq!(vec![-3], chain(&table, 2));
        assert!(table.contains(-3));
        assert!(!table.contains(3));
        assert!(!table.contains(2));

        Ok(())
    }

    #[test]
    fn table_insert_reaches_every_bucket() -> crate::Result<()> {
        let mut table = Table::new(4)?;

        for key in [-4, -3, -2, -1, 0, 1, 2, 3, Key::MIN, Key::MAX] {
            table.insert(key);
            assert!(table.contains(key));
        }

        assert_eq!(10, table.len());
        assert_eq!(vec![-4, 0, Key::MIN], chain(&table, 0));
        assert_eq!(vec![-3, 1], chain(&table, 1));
        assert_eq!(vec![-2, 2], chain(&table, 2));
        assert_eq!(vec![-1, 3, Key::MAX], chain(&table, 3));

        Ok(())
    }

    #[test]
    fn table_display() -> crate::Result<()> {
        let mut table = Table::new(3)?;
        assert_eq!("Bucket 0: \nBucket 1: \nBucket 2: \n", table.to_string());

        table.insert(4);
        table.insert(1);
        table.insert(3);
        assert_eq!("Bucket 0: 3 \nBucket 1: 4 1 \nBucket 2: \n", table.to_string());

        Ok(())
    }
}
