// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

use crate::{Error, Table};

/// Bucket count used by [`Config::default`]
pub const DEFAULT_CAPACITY: usize = 16;

/// Table configuration builder
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Amount of buckets
    ///
    /// Fixed for the lifetime of the table.
    #[doc(hidden)]
    pub capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl Config {
    /// Initializes a new config with the given bucket count.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Sets the amount of buckets.
    ///
    /// Default = 16
    #[must_use]
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub(crate) fn validate(&self) -> crate::Result<()> {
        if self.capacity == 0 {
            return Err(Error::InvalidConfiguration("capacity must be at least 1"));
        }
        Ok(())
    }

    /// Builds an empty table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the capacity is zero.
    pub fn build(self) -> crate::Result<Table> {
        self.validate()?;
        Ok(Table::with_config(&self))
    }
}
