// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

use crate::Key;

/// A single slot of the table, holding the chain of keys that
/// map to the same bucket index
///
/// Keys are kept in insertion order; duplicates are allowed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bucket(Vec<Key>);

impl std::ops::Deref for Bucket {
    type Target = [Key];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Bucket {
    /// Appends a key to the end of the chain.
    pub(crate) fn push(&mut self, key: Key) {
        self.0.push(key);
    }
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for key in &self.0 {
            write!(f, "{key} ")?;
        }
        Ok(())
    }
}
