// ABOUTME: In-memory StateStore backed by a concurrent map
// ABOUTME: Used by tests and demos where persistence across runs is not needed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalPath Health

//! In-memory state store.

use super::StateStore;
use crate::errors::AppResult;
use dashmap::DashMap;

/// Thread-safe in-memory state store
#[derive(Debug, Default)]
pub struct MemoryStateStore {
    entries: DashMap<String, String>,
}

impl MemoryStateStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStateStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn set_get_remove_round_trip() {
        let store = MemoryStateStore::new();
        assert_eq!(store.get("auth").unwrap(), None);

        store.set("auth", "true").unwrap();
        assert_eq!(store.get("auth").unwrap().as_deref(), Some("true"));

        store.remove("auth").unwrap();
        assert_eq!(store.get("auth").unwrap(), None);

        // Removing an absent key is fine
        store.remove("auth").unwrap();
    }
}
