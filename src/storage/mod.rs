// ABOUTME: Key-value state store trait backing all persisted application state
// ABOUTME: Replaces ambient local-storage style access with injected backends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalPath Health

//! # State Storage
//!
//! The persisted state of the core is four string-encoded keys (see
//! [`crate::constants::storage_keys`]). [`StateStore`] abstracts where they
//! live; the services receive a store by injection and never touch ambient
//! global state.

/// Single-file JSON store
pub mod file;
/// In-memory store for tests and demos
pub mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStateStore;

use crate::errors::AppResult;

/// String-keyed, string-valued persistent state.
///
/// Values are opaque strings, writes are wholesale, and absent keys read as
/// `None`.
pub trait StateStore: Send + Sync {
    /// Read a value, `None` when the key is absent
    ///
    /// # Errors
    /// Returns an error if the backing store cannot be read
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Write a value, replacing any prior one
    ///
    /// # Errors
    /// Returns an error if the write cannot be persisted
    fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove a key; removing an absent key is not an error
    ///
    /// # Errors
    /// Returns an error if the removal cannot be persisted
    fn remove(&self, key: &str) -> AppResult<()>;
}
