// ABOUTME: Demo session flag stored in the state store
// ABOUTME: Single boolean gate over the persisted auth key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalPath Health

//! Session flag management.
//!
//! The dashboards gate on a single persisted boolean, routed through the
//! injected [`StateStore`] instead of ambient globals. There are no tokens
//! and no credentials - this is a demo flag, not an authentication system.

use crate::constants::storage_keys;
use crate::errors::AppResult;
use crate::storage::StateStore;
use std::sync::Arc;
use tracing::info;

/// Session gate over the persisted `auth` flag
pub struct SessionGate {
    store: Arc<dyn StateStore>,
}

impl SessionGate {
    /// Create a gate over the given store
    #[must_use]
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self { store }
    }

    /// Whether a session is active
    ///
    /// # Errors
    /// Returns an error if the store cannot be read
    pub fn is_authenticated(&self) -> AppResult<bool> {
        Ok(self.store.get(storage_keys::AUTH)?.as_deref() == Some("true"))
    }

    /// Mark the session active
    ///
    /// # Errors
    /// Returns an error if the flag cannot be persisted
    pub fn log_in(&self) -> AppResult<()> {
        self.store.set(storage_keys::AUTH, "true")?;
        info!("session started");
        Ok(())
    }

    /// Clear the session flag
    ///
    /// # Errors
    /// Returns an error if the flag cannot be removed from the store
    pub fn log_out(&self) -> AppResult<()> {
        self.store.remove(storage_keys::AUTH)?;
        info!("session ended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::storage::MemoryStateStore;

    #[test]
    fn login_logout_round_trip() {
        let gate = SessionGate::new(Arc::new(MemoryStateStore::new()));
        assert!(!gate.is_authenticated().unwrap());
        gate.log_in().unwrap();
        assert!(gate.is_authenticated().unwrap());
        gate.log_out().unwrap();
        assert!(!gate.is_authenticated().unwrap());
    }
}
