// ABOUTME: Connection, consent, and vitals service at the heart of the VitalPath core
// ABOUTME: Owns the persisted platform/consent/vitals state and the provider boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalPath Health

//! # Health Data Service
//!
//! Owns the three persisted pieces of health state - connected platform,
//! consent flag, vitals bag - and the operations over them. All collaborators
//! arrive by injection: a [`StateStore`] for persistence and a provider per
//! platform for fetching.
//!
//! ## Concurrency
//!
//! Operations take a snapshot, await the provider without holding the lock,
//! then write back. Overlapping refreshes are not sequenced; both resolve and
//! the later write wins. A refresh always replaces the whole vitals bag in
//! one assignment.

use crate::constants::storage_keys;
use crate::errors::{AppError, AppResult};
use crate::models::{HealthPlatform, HealthVitals};
use crate::providers::HealthProvider;
use crate::storage::StateStore;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::{info, warn};

#[derive(Debug, Clone, Default)]
struct HealthState {
    platform: Option<HealthPlatform>,
    consented: bool,
    vitals: Option<HealthVitals>,
}

/// Connection, consent, and vitals management
pub struct HealthDataService {
    store: Arc<dyn StateStore>,
    providers: HashMap<HealthPlatform, Arc<dyn HealthProvider>>,
    state: RwLock<HealthState>,
}

impl HealthDataService {
    /// Create a service over the given store and providers, loading any
    /// persisted platform, consent, and vitals state.
    ///
    /// A corrupt persisted vitals blob is discarded with a warning rather
    /// than failing construction.
    ///
    /// # Errors
    /// Returns an error if the store cannot be read
    pub fn new(
        store: Arc<dyn StateStore>,
        providers: HashMap<HealthPlatform, Arc<dyn HealthProvider>>,
    ) -> AppResult<Self> {
        let platform = store
            .get(storage_keys::HEALTH_PLATFORM)?
            .as_deref()
            .and_then(HealthPlatform::parse);
        let consented = store.get(storage_keys::HEALTH_DATA_CONSENT)?.as_deref() == Some("true");
        let vitals = match store.get(storage_keys::HEALTH_DATA)? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(parsed) => Some(parsed),
                Err(err) => {
                    warn!(error = %err, "discarding unparseable persisted vitals");
                    None
                }
            },
            None => None,
        };

        Ok(Self {
            store,
            providers,
            state: RwLock::new(HealthState {
                platform,
                consented,
                vitals,
            }),
        })
    }

    fn snapshot(&self) -> AppResult<HealthState> {
        self.state
            .read()
            .map(|state| state.clone())
            .map_err(|_| AppError::internal("health state lock poisoned"))
    }

    fn update<F: FnOnce(&mut HealthState)>(&self, apply: F) -> AppResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|_| AppError::internal("health state lock poisoned"))?;
        apply(&mut state);
        Ok(())
    }

    /// Currently connected platform, if any
    ///
    /// # Errors
    /// Returns an error if the state lock is poisoned
    pub fn connected_platform(&self) -> AppResult<Option<HealthPlatform>> {
        Ok(self.snapshot()?.platform)
    }

    /// Whether data consent has been granted
    ///
    /// # Errors
    /// Returns an error if the state lock is poisoned
    pub fn has_consented(&self) -> AppResult<bool> {
        Ok(self.snapshot()?.consented)
    }

    /// The current vitals bag, if one has been synced
    ///
    /// # Errors
    /// Returns an error if the state lock is poisoned
    pub fn vitals(&self) -> AppResult<Option<HealthVitals>> {
        Ok(self.snapshot()?.vitals)
    }

    /// Connect a health platform.
    ///
    /// Establishes the provider connection, persists the platform, then
    /// triggers one vitals refresh iff consent is already granted. Consent is
    /// not a precondition of connecting itself.
    ///
    /// # Errors
    /// Returns [`crate::ErrorCode::ProviderNotRegistered`] when no provider
    /// exists for `platform`, or a provider/storage error from the connection
    /// and refresh steps
    pub async fn connect(&self, platform: HealthPlatform) -> AppResult<()> {
        let provider = self.provider_for(platform)?;
        provider.connect().await?;

        self.update(|state| state.platform = Some(platform))?;
        self.store
            .set(storage_keys::HEALTH_PLATFORM, platform.as_str())?;
        info!(platform = %platform, "health platform connected");

        if self.has_consented()? {
            self.refresh_vitals().await?;
        }
        Ok(())
    }

    /// Disconnect the current platform, clearing connection state and vitals.
    ///
    /// Synchronous and unconditional; disconnecting while nothing is
    /// connected is a no-op.
    ///
    /// # Errors
    /// Returns an error if clearing the persisted keys fails
    pub fn disconnect(&self) -> AppResult<()> {
        self.update(|state| {
            state.platform = None;
            state.vitals = None;
        })?;
        self.store.remove(storage_keys::HEALTH_PLATFORM)?;
        self.store.remove(storage_keys::HEALTH_DATA)?;
        info!("health platform disconnected");
        Ok(())
    }

    /// Refresh the vitals bag from the connected provider.
    ///
    /// Returns `Ok(None)` without touching state when no platform is
    /// connected or consent is not granted. Otherwise fetches a fresh bag,
    /// replaces the prior one wholesale, persists it, and returns it.
    ///
    /// # Errors
    /// Returns a provider error when the fetch fails, or a storage error when
    /// the fresh bag cannot be persisted
    pub async fn refresh_vitals(&self) -> AppResult<Option<HealthVitals>> {
        let snapshot = self.snapshot()?;
        let Some(platform) = snapshot.platform else {
            return Ok(None);
        };
        if !snapshot.consented {
            return Ok(None);
        }

        let provider = self.provider_for(platform)?;
        let vitals = provider.fetch_vitals().await?;

        let raw = serde_json::to_string(&vitals)?;
        self.update(|state| state.vitals = Some(vitals.clone()))?;
        self.store.set(storage_keys::HEALTH_DATA, &raw)?;
        info!(platform = %platform, "vitals synchronized");
        Ok(Some(vitals))
    }

    /// Update the consent flag.
    ///
    /// Persists the new value; granting consent while a platform is connected
    /// triggers exactly one refresh.
    ///
    /// # Errors
    /// Returns an error if persisting the flag or the triggered refresh fails
    pub async fn update_consent(&self, consented: bool) -> AppResult<()> {
        self.update(|state| state.consented = consented)?;
        self.store.set(
            storage_keys::HEALTH_DATA_CONSENT,
            if consented { "true" } else { "false" },
        )?;
        info!(consented, "health data consent updated");

        if consented && self.connected_platform()?.is_some() {
            self.refresh_vitals().await?;
        }
        Ok(())
    }

    fn provider_for(&self, platform: HealthPlatform) -> AppResult<Arc<dyn HealthProvider>> {
        self.providers.get(&platform).cloned().ok_or_else(|| {
            AppError::provider_not_registered(format!("no provider for {platform}"))
        })
    }
}
