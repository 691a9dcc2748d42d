// ABOUTME: Core HealthProvider trait shared by all platform integrations
// ABOUTME: Connect handshake plus wholesale vitals fetch behind one async interface
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalPath Health

//! Core provider trait.
//!
//! All platform integrations implement [`HealthProvider`]. The service layer
//! holds providers as `Arc<dyn HealthProvider>` and never depends on a
//! concrete implementation, so a test can swap in a deterministic fake with no
//! timers behind it.

use crate::errors::AppResult;
use crate::models::{HealthPlatform, HealthVitals};
use async_trait::async_trait;

/// Typed async boundary to an external health platform
#[async_trait]
pub trait HealthProvider: Send + Sync {
    /// The platform this provider integrates
    fn platform(&self) -> HealthPlatform;

    /// Establish the platform connection.
    ///
    /// Simulated implementations sleep for their configured latency; fakes
    /// return immediately.
    ///
    /// # Errors
    /// Returns [`crate::errors::ErrorCode::ProviderError`] when the platform
    /// handshake fails
    async fn connect(&self) -> AppResult<()>;

    /// Fetch a complete vitals bag.
    ///
    /// The returned bag replaces the service's prior bag wholesale; providers
    /// never produce partial updates.
    ///
    /// # Errors
    /// Returns [`crate::errors::ErrorCode::ProviderError`] when the platform
    /// cannot produce a bag
    async fn fetch_vitals(&self) -> AppResult<HealthVitals>;
}
