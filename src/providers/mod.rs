// ABOUTME: Health platform provider trait and implementations
// ABOUTME: Defines the async boundary the data service fetches vitals through
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalPath Health

//! # Health Platform Providers
//!
//! Providers are the typed async boundary between the data service and an
//! external health platform. The shipped [`SyntheticHealthProvider`] stands in
//! for real platform SDKs: it simulates connection latency and generates
//! plausible vitals. Tests implement [`HealthProvider`] directly with a
//! zero-latency fake.

/// Core provider trait
pub mod core;
/// Synthetic provider generating randomized vitals
pub mod synthetic;

pub use core::HealthProvider;
pub use synthetic::SyntheticHealthProvider;

use crate::config::ServiceConfig;
use crate::models::HealthPlatform;
use std::collections::HashMap;
use std::sync::Arc;

/// Build the default provider set: one synthetic provider per platform,
/// configured with the service's simulated latency and optional RNG seed.
#[must_use]
pub fn default_providers(
    config: &ServiceConfig,
) -> HashMap<HealthPlatform, Arc<dyn HealthProvider>> {
    let mut providers: HashMap<HealthPlatform, Arc<dyn HealthProvider>> = HashMap::new();
    for platform in [
        HealthPlatform::AppleHealth,
        HealthPlatform::GoogleFit,
        HealthPlatform::Fhir,
    ] {
        let provider = config.rng_seed.map_or_else(
            || SyntheticHealthProvider::new(platform, config.connect_latency(), config.fetch_latency()),
            |seed| {
                SyntheticHealthProvider::with_seed(
                    platform,
                    config.connect_latency(),
                    config.fetch_latency(),
                    seed,
                )
            },
        );
        providers.insert(platform, Arc::new(provider));
    }
    providers
}
