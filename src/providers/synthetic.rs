// ABOUTME: Synthetic health provider for development, demos, and testing
// ABOUTME: Simulates platform latency and draws vitals from fixed plausible ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalPath Health

//! # Synthetic Health Provider
//!
//! Stands in for real platform SDKs. Unlike a real integration it:
//!
//! - requires no credentials or OAuth flow
//! - draws every vitals field from a fixed plausible range
//! - can be seeded for deterministic output in tests
//!
//! Latency is simulated with `tokio::time::sleep`; pass
//! `Duration::ZERO` to make it effectively synchronous.

use super::core::HealthProvider;
use crate::errors::AppResult;
use crate::models::{BloodPressure, CholesterolPanel, HealthPlatform, HealthVitals, HeartRate};
use async_trait::async_trait;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;

/// Synthetic provider generating randomized vitals for one platform
pub struct SyntheticHealthProvider {
    platform: HealthPlatform,
    connect_latency: Duration,
    fetch_latency: Duration,
    rng: Mutex<StdRng>,
}

impl SyntheticHealthProvider {
    /// Create a provider with OS-seeded randomness
    #[must_use]
    pub fn new(
        platform: HealthPlatform,
        connect_latency: Duration,
        fetch_latency: Duration,
    ) -> Self {
        Self {
            platform,
            connect_latency,
            fetch_latency,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Create a provider with a fixed seed for deterministic vitals
    #[must_use]
    pub fn with_seed(
        platform: HealthPlatform,
        connect_latency: Duration,
        fetch_latency: Duration,
        seed: u64,
    ) -> Self {
        Self {
            platform,
            connect_latency,
            fetch_latency,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn generate(&self) -> HealthVitals {
        // Recover the RNG from a poisoned lock; the generator state stays valid.
        let mut rng = match self.rng.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        HealthVitals {
            last_synced: Utc::now(),
            steps: Some(rng.gen_range(2000..12000)),
            heart_rate: Some(HeartRate {
                average: rng.gen_range(65..85),
                resting: rng.gen_range(60..70),
            }),
            sleep_hours: Some(f64::from(rng.gen_range(60..90)) / 10.0),
            weight: Some(f64::from(rng.gen_range(60..90))),
            blood_pressure: Some(BloodPressure {
                systolic: rng.gen_range(110..140),
                diastolic: rng.gen_range(70..90),
            }),
            blood_glucose: None,
            cholesterol: Some(CholesterolPanel {
                total: rng.gen_range(150..250),
                hdl: rng.gen_range(40..60),
                ldl: rng.gen_range(90..140),
            }),
        }
    }
}

#[async_trait]
impl HealthProvider for SyntheticHealthProvider {
    fn platform(&self) -> HealthPlatform {
        self.platform
    }

    async fn connect(&self) -> AppResult<()> {
        sleep(self.connect_latency).await;
        debug!(platform = %self.platform, "synthetic connection established");
        Ok(())
    }

    async fn fetch_vitals(&self) -> AppResult<HealthVitals> {
        sleep(self.fetch_latency).await;
        let vitals = self.generate();
        debug!(platform = %self.platform, "synthetic vitals generated");
        Ok(vitals)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[tokio::test]
    async fn seeded_providers_are_deterministic() {
        let a = SyntheticHealthProvider::with_seed(
            HealthPlatform::AppleHealth,
            Duration::ZERO,
            Duration::ZERO,
            42,
        );
        let b = SyntheticHealthProvider::with_seed(
            HealthPlatform::AppleHealth,
            Duration::ZERO,
            Duration::ZERO,
            42,
        );
        let va = a.fetch_vitals().await.unwrap();
        let vb = b.fetch_vitals().await.unwrap();
        assert_eq!(va.steps, vb.steps);
        assert_eq!(va.heart_rate, vb.heart_rate);
        assert_eq!(va.blood_pressure, vb.blood_pressure);
    }

    #[tokio::test]
    async fn generated_vitals_stay_in_range() {
        let provider = SyntheticHealthProvider::with_seed(
            HealthPlatform::GoogleFit,
            Duration::ZERO,
            Duration::ZERO,
            7,
        );
        for _ in 0..50 {
            let vitals = provider.fetch_vitals().await.unwrap();
            let steps = vitals.steps.unwrap();
            assert!((2000..12000).contains(&steps));
            let hr = vitals.heart_rate.unwrap();
            assert!((60..70).contains(&hr.resting));
            let sleep_hours = vitals.sleep_hours.unwrap();
            assert!((6.0..9.0).contains(&sleep_hours));
            let bp = vitals.blood_pressure.unwrap();
            assert!((110..140).contains(&bp.systolic));
            let chol = vitals.cholesterol.unwrap();
            assert!((90..140).contains(&chol.ldl));
        }
    }
}
