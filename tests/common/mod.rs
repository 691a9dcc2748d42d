// ABOUTME: Shared fixtures for integration tests
// ABOUTME: Healthy/risky vitals builders and a counting fake provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalPath Health

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicUsize, Ordering};
use vitalpath::errors::AppResult;
use vitalpath::models::{
    BloodPressure, CholesterolPanel, HealthPlatform, HealthVitals, HeartRate,
};
use vitalpath::providers::HealthProvider;

/// Vitals that trip no thresholds
pub fn healthy_vitals() -> HealthVitals {
    HealthVitals {
        last_synced: Utc::now(),
        steps: Some(9000),
        heart_rate: Some(HeartRate {
            average: 70,
            resting: 62,
        }),
        sleep_hours: Some(7.5),
        weight: Some(72.0),
        blood_pressure: Some(BloodPressure {
            systolic: 118,
            diastolic: 76,
        }),
        blood_glucose: None,
        cholesterol: Some(CholesterolPanel {
            total: 180,
            hdl: 55,
            ldl: 100,
        }),
    }
}

/// The worked example: all five thresholds tripped, heart rate and blood
/// pressure past their critical limits
pub fn risky_vitals() -> HealthVitals {
    HealthVitals {
        last_synced: Utc::now(),
        steps: Some(3000),
        heart_rate: Some(HeartRate {
            average: 88,
            resting: 95,
        }),
        sleep_hours: Some(5.0),
        weight: Some(80.0),
        blood_pressure: Some(BloodPressure {
            systolic: 145,
            diastolic: 90,
        }),
        blood_glucose: None,
        cholesterol: Some(CholesterolPanel {
            total: 210,
            hdl: 45,
            ldl: 140,
        }),
    }
}

/// Zero-latency fake provider that counts fetches
pub struct CountingProvider {
    platform: HealthPlatform,
    vitals: HealthVitals,
    fetches: AtomicUsize,
}

impl CountingProvider {
    pub fn new(platform: HealthPlatform, vitals: HealthVitals) -> Self {
        Self {
            platform,
            vitals,
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HealthProvider for CountingProvider {
    fn platform(&self) -> HealthPlatform {
        self.platform
    }

    async fn connect(&self) -> AppResult<()> {
        Ok(())
    }

    async fn fetch_vitals(&self) -> AppResult<HealthVitals> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.vitals.clone())
    }
}
