// ABOUTME: Shared constants for vitals thresholds, derivation scheduling, and storage keys
// ABOUTME: Single source of truth so services, derivation, and tests agree on every limit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalPath Health

//! Shared constants used across the VitalPath core.

/// Vitals thresholds used by the derivation pass.
///
/// Each metric has a primary threshold that produces a medium-urgency entry
/// and a stricter secondary threshold that raises the entry to high urgency.
pub mod vitals_thresholds {
    /// Nightly sleep below this many hours flags a sleep entry
    pub const SLEEP_HOURS_MIN: f64 = 7.0;
    /// Nightly sleep below this many hours is high urgency
    pub const SLEEP_HOURS_CRITICAL: f64 = 5.0;

    /// Resting heart rate above this (bpm) flags a heart-rate entry
    pub const RESTING_HR_MAX: u32 = 80;
    /// Resting heart rate above this (bpm) is high urgency
    pub const RESTING_HR_CRITICAL: u32 = 90;

    /// Daily steps below this flag an activity entry
    pub const DAILY_STEPS_MIN: u64 = 5000;
    /// Daily steps below this are high urgency
    pub const DAILY_STEPS_CRITICAL: u64 = 2500;

    /// Systolic blood pressure above this (mmHg) flags a blood-pressure entry
    pub const SYSTOLIC_MAX: u32 = 130;
    /// Systolic blood pressure above this (mmHg) is high urgency
    pub const SYSTOLIC_CRITICAL: u32 = 140;

    /// LDL cholesterol above this (mg/dL) flags a cholesterol entry
    pub const LDL_MAX: u32 = 130;
    /// LDL cholesterol above this (mg/dL) is high urgency
    pub const LDL_CRITICAL: u32 = 160;
}

/// Follow-up scheduling offsets, in days from derivation, per triggering metric
pub mod follow_up_days {
    /// Blood-pressure recheck
    pub const BLOOD_PRESSURE: i64 = 14;
    /// Resting heart-rate follow-up
    pub const RESTING_HR: i64 = 14;
    /// Sleep consultation
    pub const SLEEP: i64 = 21;
    /// Lipid panel recheck
    pub const LDL: i64 = 30;
    /// Activity plan review
    pub const STEPS: i64 = 30;
}

/// State store keys, shared with the web client's persisted schema
pub mod storage_keys {
    /// Session flag: `"true"` when logged in, absent otherwise
    pub const AUTH: &str = "auth";
    /// Connected platform id (`apple_health`, `google_fit`, `fhir`)
    pub const HEALTH_PLATFORM: &str = "healthPlatform";
    /// Consent flag: `"true"` / `"false"`
    pub const HEALTH_DATA_CONSENT: &str = "healthDataConsent";
    /// JSON-serialized vitals bag
    pub const HEALTH_DATA: &str = "healthData";
}

/// Simulated provider latency defaults, in milliseconds
pub mod latency {
    /// Platform connection handshake
    pub const CONNECT_MS: u64 = 1500;
    /// Vitals fetch
    pub const FETCH_MS: u64 = 1000;
}
