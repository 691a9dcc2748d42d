// ABOUTME: Health platform identifiers and the synchronized vitals bag
// ABOUTME: Serialized shape matches the persisted healthData blob of the web client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalPath Health

//! Health platforms and vitals.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// External health platform a user can connect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthPlatform {
    /// Apple Health (HealthKit)
    AppleHealth,
    /// Google Fit
    GoogleFit,
    /// FHIR-compatible clinical record source
    Fhir,
}

impl HealthPlatform {
    /// Stable string id, used as the persisted `healthPlatform` value
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AppleHealth => "apple_health",
            Self::GoogleFit => "google_fit",
            Self::Fhir => "fhir",
        }
    }

    /// Parse a persisted platform id. `"none"` and unknown values map to `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "apple_health" => Some(Self::AppleHealth),
            "google_fit" => Some(Self::GoogleFit),
            "fhir" => Some(Self::Fhir),
            _ => None,
        }
    }

    /// Human-readable platform name
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::AppleHealth => "Apple Health",
            Self::GoogleFit => "Google Fit",
            Self::Fhir => "Clinical Records (FHIR)",
        }
    }
}

impl std::fmt::Display for HealthPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Average and resting heart rate, in bpm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeartRate {
    /// Daily average
    pub average: u32,
    /// Resting rate
    pub resting: u32,
}

/// Blood pressure reading, in mmHg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BloodPressure {
    /// Systolic pressure
    pub systolic: u32,
    /// Diastolic pressure
    pub diastolic: u32,
}

/// Cholesterol panel, in mg/dL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CholesterolPanel {
    /// Total cholesterol
    pub total: u32,
    /// HDL ("good") cholesterol
    pub hdl: u32,
    /// LDL ("bad") cholesterol
    pub ldl: u32,
}

/// The synchronized vitals bag.
///
/// A refresh replaces the entire bag in a single assignment; fields are never
/// updated individually. Serializes with camelCase keys to match the persisted
/// `healthData` blob schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthVitals {
    /// When this bag was fetched from the platform
    pub last_synced: DateTime<Utc>,
    /// Daily step count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<u64>,
    /// Heart rate summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<HeartRate>,
    /// Nightly sleep, in hours
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleep_hours: Option<f64>,
    /// Body weight, in kg
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Blood pressure reading
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_pressure: Option<BloodPressure>,
    /// Blood glucose, in mg/dL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_glucose: Option<f64>,
    /// Cholesterol panel
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cholesterol: Option<CholesterolPanel>,
}

impl HealthVitals {
    /// An empty bag stamped at `last_synced`
    #[must_use]
    pub fn empty(last_synced: DateTime<Utc>) -> Self {
        Self {
            last_synced,
            steps: None,
            heart_rate: None,
            sleep_hours: None,
            weight: None,
            blood_pressure: None,
            blood_glucose: None,
            cholesterol: None,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn platform_ids_round_trip() {
        for platform in [
            HealthPlatform::AppleHealth,
            HealthPlatform::GoogleFit,
            HealthPlatform::Fhir,
        ] {
            assert_eq!(HealthPlatform::parse(platform.as_str()), Some(platform));
        }
        assert_eq!(HealthPlatform::parse("none"), None);
        assert_eq!(HealthPlatform::parse("fitbit"), None);
    }

    #[test]
    fn vitals_serialize_with_camel_case_keys() {
        let vitals = HealthVitals {
            sleep_hours: Some(6.5),
            heart_rate: Some(HeartRate {
                average: 72,
                resting: 61,
            }),
            ..HealthVitals::empty(Utc::now())
        };
        let json = serde_json::to_string(&vitals).unwrap();
        assert!(json.contains("\"lastSynced\""));
        assert!(json.contains("\"sleepHours\""));
        assert!(json.contains("\"heartRate\""));
        assert!(!json.contains("\"steps\""));
    }
}
