// ABOUTME: Shared domain models for vitals, care planning, and health tracking
// ABOUTME: Re-exports the model submodules and defines cross-cutting enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalPath Health

//! # Domain Models
//!
//! The shared data model of the VitalPath core. Providers produce
//! [`HealthVitals`]; the derivation pass and catalogs produce and consume
//! [`Recommendation`], [`CareEvent`], [`Reminder`], and the tracking records.

/// Recommendations, care events, and reminders
pub mod care;
/// Goals, genetic risks, insurance benefits, and symptom profiles
pub mod tracking;
/// Health platforms and the vitals bag
pub mod vitals;

pub use care::{
    ActionType, CareEvent, EventStatus, EventType, Importance, NotificationMethod,
    Recommendation, RecommendationAction, RecommendationCategory, Reminder, ReminderCategory,
};
pub use tracking::{
    AlertSeverity, AlertType, Benefit, BenefitClaim, ClaimStatus, ClaimType, ConditionProfile,
    GeneticRisk, GeneticRiskLevel, GoalCategory, GoalMeasurement, GoalStatus, HealthAlert,
    HealthGoal,
};
pub use vitals::{BloodPressure, CholesterolPanel, HealthPlatform, HealthVitals, HeartRate};

use serde::{Deserialize, Serialize};

/// Urgency of a recommendation or reminder.
///
/// Ordering for display is emergency first; see [`Urgency::sort_rank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    /// Optional, informational
    Low,
    /// Recommended soon
    Medium,
    /// Needs prompt attention
    High,
    /// Immediate action required (reminders only)
    Emergency,
}

impl Urgency {
    /// Sort position, most urgent first
    #[must_use]
    pub fn sort_rank(self) -> u8 {
        match self {
            Self::Emergency => 0,
            Self::High => 1,
            Self::Medium => 2,
            Self::Low => 3,
        }
    }
}

/// Stable identity key for entries derived from a vitals metric.
///
/// Replaces the title-prefix matching of earlier revisions: a derived entry is
/// identified by the metric that produced it, so re-derivation replaces the
/// prior entry for that metric and never collides with unrelated titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// Nightly sleep duration
    Sleep,
    /// Resting heart rate
    RestingHeartRate,
    /// Daily step count
    Steps,
    /// Systolic blood pressure
    BloodPressure,
    /// LDL cholesterol
    LdlCholesterol,
}

impl MetricKind {
    /// All metric kinds the derivation pass evaluates
    pub const ALL: [Self; 5] = [
        Self::Sleep,
        Self::RestingHeartRate,
        Self::Steps,
        Self::BloodPressure,
        Self::LdlCholesterol,
    ];

    /// Stable string key, used in derived-entry ids
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sleep => "sleep",
            Self::RestingHeartRate => "resting_hr",
            Self::Steps => "steps",
            Self::BloodPressure => "blood_pressure",
            Self::LdlCholesterol => "ldl",
        }
    }
}

impl std::fmt::Display for MetricKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
