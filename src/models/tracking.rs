// ABOUTME: Health tracking records beyond the vitals bag
// ABOUTME: Goals with history, genetic risks, insurance benefits, and symptom condition profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalPath Health

//! Goals, genetic risks, insurance benefits, and symptom profiles.

use super::Urgency;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Category of a health goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalCategory {
    /// Body weight
    Weight,
    /// Activity and exercise
    Fitness,
    /// Sleep quality
    Sleep,
    /// Diet
    Nutrition,
    /// Mental wellbeing
    Mental,
    /// Clinically-directed targets
    Medical,
}

/// Lifecycle status of a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    /// Being worked on
    Active,
    /// Target reached
    Completed,
    /// On hold
    Paused,
}

/// A dated measurement in a goal's history
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalMeasurement {
    /// Measurement date
    pub date: NaiveDate,
    /// Measured value, in the goal's unit
    pub value: f64,
}

/// A tracked health goal with measurement history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthGoal {
    /// Stable id
    pub id: String,
    /// Short title
    pub title: String,
    /// Category
    pub category: GoalCategory,
    /// Human-readable target, e.g. "Reach 10,000 steps daily"
    pub target: String,
    /// Latest measured value
    pub current_value: f64,
    /// Value to reach
    pub target_value: f64,
    /// Unit label, e.g. "kg", "steps"
    pub unit: String,
    /// When tracking started
    pub start_date: NaiveDate,
    /// Target completion date
    pub end_date: NaiveDate,
    /// Lifecycle status
    pub status: GoalStatus,
    /// Dated measurements, oldest first
    pub history: Vec<GoalMeasurement>,
}

impl HealthGoal {
    /// Baseline value: the first recorded measurement, or the current value
    /// when no history exists yet.
    #[must_use]
    pub fn baseline(&self) -> f64 {
        self.history.first().map_or(self.current_value, |m| m.value)
    }

    /// Progress toward the target as a percentage, clamped to 0-100.
    ///
    /// Direction-aware: a weight-loss goal whose target is below the baseline
    /// counts downward movement as progress.
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        let baseline = self.baseline();
        let span = self.target_value - baseline;
        if span.abs() < f64::EPSILON {
            return 100;
        }
        let covered = (self.current_value - baseline) / span;
        (covered.clamp(0.0, 1.0) * 100.0).round() as u8
    }
}

/// Relative genetic risk level for a condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneticRiskLevel {
    /// Below-average risk
    Low,
    /// Around-average risk
    Moderate,
    /// Above-average risk
    High,
}

/// A genetic risk assessment entry for one condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneticRisk {
    /// Condition name
    pub condition: String,
    /// Relative risk level
    pub risk: GeneticRiskLevel,
    /// Estimated lifetime risk percentage
    pub percentage: u8,
    /// Plain-language summary
    pub description: String,
    /// Suggested preventative actions
    pub recommendations: Vec<String>,
}

/// How claims against a benefit are filed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimType {
    /// User files claims themselves
    Manual,
    /// Claims post automatically
    Automatic,
}

/// An insurance benefit with an annual allowance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Benefit {
    /// Stable id
    pub id: String,
    /// Benefit name
    pub name: String,
    /// Category label, e.g. "Dental"
    pub category: String,
    /// Annual allowance
    pub amount_total: f64,
    /// Amount consumed so far
    pub amount_used: f64,
    /// When the allowance renews
    pub renewal: NaiveDate,
    /// Claim filing mode
    pub claim_type: ClaimType,
}

impl Benefit {
    /// Portion of the allowance consumed, as a percentage clamped to 0-100
    #[must_use]
    pub fn percent_used(&self) -> u8 {
        if self.amount_total <= 0.0 {
            return 0;
        }
        ((self.amount_used / self.amount_total).clamp(0.0, 1.0) * 100.0).round() as u8
    }

    /// Allowance remaining, never negative
    #[must_use]
    pub fn remaining(&self) -> f64 {
        (self.amount_total - self.amount_used).max(0.0)
    }
}

/// Review status of a filed claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimStatus {
    /// Awaiting review
    Pending,
    /// Accepted
    Approved,
    /// Rejected
    Denied,
}

/// A claim filed against a benefit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenefitClaim {
    /// Stable id
    pub id: String,
    /// Benefit this claim draws from
    pub benefit_id: String,
    /// Claimed amount
    pub amount: f64,
    /// Service date
    pub date: DateTime<Utc>,
    /// Care provider name
    pub provider: String,
    /// What the claim covers
    pub description: String,
    /// Review status
    pub status: ClaimStatus,
}

/// Kind of a location-based health alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlertType {
    /// Air quality advisory
    AirQuality,
    /// Local disease activity
    DiseaseOutbreak,
    /// Weather-related health risk
    Weather,
    /// General public-health advisory
    Advisory,
}

/// Severity of a location-based health alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    /// Informational
    Low,
    /// Worth adjusting plans for
    Medium,
    /// Take precautions now
    High,
}

impl AlertSeverity {
    /// Sort position, most severe first
    #[must_use]
    pub fn sort_rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }
}

/// A health alert for the user's area
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthAlert {
    /// Stable id
    pub id: String,
    /// Short title
    pub title: String,
    /// What the alert means and what to do
    pub description: String,
    /// Alert kind
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    /// Severity for ranking
    pub severity: AlertSeverity,
    /// Human-readable area label
    pub location: String,
    /// When the alert was issued
    pub date: DateTime<Utc>,
}

/// A known condition profile the symptom checker matches against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionProfile {
    /// Stable id
    pub id: String,
    /// Condition name
    pub condition: String,
    /// Match probability, 0-100 (illustrative fixture value)
    pub probability: u8,
    /// Urgency of seeking care
    pub urgency: Urgency,
    /// Plain-language summary
    pub description: String,
    /// What the user should do next
    pub suggested_action: String,
    /// Symptoms associated with this condition
    pub symptoms: Vec<String>,
}
