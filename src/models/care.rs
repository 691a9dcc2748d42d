// ABOUTME: Care planning records shown on the dashboards
// ABOUTME: Recommendations, preventative-care calendar events, and dynamic reminders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalPath Health

//! Recommendations, care events, and reminders.

use super::{MetricKind, Urgency};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category of a health recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationCategory {
    /// Daily habits and activity
    Lifestyle,
    /// Diet and nutrition
    Nutrition,
    /// Mental health
    Mental,
    /// Routine checkups
    Checkup,
    /// Specialist referrals
    Specialist,
}

/// Kind of action attached to a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    /// Schedule an appointment
    Appointment,
    /// Start or track a habit
    Habit,
    /// Read educational material
    Education,
}

/// Suggested next step attached to a recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationAction {
    /// Action kind
    #[serde(rename = "type")]
    pub action_type: ActionType,
    /// Button/label text
    pub text: String,
    /// Optional in-app destination
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// A personalized health recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Stable id; derived entries use `derived-<metric>`
    pub id: String,
    /// Short title
    pub title: String,
    /// One-sentence summary
    pub description: String,
    /// Category for filtering
    pub category: RecommendationCategory,
    /// Urgency for ranking
    pub urgency: Urgency,
    /// Confidence score, 0-100
    pub confidence: u8,
    /// Why this was recommended
    pub reasoning: String,
    /// Optional suggested next step
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<RecommendationAction>,
    /// Visible only to premium plans
    pub premium: bool,
    /// Identity key when derived from a vitals metric
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric: Option<MetricKind>,
}

/// Type of a preventative-care event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    /// General checkup
    Checkup,
    /// Screening procedure
    Screening,
    /// Vaccination
    Vaccination,
    /// Lab work
    Lab,
    /// Specialist visit
    Specialist,
}

/// Lifecycle status of a care event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    /// Scheduled in the future
    Upcoming,
    /// Done
    Completed,
    /// Scheduled date passed without completion
    Missed,
}

/// Importance of a care event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Importance {
    /// Ordinary maintenance
    Routine,
    /// Recommended by profile or data
    Recommended,
    /// Should not be skipped
    HighPriority,
}

impl Importance {
    /// Sort position, most important first
    #[must_use]
    pub fn sort_rank(self) -> u8 {
        match self {
            Self::HighPriority => 0,
            Self::Recommended => 1,
            Self::Routine => 2,
        }
    }
}

/// A preventative-care calendar event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareEvent {
    /// Stable id; derived entries use `derived-<metric>`
    pub id: String,
    /// Short title
    pub title: String,
    /// Scheduled date
    pub date: DateTime<Utc>,
    /// Event type
    #[serde(rename = "type")]
    pub event_type: EventType,
    /// Lifecycle status
    pub status: EventStatus,
    /// One-sentence summary
    pub description: String,
    /// Importance for ranking
    pub importance: Importance,
    /// Insurance coverage percentage, 0-100
    pub insurance_coverage: u8,
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Identity key when derived from a vitals metric
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric: Option<MetricKind>,
}

/// Category of a dynamic reminder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReminderCategory {
    /// Routine checkup
    Checkup,
    /// Medication intake or refill
    Medication,
    /// Vaccination
    Vaccination,
    /// Follow-up on prior care
    FollowUp,
    /// Lab work
    Lab,
    /// Anything else
    Other,
}

/// Delivery channel for reminder notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationMethod {
    /// In-app push
    Push,
    /// Email
    Email,
    /// Text message
    Sms,
}

/// A dynamic reminder with urgency-driven notification behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    /// Stable id
    pub id: String,
    /// Short title
    pub title: String,
    /// Optional detail
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// When the reminder is due
    pub due: DateTime<Utc>,
    /// Urgency, including `Emergency`
    pub urgency: Urgency,
    /// Category
    pub category: ReminderCategory,
    /// Human-readable notification cadence
    pub notification_frequency: String,
    /// Delivery channels
    pub notification_methods: Vec<NotificationMethod>,
    /// How many times the user snoozed it
    pub snooze_count: u32,
    /// Whether it has been completed
    pub completed: bool,
}

impl Reminder {
    /// Whether the reminder is past due and not completed
    #[must_use]
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        !self.completed && self.due < now
    }
}
