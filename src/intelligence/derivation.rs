// ABOUTME: Threshold-based derivation of recommendations and care events from vitals
// ABOUTME: Five independent metric checks, each emitting one entry keyed by its metric
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalPath Health

//! # Vitals Derivation
//!
//! Evaluates five independent metrics against fixed thresholds (see
//! [`crate::constants::vitals_thresholds`]). Crossing a primary threshold
//! emits one medium-urgency recommendation plus a matching care event;
//! crossing the secondary threshold raises both to high urgency.
//!
//! Every derived entry carries a [`MetricKind`] identity key. Merging a
//! derived batch replaces the prior entry for each metric and drops entries
//! for metrics that no longer trip, so re-derivation never duplicates and
//! never leaves stale findings behind.

use crate::constants::{follow_up_days, vitals_thresholds as limits};
use crate::models::{
    ActionType, CareEvent, EventStatus, EventType, HealthVitals, Importance, MetricKind,
    Recommendation, RecommendationAction, RecommendationCategory, Urgency,
};
use chrono::{DateTime, Duration, Utc};
use tracing::debug;

/// Output of one derivation pass
#[derive(Debug, Clone, Default)]
pub struct DerivedCare {
    /// One recommendation per tripped metric
    pub recommendations: Vec<Recommendation>,
    /// One follow-up care event per tripped metric
    pub events: Vec<CareEvent>,
}

/// Entries that carry a derived-metric identity key
pub trait MetricKeyed {
    /// The metric that produced this entry, if derived
    fn metric(&self) -> Option<MetricKind>;
}

impl MetricKeyed for Recommendation {
    fn metric(&self) -> Option<MetricKind> {
        self.metric
    }
}

impl MetricKeyed for CareEvent {
    fn metric(&self) -> Option<MetricKind> {
        self.metric
    }
}

struct Finding {
    metric: MetricKind,
    urgency: Urgency,
    title: &'static str,
    description: String,
    reasoning: &'static str,
    category: RecommendationCategory,
    confidence: u8,
    action: RecommendationAction,
    event_type: EventType,
    follow_up_days: i64,
    coverage: u8,
}

/// Run the derivation pass over a vitals bag.
///
/// `now` anchors follow-up event dates; pass a fixed instant in tests.
#[must_use]
pub fn derive_care(vitals: &HealthVitals, now: DateTime<Utc>) -> DerivedCare {
    let findings = [
        check_sleep(vitals),
        check_resting_hr(vitals),
        check_steps(vitals),
        check_blood_pressure(vitals),
        check_ldl(vitals),
    ];

    let mut derived = DerivedCare::default();
    for finding in findings.into_iter().flatten() {
        debug!(metric = %finding.metric, urgency = ?finding.urgency, "vitals threshold crossed");
        derived.events.push(event_for(&finding, now));
        derived.recommendations.push(recommendation_for(finding));
    }
    derived
}

/// Merge a derived batch into an existing list.
///
/// For each metric the pass evaluates: a prior derived entry is replaced when
/// the batch re-produced it and removed when it did not. Entries without a
/// metric key (seeded fixtures, user-created records) are untouched, and
/// batch entries for new metrics are appended in batch order.
pub fn merge_derived<T: MetricKeyed>(existing: &mut Vec<T>, batch: Vec<T>) {
    existing.retain(|entry| match entry.metric() {
        Some(metric) => batch.iter().any(|candidate| candidate.metric() == Some(metric)),
        None => true,
    });
    for entry in batch {
        match existing
            .iter_mut()
            .find(|candidate| candidate.metric() == entry.metric())
        {
            Some(slot) => *slot = entry,
            None => existing.push(entry),
        }
    }
}

fn recommendation_for(finding: Finding) -> Recommendation {
    Recommendation {
        id: format!("derived-{}", finding.metric),
        title: finding.title.to_owned(),
        description: finding.description.clone(),
        category: finding.category,
        urgency: finding.urgency,
        confidence: finding.confidence,
        reasoning: finding.reasoning.to_owned(),
        action: Some(finding.action),
        premium: false,
        metric: Some(finding.metric),
    }
}

fn event_for(finding: &Finding, now: DateTime<Utc>) -> CareEvent {
    CareEvent {
        id: format!("derived-{}", finding.metric),
        title: finding.title.to_owned(),
        date: now + Duration::days(finding.follow_up_days),
        event_type: finding.event_type,
        status: EventStatus::Upcoming,
        description: finding.description.clone(),
        importance: match finding.urgency {
            Urgency::High | Urgency::Emergency => Importance::HighPriority,
            Urgency::Medium | Urgency::Low => Importance::Recommended,
        },
        insurance_coverage: finding.coverage,
        notes: Some("Based on your connected health data readings".to_owned()),
        metric: Some(finding.metric),
    }
}

fn check_sleep(vitals: &HealthVitals) -> Option<Finding> {
    let hours = vitals.sleep_hours?;
    if hours >= limits::SLEEP_HOURS_MIN {
        return None;
    }
    let urgency = if hours < limits::SLEEP_HOURS_CRITICAL {
        Urgency::High
    } else {
        Urgency::Medium
    };
    Some(Finding {
        metric: MetricKind::Sleep,
        urgency,
        title: "Improve Sleep Duration",
        description: format!(
            "Average nightly sleep of {hours:.1} hours is below the recommended {} hours",
            limits::SLEEP_HOURS_MIN
        ),
        reasoning: "Your connected health data shows consistently short sleep",
        category: RecommendationCategory::Lifestyle,
        confidence: 84,
        action: RecommendationAction {
            action_type: ActionType::Habit,
            text: "Track Sleep Habits".to_owned(),
            link: None,
        },
        event_type: EventType::Specialist,
        follow_up_days: follow_up_days::SLEEP,
        coverage: 80,
    })
}

fn check_resting_hr(vitals: &HealthVitals) -> Option<Finding> {
    let resting = vitals.heart_rate?.resting;
    if resting <= limits::RESTING_HR_MAX {
        return None;
    }
    let urgency = if resting > limits::RESTING_HR_CRITICAL {
        Urgency::High
    } else {
        Urgency::Medium
    };
    Some(Finding {
        metric: MetricKind::RestingHeartRate,
        urgency,
        title: "Resting Heart Rate Review",
        description: format!("Resting heart rate of {resting} bpm is above the expected range"),
        reasoning: "Elevated resting heart rate can indicate stress or cardiovascular strain",
        category: RecommendationCategory::Checkup,
        confidence: 90,
        action: RecommendationAction {
            action_type: ActionType::Appointment,
            text: "Schedule Checkup".to_owned(),
            link: Some("/calendar".to_owned()),
        },
        event_type: EventType::Checkup,
        follow_up_days: follow_up_days::RESTING_HR,
        coverage: 100,
    })
}

fn check_steps(vitals: &HealthVitals) -> Option<Finding> {
    let steps = vitals.steps?;
    if steps >= limits::DAILY_STEPS_MIN {
        return None;
    }
    let urgency = if steps < limits::DAILY_STEPS_CRITICAL {
        Urgency::High
    } else {
        Urgency::Medium
    };
    Some(Finding {
        metric: MetricKind::Steps,
        urgency,
        title: "Increase Daily Activity",
        description: format!(
            "Daily step count of {steps} is below the recommended {}",
            limits::DAILY_STEPS_MIN
        ),
        reasoning: "Activity level is below guidelines for your age group",
        category: RecommendationCategory::Lifestyle,
        confidence: 88,
        action: RecommendationAction {
            action_type: ActionType::Habit,
            text: "Track Progress".to_owned(),
            link: None,
        },
        event_type: EventType::Checkup,
        follow_up_days: follow_up_days::STEPS,
        coverage: 80,
    })
}

fn check_blood_pressure(vitals: &HealthVitals) -> Option<Finding> {
    let reading = vitals.blood_pressure?;
    if reading.systolic <= limits::SYSTOLIC_MAX {
        return None;
    }
    let urgency = if reading.systolic > limits::SYSTOLIC_CRITICAL {
        Urgency::High
    } else {
        Urgency::Medium
    };
    Some(Finding {
        metric: MetricKind::BloodPressure,
        urgency,
        title: "Blood Pressure Check",
        description: format!(
            "Follow-up on elevated blood pressure ({}/{} mmHg)",
            reading.systolic, reading.diastolic
        ),
        reasoning: "Sustained elevated blood pressure warrants a clinical reading",
        category: RecommendationCategory::Checkup,
        confidence: 93,
        action: RecommendationAction {
            action_type: ActionType::Appointment,
            text: "Schedule Blood Pressure Check".to_owned(),
            link: Some("/calendar".to_owned()),
        },
        event_type: EventType::Checkup,
        follow_up_days: follow_up_days::BLOOD_PRESSURE,
        coverage: 100,
    })
}

fn check_ldl(vitals: &HealthVitals) -> Option<Finding> {
    let panel = vitals.cholesterol?;
    if panel.ldl <= limits::LDL_MAX {
        return None;
    }
    let urgency = if panel.ldl > limits::LDL_CRITICAL {
        Urgency::High
    } else {
        Urgency::Medium
    };
    Some(Finding {
        metric: MetricKind::LdlCholesterol,
        urgency,
        title: "Lipid Panel Follow-up",
        description: format!("Follow-up on elevated LDL cholesterol ({} mg/dL)", panel.ldl),
        reasoning: "Elevated LDL is a modifiable cardiovascular risk factor",
        category: RecommendationCategory::Checkup,
        confidence: 86,
        action: RecommendationAction {
            action_type: ActionType::Appointment,
            text: "Schedule Lab Work".to_owned(),
            link: Some("/calendar".to_owned()),
        },
        event_type: EventType::Lab,
        follow_up_days: follow_up_days::LDL,
        coverage: 90,
    })
}
