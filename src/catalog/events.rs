// ABOUTME: Preventative-care calendar: seeded events plus completion and lookup logic
// ABOUTME: Vitals-derived follow-ups merge in keyed by their triggering metric
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalPath Health

//! Preventative-care calendar.

use crate::errors::{AppError, AppResult};
use crate::intelligence::{self, DerivedCare};
use crate::models::{CareEvent, EventStatus, EventType, Importance};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use tracing::info;

/// The preventative-care calendar: seeded events plus derived follow-ups
#[derive(Debug, Clone, Default)]
pub struct CarePlanner {
    events: Vec<CareEvent>,
}

impl CarePlanner {
    /// Start from an explicit event list
    #[must_use]
    pub fn new(events: Vec<CareEvent>) -> Self {
        Self { events }
    }

    /// Start from the seeded fixture calendar, anchored at `now`
    #[must_use]
    pub fn seeded(now: DateTime<Utc>) -> Self {
        Self::new(seed_care_events(now))
    }

    /// All events, unordered
    #[must_use]
    pub fn events(&self) -> &[CareEvent] {
        &self.events
    }

    /// Merge a derivation batch into the calendar (see
    /// [`intelligence::merge_derived`] for the replacement semantics).
    pub fn apply_derived(&mut self, derived: &DerivedCare) {
        intelligence::merge_derived(&mut self.events, derived.events.clone());
    }

    /// Mark an event completed
    ///
    /// # Errors
    /// Returns [`crate::ErrorCode::ResourceNotFound`] when no event has `id`
    pub fn mark_completed(&mut self, id: &str) -> AppResult<()> {
        let event = self
            .events
            .iter_mut()
            .find(|event| event.id == id)
            .ok_or_else(|| AppError::not_found(format!("care event {id}")))?;
        event.status = EventStatus::Completed;
        info!(id, "care event completed");
        Ok(())
    }

    /// Upcoming events, soonest first
    #[must_use]
    pub fn upcoming(&self) -> Vec<&CareEvent> {
        intelligence::upcoming_events(&self.events)
    }

    /// Events on a calendar day
    #[must_use]
    pub fn on_day(&self, day: NaiveDate) -> Vec<&CareEvent> {
        intelligence::events_on(&self.events, day)
    }
}

/// The seeded fixture calendar, with dates relative to `now`
#[must_use]
pub fn seed_care_events(now: DateTime<Utc>) -> Vec<CareEvent> {
    vec![
        CareEvent {
            id: "seed-1".to_owned(),
            title: "Annual Physical".to_owned(),
            date: now + Duration::days(15),
            event_type: EventType::Checkup,
            status: EventStatus::Upcoming,
            description: "Comprehensive annual physical with blood pressure, cholesterol check"
                .to_owned(),
            importance: Importance::HighPriority,
            insurance_coverage: 100,
            notes: Some("Fast 12 hours before appointment for blood work".to_owned()),
            metric: None,
        },
        CareEvent {
            id: "seed-2".to_owned(),
            title: "Mammogram".to_owned(),
            date: now + Duration::days(45),
            event_type: EventType::Screening,
            status: EventStatus::Upcoming,
            description: "Breast cancer screening".to_owned(),
            importance: Importance::HighPriority,
            insurance_coverage: 100,
            notes: None,
            metric: None,
        },
        CareEvent {
            id: "seed-3".to_owned(),
            title: "Dental Cleaning".to_owned(),
            date: now - Duration::days(30),
            event_type: EventType::Checkup,
            status: EventStatus::Completed,
            description: "Routine dental cleaning and examination".to_owned(),
            importance: Importance::Routine,
            insurance_coverage: 80,
            notes: None,
            metric: None,
        },
        CareEvent {
            id: "seed-4".to_owned(),
            title: "Flu Vaccination".to_owned(),
            date: now + Duration::days(50),
            event_type: EventType::Vaccination,
            status: EventStatus::Upcoming,
            description: "Annual influenza vaccination".to_owned(),
            importance: Importance::Recommended,
            insurance_coverage: 100,
            notes: None,
            metric: None,
        },
        CareEvent {
            id: "seed-5".to_owned(),
            title: "A1C Blood Test".to_owned(),
            date: now + Duration::days(7),
            event_type: EventType::Lab,
            status: EventStatus::Upcoming,
            description: "Diabetes screening test".to_owned(),
            importance: Importance::Recommended,
            insurance_coverage: 100,
            notes: Some("Based on family history of diabetes".to_owned()),
            metric: None,
        },
        CareEvent {
            id: "seed-6".to_owned(),
            title: "Skin Cancer Screening".to_owned(),
            date: now + Duration::days(90),
            event_type: EventType::Screening,
            status: EventStatus::Upcoming,
            description: "Annual dermatology check for skin cancer".to_owned(),
            importance: Importance::Recommended,
            insurance_coverage: 90,
            notes: None,
            metric: None,
        },
        CareEvent {
            id: "seed-7".to_owned(),
            title: "Cholesterol Panel".to_owned(),
            date: now - Duration::days(90),
            event_type: EventType::Lab,
            status: EventStatus::Completed,
            description: "Lipid panel blood test".to_owned(),
            importance: Importance::HighPriority,
            insurance_coverage: 100,
            notes: Some("Follow-up recommended due to elevated LDL".to_owned()),
            metric: None,
        },
    ]
}
