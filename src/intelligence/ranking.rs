// ABOUTME: Total orderings and filters for recommendations, reminders, and care events
// ABOUTME: Urgency-first sorting with documented tie-breaks, premium gating, schedule arithmetic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalPath Health

//! # Ranking
//!
//! The display orderings of the dashboards. Every sort is total: the final
//! tie-break is the stable id, so no two distinct entries compare equal.

use crate::models::{CareEvent, EventStatus, Recommendation, RecommendationCategory, Reminder};
use chrono::{DateTime, NaiveDate, Utc};
use std::cmp::Ordering;

/// Sort recommendations: urgency first, then confidence descending, then id.
pub fn sort_recommendations(recommendations: &mut [Recommendation]) {
    recommendations.sort_by(|a, b| {
        a.urgency
            .sort_rank()
            .cmp(&b.urgency.sort_rank())
            .then_with(|| b.confidence.cmp(&a.confidence))
            .then_with(|| a.id.cmp(&b.id))
    });
}

/// Filter recommendations by plan and optional category.
///
/// Non-premium callers never see premium-flagged entries.
#[must_use]
pub fn filter_recommendations<'a>(
    recommendations: &'a [Recommendation],
    category: Option<RecommendationCategory>,
    premium: bool,
) -> Vec<&'a Recommendation> {
    recommendations
        .iter()
        .filter(|rec| premium || !rec.premium)
        .filter(|rec| category.is_none_or(|wanted| rec.category == wanted))
        .collect()
}

/// Sort reminders: urgency first (emergency on top), then due date, then id.
pub fn sort_reminders(reminders: &mut [Reminder]) {
    reminders.sort_by(|a, b| {
        a.urgency
            .sort_rank()
            .cmp(&b.urgency.sort_rank())
            .then_with(|| a.due.cmp(&b.due))
            .then_with(|| a.id.cmp(&b.id))
    });
}

/// Upcoming care events, soonest first.
#[must_use]
pub fn upcoming_events(events: &[CareEvent]) -> Vec<&CareEvent> {
    let mut upcoming: Vec<&CareEvent> = events
        .iter()
        .filter(|event| event.status == EventStatus::Upcoming)
        .collect();
    upcoming.sort_by(|a, b| match a.date.cmp(&b.date) {
        Ordering::Equal => a.id.cmp(&b.id),
        other => other,
    });
    upcoming
}

/// Events scheduled on a given calendar day.
#[must_use]
pub fn events_on(events: &[CareEvent], day: NaiveDate) -> Vec<&CareEvent> {
    events
        .iter()
        .filter(|event| event.date.date_naive() == day)
        .collect()
}

/// Whole days between now and the event date; negative when past.
#[must_use]
pub fn days_away(event: &CareEvent, now: DateTime<Utc>) -> i64 {
    (event.date - now).num_days()
}
