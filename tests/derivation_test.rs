// ABOUTME: Integration tests for the vitals derivation pass
// ABOUTME: Threshold crossings, urgency grading, and stable-key merge semantics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalPath Health

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{Duration, Utc};
use common::{healthy_vitals, risky_vitals};
use vitalpath::intelligence::{derive_care, merge_derived};
use vitalpath::models::{EventStatus, Importance, MetricKind, Urgency};

#[test]
fn healthy_vitals_derive_nothing() {
    let derived = derive_care(&healthy_vitals(), Utc::now());
    assert!(derived.recommendations.is_empty());
    assert!(derived.events.is_empty());
}

#[test]
fn worked_example_yields_five_entries_with_documented_urgency() {
    let derived = derive_care(&risky_vitals(), Utc::now());
    assert_eq!(derived.recommendations.len(), 5);
    assert_eq!(derived.events.len(), 5);

    let urgency_of = |metric: MetricKind| {
        derived
            .recommendations
            .iter()
            .find(|rec| rec.metric == Some(metric))
            .map(|rec| rec.urgency)
            .unwrap()
    };
    assert_eq!(urgency_of(MetricKind::RestingHeartRate), Urgency::High);
    assert_eq!(urgency_of(MetricKind::BloodPressure), Urgency::High);
    assert_eq!(urgency_of(MetricKind::Sleep), Urgency::Medium);
    assert_eq!(urgency_of(MetricKind::Steps), Urgency::Medium);
    assert_eq!(urgency_of(MetricKind::LdlCholesterol), Urgency::Medium);
}

#[test]
fn each_threshold_trips_exactly_one_entry() {
    let cases: [(Box<dyn Fn(&mut vitalpath::models::HealthVitals)>, MetricKind); 5] = [
        (
            Box::new(|v| v.sleep_hours = Some(6.5)),
            MetricKind::Sleep,
        ),
        (
            Box::new(|v| {
                if let Some(hr) = v.heart_rate.as_mut() {
                    hr.resting = 85;
                }
            }),
            MetricKind::RestingHeartRate,
        ),
        (
            Box::new(|v| v.steps = Some(4000)),
            MetricKind::Steps,
        ),
        (
            Box::new(|v| {
                if let Some(bp) = v.blood_pressure.as_mut() {
                    bp.systolic = 135;
                }
            }),
            MetricKind::BloodPressure,
        ),
        (
            Box::new(|v| {
                if let Some(chol) = v.cholesterol.as_mut() {
                    chol.ldl = 140;
                }
            }),
            MetricKind::LdlCholesterol,
        ),
    ];

    for (mutate, expected) in cases {
        let mut vitals = healthy_vitals();
        mutate(&mut vitals);
        let derived = derive_care(&vitals, Utc::now());
        assert_eq!(derived.recommendations.len(), 1, "metric {expected}");
        assert_eq!(derived.recommendations[0].metric, Some(expected));
        assert_eq!(derived.recommendations[0].urgency, Urgency::Medium);
    }
}

#[test]
fn secondary_thresholds_raise_urgency_to_high() {
    let mut vitals = healthy_vitals();
    vitals.sleep_hours = Some(4.5);
    vitals.steps = Some(2000);
    if let Some(chol) = vitals.cholesterol.as_mut() {
        chol.ldl = 170;
    }
    let derived = derive_care(&vitals, Utc::now());
    assert_eq!(derived.recommendations.len(), 3);
    assert!(derived
        .recommendations
        .iter()
        .all(|rec| rec.urgency == Urgency::High));
}

#[test]
fn missing_fields_are_skipped() {
    let mut vitals = risky_vitals();
    vitals.sleep_hours = None;
    vitals.heart_rate = None;
    let derived = derive_care(&vitals, Utc::now());
    assert_eq!(derived.recommendations.len(), 3);
    assert!(!derived
        .recommendations
        .iter()
        .any(|rec| rec.metric == Some(MetricKind::Sleep)));
}

#[test]
fn derived_events_schedule_follow_ups() {
    let now = Utc::now();
    let derived = derive_care(&risky_vitals(), now);
    let bp_event = derived
        .events
        .iter()
        .find(|event| event.metric == Some(MetricKind::BloodPressure))
        .unwrap();
    assert_eq!(bp_event.date, now + Duration::days(14));
    assert_eq!(bp_event.status, EventStatus::Upcoming);
    assert_eq!(bp_event.importance, Importance::HighPriority);
    assert_eq!(bp_event.insurance_coverage, 100);

    let ldl_event = derived
        .events
        .iter()
        .find(|event| event.metric == Some(MetricKind::LdlCholesterol))
        .unwrap();
    assert_eq!(ldl_event.date, now + Duration::days(30));
    assert_eq!(ldl_event.importance, Importance::Recommended);
}

#[test]
fn merge_replaces_entries_by_metric_key() {
    let now = Utc::now();
    let mut recommendations = derive_care(&risky_vitals(), now).recommendations;
    assert_eq!(recommendations.len(), 5);

    // Sleep recovers past its threshold; the other four still trip
    let mut improved = risky_vitals();
    improved.sleep_hours = Some(8.0);
    let rederived = derive_care(&improved, now).recommendations;
    merge_derived(&mut recommendations, rederived);

    assert_eq!(recommendations.len(), 4);
    assert!(!recommendations
        .iter()
        .any(|rec| rec.metric == Some(MetricKind::Sleep)));
    // Still exactly one entry per remaining metric
    for metric in [
        MetricKind::RestingHeartRate,
        MetricKind::Steps,
        MetricKind::BloodPressure,
        MetricKind::LdlCholesterol,
    ] {
        assert_eq!(
            recommendations
                .iter()
                .filter(|rec| rec.metric == Some(metric))
                .count(),
            1
        );
    }
}

#[test]
fn merge_leaves_seeded_entries_untouched() {
    let now = Utc::now();
    let mut recommendations = vitalpath::catalog::seed_recommendations();
    let seeded = recommendations.len();

    let derived = derive_care(&risky_vitals(), now).recommendations;
    merge_derived(&mut recommendations, derived);
    assert_eq!(recommendations.len(), seeded + 5);

    // A second pass with healthy vitals removes only the derived entries
    let rederived = derive_care(&healthy_vitals(), now).recommendations;
    merge_derived(&mut recommendations, rederived);
    assert_eq!(recommendations.len(), seeded);
    assert!(recommendations.iter().all(|rec| rec.metric.is_none()));
}
