// ABOUTME: Vitals-driven intelligence: threshold derivation and list ranking
// ABOUTME: Pure functions over the domain models, no IO and no clocks of their own
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalPath Health

//! # Intelligence
//!
//! The derivation pass turns a vitals bag into recommendation and care-event
//! entries keyed by the triggering metric; ranking provides the total
//! orderings the dashboards display. Everything here is pure - callers pass
//! the clock in.

/// Threshold derivation from vitals
pub mod derivation;
/// Sorting, filtering, and schedule arithmetic
pub mod ranking;

pub use derivation::{derive_care, merge_derived, DerivedCare, MetricKeyed};
pub use ranking::{
    days_away, events_on, filter_recommendations, sort_recommendations, sort_reminders,
    upcoming_events,
};
