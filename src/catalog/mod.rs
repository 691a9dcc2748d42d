// ABOUTME: Fixture catalogs and the stateful planners/trackers over them
// ABOUTME: Seeded recommendations, care events, reminders, goals, benefits, risks, symptoms, alerts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalPath Health

//! # Catalogs
//!
//! The dashboard data that is not derived from vitals: seeded fixture records
//! plus the small amount of mutation logic each view performs (mark
//! completed, snooze, record a measurement, file a claim). Seeds take the
//! clock as a parameter so fixtures stay relative to "today".

/// Location-based health alerts
pub mod alerts;
/// Insurance benefits and claims
pub mod benefits;
/// Preventative-care calendar
pub mod events;
/// Genetic risk assessments
pub mod genetic;
/// Health goal tracking
pub mod goals;
/// Seeded AI-style recommendations
pub mod recommendations;
/// Dynamic reminders
pub mod reminders;
/// Symptom checker condition matching
pub mod symptoms;

pub use alerts::{seed_health_alerts, AlertFeed};
pub use benefits::{BenefitLedger, NewClaim};
pub use events::CarePlanner;
pub use genetic::{seed_genetic_risks, sort_by_risk};
pub use goals::{GoalBook, NewGoal};
pub use recommendations::seed_recommendations;
pub use reminders::ReminderBoard;
pub use symptoms::{analyze_symptoms, seed_condition_profiles};
