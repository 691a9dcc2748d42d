// ABOUTME: Symptom checker: fixture condition profiles and substring matching
// ABOUTME: Matches reported symptoms against known profiles, ranked by probability
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalPath Health

//! Symptom checker.
//!
//! A profile matches when any of its symptoms and any reported symptom
//! contain one another case-insensitively, so "cough" matches "dry cough".
//! Results rank by probability, highest first.

use crate::models::{ConditionProfile, Urgency};

/// Match reported symptoms against condition profiles.
#[must_use]
pub fn analyze_symptoms<'a>(
    profiles: &'a [ConditionProfile],
    reported: &[String],
) -> Vec<&'a ConditionProfile> {
    let mut matches: Vec<&ConditionProfile> = profiles
        .iter()
        .filter(|profile| {
            profile.symptoms.iter().any(|known| {
                reported.iter().any(|given| {
                    let known = known.to_lowercase();
                    let given = given.trim().to_lowercase();
                    !given.is_empty() && (known.contains(&given) || given.contains(&known))
                })
            })
        })
        .collect();
    matches.sort_by(|a, b| {
        b.probability
            .cmp(&a.probability)
            .then_with(|| a.id.cmp(&b.id))
    });
    matches
}

/// The seeded condition profiles
#[must_use]
pub fn seed_condition_profiles() -> Vec<ConditionProfile> {
    vec![
        ConditionProfile {
            id: "seed-1".to_owned(),
            condition: "Common Cold".to_owned(),
            probability: 78,
            urgency: Urgency::Low,
            description: "A viral infection causing sore throat, runny nose, and general discomfort.".to_owned(),
            suggested_action: "Rest, hydration, and over-the-counter medication.".to_owned(),
            symptoms: vec![
                "cough".to_owned(),
                "runny nose".to_owned(),
                "sore throat".to_owned(),
                "fever".to_owned(),
            ],
        },
        ConditionProfile {
            id: "seed-2".to_owned(),
            condition: "Seasonal Allergies".to_owned(),
            probability: 65,
            urgency: Urgency::Low,
            description: "An immune response to environmental allergens such as pollen or dust.".to_owned(),
            suggested_action: "Antihistamines and avoiding triggers.".to_owned(),
            symptoms: vec![
                "runny nose".to_owned(),
                "sneezing".to_owned(),
                "itchy eyes".to_owned(),
                "congestion".to_owned(),
            ],
        },
        ConditionProfile {
            id: "seed-3".to_owned(),
            condition: "COVID-19".to_owned(),
            probability: 35,
            urgency: Urgency::Medium,
            description: "A viral infection that can cause respiratory symptoms and other effects.".to_owned(),
            suggested_action: "Consider testing and contact your doctor if symptoms worsen.".to_owned(),
            symptoms: vec![
                "fever".to_owned(),
                "cough".to_owned(),
                "fatigue".to_owned(),
                "loss of taste".to_owned(),
                "loss of smell".to_owned(),
            ],
        },
    ]
}
