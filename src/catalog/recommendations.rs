// ABOUTME: Seeded AI-style recommendation fixtures shown on the insights dashboard
// ABOUTME: Illustrative records; confidence scores carry no scoring model behind them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalPath Health

//! Seeded recommendations.
//!
//! These are the profile-driven entries the insights dashboard starts with;
//! vitals-derived entries are merged in on top by
//! [`crate::intelligence::merge_derived`].

use crate::models::{
    ActionType, Recommendation, RecommendationAction, RecommendationCategory, Urgency,
};

fn action(action_type: ActionType, text: &str, link: Option<&str>) -> Option<RecommendationAction> {
    Some(RecommendationAction {
        action_type,
        text: text.to_owned(),
        link: link.map(str::to_owned),
    })
}

/// The seeded recommendation set
#[must_use]
pub fn seed_recommendations() -> Vec<Recommendation> {
    vec![
        Recommendation {
            id: "seed-1".to_owned(),
            title: "Schedule Annual Blood Work".to_owned(),
            description: "Based on your age and family history, an annual blood panel is recommended.".to_owned(),
            category: RecommendationCategory::Checkup,
            urgency: Urgency::Medium,
            confidence: 89,
            reasoning: "Your profile indicates you're over 40 with a family history of diabetes.".to_owned(),
            action: action(ActionType::Appointment, "Schedule Blood Work", Some("/calendar")),
            premium: false,
            metric: None,
        },
        Recommendation {
            id: "seed-2".to_owned(),
            title: "Consider Nutritionist Consultation".to_owned(),
            description: "Your recent weight change may benefit from professional dietary guidance.".to_owned(),
            category: RecommendationCategory::Nutrition,
            urgency: Urgency::Low,
            confidence: 75,
            reasoning: "Your health profile shows a 12lb weight gain in the last 6 months.".to_owned(),
            action: action(ActionType::Appointment, "Find Nutritionist", Some("/calendar")),
            premium: false,
            metric: None,
        },
        Recommendation {
            id: "seed-3".to_owned(),
            title: "Add 30 Minutes of Walking Daily".to_owned(),
            description: "Increasing your daily activity could improve your cardiovascular health.".to_owned(),
            category: RecommendationCategory::Lifestyle,
            urgency: Urgency::Medium,
            confidence: 92,
            reasoning: "Your activity level is below recommended guidelines for your age group.".to_owned(),
            action: action(ActionType::Habit, "Track Progress", None),
            premium: false,
            metric: None,
        },
        Recommendation {
            id: "seed-4".to_owned(),
            title: "Dental Check-up Overdue".to_owned(),
            description: "It's been over 12 months since your last dental visit.".to_owned(),
            category: RecommendationCategory::Checkup,
            urgency: Urgency::High,
            confidence: 98,
            reasoning: "Dental check-ups are recommended every 6 months; your last visit was 14 months ago.".to_owned(),
            action: action(ActionType::Appointment, "Schedule Dental Visit", Some("/calendar")),
            premium: false,
            metric: None,
        },
        Recommendation {
            id: "seed-5".to_owned(),
            title: "Consider Heart Health Screening".to_owned(),
            description: "Based on your family history, a heart health screening is recommended.".to_owned(),
            category: RecommendationCategory::Specialist,
            urgency: Urgency::Medium,
            confidence: 82,
            reasoning: "Multiple family members with cardiovascular disease suggests heightened risk.".to_owned(),
            action: action(ActionType::Appointment, "Find Cardiologist", Some("/calendar")),
            premium: true,
            metric: None,
        },
        Recommendation {
            id: "seed-6".to_owned(),
            title: "Mindfulness Practice for Stress Management".to_owned(),
            description: "Analysis suggests elevated stress levels based on your health patterns.".to_owned(),
            category: RecommendationCategory::Mental,
            urgency: Urgency::Medium,
            confidence: 77,
            reasoning: "Recent appointment notes mention stress, and your sleep patterns show disturbance.".to_owned(),
            action: action(ActionType::Education, "Learn Techniques", None),
            premium: true,
            metric: None,
        },
    ]
}
