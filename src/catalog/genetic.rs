// ABOUTME: Genetic risk assessment fixtures and risk-ordered views
// ABOUTME: Percentages are illustrative; no scoring model stands behind them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalPath Health

//! Genetic risk assessments.

use crate::models::{GeneticRisk, GeneticRiskLevel};

/// The seeded genetic risk assessments
#[must_use]
pub fn seed_genetic_risks() -> Vec<GeneticRisk> {
    vec![
        GeneticRisk {
            condition: "Type 2 Diabetes".to_owned(),
            risk: GeneticRiskLevel::High,
            percentage: 32,
            description: "Your genetic profile suggests an elevated risk of developing type 2 diabetes compared to the general population.".to_owned(),
            recommendations: vec![
                "Schedule regular blood glucose tests".to_owned(),
                "Consider meeting with a nutritionist".to_owned(),
                "Maintain a healthy weight through diet and exercise".to_owned(),
                "Monitor carbohydrate intake".to_owned(),
            ],
        },
        GeneticRisk {
            condition: "Coronary Heart Disease".to_owned(),
            risk: GeneticRiskLevel::Moderate,
            percentage: 18,
            description: "Your genetic markers indicate a moderate risk of coronary heart disease over your lifetime.".to_owned(),
            recommendations: vec![
                "Regular cholesterol screenings".to_owned(),
                "Heart-healthy Mediterranean diet".to_owned(),
                "Moderate cardiovascular exercise".to_owned(),
                "Consider discussing preventative medications with your doctor".to_owned(),
            ],
        },
        GeneticRisk {
            condition: "Alzheimer's Disease".to_owned(),
            risk: GeneticRiskLevel::Low,
            percentage: 6,
            description: "Your genetic profile suggests a below-average risk for developing Alzheimer's disease.".to_owned(),
            recommendations: vec![
                "Stay mentally active".to_owned(),
                "Regular physical activity".to_owned(),
                "Maintain social connections".to_owned(),
                "Follow a brain-healthy diet".to_owned(),
            ],
        },
    ]
}

/// Sort risks highest percentage first, condition name as tie-break
pub fn sort_by_risk(risks: &mut [GeneticRisk]) {
    risks.sort_by(|a, b| {
        b.percentage
            .cmp(&a.percentage)
            .then_with(|| a.condition.cmp(&b.condition))
    });
}
