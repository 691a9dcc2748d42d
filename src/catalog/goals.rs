// ABOUTME: Health goal tracking: seeded goals, validated creation, measurement recording
// ABOUTME: Progress is direction-aware and a goal completes when it reaches 100 percent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalPath Health

//! Health goal tracking.

use crate::errors::{AppError, AppResult};
use crate::models::{GoalCategory, GoalMeasurement, GoalStatus, HealthGoal};
use chrono::{Duration, NaiveDate};
use tracing::info;
use uuid::Uuid;

/// Input for creating a goal
#[derive(Debug, Clone)]
pub struct NewGoal {
    /// Short title
    pub title: String,
    /// Category
    pub category: GoalCategory,
    /// Human-readable target
    pub target: String,
    /// Starting value
    pub current_value: f64,
    /// Value to reach
    pub target_value: f64,
    /// Unit label
    pub unit: String,
    /// Tracking start
    pub start_date: NaiveDate,
    /// Target completion date
    pub end_date: NaiveDate,
}

/// The goal book: tracked goals and their histories
#[derive(Debug, Clone, Default)]
pub struct GoalBook {
    goals: Vec<HealthGoal>,
}

impl GoalBook {
    /// Start from an explicit goal list
    #[must_use]
    pub fn new(goals: Vec<HealthGoal>) -> Self {
        Self { goals }
    }

    /// Start from the seeded fixture goals, anchored at `today`
    #[must_use]
    pub fn seeded(today: NaiveDate) -> Self {
        Self::new(seed_goals(today))
    }

    /// All goals, unordered
    #[must_use]
    pub fn goals(&self) -> &[HealthGoal] {
        &self.goals
    }

    /// Look up a goal by id
    ///
    /// # Errors
    /// Returns [`crate::ErrorCode::ResourceNotFound`] when no goal has `id`
    pub fn goal(&self, id: &str) -> AppResult<&HealthGoal> {
        self.goals
            .iter()
            .find(|goal| goal.id == id)
            .ok_or_else(|| AppError::not_found(format!("goal {id}")))
    }

    /// Create a goal after validating required fields.
    ///
    /// Title, target, and unit must be non-empty; the end date must fall
    /// after the start date; target and starting value must differ.
    ///
    /// # Errors
    /// Returns [`crate::ErrorCode::MissingRequiredField`] or
    /// [`crate::ErrorCode::InvalidInput`] when validation fails
    pub fn add_goal(&mut self, new_goal: NewGoal) -> AppResult<&HealthGoal> {
        if new_goal.title.trim().is_empty() {
            return Err(AppError::missing_field("title"));
        }
        if new_goal.target.trim().is_empty() {
            return Err(AppError::missing_field("target"));
        }
        if new_goal.unit.trim().is_empty() {
            return Err(AppError::missing_field("unit"));
        }
        if new_goal.end_date <= new_goal.start_date {
            return Err(AppError::invalid_input("end date must be after start date"));
        }
        if (new_goal.target_value - new_goal.current_value).abs() < f64::EPSILON {
            return Err(AppError::invalid_input(
                "target value must differ from the starting value",
            ));
        }

        let goal = HealthGoal {
            id: Uuid::new_v4().to_string(),
            title: new_goal.title,
            category: new_goal.category,
            target: new_goal.target,
            current_value: new_goal.current_value,
            target_value: new_goal.target_value,
            unit: new_goal.unit,
            start_date: new_goal.start_date,
            end_date: new_goal.end_date,
            status: GoalStatus::Active,
            history: vec![GoalMeasurement {
                date: new_goal.start_date,
                value: new_goal.current_value,
            }],
        };
        info!(id = %goal.id, title = %goal.title, "goal created");
        self.goals.push(goal);
        self.goals
            .last()
            .ok_or_else(|| AppError::internal("goal list empty after insert"))
    }

    /// Record a measurement, updating the current value and history.
    ///
    /// Reaching 100% progress marks the goal completed.
    ///
    /// # Errors
    /// Returns [`crate::ErrorCode::ResourceNotFound`] when no goal has `id`
    pub fn record_measurement(
        &mut self,
        id: &str,
        date: NaiveDate,
        value: f64,
    ) -> AppResult<u8> {
        let goal = self
            .goals
            .iter_mut()
            .find(|goal| goal.id == id)
            .ok_or_else(|| AppError::not_found(format!("goal {id}")))?;

        goal.current_value = value;
        goal.history.push(GoalMeasurement { date, value });
        let progress = goal.progress_percent();
        if progress >= 100 && goal.status == GoalStatus::Active {
            goal.status = GoalStatus::Completed;
            info!(id, "goal completed");
        }
        Ok(progress)
    }
}

/// The seeded fixture goals, with dates relative to `today`
#[must_use]
pub fn seed_goals(today: NaiveDate) -> Vec<HealthGoal> {
    vec![
        HealthGoal {
            id: "seed-1".to_owned(),
            title: "Weight Loss".to_owned(),
            category: GoalCategory::Weight,
            target: "Lose 5kg".to_owned(),
            current_value: 78.0,
            target_value: 73.0,
            unit: "kg".to_owned(),
            start_date: today - Duration::days(56),
            end_date: today + Duration::days(34),
            status: GoalStatus::Active,
            history: vec![
                GoalMeasurement { date: today - Duration::days(56), value: 80.0 },
                GoalMeasurement { date: today - Duration::days(42), value: 79.2 },
                GoalMeasurement { date: today - Duration::days(25), value: 78.5 },
                GoalMeasurement { date: today - Duration::days(11), value: 78.0 },
            ],
        },
        HealthGoal {
            id: "seed-2".to_owned(),
            title: "Increase Daily Steps".to_owned(),
            category: GoalCategory::Fitness,
            target: "Reach 10,000 steps daily".to_owned(),
            current_value: 7500.0,
            target_value: 10000.0,
            unit: "steps".to_owned(),
            start_date: today - Duration::days(28),
            end_date: today + Duration::days(62),
            status: GoalStatus::Active,
            history: vec![
                GoalMeasurement { date: today - Duration::days(28), value: 5000.0 },
                GoalMeasurement { date: today - Duration::days(21), value: 5500.0 },
                GoalMeasurement { date: today - Duration::days(14), value: 6200.0 },
                GoalMeasurement { date: today - Duration::days(7), value: 7000.0 },
                GoalMeasurement { date: today, value: 7500.0 },
            ],
        },
        HealthGoal {
            id: "seed-3".to_owned(),
            title: "Improve Sleep Quality".to_owned(),
            category: GoalCategory::Sleep,
            target: "Sleep 8 hours nightly".to_owned(),
            current_value: 6.5,
            target_value: 8.0,
            unit: "hours".to_owned(),
            start_date: today - Duration::days(42),
            end_date: today + Duration::days(20),
            status: GoalStatus::Active,
            history: vec![
                GoalMeasurement { date: today - Duration::days(42), value: 5.5 },
                GoalMeasurement { date: today - Duration::days(35), value: 6.0 },
                GoalMeasurement { date: today - Duration::days(28), value: 6.2 },
                GoalMeasurement { date: today - Duration::days(21), value: 6.4 },
                GoalMeasurement { date: today - Duration::days(14), value: 6.5 },
            ],
        },
        HealthGoal {
            id: "seed-4".to_owned(),
            title: "Reduce Blood Pressure".to_owned(),
            category: GoalCategory::Medical,
            target: "Below 120/80".to_owned(),
            current_value: 130.0,
            target_value: 120.0,
            unit: "systolic".to_owned(),
            start_date: today - Duration::days(86),
            end_date: today + Duration::days(127),
            status: GoalStatus::Active,
            history: vec![
                GoalMeasurement { date: today - Duration::days(86), value: 140.0 },
                GoalMeasurement { date: today - Duration::days(56), value: 135.0 },
                GoalMeasurement { date: today - Duration::days(25), value: 130.0 },
            ],
        },
    ]
}
