// ABOUTME: Dynamic reminders with urgency-driven ordering, snooze, and completion
// ABOUTME: Seeded fixture reminders anchored relative to the passed clock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalPath Health

//! Dynamic reminders.

use crate::errors::{AppError, AppResult};
use crate::intelligence;
use crate::models::{NotificationMethod, Reminder, ReminderCategory, Urgency};
use chrono::{DateTime, Duration, Utc};
use tracing::info;

/// The reminder board: pending and completed reminders
#[derive(Debug, Clone, Default)]
pub struct ReminderBoard {
    reminders: Vec<Reminder>,
}

impl ReminderBoard {
    /// Start from an explicit reminder list
    #[must_use]
    pub fn new(reminders: Vec<Reminder>) -> Self {
        Self { reminders }
    }

    /// Start from the seeded fixture reminders, anchored at `now`
    #[must_use]
    pub fn seeded(now: DateTime<Utc>) -> Self {
        Self::new(seed_reminders(now))
    }

    /// All reminders, unordered
    #[must_use]
    pub fn reminders(&self) -> &[Reminder] {
        &self.reminders
    }

    /// Pending reminders in display order: urgency, then due date, then id
    #[must_use]
    pub fn pending(&self) -> Vec<Reminder> {
        let mut pending: Vec<Reminder> = self
            .reminders
            .iter()
            .filter(|reminder| !reminder.completed)
            .cloned()
            .collect();
        intelligence::sort_reminders(&mut pending);
        pending
    }

    /// Reminders past due and not completed
    #[must_use]
    pub fn overdue(&self, now: DateTime<Utc>) -> Vec<&Reminder> {
        self.reminders
            .iter()
            .filter(|reminder| reminder.is_overdue(now))
            .collect()
    }

    /// Mark a reminder completed
    ///
    /// # Errors
    /// Returns [`crate::ErrorCode::ResourceNotFound`] when no reminder has `id`
    pub fn complete(&mut self, id: &str) -> AppResult<()> {
        let reminder = self.find_mut(id)?;
        reminder.completed = true;
        info!(id, "reminder completed");
        Ok(())
    }

    /// Push a reminder's due date out by `days`, counting the snooze
    ///
    /// # Errors
    /// Returns [`crate::ErrorCode::InvalidInput`] for a non-positive `days`
    /// and [`crate::ErrorCode::ResourceNotFound`] for an unknown reminder
    pub fn snooze(&mut self, id: &str, days: i64) -> AppResult<()> {
        if days <= 0 {
            return Err(AppError::invalid_input("snooze days must be positive"));
        }
        let reminder = self.find_mut(id)?;
        reminder.due += Duration::days(days);
        reminder.snooze_count += 1;
        info!(id, days, snoozes = reminder.snooze_count, "reminder snoozed");
        Ok(())
    }

    fn find_mut(&mut self, id: &str) -> AppResult<&mut Reminder> {
        self.reminders
            .iter_mut()
            .find(|reminder| reminder.id == id)
            .ok_or_else(|| AppError::not_found(format!("reminder {id}")))
    }
}

/// The seeded fixture reminders, with due dates relative to `now`
#[must_use]
pub fn seed_reminders(now: DateTime<Utc>) -> Vec<Reminder> {
    vec![
        Reminder {
            id: "seed-1".to_owned(),
            title: "Annual Flu Vaccination".to_owned(),
            description: Some("Due based on your health profile and local flu activity".to_owned()),
            due: now + Duration::days(10),
            urgency: Urgency::Medium,
            category: ReminderCategory::Vaccination,
            notification_frequency: "Weekly until 3 days before, then daily".to_owned(),
            notification_methods: vec![NotificationMethod::Push, NotificationMethod::Email],
            snooze_count: 0,
            completed: false,
        },
        Reminder {
            id: "seed-2".to_owned(),
            title: "Medication: Refill Prescription".to_owned(),
            description: Some("Your prescription will run out in 5 days".to_owned()),
            due: now + Duration::days(5),
            urgency: Urgency::High,
            category: ReminderCategory::Medication,
            notification_frequency: "Daily until completed".to_owned(),
            notification_methods: vec![
                NotificationMethod::Push,
                NotificationMethod::Email,
                NotificationMethod::Sms,
            ],
            snooze_count: 1,
            completed: false,
        },
        Reminder {
            id: "seed-3".to_owned(),
            title: "Blood Test Results Follow-up".to_owned(),
            description: Some("Discuss recent abnormal lab results with your doctor".to_owned()),
            due: now + Duration::days(20),
            urgency: Urgency::Medium,
            category: ReminderCategory::FollowUp,
            notification_frequency: "Weekly until 1 week before, then every 2 days".to_owned(),
            notification_methods: vec![NotificationMethod::Push, NotificationMethod::Email],
            snooze_count: 0,
            completed: false,
        },
        Reminder {
            id: "seed-4".to_owned(),
            title: "Dental Cleaning".to_owned(),
            description: Some("Regular 6-month dental checkup and cleaning".to_owned()),
            due: now + Duration::days(30),
            urgency: Urgency::Low,
            category: ReminderCategory::Checkup,
            notification_frequency: "Monthly until 2 weeks before, then weekly".to_owned(),
            notification_methods: vec![NotificationMethod::Push],
            snooze_count: 0,
            completed: false,
        },
        Reminder {
            id: "seed-5".to_owned(),
            title: "Take Blood Pressure Medication".to_owned(),
            description: Some("Your doctor flagged this as high priority".to_owned()),
            due: now - Duration::days(1),
            urgency: Urgency::Emergency,
            category: ReminderCategory::Medication,
            notification_frequency: "Multiple times daily until taken".to_owned(),
            notification_methods: vec![
                NotificationMethod::Push,
                NotificationMethod::Sms,
                NotificationMethod::Email,
            ],
            snooze_count: 2,
            completed: false,
        },
    ]
}
