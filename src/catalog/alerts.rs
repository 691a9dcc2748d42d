// ABOUTME: Location-based health alerts behind a location-permission gate
// ABOUTME: Fixture alerts for the user's area, ranked most severe first
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalPath Health

//! Location-based health alerts.
//!
//! Alerts are only available after the user grants location permission;
//! reading the feed without it is an error, and revoking the permission
//! clears any loaded alerts.

use crate::errors::{AppError, AppResult};
use crate::models::{AlertSeverity, AlertType, HealthAlert};
use chrono::{DateTime, Utc};
use tracing::info;

/// The alert feed for the user's area, gated on location permission
#[derive(Debug, Clone, Default)]
pub struct AlertFeed {
    permission_granted: bool,
    alerts: Vec<HealthAlert>,
}

impl AlertFeed {
    /// Start with no permission and no alerts
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether location permission has been granted
    #[must_use]
    pub fn permission_granted(&self) -> bool {
        self.permission_granted
    }

    /// Grant location permission and load the alerts for the area,
    /// most severe first.
    pub fn enable_location(&mut self, now: DateTime<Utc>) {
        self.permission_granted = true;
        let mut alerts = seed_health_alerts(now);
        sort_by_severity(&mut alerts);
        self.alerts = alerts;
        info!(count = self.alerts.len(), "location alerts loaded");
    }

    /// Revoke location permission and drop any loaded alerts
    pub fn disable_location(&mut self) {
        self.permission_granted = false;
        self.alerts.clear();
        info!("location alerts cleared");
    }

    /// The alerts for the user's area, most severe first.
    ///
    /// # Errors
    /// Returns [`crate::ErrorCode::LocationPermissionRequired`] when location
    /// permission has not been granted
    pub fn alerts(&self) -> AppResult<&[HealthAlert]> {
        if !self.permission_granted {
            return Err(AppError::location_permission_required(
                "enable location to see alerts for your area",
            ));
        }
        Ok(&self.alerts)
    }
}

/// Sort alerts most severe first, id as tie-break
pub fn sort_by_severity(alerts: &mut [HealthAlert]) {
    alerts.sort_by(|a, b| {
        a.severity
            .sort_rank()
            .cmp(&b.severity.sort_rank())
            .then_with(|| a.id.cmp(&b.id))
    });
}

/// The seeded fixture alerts, issued at `now`
#[must_use]
pub fn seed_health_alerts(now: DateTime<Utc>) -> Vec<HealthAlert> {
    vec![
        HealthAlert {
            id: "seed-1".to_owned(),
            title: "Poor Air Quality Today".to_owned(),
            description: "Air quality index is above 150. People with respiratory conditions should limit outdoor activity.".to_owned(),
            alert_type: AlertType::AirQuality,
            severity: AlertSeverity::Medium,
            location: "Your Area".to_owned(),
            date: now,
        },
        HealthAlert {
            id: "seed-2".to_owned(),
            title: "Flu Season Alert".to_owned(),
            description: "Increased flu activity reported in your area. Consider getting a flu shot if you haven't already.".to_owned(),
            alert_type: AlertType::DiseaseOutbreak,
            severity: AlertSeverity::Medium,
            location: "Your Region".to_owned(),
            date: now,
        },
        HealthAlert {
            id: "seed-3".to_owned(),
            title: "Heat Advisory".to_owned(),
            description: "Temperatures expected to exceed 90\u{b0}F. Stay hydrated and limit outdoor activities during peak hours.".to_owned(),
            alert_type: AlertType::Weather,
            severity: AlertSeverity::High,
            location: "Your City".to_owned(),
            date: now,
        },
    ]
}
