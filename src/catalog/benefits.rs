// ABOUTME: Insurance benefit tracking: allowances, usage percentages, and claims
// ABOUTME: Filing a claim validates required fields and draws down the benefit allowance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalPath Health

//! Insurance benefits and claims.

use crate::errors::{AppError, AppResult};
use crate::models::{Benefit, BenefitClaim, ClaimStatus, ClaimType};
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use tracing::info;
use uuid::Uuid;

/// Input for filing a claim
#[derive(Debug, Clone)]
pub struct NewClaim {
    /// Benefit to draw from
    pub benefit_id: String,
    /// Claimed amount
    pub amount: f64,
    /// Service date
    pub date: DateTime<Utc>,
    /// Care provider name
    pub provider: String,
    /// What the claim covers
    pub description: String,
}

/// Benefits and the claims filed against them
#[derive(Debug, Clone, Default)]
pub struct BenefitLedger {
    benefits: Vec<Benefit>,
    claims: Vec<BenefitClaim>,
}

impl BenefitLedger {
    /// Start from explicit benefit and claim lists
    #[must_use]
    pub fn new(benefits: Vec<Benefit>, claims: Vec<BenefitClaim>) -> Self {
        Self { benefits, claims }
    }

    /// Start from the seeded fixtures, anchored at `now`
    #[must_use]
    pub fn seeded(now: DateTime<Utc>) -> Self {
        Self::new(seed_benefits(now.date_naive()), seed_claims(now))
    }

    /// All benefits
    #[must_use]
    pub fn benefits(&self) -> &[Benefit] {
        &self.benefits
    }

    /// Look up a benefit by id
    ///
    /// # Errors
    /// Returns [`crate::ErrorCode::ResourceNotFound`] when no benefit has `id`
    pub fn benefit(&self, id: &str) -> AppResult<&Benefit> {
        self.benefits
            .iter()
            .find(|benefit| benefit.id == id)
            .ok_or_else(|| AppError::not_found(format!("benefit {id}")))
    }

    /// Claims filed against one benefit, newest first
    #[must_use]
    pub fn claims_for(&self, benefit_id: &str) -> Vec<&BenefitClaim> {
        let mut claims: Vec<&BenefitClaim> = self
            .claims
            .iter()
            .filter(|claim| claim.benefit_id == benefit_id)
            .collect();
        claims.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.id.cmp(&b.id)));
        claims
    }

    /// File a claim against a benefit.
    ///
    /// The benefit must exist, the amount must be positive, and provider and
    /// description must be non-empty. The claim is recorded as pending and
    /// the benefit's used amount is drawn down immediately.
    ///
    /// # Errors
    /// Returns a validation error for empty fields or a non-positive amount,
    /// and [`crate::ErrorCode::ResourceNotFound`] for an unknown benefit
    pub fn file_claim(&mut self, new_claim: NewClaim) -> AppResult<&BenefitClaim> {
        if new_claim.provider.trim().is_empty() {
            return Err(AppError::missing_field("provider"));
        }
        if new_claim.description.trim().is_empty() {
            return Err(AppError::missing_field("description"));
        }
        if new_claim.amount <= 0.0 {
            return Err(AppError::invalid_input("claim amount must be positive"));
        }
        let benefit = self
            .benefits
            .iter_mut()
            .find(|benefit| benefit.id == new_claim.benefit_id)
            .ok_or_else(|| AppError::not_found(format!("benefit {}", new_claim.benefit_id)))?;

        benefit.amount_used += new_claim.amount;
        let claim = BenefitClaim {
            id: Uuid::new_v4().to_string(),
            benefit_id: new_claim.benefit_id,
            amount: new_claim.amount,
            date: new_claim.date,
            provider: new_claim.provider,
            description: new_claim.description,
            status: ClaimStatus::Pending,
        };
        info!(id = %claim.id, benefit = %claim.benefit_id, amount = claim.amount, "claim filed");
        self.claims.push(claim);
        self.claims
            .last()
            .ok_or_else(|| AppError::internal("claim list empty after insert"))
    }
}

fn next_january_first(today: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(today.year() + 1, 1, 1).unwrap_or(today)
}

/// The seeded fixture benefits
#[must_use]
pub fn seed_benefits(today: NaiveDate) -> Vec<Benefit> {
    let renewal = next_january_first(today);
    vec![
        Benefit {
            id: "seed-1".to_owned(),
            name: "Medical Office Visits".to_owned(),
            category: "Medical".to_owned(),
            amount_total: 1000.0,
            amount_used: 350.0,
            renewal,
            claim_type: ClaimType::Manual,
        },
        Benefit {
            id: "seed-2".to_owned(),
            name: "Dental Coverage".to_owned(),
            category: "Dental".to_owned(),
            amount_total: 1500.0,
            amount_used: 450.0,
            renewal,
            claim_type: ClaimType::Manual,
        },
        Benefit {
            id: "seed-3".to_owned(),
            name: "Vision Care".to_owned(),
            category: "Vision".to_owned(),
            amount_total: 500.0,
            amount_used: 200.0,
            renewal,
            claim_type: ClaimType::Manual,
        },
        Benefit {
            id: "seed-4".to_owned(),
            name: "Mental Health Services".to_owned(),
            category: "Mental Health".to_owned(),
            amount_total: 2000.0,
            amount_used: 600.0,
            renewal,
            claim_type: ClaimType::Manual,
        },
    ]
}

/// The seeded fixture claims, with dates relative to `now`
#[must_use]
pub fn seed_claims(now: DateTime<Utc>) -> Vec<BenefitClaim> {
    vec![
        BenefitClaim {
            id: "seed-1".to_owned(),
            benefit_id: "seed-1".to_owned(),
            amount: 150.0,
            date: now - Duration::days(100),
            provider: "Dr. Smith Medical Group".to_owned(),
            description: "Annual physical examination".to_owned(),
            status: ClaimStatus::Approved,
        },
        BenefitClaim {
            id: "seed-2".to_owned(),
            benefit_id: "seed-1".to_owned(),
            amount: 200.0,
            date: now - Duration::days(35),
            provider: "Urgent Care Center".to_owned(),
            description: "Urgent care visit for fever".to_owned(),
            status: ClaimStatus::Approved,
        },
        BenefitClaim {
            id: "seed-3".to_owned(),
            benefit_id: "seed-2".to_owned(),
            amount: 450.0,
            date: now - Duration::days(75),
            provider: "Smile Dental Group".to_owned(),
            description: "Dental cleaning and X-rays".to_owned(),
            status: ClaimStatus::Approved,
        },
    ]
}
