// ABOUTME: Main library entry point for the VitalPath preventative health core
// ABOUTME: Exposes state storage, health providers, the data service, and care derivation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalPath Health

#![deny(unsafe_code)]

//! # VitalPath Preventative Health Core
//!
//! The domain core of the VitalPath preventative healthcare product: a
//! connection/consent/vitals service backed by a pluggable state store, a
//! synthetic health-platform provider behind a typed async trait, and a
//! threshold-based derivation pass that turns vitals into recommendations and
//! care-calendar entries.
//!
//! ## Architecture
//!
//! - **State** lives in an injected [`storage::StateStore`] (in-memory or
//!   JSON file), never in ambient globals.
//! - **Providers** implement [`providers::HealthProvider`]; the shipped
//!   [`providers::SyntheticHealthProvider`] simulates platform latency and
//!   generates plausible vitals, so tests can inject a zero-latency fake.
//! - **Derivation** is a pure pass over a vitals bag; derived entries carry
//!   stable per-metric identity keys so re-derivation replaces rather than
//!   duplicates.

/// Session flag management over the state store
pub mod auth;
/// Fixture catalogs and the planners/trackers built on them
pub mod catalog;
/// Environment-driven service configuration
pub mod config;
/// Threshold constants and storage keys
pub mod constants;
/// Unified error handling
pub mod errors;
/// Vitals derivation and ranking
pub mod intelligence;
/// Structured logging setup
pub mod logging;
/// Shared domain models
pub mod models;
/// Health platform provider trait and implementations
pub mod providers;
/// Connection, consent, and vitals service
pub mod service;
/// Key-value state store trait and backends
pub mod storage;

pub use errors::{AppError, AppResult, ErrorCode};
pub use service::HealthDataService;
