// ABOUTME: Environment-driven configuration for the VitalPath core and CLI
// ABOUTME: Typed parsing of latency, state-file path, RNG seed, and log settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalPath Health

//! Environment-based configuration.
//!
//! All knobs come from `VITALPATH_*` environment variables with sensible
//! defaults, so the CLI and demos run with no setup.

use crate::constants::latency;
use crate::errors::{AppError, AppResult};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Default operational logging
    #[default]
    Info,
    /// Verbose debugging
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback to `Info`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }

    /// The `EnvFilter` directive string for this level
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Runtime configuration for the core services
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Where the JSON state file lives
    pub state_path: PathBuf,
    /// Simulated platform connection latency, in milliseconds
    pub connect_ms: u64,
    /// Simulated vitals fetch latency, in milliseconds
    pub latency_ms: u64,
    /// Fixed RNG seed for deterministic synthetic vitals
    pub rng_seed: Option<u64>,
    /// Log level
    pub log_level: LogLevel,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            state_path: default_state_path(),
            connect_ms: latency::CONNECT_MS,
            latency_ms: latency::FETCH_MS,
            rng_seed: None,
            log_level: LogLevel::default(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from `VITALPATH_*` environment variables.
    ///
    /// Recognized variables:
    /// - `VITALPATH_STATE_PATH` - state file location
    /// - `VITALPATH_CONNECT_MS` - simulated connection latency
    /// - `VITALPATH_LATENCY_MS` - simulated vitals fetch latency
    /// - `VITALPATH_RNG_SEED` - fixed seed for synthetic vitals
    /// - `VITALPATH_LOG_LEVEL` - error/warn/info/debug/trace
    ///
    /// # Errors
    /// Returns [`crate::ErrorCode::ConfigError`] when a numeric variable
    /// fails to parse
    pub fn from_env() -> AppResult<Self> {
        let mut config = Self::default();

        if let Ok(path) = env::var("VITALPATH_STATE_PATH") {
            config.state_path = PathBuf::from(path);
        }
        if let Ok(raw) = env::var("VITALPATH_CONNECT_MS") {
            config.connect_ms = raw.parse().map_err(|_| {
                AppError::config(format!("VITALPATH_CONNECT_MS is not a number: {raw}"))
            })?;
        }
        if let Ok(raw) = env::var("VITALPATH_LATENCY_MS") {
            config.latency_ms = raw.parse().map_err(|_| {
                AppError::config(format!("VITALPATH_LATENCY_MS is not a number: {raw}"))
            })?;
        }
        if let Ok(raw) = env::var("VITALPATH_RNG_SEED") {
            let seed = raw.parse().map_err(|_| {
                AppError::config(format!("VITALPATH_RNG_SEED is not a number: {raw}"))
            })?;
            config.rng_seed = Some(seed);
        }
        if let Ok(raw) = env::var("VITALPATH_LOG_LEVEL") {
            config.log_level = LogLevel::from_str_or_default(&raw);
        }

        Ok(config)
    }

    /// Simulated connection latency as a [`Duration`]
    #[must_use]
    pub fn connect_latency(&self) -> Duration {
        Duration::from_millis(self.connect_ms)
    }

    /// Simulated fetch latency as a [`Duration`]
    #[must_use]
    pub fn fetch_latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

/// Default state file location under the platform data directory
#[must_use]
pub fn default_state_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vitalpath")
        .join("state.json")
}
