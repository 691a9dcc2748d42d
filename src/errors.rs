// ABOUTME: Unified error handling with stable error codes for the VitalPath core
// ABOUTME: Defines AppError, ErrorCode, and the AppResult alias used across all modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalPath Health

//! # Unified Error Handling
//!
//! Centralized error types for the VitalPath core. Every fallible operation
//! returns [`AppResult`], and every error carries a stable [`ErrorCode`] so
//! callers can branch on the class of failure without string matching.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Connection & consent (1000-1999)
    #[serde(rename = "NOT_CONNECTED")]
    NotConnected = 1000,
    #[serde(rename = "CONSENT_REQUIRED")]
    ConsentRequired = 1001,
    #[serde(rename = "PROVIDER_NOT_REGISTERED")]
    ProviderNotRegistered = 1002,
    #[serde(rename = "LOCATION_PERMISSION_REQUIRED")]
    LocationPermissionRequired = 1003,

    // Validation (3000-3999)
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3002,

    // Resources (4000-4999)
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,

    // External providers (5000-5999)
    #[serde(rename = "PROVIDER_ERROR")]
    ProviderError = 5000,

    // Configuration (6000-6999)
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,

    // Internal (9000-9999)
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9001,
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9002,
}

impl ErrorCode {
    /// Get a user-friendly description of this error class
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::NotConnected => "No health platform is connected",
            Self::ConsentRequired => "Health data consent has not been granted",
            Self::ProviderNotRegistered => "No provider is registered for this platform",
            Self::LocationPermissionRequired => "Location permission has not been granted",
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ProviderError => "The health platform provider encountered an error",
            Self::ConfigError => "Configuration error encountered",
            Self::InternalError => "An internal error occurred",
            Self::StorageError => "State storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new error with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Attach a source error for chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// No platform connected
    pub fn not_connected(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotConnected, message)
    }

    /// Consent has not been granted
    pub fn consent_required(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConsentRequired, message)
    }

    /// No provider registered for the requested platform
    pub fn provider_not_registered(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ProviderNotRegistered, message)
    }

    /// Location permission not granted
    pub fn location_permission_required(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::LocationPermissionRequired, message)
    }

    /// Invalid caller input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Required field missing from a record under construction
    pub fn missing_field(field: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("required field is missing: {field}"),
        )
    }

    /// Resource lookup failed
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ResourceNotFound, message)
    }

    /// Provider-side failure
    pub fn provider(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ProviderError, message)
    }

    /// Configuration problem
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Internal invariant violation
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// State store failure
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, err.to_string()).with_source(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorCode::StorageError, err.to_string()).with_source(err)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn display_includes_code_description_and_message() {
        let err = AppError::consent_required("refresh requested without consent");
        let rendered = err.to_string();
        assert!(rendered.contains("consent has not been granted"));
        assert!(rendered.contains("refresh requested"));
    }

    #[test]
    fn serde_json_errors_map_to_serialization_code() {
        let bad = serde_json::from_str::<serde_json::Value>("{nope").unwrap_err();
        let err = AppError::from(bad);
        assert_eq!(err.code, ErrorCode::SerializationError);
        assert!(err.source.is_some());
    }
}
