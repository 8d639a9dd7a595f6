// ABOUTME: Unified error handling for the Serein wellness planning engine
// ABOUTME: Defines error codes, the AppError type, and user-facing message mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Serein Wellness

//! # Unified Error Handling
//!
//! Centralized error handling for the crate. Every fallible boundary (the
//! AI service, the persistent store, profile validation) maps its raw
//! failures into an [`AppError`] carrying an [`ErrorCode`]. Raw service and
//! parse errors are preserved in the source chain for logs; the view layer
//! only ever shows [`AppError::user_message`].

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (1000-1999)
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 1000,
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 1001,

    // Persistent store (2000-2999)
    #[serde(rename = "STORE_CORRUPTION")]
    StoreCorruption = 2000,
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 2001,

    // AI generation pipeline (3000-3999)
    #[serde(rename = "GENERATION_FAILED")]
    GenerationFailed = 3000,
    #[serde(rename = "REPLACEMENT_FAILED")]
    ReplacementFailed = 3001,

    // Resource lookup (4000-4999)
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,

    // External services (5000-5999)
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError = 5000,
    #[serde(rename = "EXTERNAL_RATE_LIMITED")]
    ExternalRateLimited = 5001,

    // Configuration (6000-6999)
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,
    #[serde(rename = "CONFIG_MISSING")]
    ConfigMissing = 6001,

    // Internal errors (9000-9999)
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9001,
}

impl ErrorCode {
    /// Get a short technical description of this error code
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing",
            Self::StoreCorruption => "A persisted record could not be parsed",
            Self::StorageError => "Persistent store operation failed",
            Self::GenerationFailed => "Weekly program generation failed",
            Self::ReplacementFailed => "Activity replacement suggestion failed",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ExternalServiceError => "The AI service returned an error",
            Self::ExternalRateLimited => "The AI service is rate limiting requests",
            Self::ConfigError => "Configuration error encountered",
            Self::ConfigMissing => "Required configuration is missing",
            Self::InternalError => "An internal error occurred",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Technical error message, suitable for logs
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// The message shown to the end user.
    ///
    /// Product copy is French; technical detail stays in `message` and the
    /// source chain, which are logged but never rendered.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self.code {
            ErrorCode::GenerationFailed => {
                "Désolé, une erreur est survenue lors de la création de votre programme. \
                 Veuillez réessayer."
            }
            ErrorCode::ReplacementFailed => {
                "Erreur lors de la suggestion de l'IA. Veuillez réessayer."
            }
            ErrorCode::ExternalRateLimited => {
                "Le service est momentanément saturé. Veuillez réessayer dans quelques instants."
            }
            ErrorCode::InvalidInput | ErrorCode::MissingRequiredField => {
                "Certaines informations sont manquantes ou invalides."
            }
            _ => "Une erreur est survenue. Veuillez réessayer.",
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Convenience functions for creating common errors
impl AppError {
    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Required field missing
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("missing required field: {}", field.into()),
        )
    }

    /// Persisted record failed to parse
    pub fn store_corruption(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StoreCorruption, message)
    }

    /// Persistent store operation failed
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Weekly program generation failed
    pub fn generation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::GenerationFailed, message)
    }

    /// Activity replacement failed
    pub fn replacement(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ReplacementFailed, message)
    }

    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// External service error
    pub fn external_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{}: {}", service.into(), message.into()),
        )
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

/// Conversion from `serde_json` errors; used wherever records are
/// (de)serialized for the store
impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

/// Conversion from `anyhow::Error` at outer initialization seams
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::new(ErrorCode::InternalError, error.to_string())
    }
}
