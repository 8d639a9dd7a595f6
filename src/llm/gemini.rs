// ABOUTME: Google Gemini provider implementation with structured JSON output
// ABOUTME: Calls generateContent with a response schema via the Generative AI API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Serein Wellness

//! # Gemini Provider
//!
//! Implementation of the [`TextGenerator`] trait for Google's Gemini
//! models, using the `responseMimeType`/`responseSchema` generation config
//! so the service is constrained to emit a single JSON document.
//!
//! ## Configuration
//!
//! Set the `GEMINI_API_KEY` environment variable with your API key from
//! Google AI Studio: <https://aistudio.google.com/app/apikey>
//!
//! ## Supported Models
//!
//! - `gemini-2.5-flash` (default): fast model, sufficient for weekly
//!   program generation
//! - `gemini-2.0-flash-exp`: experimental fast model
//! - `gemini-1.5-pro`: advanced reasoning capabilities
//! - `gemini-1.5-flash`: balanced performance and cost

use std::env;
use std::fmt::{Debug, Formatter, Result as FmtResult};

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

use super::{GenerationRequest, TextGenerator};
use crate::constants::env_vars;
use crate::errors::{AppError, ErrorCode};

/// Default model to use
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Available Gemini models
const AVAILABLE_MODELS: &[&str] = &[
    "gemini-2.5-flash",
    "gemini-2.0-flash-exp",
    "gemini-1.5-pro",
    "gemini-1.5-flash",
];

/// Base URL for the Gemini API
const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

// ============================================================================
// API Request/Response Types
// ============================================================================

/// Gemini API request structure
#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

/// Content structure for the Gemini API
#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<ContentPart>,
}

/// Text part of a content block
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ContentPart {
    text: String,
}

/// Generation configuration carrying the structured-output constraint
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    response_mime_type: &'static str,
    response_schema: serde_json::Value,
    candidate_count: u32,
}

/// Gemini API response structure
#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<GeminiError>,
}

/// Response candidate
#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<GeminiContent>,
}

/// API error response from Gemini
#[derive(Debug, Deserialize)]
struct GeminiError {
    message: String,
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Google Gemini text generation provider
pub struct GeminiProvider {
    api_key: String,
    client: Client,
    default_model: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider with an API key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            client: Client::new(),
            default_model: DEFAULT_MODEL.to_owned(),
        }
    }

    /// Create a provider from the `GEMINI_API_KEY` environment variable
    ///
    /// # Errors
    ///
    /// Returns an error if the environment variable is not set.
    pub fn from_env() -> Result<Self, AppError> {
        let api_key = env::var(env_vars::GEMINI_API_KEY).map_err(|_| {
            AppError::new(
                ErrorCode::ConfigMissing,
                format!("{} environment variable not set", env_vars::GEMINI_API_KEY),
            )
        })?;
        Ok(Self::new(api_key))
    }

    /// Set a custom default model
    #[must_use]
    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    /// Models this provider accepts
    #[must_use]
    pub const fn available_models() -> &'static [&'static str] {
        AVAILABLE_MODELS
    }

    /// Build the API URL for a model and method
    fn build_url(&self, model: &str, method: &str) -> String {
        format!(
            "{API_BASE_URL}/models/{model}:{method}?key={}",
            self.api_key
        )
    }

    /// Build a Gemini API request from a [`GenerationRequest`]
    fn build_gemini_request(request: &GenerationRequest) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent {
                role: Some("user".to_owned()),
                parts: vec![ContentPart {
                    text: request.prompt.clone(),
                }],
            }],
            generation_config: Some(GenerationConfig {
                temperature: request.temperature,
                response_mime_type: "application/json",
                response_schema: request.response_schema.clone(),
                candidate_count: 1,
            }),
        }
    }

    /// Extract the response text from a Gemini response
    fn extract_content(response: GeminiResponse) -> Result<String, AppError> {
        response
            .candidates
            .and_then(|mut c| c.drain(..).next())
            .and_then(|c| c.content)
            .and_then(|mut c| c.parts.drain(..).next())
            .map(|part| part.text)
            .ok_or_else(|| AppError::external_service("gemini", "no content in response"))
    }

    /// Map an API error status to an appropriate error type.
    ///
    /// Rate limit (429) responses get a user-friendly quota message that
    /// exposes the retry delay from Gemini when present.
    fn map_api_error(status: u16, response_text: &str) -> AppError {
        let message = serde_json::from_str::<GeminiResponse>(response_text)
            .ok()
            .and_then(|r| r.error)
            .map_or_else(|| response_text.to_owned(), |e| e.message);

        match status {
            429 => AppError::new(
                ErrorCode::ExternalRateLimited,
                Self::extract_quota_message(&message),
            ),
            _ => AppError::external_service("gemini", format!("HTTP {status}: {message}")),
        }
    }

    /// Extract a quota/rate limit message with the retry delay when Gemini
    /// provides one (e.g. "Please retry in 6.406453963s.")
    fn extract_quota_message(message: &str) -> String {
        if let Some(retry_pos) = message.find("Please retry in ") {
            let after_prefix = &message[retry_pos + 16..];
            if let Some(s_pos) = after_prefix.find('s') {
                if let Ok(seconds) = after_prefix[..s_pos].parse::<f64>() {
                    let seconds_int = seconds.ceil() as u64;
                    return format!(
                        "AI service quota exceeded. Please try again in {seconds_int} seconds."
                    );
                }
            }
        }
        "AI service quota exceeded. Please wait a moment and try again.".to_owned()
    }
}

#[async_trait::async_trait]
impl TextGenerator for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn display_name(&self) -> &'static str {
        "Google Gemini"
    }

    fn default_model(&self) -> &str {
        &self.default_model
    }

    #[instrument(skip(self, request), fields(model = %request.model.as_deref().unwrap_or(&self.default_model)))]
    async fn generate_json(&self, request: &GenerationRequest) -> Result<String, AppError> {
        let model = request.model.as_deref().unwrap_or(&self.default_model);
        let url = self.build_url(model, "generateContent");

        let gemini_request = Self::build_gemini_request(request);

        debug!("Sending structured-output request to Gemini API");

        let response = self
            .client
            .post(&url)
            .json(&gemini_request)
            .send()
            .await
            .map_err(|e| {
                AppError::external_service("gemini", format!("HTTP request failed: {e}"))
                    .with_source(e)
            })?;

        let status = response.status();
        let response_text = response.text().await.map_err(|e| {
            AppError::external_service("gemini", format!("failed to read response: {e}"))
                .with_source(e)
        })?;

        if !status.is_success() {
            error!(status = %status, "Gemini API error");
            return Err(Self::map_api_error(status.as_u16(), &response_text));
        }

        let gemini_response: GeminiResponse =
            serde_json::from_str(&response_text).map_err(|e| {
                error!(error = %e, "Failed to parse Gemini response envelope");
                AppError::external_service("gemini", format!("unparseable response: {e}"))
                    .with_source(e)
            })?;

        if let Some(api_error) = gemini_response.error {
            return Err(AppError::external_service("gemini", api_error.message));
        }

        let content = Self::extract_content(gemini_response)?;

        debug!("Successfully received Gemini response");

        Ok(content)
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> Result<bool, AppError> {
        // Listing models verifies both reachability and the API key
        let url = format!("{API_BASE_URL}/models?key={}", self.api_key);

        let response = self.client.get(&url).send().await.map_err(|e| {
            AppError::external_service("gemini", format!("health check failed: {e}")).with_source(e)
        })?;

        Ok(response.status().is_success())
    }
}

impl Debug for GeminiProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("GeminiProvider")
            .field("default_model", &self.default_model)
            .field("api_key", &"[REDACTED]")
            // Omit `client` field as HTTP clients are not useful to debug
            .finish_non_exhaustive()
    }
}
