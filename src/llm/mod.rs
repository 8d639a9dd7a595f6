// ABOUTME: LLM provider abstraction for structured-JSON text generation
// ABOUTME: Defines the TextGenerator contract implemented by the Gemini provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Serein Wellness

//! # Text Generation Service Provider Interface
//!
//! Contract for the external generative-AI boundary. The engine issues
//! exactly two kinds of requests (weekly program generation and
//! single-activity replacement) and both follow the same shape: a prompt
//! string plus a JSON schema constraining the response, answered by one
//! complete JSON document. No streaming, no retries, no cancellation
//! signal; an abandoned call is simply dropped by the caller.
//!
//! ## Example
//!
//! ```rust,no_run
//! use serein::llm::{GenerationRequest, TextGenerator};
//! use serde_json::json;
//!
//! async fn example(generator: &dyn TextGenerator) {
//!     let request = GenerationRequest::new(
//!         "Réponds en JSON: {\"ok\": true}",
//!         json!({"type": "OBJECT", "properties": {"ok": {"type": "BOOLEAN"}}}),
//!     );
//!     let _raw = generator.generate_json(&request).await;
//! }
//! ```

mod gemini;

pub use gemini::GeminiProvider;

use async_trait::async_trait;

use crate::errors::AppResult;

/// A structured-output generation request: one prompt, one response schema
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Natural-language instruction
    pub prompt: String,
    /// JSON schema the response must satisfy (provider wire format)
    pub response_schema: serde_json::Value,
    /// Model identifier override; `None` uses the provider default
    pub model: Option<String>,
    /// Temperature for response randomness
    pub temperature: Option<f32>,
}

impl GenerationRequest {
    /// Create a request with a prompt and response schema
    #[must_use]
    pub fn new(prompt: impl Into<String>, response_schema: serde_json::Value) -> Self {
        Self {
            prompt: prompt.into(),
            response_schema,
            model: None,
            temperature: None,
        }
    }

    /// Set the model to use
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the temperature
    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Text generation provider trait.
///
/// Implement this to plug a different generative-AI service into the
/// engine; tests substitute a canned-response implementation.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Unique provider identifier (e.g. "gemini")
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Default model used when the request does not specify one
    fn default_model(&self) -> &str;

    /// Generate one complete JSON document satisfying the request schema.
    ///
    /// Returns the raw response text; the caller performs typed validation.
    async fn generate_json(&self, request: &GenerationRequest) -> AppResult<String>;

    /// Check that the provider is reachable and the API key is valid
    async fn health_check(&self) -> AppResult<bool>;
}
