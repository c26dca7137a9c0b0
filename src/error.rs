// SPDX-License-Identifier: MIT

//! Typed error handling for compass-rs
//!
//! External-capability failures (generation, search) are absorbed by the
//! agents themselves and never reach this level; the variants here cover
//! construction and workflow-integrity failures that are surfaced to the
//! caller.

use thiserror::Error;

/// Top-level error type for compass-rs
#[derive(Debug, Error)]
pub enum CompassError {
    /// Configuration errors (missing env vars, invalid config)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Model/LLM errors
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Workflow-specific errors
    #[error("Workflow error: {0}")]
    Workflow(#[from] WorkflowError),

    /// I/O errors (output persistence)
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// HTTP request errors
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Generic error wrapper
    #[error("{0}")]
    Other(String),
}

/// Workflow-specific errors
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// The top-level classifier produced output matching none of the
    /// known category markers, so no handler can run
    #[error("No route for category: {category:?}")]
    NoRoute { category: String },

    /// Executor step limit exceeded (the graph is acyclic; this guards
    /// against a broken transition table)
    #[error("Workflow exceeded step limit: {limit}")]
    MaxSteps { limit: u32 },

    /// A terminal node completed without populating the response
    #[error("Workflow terminated without a response")]
    MissingResponse,
}

/// Model/LLM-specific errors
#[derive(Debug, Error)]
pub enum ModelError {
    /// API key not configured
    #[error("API key not configured for provider: {0}")]
    ApiKeyMissing(String),

    /// API errors from the provider
    #[error("API error from {provider}: {message}")]
    Api { provider: String, message: String },

    /// Invalid response from the model
    #[error("Invalid response from model: {0}")]
    InvalidResponse(String),

    /// HTTP transport errors
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl CompassError {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create from a generic message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}

impl From<&str> for CompassError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

impl From<String> for CompassError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_route_error_includes_category() {
        let err = WorkflowError::NoRoute {
            category: "something else".to_string(),
        };
        assert!(err.to_string().contains("something else"));
    }

    #[test]
    fn test_config_error() {
        let err = CompassError::config("GOOGLE_API_KEY must be set");
        assert!(err.to_string().contains("GOOGLE_API_KEY"));
    }

    #[test]
    fn test_model_error_wraps_into_compass_error() {
        let err: CompassError = ModelError::ApiKeyMissing("Gemini".to_string()).into();
        assert!(err.to_string().contains("Gemini"));
    }
}
