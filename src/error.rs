//! Error types for the pricing service

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;

/// Result type for engine computations
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors produced by the deterministic pricing engine.
///
/// The engine is total over validated input; the one failure mode is a
/// competitor range whose bounds are out of order.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("invalid competitor range: competitorMinPrice {competitor_min} exceeds competitorMaxPrice {competitor_max}")]
    InvalidRange { competitor_min: f64, competitor_max: f64 },
}

/// Result type for the explanation service
pub type ExplainerResult<T> = Result<T, ExplainerError>;

/// Errors from the outbound text-generation call and response parsing
#[derive(Error, Debug)]
pub enum ExplainerError {
    #[error("request to explanation provider failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("explanation provider returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("no choices in explanation provider response")]
    EmptyResponse,

    #[error("invalid response format: {section} section missing or empty")]
    InvalidFormat { section: &'static str },
}

/// Configuration errors, fatal at startup
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("OPENROUTER_API_KEY must be set")]
    MissingApiKey,

    #[error("invalid EXPLANATION_POLICY value: {value} (expected 'degrade' or 'fail')")]
    InvalidPolicy { value: String },
}

/// Request-level errors mapped to HTTP responses with `{"error": ...}` bodies
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    InvalidInput(#[from] EngineError),

    #[error("rate limit exceeded")]
    RateLimited,

    #[error("explanation generation failed: {0}")]
    Upstream(#[from] ExplainerError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) | ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
