//! Process-wide settings, read once at startup
//!
//! A missing OpenRouter credential is a fatal startup condition, not a
//! per-request error.

use std::env;
use std::str::FromStr;

use crate::error::ConfigError;

pub const DEFAULT_MODEL: &str = "google/gemini-3-flash-preview";
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// What to do with an already-computed recommendation when the
/// explanation call fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExplanationPolicy {
    /// Return the numeric result with null explanation fields.
    #[default]
    Degrade,
    /// Fail the whole request (the legacy behavior).
    Fail,
}

impl FromStr for ExplanationPolicy {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "degrade" => Ok(ExplanationPolicy::Degrade),
            "fail" => Ok(ExplanationPolicy::Fail),
            _ => Err(ConfigError::InvalidPolicy {
                value: value.to_string(),
            }),
        }
    }
}

/// Settings loaded from the environment (after `.env`, if present).
#[derive(Debug, Clone)]
pub struct Settings {
    pub openrouter_api_key: String,
    pub openrouter_model: String,
    pub allowed_origins: Vec<String>,
    pub explanation_policy: ExplanationPolicy,
}

impl Settings {
    /// Read settings from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        let openrouter_api_key = env::var("OPENROUTER_API_KEY").unwrap_or_default();
        if openrouter_api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        let openrouter_model =
            env::var("OPENROUTER_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGIN.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let explanation_policy = match env::var("EXPLANATION_POLICY") {
            Ok(value) => value.parse()?,
            Err(_) => ExplanationPolicy::default(),
        };

        Ok(Settings {
            openrouter_api_key,
            openrouter_model,
            allowed_origins,
            explanation_policy,
        })
    }
}
