//! priceadvisor library
//!
//! A deterministic pricing & risk decision engine behind a small HTTP
//! API. The engine derives a recommended price, suggested range, profit
//! scenarios and a rule-based risk assessment from four numeric inputs;
//! an external text-generation service is then asked to phrase (never
//! compute) the risk explanation.

pub mod config;
pub mod engine;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod web;

// Re-export main types
pub use config::{ExplanationPolicy, Settings};
pub use error::{ApiError, ConfigError, EngineError, EngineResult, ExplainerError, ExplainerResult};
pub use traits::ExplanationService;
pub use types::*;
pub use web::{build_router, AppState};

// Re-export service implementations
pub use services::{OpenRouterClient, RateLimiter};
