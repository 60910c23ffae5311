//! Service implementations: prompt construction, the outbound OpenRouter
//! client, response-section parsing and per-client rate limiting.

pub mod openrouter;
pub mod prompt;
pub mod rate_limiter;
pub mod response_parser;

pub use openrouter::OpenRouterClient;
pub use rate_limiter::RateLimiter;
