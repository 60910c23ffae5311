//! HTTP wiring: application state, router construction, CORS and the
//! rate-limit middleware

pub mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{ConnectInfo, Request, State};
use axum::http::{header, HeaderValue, Method};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::Settings;
use crate::error::ApiError;
use crate::services::RateLimiter;
use crate::traits::ExplanationService;

/// Shared per-request context: startup settings plus the explanation
/// service behind its trait seam.
pub struct AppState<E: ExplanationService> {
    pub settings: Arc<Settings>,
    pub explainer: Arc<E>,
}

impl<E: ExplanationService> Clone for AppState<E> {
    fn clone(&self) -> Self {
        Self {
            settings: Arc::clone(&self.settings),
            explainer: Arc::clone(&self.explainer),
        }
    }
}

/// Build the router with all routes, CORS and rate limiting.
///
/// The server must be started with connect-info so the rate-limit
/// middleware can key buckets by client IP.
pub fn build_router<E>(state: AppState<E>, limiter: Arc<RateLimiter>) -> Router
where
    E: ExplanationService + 'static,
{
    let cors = cors_layer(&state.settings.allowed_origins);

    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/api/price/recommend", post(handlers::recommend_price::<E>))
        .layer(
            ServiceBuilder::new()
                .layer(cors)
                .layer(middleware::from_fn_with_state(limiter, enforce_rate_limit))
                .into_inner(),
        )
        .with_state(state)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::ORIGIN, header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(12 * 60 * 60))
}

async fn enforce_rate_limit(
    State(limiter): State<Arc<RateLimiter>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request,
    next: Next,
) -> Response {
    if limiter.allow(addr.ip()).await {
        next.run(request).await
    } else {
        ApiError::RateLimited.into_response()
    }
}
