//! HTTP handlers

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Json;
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::config::ExplanationPolicy;
use crate::engine;
use crate::error::ApiError;
use crate::services::prompt::{self, PromptInput};
use crate::traits::ExplanationService;
use crate::types::{PricingInputs, PricingResult};
use crate::web::AppState;

/// Liveness probe.
pub async fn ping() -> Json<Value> {
    Json(json!({ "message": "pong" }))
}

/// Price recommendation endpoint.
///
/// Malformed payloads are rejected before the engine runs. The
/// deterministic result is computed first; the explanation call only
/// phrases it, and under the degrade policy its failure leaves the
/// explanation fields null instead of discarding the numbers.
pub async fn recommend_price<E>(
    State(state): State<AppState<E>>,
    payload: Result<Json<PricingInputs>, JsonRejection>,
) -> Result<Json<PricingResult>, ApiError>
where
    E: ExplanationService,
{
    let Json(inputs) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    // The engine's profit math divides by the unit cost; a non-positive
    // cost is rejected here like any other malformed input.
    if inputs.unit_cost <= 0.0 {
        return Err(ApiError::BadRequest(format!(
            "unitCost must be positive, got {}",
            inputs.unit_cost
        )));
    }

    let mut result = engine::recommend(&inputs)?;

    let explanation_prompt = prompt::build_explanation_prompt(&PromptInput {
        unit_cost: inputs.unit_cost,
        recommended_price: result.recommended_price,
        competitor_min: inputs.competitor_min_price,
        competitor_max: inputs.competitor_max_price,
        risk_level: result.risk_level,
        risk_factors: &result.risk_factors,
    });

    match state.explainer.explain(&explanation_prompt).await {
        Ok(explanation) => {
            result.risk_explanation = Some(explanation.risk_explanation);
            result.confidence_note = Some(explanation.confidence_note);
        }
        Err(error) => match state.settings.explanation_policy {
            ExplanationPolicy::Degrade => {
                warn!(%error, "explanation unavailable, returning numeric result without it");
            }
            ExplanationPolicy::Fail => return Err(ApiError::Upstream(error)),
        },
    }

    info!(
        recommended = result.recommended_price,
        risk_level = %result.risk_level,
        "priced recommendation"
    );

    Ok(Json(result))
}
