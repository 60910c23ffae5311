//! End-to-end API tests
//!
//! Each test spawns the full router on an ephemeral port (so the
//! connect-info rate limiting is live) and drives it over HTTP, with
//! wiremock standing in for OpenRouter.

use std::net::SocketAddr;
use std::sync::Arc;

use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use priceadvisor::{
    build_router, AppState, ExplanationPolicy, OpenRouterClient, RateLimiter, Settings,
};

const CHAT_COMPLETIONS_PATH: &str = "/api/v1/chat/completions";

fn test_settings(policy: ExplanationPolicy) -> Settings {
    Settings {
        openrouter_api_key: "test-key".to_string(),
        openrouter_model: "test-model".to_string(),
        allowed_origins: vec!["http://localhost:3000".to_string()],
        explanation_policy: policy,
    }
}

async fn spawn_app(policy: ExplanationPolicy, llm_base_url: &str) -> SocketAddr {
    let explainer = OpenRouterClient::new("test-key".to_string(), "test-model".to_string())
        .with_api_url(format!("{llm_base_url}{CHAT_COMPLETIONS_PATH}"));

    let state = AppState {
        settings: Arc::new(test_settings(policy)),
        explainer: Arc::new(explainer),
    };
    let limiter = Arc::new(RateLimiter::default());

    let router = build_router(state, limiter);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .unwrap();
    });

    addr
}

fn well_formed_llm_body() -> Value {
    json!({
        "choices": [
            {
                "message": {
                    "role": "assistant",
                    "content": "<<RISK_EXPLANATION>>\nThe recommended price sits comfortably inside what competitors charge.\n<</RISK_EXPLANATION>>\n\n<<CONFIDENCE_NOTE>>\nConfidence is high given the stable competitor range.\n<</CONFIDENCE_NOTE>>"
                }
            }
        ]
    })
}

async fn mock_llm_ok() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(CHAT_COMPLETIONS_PATH))
        .and(body_partial_json(json!({ "model": "test-model" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(well_formed_llm_body()))
        .mount(&server)
        .await;
    server
}

fn sample_inputs() -> Value {
    json!({
        "unitCost": 50.0,
        "desiredMargin": 20.0,
        "competitorMinPrice": 80.0,
        "competitorMaxPrice": 120.0
    })
}

#[tokio::test]
async fn test_ping_returns_pong() {
    let llm = mock_llm_ok().await;
    let addr = spawn_app(ExplanationPolicy::Degrade, &llm.uri()).await;

    let response = reqwest::get(format!("http://{addr}/ping")).await.unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "pong");
}

#[tokio::test]
async fn test_recommend_returns_expected_values() {
    let llm = mock_llm_ok().await;
    let addr = spawn_app(ExplanationPolicy::Degrade, &llm.uri()).await;

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/api/price/recommend"))
        .json(&sample_inputs())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["recommendedPrice"], 88.0);
    assert_eq!(body["suggestedRange"]["min"], 80.0);
    assert_eq!(body["suggestedRange"]["max"], 120.0);
    assert_eq!(body["riskLevel"], "low");
    assert_eq!(body["riskFactors"], json!([]));

    let scenarios = body["profitScenarios"].as_array().unwrap();
    assert_eq!(scenarios.len(), 4);
    assert_eq!(scenarios[0]["price"], 116.8);
    assert_eq!(scenarios[1]["price"], 100.0);
    assert_eq!(scenarios[2]["price"], 88.0);
    assert_eq!(scenarios[3]["price"], 80.8);
    assert_eq!(scenarios[2]["profitPerUnit"], 38.0);
    assert_eq!(scenarios[2]["marginPercent"], 76.0);
    assert_eq!(scenarios[1]["marketPosition"], "At market");

    assert_eq!(
        body["riskExplanation"],
        "The recommended price sits comfortably inside what competitors charge."
    );
    assert_eq!(
        body["confidenceNote"],
        "Confidence is high given the stable competitor range."
    );
}

#[tokio::test]
async fn test_malformed_payload_is_rejected_before_the_engine_runs() {
    let llm = MockServer::start().await;
    let addr = spawn_app(ExplanationPolicy::Degrade, &llm.uri()).await;
    let client = reqwest::Client::new();

    // missing competitorMaxPrice
    let missing_field = client
        .post(format!("http://{addr}/api/price/recommend"))
        .json(&json!({ "unitCost": 50.0, "desiredMargin": 20.0, "competitorMinPrice": 80.0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(missing_field.status(), 400);
    let body: Value = missing_field.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("competitorMaxPrice"));

    // non-numeric field
    let non_numeric = client
        .post(format!("http://{addr}/api/price/recommend"))
        .json(&json!({
            "unitCost": "fifty",
            "desiredMargin": 20.0,
            "competitorMinPrice": 80.0,
            "competitorMaxPrice": 120.0
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(non_numeric.status(), 400);

    // no request ever reached the explanation service
    assert!(llm.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_non_positive_unit_cost_is_rejected() {
    let llm = MockServer::start().await;
    let addr = spawn_app(ExplanationPolicy::Degrade, &llm.uri()).await;
    let client = reqwest::Client::new();

    // zero cost would divide the margin math by zero
    let zero_cost = client
        .post(format!("http://{addr}/api/price/recommend"))
        .json(&json!({
            "unitCost": 0.0,
            "desiredMargin": 20.0,
            "competitorMinPrice": 80.0,
            "competitorMaxPrice": 120.0
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(zero_cost.status(), 400);
    let body: Value = zero_cost.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("unitCost must be positive"));

    let negative_cost = client
        .post(format!("http://{addr}/api/price/recommend"))
        .json(&json!({
            "unitCost": -50.0,
            "desiredMargin": 20.0,
            "competitorMinPrice": 80.0,
            "competitorMaxPrice": 120.0
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(negative_cost.status(), 400);

    assert!(llm.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_inverted_competitor_range_is_rejected() {
    let llm = MockServer::start().await;
    let addr = spawn_app(ExplanationPolicy::Degrade, &llm.uri()).await;

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/api/price/recommend"))
        .json(&json!({
            "unitCost": 50.0,
            "desiredMargin": 20.0,
            "competitorMinPrice": 120.0,
            "competitorMaxPrice": 80.0
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("invalid competitor range"));
    assert!(llm.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_degrade_policy_returns_numbers_when_llm_fails() {
    let llm = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(CHAT_COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": { "message": "upstream exploded" }
        })))
        .mount(&llm)
        .await;
    let addr = spawn_app(ExplanationPolicy::Degrade, &llm.uri()).await;

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/api/price/recommend"))
        .json(&sample_inputs())
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["recommendedPrice"], 88.0);
    assert!(body["riskExplanation"].is_null());
    assert!(body["confidenceNote"].is_null());
}

#[tokio::test]
async fn test_fail_policy_aborts_when_llm_fails() {
    let llm = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(CHAT_COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": { "message": "upstream exploded" }
        })))
        .mount(&llm)
        .await;
    let addr = spawn_app(ExplanationPolicy::Fail, &llm.uri()).await;

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/api/price/recommend"))
        .json(&sample_inputs())
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 502);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("upstream exploded"));
}

#[tokio::test]
async fn test_response_without_markers_counts_as_llm_failure() {
    let llm = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(CHAT_COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [
                { "message": { "role": "assistant", "content": "Here is my freeform answer." } }
            ]
        })))
        .mount(&llm)
        .await;
    let addr = spawn_app(ExplanationPolicy::Fail, &llm.uri()).await;

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/api/price/recommend"))
        .json(&sample_inputs())
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 502);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("invalid response format"));
}

#[tokio::test]
async fn test_rate_limit_kicks_in_after_burst() {
    let llm = mock_llm_ok().await;
    let addr = spawn_app(ExplanationPolicy::Degrade, &llm.uri()).await;
    let client = reqwest::Client::new();

    let mut statuses = Vec::new();
    for _ in 0..7 {
        let response = client
            .get(format!("http://{addr}/ping"))
            .send()
            .await
            .unwrap();
        statuses.push(response.status().as_u16());
    }

    assert_eq!(statuses[0], 200);
    assert!(
        statuses.iter().any(|&status| status == 429),
        "expected a 429 within 7 rapid requests, got {statuses:?}"
    );

    let limited = client
        .get(format!("http://{addr}/ping"))
        .send()
        .await
        .unwrap();
    if limited.status() == 429 {
        let body: Value = limited.json().await.unwrap();
        assert_eq!(body["error"], "rate limit exceeded");
    }
}
