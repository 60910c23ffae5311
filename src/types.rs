//! Wire and value types shared across the engine, services and handlers
//!
//! Every type here is a plain value object: created once per request,
//! never mutated afterwards. Field names on the wire are camelCase to
//! match the UI contract.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pricing inputs sent by the UI. All four fields are required numbers;
/// a payload missing any of them is rejected before the engine runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingInputs {
    pub unit_cost: f64,
    pub desired_margin: f64,
    pub competitor_min_price: f64,
    pub competitor_max_price: f64,
}

/// Admissible price range derived from the base price and competitor bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SuggestedRange {
    pub min: f64,
    pub max: f64,
}

/// Where a price sits relative to the competitor band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketPosition {
    #[serde(rename = "Below market")]
    BelowMarket,
    #[serde(rename = "At market")]
    AtMarket,
    #[serde(rename = "Premium")]
    Premium,
    #[serde(rename = "Competitive")]
    Competitive,
}

impl fmt::Display for MarketPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MarketPosition::BelowMarket => "Below market",
            MarketPosition::AtMarket => "At market",
            MarketPosition::Premium => "Premium",
            MarketPosition::Competitive => "Competitive",
        };
        f.write_str(label)
    }
}

/// One illustrative price point with its profit math and market position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitScenario {
    pub price: f64,
    pub profit_per_unit: f64,
    pub margin_percent: f64,
    pub market_position: MarketPosition,
}

/// Aggregate risk severity derived from the triggered risk rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        };
        f.write_str(label)
    }
}

/// Outcome of one risk evaluation: the resolved level plus the
/// human-readable factors, in rule order. Empty factors means low risk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub risk_level: RiskLevel,
    pub risk_factors: Vec<String>,
}

/// Terminal output of one pipeline run, as returned to the UI.
///
/// The explanation fields are filled in after the deterministic engine has
/// finished; under the degrade policy they stay null when the explanation
/// service is unavailable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingResult {
    pub recommended_price: f64,
    pub suggested_range: SuggestedRange,
    pub risk_level: RiskLevel,
    pub profit_scenarios: Vec<ProfitScenario>,
    pub risk_explanation: Option<String>,
    pub risk_factors: Vec<String>,
    pub confidence_note: Option<String>,
}

/// Phrased explanation returned by the text-generation service.
#[derive(Debug, Clone, PartialEq)]
pub struct Explanation {
    pub risk_explanation: String,
    pub confidence_note: String,
}
