//! Rule-based risk evaluation
//!
//! A fixed, ordered set of rules, each carrying an intrinsic severity.
//! Every rule is evaluated against the full input set; none short-circuit
//! the others. The overall level is the maximum triggered severity.

use crate::types::{RiskAssessment, RiskLevel};

/// Proximity band around the competitor minimum, as a fraction of it.
const NEAR_MIN_TOLERANCE: f64 = 0.05;

/// Margin below this percentage is considered unsustainable.
const SUSTAINABLE_MARGIN_PERCENT: f64 = 10.0;

/// Competitor spread above this fraction of the minimum signals an
/// uncertain market.
const WIDE_SPREAD_RATIO: f64 = 0.5;

/// Severity attached to each rule at definition time. The overall risk
/// level is the maximum over triggered rules, never inferred from the
/// factor wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Severity {
    Low,
    Medium,
    High,
}

impl From<Severity> for RiskLevel {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Low => RiskLevel::Low,
            Severity::Medium => RiskLevel::Medium,
            Severity::High => RiskLevel::High,
        }
    }
}

/// Inputs to one risk evaluation. `margin_percent` is the realized margin
/// of the recommended price, not the requested margin.
#[derive(Debug, Clone, Copy)]
pub struct RiskInput {
    pub unit_cost: f64,
    pub competitor_min: f64,
    pub competitor_max: f64,
    pub recommended: f64,
    pub margin_percent: f64,
}

/// Evaluate all rules in fixed order and resolve the overall level.
pub fn evaluate(input: &RiskInput) -> RiskAssessment {
    let triggered: Vec<(Severity, String)> = [
        check_above_market_max(input.recommended, input.competitor_max),
        check_low_margin(input.margin_percent),
        check_near_competitor_min(input.recommended, input.competitor_min),
        check_cost_close_to_market_min(input.unit_cost, input.competitor_min),
        check_wide_competitor_spread(input.competitor_min, input.competitor_max),
    ]
    .into_iter()
    .flatten()
    .collect();

    let risk_level = triggered
        .iter()
        .map(|(severity, _)| *severity)
        .max()
        .map(RiskLevel::from)
        .unwrap_or(RiskLevel::Low);

    RiskAssessment {
        risk_level,
        risk_factors: triggered.into_iter().map(|(_, factor)| factor).collect(),
    }
}

fn check_above_market_max(recommended: f64, competitor_max: f64) -> Option<(Severity, String)> {
    if recommended > competitor_max {
        return Some((
            Severity::High,
            format!("Recommended price {recommended:.2} exceeds highest competitor price {competitor_max:.2}"),
        ));
    }
    None
}

fn check_low_margin(margin_percent: f64) -> Option<(Severity, String)> {
    if margin_percent < SUSTAINABLE_MARGIN_PERCENT {
        return Some((
            Severity::High,
            format!("Profit margin {margin_percent:.2}% is below sustainable threshold"),
        ));
    }
    None
}

fn check_near_competitor_min(recommended: f64, competitor_min: f64) -> Option<(Severity, String)> {
    if competitor_min == 0.0 {
        return None;
    }
    let threshold = competitor_min * NEAR_MIN_TOLERANCE;
    if recommended >= competitor_min && recommended <= competitor_min + threshold {
        return Some((
            Severity::Low,
            format!("Price {recommended:.2} is near market minimum {competitor_min:.2}"),
        ));
    }
    None
}

fn check_cost_close_to_market_min(unit_cost: f64, competitor_min: f64) -> Option<(Severity, String)> {
    if competitor_min == 0.0 {
        return None;
    }
    let threshold = competitor_min * NEAR_MIN_TOLERANCE;
    if unit_cost >= competitor_min - threshold && unit_cost <= competitor_min + threshold {
        return Some((
            Severity::Medium,
            format!("Unit cost {unit_cost:.2} is close to competitor minimum {competitor_min:.2}"),
        ));
    }
    None
}

fn check_wide_competitor_spread(competitor_min: f64, competitor_max: f64) -> Option<(Severity, String)> {
    if competitor_min <= 0.0 {
        return None;
    }
    let spread = competitor_max - competitor_min;
    if spread / competitor_min > WIDE_SPREAD_RATIO {
        return Some((
            Severity::Low,
            "Competitor prices vary widely, indicating market uncertainty".to_string(),
        ));
    }
    None
}
