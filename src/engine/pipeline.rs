//! Pricing pipeline composition
//!
//! The one place that knows about all engine components: raw inputs go
//! through range -> recommendation -> {scenarios, risk} and come out as a
//! single `PricingResult`.

use crate::engine::{range, recommendation, risk, scenarios};
use crate::error::EngineResult;
use crate::types::{PricingInputs, PricingResult};

/// Run the full deterministic pipeline over one request's inputs.
///
/// The only failure is an out-of-order competitor range; every other
/// component is total over validated numeric input. The explanation
/// fields of the result start out empty and are filled in by the caller
/// once the text-generation service has phrased them.
pub fn recommend(inputs: &PricingInputs) -> EngineResult<PricingResult> {
    let base = range::base_price(inputs.unit_cost, inputs.desired_margin);
    let suggested = range::suggested_range(
        base,
        inputs.competitor_min_price,
        inputs.competitor_max_price,
    )?;

    let recommended = recommendation::recommended_price(
        base,
        inputs.competitor_min_price,
        inputs.competitor_max_price,
    );

    // Risk rules judge the realized margin of the recommended price, not
    // the requested margin.
    let margin_percent = (recommended - inputs.unit_cost) / inputs.unit_cost * 100.0;

    let assessment = risk::evaluate(&risk::RiskInput {
        unit_cost: inputs.unit_cost,
        competitor_min: inputs.competitor_min_price,
        competitor_max: inputs.competitor_max_price,
        recommended,
        margin_percent,
    });

    let profit_scenarios = scenarios::profit_scenarios(
        inputs.unit_cost,
        inputs.competitor_min_price,
        inputs.competitor_max_price,
        recommended,
    );

    Ok(PricingResult {
        recommended_price: recommended,
        suggested_range: suggested,
        risk_level: assessment.risk_level,
        profit_scenarios,
        risk_explanation: None,
        risk_factors: assessment.risk_factors,
        confidence_note: None,
    })
}
