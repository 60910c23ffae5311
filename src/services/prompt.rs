//! Explanation prompt construction
//!
//! Renders the fixed template that instructs the text-generation service
//! to phrase (never compute) the risk explanation and confidence note,
//! delimited exactly as the response parser expects.

use crate::services::response_parser::{
    CONFIDENCE_NOTE_END, CONFIDENCE_NOTE_START, RISK_EXPLANATION_END, RISK_EXPLANATION_START,
};
use crate::types::RiskLevel;

/// Context values interpolated into the explanation prompt.
#[derive(Debug, Clone)]
pub struct PromptInput<'a> {
    pub unit_cost: f64,
    pub recommended_price: f64,
    pub competitor_min: f64,
    pub competitor_max: f64,
    pub risk_level: RiskLevel,
    pub risk_factors: &'a [String],
}

/// Build the explanation prompt for one recommendation.
pub fn build_explanation_prompt(input: &PromptInput<'_>) -> String {
    let risk_factors = if input.risk_factors.is_empty() {
        "None".to_string()
    } else {
        input.risk_factors.join("; ")
    };

    format!(
        r#"You are a pricing explanation assistant for small business owners.

IMPORTANT RULES:
- Do NOT calculate prices.
- Do NOT suggest alternative prices.
- ONLY explain the provided recommendation.
- Use simple, non-technical language.

Pricing Context:
- Unit cost: {unit_cost:.2}
- Recommended price: {recommended_price:.2}
- Competitor price range: {competitor_min:.2} - {competitor_max:.2}
- Risk level: {risk_level}
- Risk factors: {risk_factors}

Your task:
Return EXACTLY two short sections, wrapped in the markers shown below and
nothing else.

FORMAT (must follow exactly):
{RISK_EXPLANATION_START}
<one short paragraph explaining the risk>
{RISK_EXPLANATION_END}

{CONFIDENCE_NOTE_START}
<one short sentence about confidence or uncertainty>
{CONFIDENCE_NOTE_END}"#,
        unit_cost = input.unit_cost,
        recommended_price = input.recommended_price,
        competitor_min = input.competitor_min,
        competitor_max = input.competitor_max,
        risk_level = input.risk_level,
        risk_factors = risk_factors,
    )
}
