//! Illustrative profit scenario generation

use crate::engine::market;
use crate::types::ProfitScenario;

/// Fraction by which the high/low scenario prices pull in from the
/// competitor bounds toward the recommendation.
const PULL_IN: f64 = 0.1;

/// Produce exactly four scenarios at fixed price points, ordered
/// high -> median -> recommended -> low. The order is
/// presentation-significant and preserved exactly.
pub fn profit_scenarios(
    unit_cost: f64,
    competitor_min: f64,
    competitor_max: f64,
    recommended: f64,
) -> Vec<ProfitScenario> {
    let high_price = competitor_max - PULL_IN * (competitor_max - recommended);
    let low_price = competitor_min + PULL_IN * (recommended - competitor_min);
    let median = (competitor_min + competitor_max) / 2.0;

    [high_price, median, recommended, low_price]
        .into_iter()
        .map(|price| {
            let profit_per_unit = price - unit_cost;
            ProfitScenario {
                price,
                profit_per_unit,
                margin_percent: profit_per_unit / unit_cost * 100.0,
                market_position: market::classify(price, competitor_min, competitor_max),
            }
        })
        .collect()
}
