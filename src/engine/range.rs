//! Base price and suggested range calculation

use crate::error::{EngineError, EngineResult};
use crate::types::SuggestedRange;

/// Cost-plus price before any market adjustment.
///
/// No clamping: a negative margin yields a price below cost, which the
/// risk rules flag downstream rather than silently correcting here.
pub fn base_price(unit_cost: f64, desired_margin: f64) -> f64 {
    unit_cost * (1.0 + desired_margin / 100.0)
}

/// Admissible price range given the base price and competitor bounds.
///
/// Fails when the competitor bounds are out of order; otherwise the lower
/// bound is the larger of the base price and the competitor minimum, and
/// the upper bound is the competitor maximum.
pub fn suggested_range(
    base_price: f64,
    competitor_min: f64,
    competitor_max: f64,
) -> EngineResult<SuggestedRange> {
    if competitor_min > competitor_max {
        return Err(EngineError::InvalidRange {
            competitor_min,
            competitor_max,
        });
    }

    Ok(SuggestedRange {
        min: base_price.max(competitor_min),
        max: competitor_max,
    })
}
