//! Market position classification

use crate::types::MarketPosition;

/// Half-width of the "At market" / "Premium" tolerance bands, as a
/// fraction of the competitor range.
const BAND_TOLERANCE: f64 = 0.05;

/// Classify a price against the competitor band. Rules are evaluated in
/// order and the first match wins: "At market" is checked before
/// "Premium" so a price that is simultaneously near-median and near-max
/// (possible when the band is narrow) reports as "At market".
///
/// A degenerate band (`competitor_min == competitor_max`) collapses the
/// tolerances to zero: only the exact median is "At market", anything
/// below the single price is "Below market", and anything at or above it
/// is "Premium".
pub fn classify(price: f64, competitor_min: f64, competitor_max: f64) -> MarketPosition {
    let median = (competitor_min + competitor_max) / 2.0;
    let market_range = competitor_max - competitor_min;

    if price < competitor_min {
        return MarketPosition::BelowMarket;
    }
    if (price - median).abs() <= BAND_TOLERANCE * market_range {
        return MarketPosition::AtMarket;
    }
    if price >= competitor_max - BAND_TOLERANCE * market_range {
        return MarketPosition::Premium;
    }
    MarketPosition::Competitive
}
