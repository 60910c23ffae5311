//! Recommended price calculation

/// Weight given to the cost-driven clamped price; the remainder goes to
/// the competitor median. A design constant, not derived.
const CLAMPED_WEIGHT: f64 = 0.6;
const MEDIAN_WEIGHT: f64 = 0.4;

/// Blend of the clamped base price and the competitor median.
///
/// The base price is clamped into the competitor band, then blended 60/40
/// with the band's median, favoring the cost-driven price over the pure
/// market median. Total function; assumes bounds already validated.
pub fn recommended_price(base_price: f64, competitor_min: f64, competitor_max: f64) -> f64 {
    let median = (competitor_min + competitor_max) / 2.0;

    let mut clamped = base_price;
    if base_price < competitor_min {
        clamped = competitor_min;
    }
    if base_price > competitor_max {
        clamped = competitor_max;
    }

    clamped * CLAMPED_WEIGHT + median * MEDIAN_WEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommended_price_clamps_low_base_to_competitor_min() {
        // base 60 clamps to 80, median is 100: 80*0.6 + 100*0.4 = 88
        assert_eq!(recommended_price(60.0, 80.0, 120.0), 88.0);
    }

    #[test]
    fn test_recommended_price_clamps_high_base_to_competitor_max() {
        // base 200 clamps to 120, median is 100: 120*0.6 + 100*0.4 = 112
        assert_eq!(recommended_price(200.0, 80.0, 120.0), 112.0);
    }

    #[test]
    fn test_recommended_price_keeps_in_band_base_unclamped() {
        // base 90 stays, median is 100: 90*0.6 + 100*0.4 = 94
        assert_eq!(recommended_price(90.0, 80.0, 120.0), 94.0);
    }

    #[test]
    fn test_recommended_price_stays_within_competitor_band() {
        for base in [0.0, 50.0, 80.0, 99.5, 120.0, 1e6] {
            let recommended = recommended_price(base, 80.0, 120.0);
            assert!((80.0..=120.0).contains(&recommended), "base {base} -> {recommended}");
        }
    }
}
