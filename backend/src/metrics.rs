use serde::Serialize;

/// Annual rent as a percentage of business value. Zero when the value is not positive.
pub fn yield_pct(rent_yearly: f64, business_value: f64) -> f64 {
    if business_value <= 0.0 {
        return 0.0;
    }
    rent_yearly / business_value * 100.0
}

pub fn format_yield(pct: f64) -> String {
    format!("{pct:.1}")
}

pub fn risk_coefficient(sale_percent: f64) -> f64 {
    1.0 + sale_percent / 100.0
}

/// Funding progress clamped to `[0, 100]`; exactly 0 when the target is not positive.
pub fn progress_pct(collected: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    (collected / target * 100.0).clamp(0.0, 100.0)
}

/// Signed distance of a P2P price from NAV, in percent. Negative is a discount.
pub fn nav_discount_pct(price: f64, nav: f64) -> f64 {
    if nav <= 0.0 {
        return 0.0;
    }
    (price - nav) / nav * 100.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NavIndicator {
    Discount,
    AtNav,
    Premium,
}

impl NavIndicator {
    pub fn from_discount(pct: f64) -> Self {
        if pct < 0.0 {
            NavIndicator::Discount
        } else if pct > 0.0 {
            NavIndicator::Premium
        } else {
            NavIndicator::AtNav
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RiskBand {
    Low,
    BelowAverage,
    AboveAverage,
    High,
}

/// Spread of risk coefficients over one dataset, computed once per view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskStats {
    pub min: f64,
    pub avg: f64,
    pub max: f64,
}

impl RiskStats {
    pub fn from_coefficients<I>(coefficients: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut count = 0usize;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for k in coefficients {
            count += 1;
            sum += k;
            min = min.min(k);
            max = max.max(k);
        }
        if count == 0 {
            return Self::default();
        }
        Self { min, avg: sum / count as f64, max }
    }

    pub fn band(&self, k: f64) -> RiskBand {
        if k <= (self.min + self.avg) / 2.0 {
            RiskBand::Low
        } else if k <= self.avg {
            RiskBand::BelowAverage
        } else if k < (self.avg + self.max) / 2.0 {
            RiskBand::AboveAverage
        } else {
            RiskBand::High
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_matches_examples() {
        assert_eq!(progress_pct(40_000.0, 100_000.0), 40.0);
        assert_eq!(progress_pct(120_000.0, 100_000.0), 100.0);
    }

    #[test]
    fn progress_guards_non_positive_target() {
        assert_eq!(progress_pct(500.0, 0.0), 0.0);
        assert_eq!(progress_pct(500.0, -10.0), 0.0);
        assert_eq!(progress_pct(-500.0, 1000.0), 0.0);
    }

    #[test]
    fn yield_formats_with_one_decimal() {
        assert_eq!(format_yield(yield_pct(120_000.0, 2_000_000.0)), "6.0");
        assert_eq!(format_yield(yield_pct(100_000.0, 1_500_000.0)), "6.7");
        assert_eq!(yield_pct(1.0, 0.0), 0.0);
    }

    #[test]
    fn risk_coefficient_from_sale_percent() {
        assert_eq!(risk_coefficient(0.0), 1.0);
        assert!((risk_coefficient(35.0) - 1.35).abs() < 1e-12);
    }

    #[test]
    fn risk_bands_split_around_average() {
        let stats = RiskStats::from_coefficients([1.0, 1.2, 1.4, 1.6, 1.8]);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 1.8);
        assert!((stats.avg - 1.4).abs() < 1e-9);
        assert_eq!(stats.band(1.0), RiskBand::Low);
        assert_eq!(stats.band(1.3), RiskBand::BelowAverage);
        assert_eq!(stats.band(1.5), RiskBand::AboveAverage);
        assert_eq!(stats.band(1.8), RiskBand::High);
    }

    #[test]
    fn empty_risk_stats_are_zero() {
        let stats = RiskStats::from_coefficients(std::iter::empty());
        assert_eq!(stats, RiskStats::default());
    }

    #[test]
    fn nav_discount_sign() {
        assert_eq!(nav_discount_pct(90.0, 100.0), -10.0);
        assert_eq!(nav_discount_pct(110.0, 100.0), 10.0);
        assert_eq!(nav_discount_pct(110.0, 0.0), 0.0);
        assert_eq!(NavIndicator::from_discount(-10.0), NavIndicator::Discount);
        assert_eq!(NavIndicator::from_discount(0.0), NavIndicator::AtNav);
        assert_eq!(NavIndicator::from_discount(3.0), NavIndicator::Premium);
    }
}
