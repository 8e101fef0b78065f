// Stock level tiers for the inventory table
use serde::Serialize;

/// Below this percentage of capacity a product is low on stock.
pub const LOW_STOCK_BELOW: i64 = 20;
/// Above this percentage of capacity a product is well stocked.
pub const HIGH_STOCK_ABOVE: i64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StockTier {
    Low,
    Medium,
    High,
}

impl StockTier {
    pub fn bar_class(self) -> &'static str {
        match self {
            StockTier::Low => "bg-destructive",
            StockTier::Medium => "bg-yellow-400",
            StockTier::High => "bg-primary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StockLevel {
    pub tier: StockTier,
    /// Percentage of capacity clamped to 0..=100. The only percentage that is
    /// ever displayed.
    pub display_percent: u8,
    pub bar_class: &'static str,
    #[serde(skip)]
    raw_percent: i64,
}

impl StockLevel {
    /// Unclamped `round(stock / max * 100)`; drives the tier only.
    pub fn raw_percent(&self) -> i64 {
        self.raw_percent
    }
}

pub fn stock_level(stock: i64, max: u32) -> StockLevel {
    let raw_percent = if max == 0 {
        // Capacities are resolved to a positive default at load time; this
        // only guards hand-built products.
        if stock > 0 { 100 } else { 0 }
    } else {
        (stock as f64 / max as f64 * 100.0).round() as i64
    };
    let tier = if raw_percent < LOW_STOCK_BELOW {
        StockTier::Low
    } else if raw_percent > HIGH_STOCK_ABOVE {
        StockTier::High
    } else {
        StockTier::Medium
    };
    StockLevel {
        tier,
        display_percent: raw_percent.clamp(0, 100) as u8,
        bar_class: tier.bar_class(),
        raw_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_stock() {
        let level = stock_level(2, 30);
        assert_eq!(level.raw_percent(), 7);
        assert_eq!(level.tier, StockTier::Low);
        assert_eq!(level.bar_class, "bg-destructive");
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(stock_level(10, 50).tier, StockTier::Medium); // exactly 20
        assert_eq!(stock_level(25, 50).tier, StockTier::Medium); // exactly 50
        assert_eq!(stock_level(26, 50).tier, StockTier::High);
        assert_eq!(stock_level(9, 50).tier, StockTier::Low);
    }

    #[test]
    fn test_overfull_is_clamped_for_display() {
        let level = stock_level(60, 50);
        assert_eq!(level.raw_percent(), 120);
        assert_eq!(level.display_percent, 100);
        assert_eq!(level.tier, StockTier::High);
        let json = serde_json::to_value(level).unwrap();
        assert_eq!(json["display_percent"], 100);
        assert!(json.get("raw_percent").is_none());
    }

    #[test]
    fn test_negative_and_zero_capacity_are_total() {
        assert_eq!(stock_level(-5, 50).display_percent, 0);
        assert_eq!(stock_level(-5, 50).tier, StockTier::Low);
        assert_eq!(stock_level(3, 0).display_percent, 100);
        assert_eq!(stock_level(0, 0).tier, StockTier::Low);
    }

    #[test]
    fn test_every_stock_value_has_a_tier() {
        for stock in -10..=200 {
            let level = stock_level(stock, 50);
            assert!(level.display_percent <= 100);
        }
    }
}
