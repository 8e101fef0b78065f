// Derived series over the monthly and weekly catalogs
use serde::Serialize;
use shared::models::{RevenuePoint, SalesPoint};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

/// Revenue minus expenses, per month.
pub fn profit_series(revenue: &[RevenuePoint]) -> Vec<SeriesPoint> {
    revenue
        .iter()
        .map(|p| SeriesPoint { label: p.month.clone(), value: p.revenue - p.expenses })
        .collect()
}

/// New plus returning clients for one month. Widened so two full `u32`
/// counts cannot overflow.
pub fn client_total(point: &SalesPoint) -> u64 {
    u64::from(point.new_clients) + u64::from(point.returning_clients)
}

/// Simple moving average. Entries before the window fills are `None`.
pub fn moving_average(values: &[f64], window: usize) -> Vec<Option<f64>> {
    if window == 0 || values.len() < window {
        return vec![None; values.len()];
    }

    let mut results = vec![None; window - 1];

    let mut sum: f64 = values.iter().take(window).sum();
    results.push(Some(sum / window as f64));

    // Slide the window
    for i in window..values.len() {
        sum = sum - values[i - window] + values[i];
        results.push(Some(sum / window as f64));
    }
    results
}
