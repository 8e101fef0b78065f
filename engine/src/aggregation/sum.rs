// Sum of one numeric field across a view
use super::MetricCalculator;
use serde_json::Value;

pub struct Sum<T> {
    name: String,
    field: &'static str,
    accessor: fn(&T) -> f64,
}

impl<T> Sum<T> {
    pub fn new(name: impl Into<String>, field: &'static str, accessor: fn(&T) -> f64) -> Self {
        Self { name: name.into(), field, accessor }
    }
}

impl<T> MetricCalculator<T> for Sum<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn parameters(&self) -> Value {
        serde_json::json!({ "field": self.field })
    }

    fn calculate(&self, view: &[T]) -> f64 {
        sum_by(view, self.accessor)
    }
}

pub fn sum_by<T>(view: &[T], accessor: impl Fn(&T) -> f64) -> f64 {
    view.iter().map(accessor).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::RevenuePoint;

    fn point(revenue: f64, expenses: f64) -> RevenuePoint {
        RevenuePoint { month: "M".to_string(), revenue, expenses }
    }

    #[test]
    fn test_sum_calculation() {
        let view = vec![point(42000.0, 28000.0), point(48000.0, 31000.0), point(45000.0, 29000.0)];
        let revenue = Sum::new("revenue", "revenue", |p: &RevenuePoint| p.revenue);
        assert_eq!(revenue.calculate(&view), 135000.0);
        assert_eq!(sum_by(&view, |p| p.expenses), 88000.0);
    }

    #[test]
    fn test_sum_empty_view() {
        let revenue = Sum::new("revenue", "revenue", |p: &RevenuePoint| p.revenue);
        assert_eq!(revenue.calculate(&[]), 0.0);
    }
}
