// Arithmetic mean of one numeric field
use super::MetricCalculator;
use serde_json::Value;

pub struct Average<T> {
    name: String,
    field: &'static str,
    accessor: fn(&T) -> f64,
}

impl<T> Average<T> {
    pub fn new(name: impl Into<String>, field: &'static str, accessor: fn(&T) -> f64) -> Self {
        Self { name: name.into(), field, accessor }
    }
}

impl<T> MetricCalculator<T> for Average<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn parameters(&self) -> Value {
        serde_json::json!({ "field": self.field })
    }

    fn calculate(&self, view: &[T]) -> f64 {
        average(view.iter().map(self.accessor))
    }
}

/// Mean of the values, or 0.0 when there are none.
pub fn average(values: impl IntoIterator<Item = f64>) -> f64 {
    let (sum, count) = values.into_iter().fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::TrafficPoint;

    fn week(bounce: f64) -> TrafficPoint {
        TrafficPoint { week: "W".to_string(), sessions: 0, pageviews: 0, bounce }
    }

    #[test]
    fn test_average_of_empty_is_zero() {
        assert_eq!(average(Vec::new()), 0.0);
        let avg = Average::new("bounce", "bounce", |w: &TrafficPoint| w.bounce);
        assert_eq!(avg.calculate(&[]), 0.0);
    }

    #[test]
    fn test_average_calculation() {
        let view = vec![week(42.0), week(39.0), week(41.0), week(38.0)];
        let avg = Average::new("bounce", "bounce", |w: &TrafficPoint| w.bounce);
        assert_eq!(avg.calculate(&view), 40.0);
        assert_eq!(average([1.0, 2.0]), 1.5);
    }
}
