// Percentage shares
use super::count::count_by_status;
use super::MetricCalculator;
use crate::filter::Filterable;
use serde_json::Value;

/// `part / total * 100`, or 0.0 when the total is zero.
pub fn share_percent(part: f64, total: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        part / total * 100.0
    }
}

/// Share of entities with a given status, in percent of the view size.
pub struct ShareByStatus {
    name: String,
    status: String,
}

impl ShareByStatus {
    pub fn new(name: impl Into<String>, status: impl Into<String>) -> Self {
        Self { name: name.into(), status: status.into() }
    }
}

impl<T: Filterable> MetricCalculator<T> for ShareByStatus {
    fn name(&self) -> &str {
        &self.name
    }

    fn parameters(&self) -> Value {
        serde_json::json!({ "status": self.status })
    }

    fn calculate(&self, view: &[T]) -> f64 {
        share_percent(count_by_status(view, &self.status) as f64, view.len() as f64)
    }
}
