// Aggregation engine: sums, counts, averages, shares and trends over a
// catalog or a filtered view. Every calculator is a pure function of its input.
pub mod average;
pub mod count;
pub mod share;
pub mod sum;
pub mod trend;

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

pub use average::{average, Average};
pub use count::{count_by_status, count_where, Count, CountByStatus};
pub use share::{share_percent, ShareByStatus};
pub use sum::{sum_by, Sum};
pub use trend::{Trend, TrendDirection};

// Common trait for all metric calculators
pub trait MetricCalculator<T>: Send + Sync {
    fn name(&self) -> &str;
    fn parameters(&self) -> Value; // What the metric reads, for display and debugging
    fn calculate(&self, view: &[T]) -> f64;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
    pub parameters: Value,
}

/// Metric name -> value (and optional trend). Ordered by name so two runs over
/// the same view serialize identically.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregateResult {
    metrics: BTreeMap<String, Metric>,
}

impl AggregateResult {
    pub fn insert(&mut self, name: impl Into<String>, value: f64, parameters: Value) {
        self.metrics.insert(name.into(), Metric { value, trend: None, parameters });
    }

    /// Attaches a trend against `baseline` to an existing metric.
    pub fn compare(&mut self, name: &str, baseline: f64) -> Option<&Trend> {
        let metric = self.metrics.get_mut(name)?;
        metric.trend = Some(Trend::between(metric.value, baseline));
        metric.trend.as_ref()
    }

    pub fn get(&self, name: &str) -> Option<&Metric> {
        self.metrics.get(name)
    }

    pub fn value(&self, name: &str) -> Option<f64> {
        self.metrics.get(name).map(|metric| metric.value)
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}

pub fn aggregate<T>(view: &[T], calculators: &[&dyn MetricCalculator<T>]) -> AggregateResult {
    let mut result = AggregateResult::default();
    for calculator in calculators {
        result.insert(calculator.name(), calculator.calculate(view), calculator.parameters());
    }
    result
}
