// Entity counts, optionally restricted by a predicate or a status value
use super::MetricCalculator;
use crate::filter::Filterable;
use serde_json::Value;

type Predicate<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

pub struct Count<T> {
    name: String,
    description: String,
    predicate: Predicate<T>,
}

impl<T> Count<T> {
    pub fn all(name: impl Into<String>) -> Self {
        Self::matching(name, "all", |_| true)
    }

    pub fn matching(
        name: impl Into<String>,
        description: impl Into<String>,
        predicate: impl Fn(&T) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self { name: name.into(), description: description.into(), predicate: Box::new(predicate) }
    }
}

impl<T> MetricCalculator<T> for Count<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn parameters(&self) -> Value {
        serde_json::json!({ "where": self.description })
    }

    fn calculate(&self, view: &[T]) -> f64 {
        count_where(view, &self.predicate) as f64
    }
}

/// Counts entities whose status (category key) equals `status` exactly.
pub struct CountByStatus {
    name: String,
    status: String,
}

impl CountByStatus {
    pub fn new(name: impl Into<String>, status: impl Into<String>) -> Self {
        Self { name: name.into(), status: status.into() }
    }
}

impl<T: Filterable> MetricCalculator<T> for CountByStatus {
    fn name(&self) -> &str {
        &self.name
    }

    fn parameters(&self) -> Value {
        serde_json::json!({ "status": self.status })
    }

    fn calculate(&self, view: &[T]) -> f64 {
        count_by_status(view, &self.status) as f64
    }
}

pub fn count_where<T>(view: &[T], predicate: impl Fn(&T) -> bool) -> usize {
    view.iter().filter(|&entity| predicate(entity)).count()
}

pub fn count_by_status<T: Filterable>(view: &[T], status: &str) -> usize {
    count_where(view, |entity| entity.category_key() == Some(status))
}
