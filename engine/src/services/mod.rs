// Page presenters. Each page turns catalogs plus one locale snapshot into a
// serializable view model the rendering layer can draw as-is.
pub mod dashboard_service;

pub use dashboard_service::{DashboardService, Page};
