// Engine library root
// Filtering, aggregation, classification and locale-aware presentation of the
// dashboard catalogs. Pages are assembled in services::dashboard_service.

pub mod aggregation;
pub mod classification;
pub mod config;
pub mod data;
pub mod error;
pub mod filter;
pub mod locale;
pub mod services;
pub mod timebuckets;

pub use error::EngineError;
