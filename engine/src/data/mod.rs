// Catalog loading and storage
pub mod catalogs;
pub mod csv_parser;

pub use catalogs::CatalogStore;
