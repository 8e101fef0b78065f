// Read-only catalogs backing every dashboard page.
use std::path::Path;

use shared::models::{
    CategoryShare, Client, Invoice, KpiBaseline, Order, Payment, Product, RevenuePoint, SalesPoint, Sparkline,
    TrafficPoint, TrafficSource,
};

use super::csv_parser::{CatalogCsvParser, FromCatalogRecord, RecordDefaults};
use crate::config::EngineSettings;
use crate::error::EngineError;

/// Snapshot of all catalogs. There are no mutators: anything the UI offers as
/// create, restock or mark-paid stays an affordance and never reaches here.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    clients: Vec<Client>,
    invoices: Vec<Invoice>,
    products: Vec<Product>,
    orders: Vec<Order>,
    revenue: Vec<RevenuePoint>,
    monthly_sales: Vec<SalesPoint>,
    traffic: Vec<TrafficPoint>,
    categories: Vec<CategoryShare>,
    kpis: Vec<KpiBaseline>,
    sparklines: Vec<Sparkline>,
    payments: Vec<Payment>,
    traffic_sources: Vec<TrafficSource>,
}

macro_rules! embedded_catalog {
    ($file:literal) => {
        include_str!(concat!("../../assets/catalogs/", $file))
    };
}

impl CatalogStore {
    /// Loads the catalogs compiled into the binary.
    pub fn embedded(settings: &EngineSettings) -> Result<Self, EngineError> {
        let defaults = RecordDefaults { stock_capacity: settings.default_stock_capacity };
        let store = CatalogStore {
            clients: parse_embedded(embedded_catalog!("clients.csv"), &defaults)?,
            invoices: parse_embedded(embedded_catalog!("invoices.csv"), &defaults)?,
            products: parse_embedded(embedded_catalog!("products.csv"), &defaults)?,
            orders: parse_embedded(embedded_catalog!("orders.csv"), &defaults)?,
            revenue: parse_embedded(embedded_catalog!("revenue.csv"), &defaults)?,
            monthly_sales: parse_embedded(embedded_catalog!("monthly_sales.csv"), &defaults)?,
            traffic: parse_embedded(embedded_catalog!("traffic.csv"), &defaults)?,
            categories: parse_embedded(embedded_catalog!("categories.csv"), &defaults)?,
            kpis: parse_embedded(embedded_catalog!("kpis.csv"), &defaults)?,
            sparklines: parse_embedded(embedded_catalog!("sparklines.csv"), &defaults)?,
            payments: parse_embedded(embedded_catalog!("payments.csv"), &defaults)?,
            traffic_sources: parse_embedded(embedded_catalog!("traffic_sources.csv"), &defaults)?,
        };
        tracing::info!(
            clients = store.clients.len(),
            invoices = store.invoices.len(),
            products = store.products.len(),
            orders = store.orders.len(),
            "Loaded embedded catalogs"
        );
        Ok(store)
    }

    /// Loads the same file set from a directory, e.g. to demo other data.
    pub fn from_dir(dir: &Path, settings: &EngineSettings) -> Result<Self, EngineError> {
        let defaults = RecordDefaults { stock_capacity: settings.default_stock_capacity };
        let load = |file: &str| dir.join(file);
        Ok(CatalogStore {
            clients: CatalogCsvParser::load_from_path(&load("clients.csv"), &defaults)?,
            invoices: CatalogCsvParser::load_from_path(&load("invoices.csv"), &defaults)?,
            products: CatalogCsvParser::load_from_path(&load("products.csv"), &defaults)?,
            orders: CatalogCsvParser::load_from_path(&load("orders.csv"), &defaults)?,
            revenue: CatalogCsvParser::load_from_path(&load("revenue.csv"), &defaults)?,
            monthly_sales: CatalogCsvParser::load_from_path(&load("monthly_sales.csv"), &defaults)?,
            traffic: CatalogCsvParser::load_from_path(&load("traffic.csv"), &defaults)?,
            categories: CatalogCsvParser::load_from_path(&load("categories.csv"), &defaults)?,
            kpis: CatalogCsvParser::load_from_path(&load("kpis.csv"), &defaults)?,
            sparklines: CatalogCsvParser::load_from_path(&load("sparklines.csv"), &defaults)?,
            payments: CatalogCsvParser::load_from_path(&load("payments.csv"), &defaults)?,
            traffic_sources: CatalogCsvParser::load_from_path(&load("traffic_sources.csv"), &defaults)?,
        })
    }

    pub fn with_clients(mut self, clients: Vec<Client>) -> Self {
        self.clients = clients;
        self
    }

    pub fn with_invoices(mut self, invoices: Vec<Invoice>) -> Self {
        self.invoices = invoices;
        self
    }

    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = products;
        self
    }

    pub fn with_traffic_sources(mut self, traffic_sources: Vec<TrafficSource>) -> Self {
        self.traffic_sources = traffic_sources;
        self
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    pub fn invoice(&self, id: &str) -> Result<&Invoice, EngineError> {
        self.invoices
            .iter()
            .find(|invoice| invoice.id == id)
            .ok_or_else(|| EngineError::CatalogError(format!("Invoice '{}' not found", id)))
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn revenue(&self) -> &[RevenuePoint] {
        &self.revenue
    }

    pub fn monthly_sales(&self) -> &[SalesPoint] {
        &self.monthly_sales
    }

    pub fn traffic(&self) -> &[TrafficPoint] {
        &self.traffic
    }

    pub fn categories(&self) -> &[CategoryShare] {
        &self.categories
    }

    pub fn kpi(&self, key: &str) -> Option<&KpiBaseline> {
        self.kpis.iter().find(|kpi| kpi.key == key)
    }

    /// Sparkline points for a KPI key; empty when the catalog has none.
    pub fn sparkline(&self, key: &str) -> &[f64] {
        self.sparklines
            .iter()
            .find(|sparkline| sparkline.key == key)
            .map_or(&[], |sparkline| sparkline.points.as_slice())
    }

    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    pub fn traffic_sources(&self) -> &[TrafficSource] {
        &self.traffic_sources
    }
}

fn parse_embedded<T: FromCatalogRecord>(content: &str, defaults: &RecordDefaults) -> Result<Vec<T>, EngineError> {
    CatalogCsvParser::parse(content.as_bytes(), defaults).map_err(|e| {
        EngineError::CsvDataFormatError(format!("embedded {} catalog: {}", T::CATALOG, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{ClientStatus, InvoiceStatus};
    use std::fs;

    fn store() -> CatalogStore {
        CatalogStore::embedded(&EngineSettings::default()).unwrap()
    }

    #[test]
    fn test_embedded_catalog_sizes() {
        let store = store();
        assert_eq!(store.clients().len(), 10);
        assert_eq!(store.invoices().len(), 8);
        assert_eq!(store.products().len(), 8);
        assert_eq!(store.orders().len(), 5);
        assert_eq!(store.revenue().len(), 12);
        assert_eq!(store.monthly_sales().len(), 12);
        assert_eq!(store.traffic().len(), 8);
        assert_eq!(store.categories().len(), 4);
        assert_eq!(store.payments().len(), 5);
        assert_eq!(store.traffic_sources().len(), 1);
    }

    #[test]
    fn test_sparkline_lookup() {
        let store = store();
        assert_eq!(store.sparkline("new_clients"), &[3.0, 5.0, 4.0, 7.0, 6.0, 8.0, 5.0, 9.0, 7.0, 11.0, 9.0, 13.0]);
        assert!(store.sparkline("conversion_rate").is_empty());
    }

    #[test]
    fn test_embedded_content() {
        let store = store();
        assert_eq!(store.clients()[0].company, "Tatra s.r.o.");
        assert_eq!(store.clients().iter().filter(|c| c.status == ClientStatus::Churned).count(), 2);
        let tatra = store.invoice("#INV-2024-112").unwrap();
        assert_eq!(tatra.status, InvoiceStatus::Overdue);
        assert_eq!(tatra.items.len(), 3);
        // Logitech MX Keys has no capacity in the source data.
        assert_eq!(store.products()[2].max, 50);
        assert_eq!(store.kpi("total_revenue").unwrap().current, None);
    }

    #[test]
    fn test_default_capacity_comes_from_settings() {
        let settings = EngineSettings { default_stock_capacity: 40, ..EngineSettings::default() };
        let store = CatalogStore::embedded(&settings).unwrap();
        assert_eq!(store.products()[2].max, 40);
    }

    #[test]
    fn test_unknown_invoice_is_catalog_error() {
        assert!(matches!(store().invoice("#INV-0000"), Err(EngineError::CatalogError(_))));
    }

    #[test]
    fn test_from_dir_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("clients.csv"), "id;company;contact;ltv;last_order;status\n").unwrap();
        let result = CatalogStore::from_dir(dir.path(), &EngineSettings::default());
        assert!(result.unwrap_err().to_string().contains("invoices.csv"));
    }
}
