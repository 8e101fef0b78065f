// engine/src/services/dashboard_service/mod.rs
// Holds the DashboardService facade and declares one submodule per page.
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde_json::Value;

use crate::config::EngineSettings;
use crate::data::CatalogStore;
use crate::error::EngineError;
use crate::filter::FilterCriteria;
use crate::locale::LocaleHandle;
use crate::timebuckets::SeededSource;

pub mod analytics;
pub mod customers;
pub mod helpers;
pub mod inventory;
pub mod invoices;
pub mod overview;
pub mod settings;

pub use analytics::AnalyticsPage;
pub use customers::CustomersPage;
pub use inventory::InventoryPage;
pub use invoices::{InvoiceDetail, InvoicesPage};
pub use overview::OverviewPage;
pub use settings::SettingsPage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Overview,
    Customers,
    Invoices,
    Inventory,
    Analytics,
    Settings,
}

impl Page {
    pub const ALL: [Page; 6] =
        [Page::Overview, Page::Customers, Page::Invoices, Page::Inventory, Page::Analytics, Page::Settings];

    pub fn name(self) -> &'static str {
        match self {
            Page::Overview => "overview",
            Page::Customers => "customers",
            Page::Invoices => "invoices",
            Page::Inventory => "inventory",
            Page::Analytics => "analytics",
            Page::Settings => "settings",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Page {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Page::ALL.into_iter().find(|page| page.name() == wanted).ok_or_else(|| {
            EngineError::InvalidRequest(format!(
                "Unknown page '{}', expected one of: {}",
                s,
                Page::ALL.map(Page::name).join(", ")
            ))
        })
    }
}

/// Read-only presenter over the catalogs. Every page call takes one locale
/// snapshot, so a toggle racing a render never mixes languages in one page.
pub struct DashboardService {
    catalogs: Arc<CatalogStore>,
    locale: LocaleHandle,
    settings: EngineSettings,
}

impl DashboardService {
    pub fn new(catalogs: Arc<CatalogStore>, locale: LocaleHandle, settings: EngineSettings) -> Self {
        DashboardService { catalogs, locale, settings }
    }

    pub fn locale(&self) -> &LocaleHandle {
        &self.locale
    }

    pub fn toggle_language(&self) {
        self.locale.toggle_language();
    }

    pub fn overview(&self) -> OverviewPage {
        let locale = self.locale.snapshot();
        tracing::debug!(language = locale.language().code(), "Rendering overview page");
        overview::build_overview(&self.catalogs, &locale)
    }

    pub fn customers(&self, criteria: &FilterCriteria) -> CustomersPage {
        customers::build_customers(&self.catalogs, criteria, &self.locale.snapshot())
    }

    pub fn invoices(&self, criteria: &FilterCriteria) -> InvoicesPage {
        invoices::build_invoices(&self.catalogs, criteria, &self.locale.snapshot())
    }

    pub fn invoice_detail(&self, id: &str) -> Result<InvoiceDetail, EngineError> {
        invoices::build_invoice_detail(&self.catalogs, id, &self.locale.snapshot()).map_err(|e| {
            tracing::warn!(invoice = id, error_kind = e.kind(), "Invoice detail unavailable");
            e
        })
    }

    pub fn inventory(&self, criteria: &FilterCriteria) -> InventoryPage {
        inventory::build_inventory(&self.catalogs, criteria, &self.locale.snapshot())
    }

    pub fn analytics(&self) -> AnalyticsPage {
        let mut source = SeededSource::new(self.settings.heatmap_seed);
        tracing::debug!(seed = self.settings.heatmap_seed, "Rendering analytics page");
        analytics::build_analytics(&self.catalogs, &self.locale.snapshot(), &mut source)
    }

    pub fn settings(&self) -> SettingsPage {
        settings::build_settings(&self.catalogs, &self.locale.snapshot())
    }

    /// Renders any page as JSON. Pages without a filter bar ignore `criteria`.
    pub fn render(&self, page: Page, criteria: &FilterCriteria) -> Result<Value, EngineError> {
        tracing::info!(%page, language = self.locale.language().code(), "Rendering page");
        let value = match page {
            Page::Overview => serde_json::to_value(self.overview())?,
            Page::Customers => serde_json::to_value(self.customers(criteria))?,
            Page::Invoices => serde_json::to_value(self.invoices(criteria))?,
            Page::Inventory => serde_json::to_value(self.inventory(criteria))?,
            Page::Analytics => serde_json::to_value(self.analytics())?,
            Page::Settings => serde_json::to_value(self.settings())?,
        };
        Ok(value)
    }
}
