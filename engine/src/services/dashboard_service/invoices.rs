// Invoices page: filter bar options, filtered table with totals, and the
// detail sheet for one invoice
use serde::Serialize;
use shared::models::{Invoice, InvoiceStatus};

use super::helpers::{iso_date, StatCard, StatusBadge};
use crate::aggregation::{aggregate, Count, MetricCalculator, Sum};
use crate::classification::Classify;
use crate::data::CatalogStore;
use crate::error::EngineError;
use crate::filter::{filter, CategorySelector, FilterCriteria};
use crate::locale::LocaleContext;

const STATUS_OPTIONS: [(&str, &str, &str); 5] = [
    ("all", "All Statuses", "Všechny stavy"),
    ("Paid", "Paid", "Zaplaceno"),
    ("Pending", "Pending", "Čeká"),
    ("Overdue", "Overdue", "Po splatnosti"),
    ("Cancelled", "Cancelled", "Zrušeno"),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoicesPage {
    pub title: String,
    pub status_options: Vec<StatusOption>,
    pub summary: Vec<StatCard>,
    pub invoices: Vec<InvoiceRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceRow {
    pub id: String,
    pub client: String,
    pub company: String,
    pub initials: String,
    pub issued: String,
    pub due: String,
    pub amount: String,
    pub status: StatusBadge,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceDetail {
    pub id: String,
    pub client: String,
    pub company: String,
    pub issued: String,
    pub due: String,
    pub items: Vec<String>,
    pub total: String,
    pub status: StatusBadge,
    /// Whether the sheet offers "mark as paid". Acting on it never touches
    /// the catalog.
    pub can_mark_paid: bool,
}

pub fn can_mark_paid(status: &InvoiceStatus) -> bool {
    !matches!(status, InvoiceStatus::Paid | InvoiceStatus::Cancelled)
}

fn is_outstanding(invoice: &Invoice) -> bool {
    matches!(invoice.status, InvoiceStatus::Pending | InvoiceStatus::Overdue)
}

pub fn build_invoices(store: &CatalogStore, criteria: &FilterCriteria, locale: &LocaleContext) -> InvoicesPage {
    let view = filter(store.invoices(), criteria);

    let count = Count::<Invoice>::all("count");
    let total = Sum::new("total", "amount", |i: &Invoice| i.amount);
    let outstanding = Sum::new("outstanding", "amount", |i: &Invoice| if is_outstanding(i) { i.amount } else { 0.0 });
    let calculators: [&dyn MetricCalculator<Invoice>; 3] = [&count, &total, &outstanding];
    let metrics = aggregate(&view, &calculators);
    let metric = |name: &str| metrics.value(name).unwrap_or(0.0);

    let summary = vec![
        StatCard::new(locale, "Invoices", "Faktury", locale.format_count(metric("count"))),
        StatCard::new(locale, "Total", "Celkem", locale.format_currency(metric("total"))),
        StatCard::new(locale, "Outstanding", "Nezaplaceno", locale.format_currency(metric("outstanding"))),
    ];

    let status_options = STATUS_OPTIONS
        .iter()
        .map(|(value, label_en, label_cz)| StatusOption {
            value: value.to_string(),
            label: locale.translate(label_en, label_cz).to_string(),
            selected: match &criteria.category {
                CategorySelector::All => *value == "all",
                CategorySelector::Only(status) => status == value,
            },
        })
        .collect();

    let invoices: Vec<InvoiceRow> = view.iter().map(|invoice| invoice_row(invoice, locale)).collect();
    tracing::debug!(
        query = %criteria.query,
        status = ?criteria.category,
        matches = invoices.len(),
        "Built invoices page"
    );

    InvoicesPage {
        title: locale.translate("Invoices", "Faktury").to_string(),
        status_options,
        summary,
        invoices,
    }
}

/// Looks the invoice up by id; the leading `#` may be omitted.
pub fn build_invoice_detail(store: &CatalogStore, id: &str, locale: &LocaleContext) -> Result<InvoiceDetail, EngineError> {
    let invoice = match store.invoice(id) {
        Ok(invoice) => invoice,
        Err(e) if id.starts_with('#') => return Err(e),
        Err(_) => store.invoice(&format!("#{}", id))?,
    };
    Ok(InvoiceDetail {
        id: invoice.id.clone(),
        client: invoice.client.clone(),
        company: invoice.company.clone(),
        issued: iso_date(invoice.issued),
        due: iso_date(invoice.due),
        items: invoice.items.clone(),
        total: locale.format_currency(invoice.amount),
        status: StatusBadge::from_tier(&invoice.classify(), locale),
        can_mark_paid: can_mark_paid(&invoice.status),
    })
}

fn invoice_row(invoice: &Invoice, locale: &LocaleContext) -> InvoiceRow {
    InvoiceRow {
        id: invoice.id.clone(),
        client: invoice.client.clone(),
        company: invoice.company.clone(),
        initials: invoice.initials.clone(),
        issued: iso_date(invoice.issued),
        due: iso_date(invoice.due),
        amount: locale.format_currency(invoice.amount),
        status: StatusBadge::from_tier(&invoice.classify(), locale),
    }
}
