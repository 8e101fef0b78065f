// Status badges for invoices, clients and orders
use serde::Serialize;
use shared::models::{ClientStatus, InvoiceStatus, OrderStatus};

use super::Tone;
use crate::locale::LocaleContext;

const GREEN: &str = "bg-green-100 text-green-700 border-green-200";
const YELLOW: &str = "bg-yellow-100 text-yellow-700 border-yellow-200";
const BLUE: &str = "bg-blue-100 text-blue-700 border-blue-200";
const GRAY: &str = "bg-gray-100 text-gray-500 border-gray-200";
pub const NEUTRAL_CLASS: &str = "bg-muted text-muted-foreground";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusTier {
    pub tone: Tone,
    pub label_en: String,
    pub label_cz: String,
    pub class_name: &'static str,
    pub weight: u8,
}

impl StatusTier {
    fn new(tone: Tone, label_en: &str, label_cz: &str, class_name: &'static str) -> Self {
        Self {
            tone,
            label_en: label_en.to_string(),
            label_cz: label_cz.to_string(),
            class_name,
            weight: tone.weight(),
        }
    }

    /// Unknown statuses are shown verbatim in both languages.
    fn neutral(raw: &str) -> Self {
        Self::new(Tone::Neutral, raw, raw, NEUTRAL_CLASS)
    }

    pub fn label<'a>(&'a self, locale: &LocaleContext) -> &'a str {
        locale.translate(&self.label_en, &self.label_cz)
    }
}

pub fn invoice_status_tier(status: &InvoiceStatus) -> StatusTier {
    match status {
        InvoiceStatus::Paid => StatusTier::new(Tone::Success, "Paid", "Zaplaceno", GREEN),
        InvoiceStatus::Pending => StatusTier::new(Tone::Warning, "Pending", "Čeká na platbu", YELLOW),
        InvoiceStatus::Overdue => {
            StatusTier::new(Tone::Danger, "Overdue", "Po splatnosti", "bg-red-100 text-red-700 border-red-200")
        }
        InvoiceStatus::Cancelled => StatusTier::new(Tone::Muted, "Cancelled", "Zrušeno", GRAY),
        InvoiceStatus::Unrecognized(raw) => StatusTier::neutral(raw),
    }
}

pub fn client_status_tier(status: &ClientStatus) -> StatusTier {
    match status {
        ClientStatus::Active => StatusTier::new(Tone::Success, "Active", "Aktivní", GREEN),
        ClientStatus::Churned => {
            StatusTier::new(Tone::Danger, "Churned", "Ztracený", "bg-red-100 text-red-600 border-red-200")
        }
        ClientStatus::Unrecognized(raw) => StatusTier::neutral(raw),
    }
}

pub fn order_status_tier(status: &OrderStatus) -> StatusTier {
    match status {
        OrderStatus::Paid => StatusTier::new(Tone::Success, "Paid", "Zaplaceno", GREEN),
        OrderStatus::Pending => StatusTier::new(Tone::Warning, "Pending", "Čeká", YELLOW),
        OrderStatus::Processing => StatusTier::new(Tone::Info, "Processing", "Zpracovává se", BLUE),
        OrderStatus::Unrecognized(raw) => StatusTier::neutral(raw),
    }
}
