// Settings page: billing history. Profile, company and security forms are
// inputs only and have nothing to compute.
use serde::Serialize;

use super::helpers::iso_date;
use crate::data::CatalogStore;
use crate::locale::LocaleContext;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettingsPage {
    pub title: String,
    pub billing: BillingView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillingView {
    pub title: String,
    pub payments: Vec<PaymentRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentRow {
    pub date: String,
    pub description: String,
    pub amount: String,
}

pub fn build_settings(store: &CatalogStore, locale: &LocaleContext) -> SettingsPage {
    let payments = store
        .payments()
        .iter()
        .map(|payment| PaymentRow {
            date: iso_date(payment.date),
            description: payment.description.clone(),
            amount: locale.format_currency(payment.amount),
        })
        .collect();

    SettingsPage {
        title: locale.translate("Settings", "Nastavení").to_string(),
        billing: BillingView { title: locale.translate("Payment History", "Historie plateb").to_string(), payments },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineSettings;
    use shared::models::Language;

    fn store() -> CatalogStore {
        CatalogStore::embedded(&EngineSettings::default()).unwrap()
    }

    #[test]
    fn test_billing_history_in_english() {
        let page = build_settings(&store(), &LocaleContext::new(Language::En, 25.0));
        assert_eq!(page.title, "Settings");
        assert_eq!(page.billing.title, "Payment History");
        assert_eq!(page.billing.payments.len(), 5);
        let latest = &page.billing.payments[0];
        assert_eq!(latest.date, "2024-01-01");
        assert_eq!(latest.description, "Pro Plan – Jan 2024");
        assert_eq!(latest.amount, "$49");
    }

    #[test]
    fn test_billing_amounts_convert_to_crowns() {
        let page = build_settings(&store(), &LocaleContext::new(Language::Cz, 25.0));
        assert_eq!(page.billing.title, "Historie plateb");
        assert_eq!(page.billing.payments[4].amount, "1\u{a0}225\u{a0}Kč");
        // Dates and descriptions are catalog text, never translated.
        assert_eq!(page.billing.payments[4].date, "2023-09-01");
    }
}
