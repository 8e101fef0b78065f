// Customers page: client stats over the whole catalog, table over the
// filtered view
use serde::Serialize;
use shared::models::Client;

use super::helpers::{iso_date, StatCard, StatusBadge};
use crate::aggregation::{aggregate, Average, Count, CountByStatus, MetricCalculator};
use crate::classification::Classify;
use crate::data::CatalogStore;
use crate::filter::{filter, FilterCriteria};
use crate::locale::LocaleContext;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomersPage {
    pub title: String,
    pub stats: Vec<StatCard>,
    pub matches: usize,
    pub clients: Vec<ClientRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientRow {
    pub id: u32,
    pub company: String,
    pub contact: String,
    pub initials: String,
    pub ltv: String,
    pub last_order: String,
    pub status: StatusBadge,
}

pub fn build_customers(store: &CatalogStore, criteria: &FilterCriteria, locale: &LocaleContext) -> CustomersPage {
    let total = Count::<Client>::all("total");
    let active = CountByStatus::new("active", "Active");
    let churned = CountByStatus::new("churned", "Churned");
    let avg_ltv = Average::new("avg_ltv", "ltv", |c: &Client| c.ltv);
    let calculators: [&dyn MetricCalculator<Client>; 4] = [&total, &active, &churned, &avg_ltv];
    let metrics = aggregate(store.clients(), &calculators);
    let metric = |name: &str| metrics.value(name).unwrap_or(0.0);

    let stats = vec![
        StatCard::new(locale, "Total Clients", "Celkem klientů", locale.format_count(metric("total"))),
        StatCard::new(locale, "Active", "Aktivní", locale.format_count(metric("active"))),
        StatCard::new(locale, "Churned", "Ztracení", locale.format_count(metric("churned"))),
        // Rounded in USD before conversion
        StatCard::new(locale, "Avg LTV", "Průměrné LTV", locale.format_currency(metric("avg_ltv").round())),
    ];

    let view = filter(store.clients(), criteria);
    let clients: Vec<ClientRow> = view
        .iter()
        .map(|client| ClientRow {
            id: client.id,
            company: client.company.clone(),
            contact: client.contact.clone(),
            initials: client.initials.clone(),
            ltv: locale.format_currency(client.ltv),
            last_order: iso_date(client.last_order),
            status: StatusBadge::from_tier(&client.classify(), locale),
        })
        .collect();
    tracing::debug!(query = %criteria.query, matches = clients.len(), "Built customers page");

    CustomersPage {
        title: locale.translate("Customers", "Zákazníci").to_string(),
        stats,
        matches: clients.len(),
        clients,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineSettings;
    use crate::filter::CategorySelector;
    use shared::models::Language;

    fn store() -> CatalogStore {
        CatalogStore::embedded(&EngineSettings::default()).unwrap()
    }

    #[test]
    fn test_stats_count_active_and_churned() {
        let page = build_customers(&store(), &FilterCriteria::new(), &LocaleContext::new(Language::En, 25.0));
        let values: Vec<&str> = page.stats.iter().map(|s| s.value.as_str()).collect();
        assert_eq!(values, vec!["10", "8", "2", "$69,700"]);
        assert_eq!(page.matches, 10);
    }

    #[test]
    fn test_stats_ignore_the_search() {
        let criteria = FilterCriteria::new().with_query("tatra");
        let page = build_customers(&store(), &criteria, &LocaleContext::new(Language::En, 25.0));
        assert_eq!(page.stats[0].value, "10");
        assert_eq!(page.matches, 1);
        assert_eq!(page.clients[0].company, "Tatra s.r.o.");
        assert_eq!(page.clients[0].ltv, "$84,000");
        assert_eq!(page.clients[0].last_order, "2024-01-15");
    }

    #[test]
    fn test_contact_search_and_status_filter() {
        let by_contact = FilterCriteria::new().with_query("NOVÁK");
        let page = build_customers(&store(), &by_contact, &LocaleContext::new(Language::En, 25.0));
        assert_eq!(page.matches, 1);

        let churned = FilterCriteria::new().with_category(CategorySelector::parse("Churned"));
        let page = build_customers(&store(), &churned, &LocaleContext::new(Language::Cz, 25.0));
        let companies: Vec<&str> = page.clients.iter().map(|c| c.company.as_str()).collect();
        assert_eq!(companies, vec!["O2 Czech Republic", "Lidl ČR"]);
        assert_eq!(page.clients[0].status.label, "Ztracený");
        assert_eq!(page.stats[3].label, "Průměrné LTV");
        assert_eq!(page.stats[3].value, "1\u{a0}742\u{a0}500\u{a0}Kč");
    }

    #[test]
    fn test_empty_catalog_has_zero_average() {
        let empty = CatalogStore::default();
        let page = build_customers(&empty, &FilterCriteria::new(), &LocaleContext::new(Language::En, 25.0));
        assert_eq!(page.stats[3].value, "$0");
        assert!(page.clients.is_empty());
    }
}
