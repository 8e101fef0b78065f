// View-model pieces shared by the page presenters
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::json;

use crate::aggregation::{AggregateResult, TrendDirection};
use crate::classification::{BadgeStyle, StatusTier, Tone};
use crate::data::CatalogStore;
use crate::locale::format::format_duration_secs;
use crate::locale::LocaleContext;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusBadge {
    pub label: String,
    pub tone: Tone,
    pub class_name: &'static str,
}

impl StatusBadge {
    pub fn from_tier(tier: &StatusTier, locale: &LocaleContext) -> Self {
        Self { label: tier.label(locale).to_string(), tone: tier.tone, class_name: tier.class_name }
    }

    pub fn from_badge(style: &BadgeStyle, locale: &LocaleContext) -> Self {
        Self {
            label: locale.translate(&style.label_en, &style.label_cz).to_string(),
            tone: style.tone,
            class_name: style.class_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendBadge {
    pub direction: TrendDirection,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiCard {
    pub key: String,
    pub title: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<TrendBadge>,
    /// Raw history for the card's mini chart. Unitless, so not converted.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sparkline: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatCard {
    pub label: String,
    pub value: String,
}

impl StatCard {
    pub fn new(locale: &LocaleContext, label_en: &str, label_cz: &str, value: String) -> Self {
        Self { label: locale.translate(label_en, label_cz).to_string(), value }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueFormat {
    /// USD amount, converted to the display currency.
    Currency,
    Count,
    Percent(usize),
    /// Seconds.
    Duration,
}

impl ValueFormat {
    pub fn render(self, value: f64, locale: &LocaleContext) -> String {
        match self {
            ValueFormat::Currency => locale.format_currency(value),
            ValueFormat::Count => locale.format_count(value),
            ValueFormat::Percent(decimals) => locale.format_percent(value, decimals),
            ValueFormat::Duration => format_duration_secs(value),
        }
    }
}

pub struct KpiDef {
    pub key: &'static str,
    pub title_en: &'static str,
    pub title_cz: &'static str,
    pub format: ValueFormat,
}

/// Records one KPI and its trend against the catalog baseline. `derived`
/// overrides the catalog's current value (e.g. a sum over another catalog).
pub fn record_kpi(result: &mut AggregateResult, store: &CatalogStore, key: &str, derived: Option<f64>) {
    let reference = store.kpi(key);
    let Some(current) = derived.or_else(|| reference.and_then(|kpi| kpi.current)) else {
        tracing::warn!(kpi = key, "KPI has no current value, card skipped");
        return;
    };
    let source = if derived.is_some() { "derived" } else { "catalog" };
    result.insert(key, current, json!({ "source": source }));
    if let Some(reference) = reference {
        result.compare(key, reference.baseline);
    }
}

pub fn kpi_cards(
    result: &AggregateResult,
    defs: &[KpiDef],
    store: &CatalogStore,
    locale: &LocaleContext,
) -> Vec<KpiCard> {
    defs
        .iter()
        .filter_map(|def| {
            let metric = result.get(def.key)?;
            Some(KpiCard {
                key: def.key.to_string(),
                title: locale.translate(def.title_en, def.title_cz).to_string(),
                value: def.format.render(metric.value, locale),
                trend: metric.trend.as_ref().map(|trend| TrendBadge { direction: trend.direction, label: trend.label() }),
                sparkline: store.sparkline(def.key).to_vec(),
            })
        })
        .collect()
}

pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineSettings;
    use shared::models::Language;

    #[test]
    fn test_record_kpi_prefers_derived_value() {
        let store = CatalogStore::embedded(&EngineSettings::default()).unwrap();
        let mut result = AggregateResult::default();
        record_kpi(&mut result, &store, "total_revenue", Some(716000.0));
        record_kpi(&mut result, &store, "active_orders", None);
        record_kpi(&mut result, &store, "no_such_kpi", None);

        assert_eq!(result.len(), 2);
        assert_eq!(result.get("total_revenue").unwrap().parameters, json!({ "source": "derived" }));
        assert_eq!(result.value("active_orders"), Some(47.0));
        assert_eq!(result.get("active_orders").unwrap().trend.as_ref().unwrap().label(), "-3.1%");
    }

    #[test]
    fn test_value_formats() {
        let cz = LocaleContext::new(Language::Cz, 25.0);
        assert_eq!(ValueFormat::Currency.render(100.0, &cz), "2\u{a0}500\u{a0}Kč");
        assert_eq!(ValueFormat::Count.render(83900.0, &cz), "83\u{a0}900");
        assert_eq!(ValueFormat::Percent(2).render(3.84, &cz), "3,84\u{a0}%");
        assert_eq!(ValueFormat::Duration.render(252.0, &cz), "4m 12s");
    }
}
