// Analytics page: traffic KPIs with the top source, monthly client sales,
// weekly traffic and the day x hour activity heatmap
use serde::Serialize;

use shared::models::TrafficSource;

use super::helpers::{kpi_cards, record_kpi, KpiCard, KpiDef, TrendBadge, ValueFormat};
use crate::aggregation::{AggregateResult, TrendDirection};
use crate::classification::{heat_tier, HeatTier};
use crate::data::CatalogStore;
use crate::locale::LocaleContext;
use crate::timebuckets::{client_total, generate_heatmap, IntensitySource, DAYS, HOURS_PER_DAY};

const DAYS_CZ: [&str; 7] = ["Po", "Út", "St", "Čt", "Pá", "So", "Ne"];

const ANALYTICS_KPIS: [KpiDef; 3] = [
    KpiDef { key: "total_sessions", title_en: "Total Sessions", title_cz: "Celkem relací", format: ValueFormat::Count },
    KpiDef {
        key: "conversion_rate",
        title_en: "Conversion Rate",
        title_cz: "Míra konverze",
        format: ValueFormat::Percent(2),
    },
    KpiDef {
        key: "avg_session_secs",
        title_en: "Avg Session",
        title_cz: "Průměrná relace",
        format: ValueFormat::Duration,
    },
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsPage {
    pub title: String,
    pub kpis: Vec<KpiCard>,
    pub monthly_sales: Vec<SalesRow>,
    pub traffic: Vec<TrafficRow>,
    pub heatmap: HeatmapView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesRow {
    pub month: String,
    pub new_clients: u32,
    pub returning_clients: u32,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrafficRow {
    pub week: String,
    pub sessions: u64,
    pub pageviews: u64,
    pub bounce: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapView {
    pub title: String,
    pub rows: Vec<HeatmapRowView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapRowView {
    pub day: String,
    pub cells: Vec<HeatCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatCell {
    pub hour: usize,
    pub value: u32,
    pub tier: HeatTier,
    pub class_name: &'static str,
}

pub fn build_analytics(store: &CatalogStore, locale: &LocaleContext, source: &mut impl IntensitySource) -> AnalyticsPage {
    let mut metrics = AggregateResult::default();
    for def in &ANALYTICS_KPIS {
        record_kpi(&mut metrics, store, def.key, None);
    }
    let mut kpis = kpi_cards(&metrics, &ANALYTICS_KPIS, store, locale);
    match top_source(store.traffic_sources()) {
        Some(top) => kpis.push(top_source_card(top, locale)),
        None => tracing::warn!("No traffic sources, top source card skipped"),
    }

    let monthly_sales = store
        .monthly_sales()
        .iter()
        .map(|point| SalesRow {
            month: point.month.clone(),
            new_clients: point.new_clients,
            returning_clients: point.returning_clients,
            total: client_total(point),
        })
        .collect();

    let traffic = store
        .traffic()
        .iter()
        .map(|week| TrafficRow {
            week: week.week.clone(),
            sessions: week.sessions,
            pageviews: week.pageviews,
            bounce: locale.format_percent(week.bounce, 0),
        })
        .collect();

    let heatmap = generate_heatmap(DAYS.len(), HOURS_PER_DAY, source);
    let rows = heatmap
        .rows
        .iter()
        .enumerate()
        .map(|(index, row)| HeatmapRowView {
            day: locale.translate(&row.day, DAYS_CZ[index % DAYS_CZ.len()]).to_string(),
            cells: row
                .hours
                .iter()
                .enumerate()
                .map(|(hour, &value)| {
                    let tier = heat_tier(value);
                    HeatCell { hour, value, tier, class_name: tier.class_name() }
                })
                .collect(),
        })
        .collect();

    AnalyticsPage {
        title: locale.translate("Analytics", "Analytika").to_string(),
        kpis,
        monthly_sales,
        traffic,
        heatmap: HeatmapView { title: locale.translate("Activity Heatmap", "Mapa aktivity").to_string(), rows },
    }
}

/// Source with the largest share of sessions. Ties keep the first listed.
pub fn top_source(sources: &[TrafficSource]) -> Option<&TrafficSource> {
    sources.iter().reduce(|best, source| if source.share > best.share { source } else { best })
}

fn top_source_card(source: &TrafficSource, locale: &LocaleContext) -> KpiCard {
    KpiCard {
        key: "top_source".to_string(),
        title: locale.translate("Top Source", "Hlavní zdroj").to_string(),
        value: source.name.clone(),
        trend: Some(TrendBadge { direction: TrendDirection::Up, label: locale.format_percent(source.share, 0) }),
        sparkline: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineSettings;
    use crate::timebuckets::SeededSource;
    use shared::models::Language;

    fn store() -> CatalogStore {
        CatalogStore::embedded(&EngineSettings::default()).unwrap()
    }

    #[test]
    fn test_kpis() {
        let page = build_analytics(&store(), &LocaleContext::new(Language::En, 25.0), &mut SeededSource::new(42));
        let values: Vec<&str> = page.kpis.iter().map(|k| k.value.as_str()).collect();
        assert_eq!(values, vec!["92,400", "3.84%", "4m 12s", "Google"]);
        let labels: Vec<String> = page.kpis.iter().map(|k| k.trend.as_ref().unwrap().label.clone()).collect();
        assert_eq!(labels, vec!["+14.2%", "+6.1%", "-3.1%", "61%"]);
        assert_eq!(page.kpis[2].trend.as_ref().unwrap().direction, TrendDirection::Down);
        assert_eq!(page.kpis[3].title, "Top Source");
    }

    #[test]
    fn test_top_source_card() {
        let sources = vec![
            TrafficSource { name: "Direct".to_string(), share: 22.0 },
            TrafficSource { name: "Google".to_string(), share: 61.0 },
            TrafficSource { name: "Bing".to_string(), share: 61.0 },
        ];
        assert_eq!(top_source(&sources).unwrap().name, "Google");
        assert!(top_source(&[]).is_none());

        let cz = LocaleContext::new(Language::Cz, 25.0);
        let page = build_analytics(&store().with_traffic_sources(sources), &cz, &mut SeededSource::new(42));
        let card = page.kpis.last().unwrap();
        assert_eq!(card.title, "Hlavní zdroj");
        assert_eq!(card.value, "Google");
        assert_eq!(card.trend.as_ref().unwrap().label, "61\u{a0}%");

        let page = build_analytics(&store().with_traffic_sources(Vec::new()), &cz, &mut SeededSource::new(42));
        assert_eq!(page.kpis.len(), 3);
    }

    #[test]
    fn test_sales_and_traffic_rows() {
        let page = build_analytics(&store(), &LocaleContext::new(Language::Cz, 25.0), &mut SeededSource::new(42));
        assert_eq!(page.monthly_sales.len(), 12);
        assert_eq!(page.monthly_sales[11].total, 110);
        assert_eq!(page.traffic[0].bounce, "42\u{a0}%");
        assert_eq!(page.kpis[1].value, "3,84\u{a0}%");
    }

    #[test]
    fn test_heatmap_cells_are_tiered() {
        let page = build_analytics(&store(), &LocaleContext::new(Language::Cz, 25.0), &mut |_: usize, _: usize| 0.5);
        assert_eq!(page.heatmap.rows.len(), 7);
        assert_eq!(page.heatmap.rows[0].day, "Po");
        assert_eq!(page.heatmap.rows[6].day, "Ne");

        let monday_ten = &page.heatmap.rows[0].cells[10];
        assert_eq!(monday_ten.value, 45);
        assert_eq!(monday_ten.tier, HeatTier::Strong);
        assert_eq!(monday_ten.class_name, "bg-blue-400");
        assert_eq!(page.heatmap.rows[2].cells[3].tier, HeatTier::Faint);
        assert!(page
            .heatmap
            .rows
            .iter()
            .flat_map(|row| row.cells.iter())
            .all(|cell| cell.tier == heat_tier(cell.value)));
    }

    #[test]
    fn test_same_seed_same_page() {
        let locale = LocaleContext::new(Language::En, 25.0);
        let first = build_analytics(&store(), &locale, &mut SeededSource::new(9));
        let second = build_analytics(&store(), &locale, &mut SeededSource::new(9));
        assert_eq!(first, second);
    }
}
