// Overview page: headline KPIs, revenue chart, category split, recent orders
use serde::Serialize;

use super::helpers::{kpi_cards, record_kpi, KpiCard, KpiDef, StatusBadge, ValueFormat};
use crate::aggregation::{share_percent, sum_by, AggregateResult};
use crate::classification::Classify;
use crate::data::CatalogStore;
use crate::locale::LocaleContext;
use crate::timebuckets::{moving_average, profit_series};

/// Months averaged for the profit trend line.
pub const PROFIT_TREND_WINDOW: usize = 3;

const OVERVIEW_KPIS: [KpiDef; 4] = [
    KpiDef { key: "total_revenue", title_en: "Total Revenue", title_cz: "Celkové příjmy", format: ValueFormat::Currency },
    KpiDef { key: "active_orders", title_en: "Active Orders", title_cz: "Aktivní objednávky", format: ValueFormat::Count },
    KpiDef { key: "new_clients", title_en: "New Clients", title_cz: "Noví klienti", format: ValueFormat::Count },
    KpiDef {
        key: "avg_order_value",
        title_en: "Avg Order Value",
        title_cz: "Průměrná hodnota",
        format: ValueFormat::Currency,
    },
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewPage {
    pub title: String,
    pub kpis: Vec<KpiCard>,
    pub revenue: Vec<RevenueRow>,
    pub categories: Vec<CategorySlice>,
    pub recent_orders: Vec<OrderRow>,
}

/// Chart amounts are already in the display currency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueRow {
    pub month: String,
    pub revenue: f64,
    pub expenses: f64,
    pub profit: f64,
    pub profit_trend: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySlice {
    pub name: String,
    pub share: f64,
    pub label: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRow {
    pub id: String,
    pub client: String,
    pub amount: String,
    pub status: StatusBadge,
}

pub fn build_overview(store: &CatalogStore, locale: &LocaleContext) -> OverviewPage {
    let mut metrics = AggregateResult::default();
    record_kpi(&mut metrics, store, "total_revenue", Some(sum_by(store.revenue(), |p| p.revenue)));
    record_kpi(&mut metrics, store, "active_orders", None);
    record_kpi(&mut metrics, store, "new_clients", None);
    record_kpi(&mut metrics, store, "avg_order_value", None);

    let profit = profit_series(store.revenue());
    let profit_values: Vec<f64> = profit.iter().map(|point| point.value).collect();
    let profit_trend = moving_average(&profit_values, PROFIT_TREND_WINDOW);
    let revenue = store
        .revenue()
        .iter()
        .zip(profit.iter().zip(profit_trend))
        .map(|(point, (profit, trend))| RevenueRow {
            month: point.month.clone(),
            revenue: locale.convert(point.revenue),
            expenses: locale.convert(point.expenses),
            profit: locale.convert(profit.value),
            profit_trend: trend.map(|value| locale.convert(value)),
        })
        .collect();

    let category_total = sum_by(store.categories(), |category| category.value);
    let categories = store
        .categories()
        .iter()
        .map(|category| {
            let share = share_percent(category.value, category_total);
            CategorySlice {
                name: category.name.clone(),
                share,
                label: locale.format_percent(share, 0),
                color: category.color.clone(),
            }
        })
        .collect();

    let recent_orders = store
        .orders()
        .iter()
        .map(|order| OrderRow {
            id: order.id.clone(),
            client: order.client.clone(),
            amount: locale.format_currency(order.amount),
            status: StatusBadge::from_tier(&order.classify(), locale),
        })
        .collect();

    OverviewPage {
        title: locale.translate("Dashboard", "Přehled").to_string(),
        kpis: kpi_cards(&metrics, &OVERVIEW_KPIS, store, locale),
        revenue,
        categories,
        recent_orders,
    }
}
