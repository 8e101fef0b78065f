// Inventory page: stock levels and tag badges per product
use serde::Serialize;
use shared::models::Product;

use super::helpers::{StatCard, StatusBadge};
use crate::aggregation::{count_where, sum_by};
use crate::classification::{badge_style, Classify, StockLevel, StockTier};
use crate::data::CatalogStore;
use crate::filter::{filter, FilterCriteria};
use crate::locale::LocaleContext;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryPage {
    pub title: String,
    pub summary: Vec<StatCard>,
    pub products: Vec<ProductRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRow {
    pub id: u32,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub price: String,
    pub stock: i64,
    pub max: u32,
    pub stock_level: StockLevel,
    pub badges: Vec<StatusBadge>,
}

pub fn build_inventory(store: &CatalogStore, criteria: &FilterCriteria, locale: &LocaleContext) -> InventoryPage {
    let view = filter(store.products(), criteria);

    let low_stock = count_where(&view, |product: &Product| product.classify().tier == StockTier::Low);
    let units = sum_by(&view, |product| product.stock as f64);
    let stock_value = sum_by(&view, |product| product.price * product.stock as f64);
    let summary = vec![
        StatCard::new(locale, "Products", "Produkty", locale.format_count(view.len() as f64)),
        StatCard::new(locale, "Low Stock", "Nízký stav", locale.format_count(low_stock as f64)),
        StatCard::new(locale, "Units in Stock", "Kusů skladem", locale.format_count(units)),
        StatCard::new(locale, "Stock Value", "Hodnota skladu", locale.format_currency(stock_value)),
    ];

    let products: Vec<ProductRow> = view
        .iter()
        .map(|product| ProductRow {
            id: product.id,
            name: product.name.clone(),
            sku: product.sku.clone(),
            category: product.category.clone(),
            price: locale.format_currency(product.price),
            stock: product.stock,
            max: product.max,
            stock_level: product.classify(),
            badges: product
                .badges
                .iter()
                .map(|badge| StatusBadge::from_badge(&badge_style(badge), locale))
                .collect(),
        })
        .collect();
    tracing::debug!(query = %criteria.query, matches = products.len(), low_stock, "Built inventory page");

    InventoryPage { title: locale.translate("Inventory", "Sklad").to_string(), summary, products }
}
