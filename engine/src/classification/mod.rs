// Classification engine: maps status, stock and intensity values onto fixed
// display tiers. Classification is total; unexpected input lands in a neutral
// tier instead of failing.
pub mod badge;
pub mod heat;
pub mod status;
pub mod stock;

use serde::Serialize;
use shared::models::{Client, Invoice, Order, Product};

pub use badge::{badge_style, BadgeStyle};
pub use heat::{heat_tier, HeatTier};
pub use status::{client_status_tier, invoice_status_tier, order_status_tier, StatusTier};
pub use stock::{stock_level, StockLevel, StockTier};

/// Visual tone shared by every tier kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Success,
    Warning,
    Danger,
    Info,
    Muted,
    Neutral,
}

impl Tone {
    /// Display weight: how strongly the tier should draw attention.
    pub fn weight(self) -> u8 {
        match self {
            Tone::Danger => 4,
            Tone::Warning => 3,
            Tone::Info => 2,
            Tone::Success => 1,
            Tone::Muted | Tone::Neutral => 0,
        }
    }
}

pub trait Classify {
    type Tier;

    fn classify(&self) -> Self::Tier;
}

impl Classify for Invoice {
    type Tier = StatusTier;

    fn classify(&self) -> StatusTier {
        invoice_status_tier(&self.status)
    }
}

impl Classify for Client {
    type Tier = StatusTier;

    fn classify(&self) -> StatusTier {
        client_status_tier(&self.status)
    }
}

impl Classify for Order {
    type Tier = StatusTier;

    fn classify(&self) -> StatusTier {
        order_status_tier(&self.status)
    }
}

impl Classify for Product {
    type Tier = StockLevel;

    fn classify(&self) -> StockLevel {
        stock_level(self.stock, self.max)
    }
}
