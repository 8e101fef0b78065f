use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Display language. The set is closed: English and Czech.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Language {
    #[serde(rename = "EN")]
    En,
    #[serde(rename = "CZ")]
    Cz,
}

/// Currency shown to the user. Never chosen directly; see [`Language::currency`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Currency {
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "CZK")]
    Czk,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Cz => "CZ",
        }
    }

    pub fn currency(self) -> Currency {
        match self {
            Language::En => Currency::Usd,
            Language::Cz => Currency::Czk,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Cz,
            Language::Cz => Language::En,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "EN" => Some(Language::En),
            "CZ" | "CS" => Some(Language::Cz),
            _ => None,
        }
    }
}

impl Currency {
    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Czk => "CZK",
        }
    }
}

// Status enums keep unrecognised values instead of rejecting them, so a
// catalog row with an unexpected status still loads and renders neutrally.
macro_rules! status_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            Unrecognized(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $text,)+
                    $name::Unrecognized(raw) => raw.as_str(),
                }
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                match raw.trim() {
                    $($text => $name::$variant,)+
                    other => $name::Unrecognized(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                $name::from(raw.as_str())
            }
        }

        impl From<$name> for String {
            fn from(status: $name) -> Self {
                status.as_str().to_string()
            }
        }
    };
}

status_enum!(
    /// Lifecycle state of a client account.
    ClientStatus { Active => "Active", Churned => "Churned" }
);

status_enum!(
    /// Payment state of an invoice.
    InvoiceStatus {
        Paid => "Paid",
        Pending => "Pending",
        Overdue => "Overdue",
        Cancelled => "Cancelled",
    }
);

status_enum!(
    /// Fulfilment state of a recent order.
    OrderStatus { Paid => "Paid", Pending => "Pending", Processing => "Processing" }
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: u32,
    pub company: String,
    pub contact: String,
    pub initials: String,
    /// Lifetime value in USD.
    pub ltv: f64,
    pub last_order: NaiveDate,
    pub status: ClientStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub client: String,
    pub company: String,
    pub initials: String,
    pub issued: NaiveDate,
    pub due: NaiveDate,
    /// Amount in USD.
    pub amount: f64,
    pub status: InvoiceStatus,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub sku: String,
    pub category: String,
    /// Unit price in USD.
    pub price: f64,
    pub stock: i64,
    /// Shelf capacity. Always resolved when the catalog is loaded; a missing
    /// value in the source data becomes the configured default.
    pub max: u32,
    pub badges: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub client: String,
    pub amount: f64,
    pub status: OrderStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub month: String,
    pub revenue: f64,
    pub expenses: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesPoint {
    pub month: String,
    pub new_clients: u32,
    pub returning_clients: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficPoint {
    pub week: String,
    pub sessions: u64,
    pub pageviews: u64,
    /// Bounce rate in percent.
    pub bounce: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub name: String,
    /// Revenue share in percent.
    pub value: f64,
    pub color: String,
}

/// Recent history plotted behind a KPI card, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sparkline {
    pub key: String,
    pub points: Vec<f64>,
}

/// A subscription charge in the billing history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub date: NaiveDate,
    pub description: String,
    /// USD.
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficSource {
    pub name: String,
    /// Share of sessions in percent.
    pub share: f64,
}

/// A KPI reference point. `current` is absent when the value is derived from
/// another catalog at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiBaseline {
    pub key: String,
    pub current: Option<f64>,
    pub baseline: f64,
}
