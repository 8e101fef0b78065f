use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use csv::{ReaderBuilder, StringRecord};
use shared::models::{
    CategoryShare, Client, ClientStatus, Invoice, InvoiceStatus, KpiBaseline, Order, OrderStatus,
    Payment, Product, RevenuePoint, SalesPoint, Sparkline, TrafficPoint, TrafficSource,
};
use shared::utils::{initials, parse_iso_date, split_list};

/// Values substituted for optional columns while a catalog is loaded, so that
/// nothing downstream has to deal with missing fields.
#[derive(Debug, Clone, Copy)]
pub struct RecordDefaults {
    pub stock_capacity: u32,
}

/// One CSV row with header-name lookup and line-numbered errors.
pub struct RecordView<'a> {
    record: &'a StringRecord,
    headers: &'a StringRecord,
    line: usize,
}

impl<'a> RecordView<'a> {
    /// Field by header name. Empty cells count as absent.
    pub fn optional(&self, name: &str) -> Option<&'a str> {
        self.headers
            .iter()
            .position(|header| header.trim() == name)
            .and_then(|pos| self.record.get(pos))
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    pub fn required(&self, name: &str) -> Result<&'a str> {
        self.optional(name)
            .ok_or_else(|| anyhow!("Missing '{}' field in CSV record at line {}", name, self.line))
    }

    pub fn number<F>(&self, name: &str) -> Result<F>
    where
        F: FromStr,
        F::Err: std::fmt::Display,
    {
        let raw = self.required(name)?;
        raw.parse::<F>()
            .map_err(|e| anyhow!("Error parsing '{}' at line {}: '{}' ({})", name, self.line, raw, e))
    }

    pub fn optional_number<F>(&self, name: &str) -> Result<Option<F>>
    where
        F: FromStr,
        F::Err: std::fmt::Display,
    {
        match self.optional(name) {
            Some(_) => self.number(name).map(Some),
            None => Ok(None),
        }
    }

    /// Money and ratio columns. `NaN` and `inf` parse as `f64` but have no
    /// rendering, so they are rejected here.
    pub fn amount(&self, name: &str) -> Result<f64> {
        let value: f64 = self.number(name)?;
        if !value.is_finite() {
            return Err(anyhow!("Error parsing '{}' at line {}: '{}' is not a finite number", name, self.line, value));
        }
        Ok(value)
    }

    pub fn optional_amount(&self, name: &str) -> Result<Option<f64>> {
        match self.optional(name) {
            Some(_) => self.amount(name).map(Some),
            None => Ok(None),
        }
    }

    pub fn date(&self, name: &str) -> Result<chrono::NaiveDate> {
        parse_iso_date(self.required(name)?)
            .map_err(|e| anyhow!("Error parsing '{}' at line {}: {}", name, self.line, e))
    }
}

/// A catalog entity that can be built from one CSV row.
pub trait FromCatalogRecord: Sized {
    /// Catalog name used in log lines and errors.
    const CATALOG: &'static str;

    fn from_record(row: &RecordView<'_>, defaults: &RecordDefaults) -> Result<Self>;
}

pub struct CatalogCsvParser;

impl CatalogCsvParser {
    // Catalog files are ';'-delimited with a header row. Quoting is disabled
    // because product names carry inch marks (MacBook Pro 14").
    pub fn parse<T: FromCatalogRecord, R: Read>(reader: R, defaults: &RecordDefaults) -> Result<Vec<T>> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b';')
            .has_headers(true)
            .quoting(false)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let mut entities = Vec::new();

        for (idx, result) in rdr.records().enumerate() {
            let line = idx + 2;
            let record = result.map_err(|e| anyhow!("Error reading {} record at line {}: {}", T::CATALOG, line, e))?;
            let row = RecordView { record: &record, headers: &headers, line };
            entities.push(T::from_record(&row, defaults)?);
        }

        tracing::debug!(catalog = T::CATALOG, rows = entities.len(), "Parsed catalog");
        Ok(entities)
    }

    pub fn load_from_path<T: FromCatalogRecord>(path: &Path, defaults: &RecordDefaults) -> Result<Vec<T>> {
        let file = File::open(path).map_err(|e| anyhow!("Failed to open CSV file '{}': {}", path.display(), e))?;
        Self::parse(BufReader::new(file), defaults)
    }
}

impl FromCatalogRecord for Client {
    const CATALOG: &'static str = "clients";

    fn from_record(row: &RecordView<'_>, _defaults: &RecordDefaults) -> Result<Self> {
        let contact = row.required("contact")?;
        Ok(Client {
            id: row.number("id")?,
            company: row.required("company")?.to_string(),
            contact: contact.to_string(),
            initials: initials(contact),
            ltv: row.amount("ltv")?,
            last_order: row.date("last_order")?,
            status: ClientStatus::from(row.required("status")?),
        })
    }
}

impl FromCatalogRecord for Invoice {
    const CATALOG: &'static str = "invoices";

    fn from_record(row: &RecordView<'_>, _defaults: &RecordDefaults) -> Result<Self> {
        let client = row.required("client")?;
        Ok(Invoice {
            id: row.required("id")?.to_string(),
            client: client.to_string(),
            company: row.required("company")?.to_string(),
            initials: initials(client),
            issued: row.date("issued")?,
            due: row.date("due")?,
            amount: row.amount("amount")?,
            status: InvoiceStatus::from(row.required("status")?),
            items: row.optional("items").map(split_list).unwrap_or_default(),
        })
    }
}

impl FromCatalogRecord for Product {
    const CATALOG: &'static str = "products";

    fn from_record(row: &RecordView<'_>, defaults: &RecordDefaults) -> Result<Self> {
        // A zero capacity would make the stock percentage undefined, so it is
        // treated like a missing one.
        let max = row
            .optional_number::<u32>("max")?
            .filter(|max| *max > 0)
            .unwrap_or(defaults.stock_capacity);
        Ok(Product {
            id: row.number("id")?,
            name: row.required("name")?.to_string(),
            sku: row.required("sku")?.to_string(),
            category: row.required("category")?.to_string(),
            price: row.amount("price")?,
            stock: row.number("stock")?,
            max,
            badges: row.optional("badges").map(split_list).unwrap_or_default(),
        })
    }
}

impl FromCatalogRecord for Order {
    const CATALOG: &'static str = "orders";

    fn from_record(row: &RecordView<'_>, _defaults: &RecordDefaults) -> Result<Self> {
        Ok(Order {
            id: row.required("id")?.to_string(),
            client: row.required("client")?.to_string(),
            amount: row.amount("amount")?,
            status: OrderStatus::from(row.required("status")?),
        })
    }
}

impl FromCatalogRecord for RevenuePoint {
    const CATALOG: &'static str = "revenue";

    fn from_record(row: &RecordView<'_>, _defaults: &RecordDefaults) -> Result<Self> {
        Ok(RevenuePoint {
            month: row.required("month")?.to_string(),
            revenue: row.amount("revenue")?,
            expenses: row.amount("expenses")?,
        })
    }
}

impl FromCatalogRecord for SalesPoint {
    const CATALOG: &'static str = "monthly_sales";

    fn from_record(row: &RecordView<'_>, _defaults: &RecordDefaults) -> Result<Self> {
        Ok(SalesPoint {
            month: row.required("month")?.to_string(),
            new_clients: row.number("new")?,
            returning_clients: row.number("returning")?,
        })
    }
}

impl FromCatalogRecord for TrafficPoint {
    const CATALOG: &'static str = "traffic";

    fn from_record(row: &RecordView<'_>, _defaults: &RecordDefaults) -> Result<Self> {
        Ok(TrafficPoint {
            week: row.required("week")?.to_string(),
            sessions: row.number("sessions")?,
            pageviews: row.number("pageviews")?,
            bounce: row.amount("bounce")?,
        })
    }
}

impl FromCatalogRecord for CategoryShare {
    const CATALOG: &'static str = "categories";

    fn from_record(row: &RecordView<'_>, _defaults: &RecordDefaults) -> Result<Self> {
        Ok(CategoryShare {
            name: row.required("name")?.to_string(),
            value: row.amount("value")?,
            color: row.required("color")?.to_string(),
        })
    }
}

impl FromCatalogRecord for KpiBaseline {
    const CATALOG: &'static str = "kpis";

    fn from_record(row: &RecordView<'_>, _defaults: &RecordDefaults) -> Result<Self> {
        Ok(KpiBaseline {
            key: row.required("key")?.to_string(),
            current: row.optional_amount("current")?,
            baseline: row.amount("baseline")?,
        })
    }
}

impl FromCatalogRecord for Sparkline {
    const CATALOG: &'static str = "sparklines";

    fn from_record(row: &RecordView<'_>, _defaults: &RecordDefaults) -> Result<Self> {
        let points = split_list(row.required("points")?)
            .iter()
            .map(|raw| match raw.parse::<f64>() {
                Ok(point) if point.is_finite() => Ok(point),
                _ => Err(anyhow!("Error parsing 'points' at line {}: '{}'", row.line, raw)),
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Sparkline { key: row.required("key")?.to_string(), points })
    }
}

impl FromCatalogRecord for Payment {
    const CATALOG: &'static str = "payments";

    fn from_record(row: &RecordView<'_>, _defaults: &RecordDefaults) -> Result<Self> {
        Ok(Payment {
            date: row.date("date")?,
            description: row.required("description")?.to_string(),
            amount: row.amount("amount")?,
        })
    }
}

impl FromCatalogRecord for TrafficSource {
    const CATALOG: &'static str = "traffic_sources";

    fn from_record(row: &RecordView<'_>, _defaults: &RecordDefaults) -> Result<Self> {
        Ok(TrafficSource { name: row.required("name")?.to_string(), share: row.amount("share")? })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const DEFAULTS: RecordDefaults = RecordDefaults { stock_capacity: 50 };

    fn create_test_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_parse_clients() {
        let csv_content = "\
id;company;contact;ltv;last_order;status
1;Tatra s.r.o.;Petr Novák;84000;2024-01-15;Active
9;Lidl ČR;Václav Beneš;11000;2023-05-01;Churned";
        let clients: Vec<Client> = CatalogCsvParser::parse(csv_content.as_bytes(), &DEFAULTS).unwrap();
        assert_eq!(clients.len(), 2);
        assert_eq!(clients[0].company, "Tatra s.r.o.");
        assert_eq!(clients[0].initials, "PN");
        assert_eq!(clients[0].ltv, 84000.0);
        assert_eq!(clients[1].status, ClientStatus::Churned);
    }

    #[test]
    fn test_product_capacity_defaults_at_load() {
        let csv_content = "\
id;name;sku;category;price;stock;max;badges
3;Logitech MX Keys;LOG-MX-KBD;Peripherals;119;24;;New
4;Dell 27\" Monitor;DEL-P2723;Displays;459;12;20;
9;Shelf Filler;SF-0;Storage;1;1;0;";
        let products: Vec<Product> = CatalogCsvParser::parse(csv_content.as_bytes(), &DEFAULTS).unwrap();
        assert_eq!(products[0].max, 50);
        assert_eq!(products[0].badges, vec!["New"]);
        assert_eq!(products[1].name, "Dell 27\" Monitor");
        assert_eq!(products[1].max, 20);
        assert!(products[1].badges.is_empty());
        assert_eq!(products[2].max, 50);
    }

    #[test]
    fn test_unknown_status_is_kept() {
        let csv_content = "\
id;client;company;issued;due;amount;status;items
#INV-1;A B;Acme;2024-01-01;2024-02-01;10;Disputed;Work";
        let invoices: Vec<Invoice> = CatalogCsvParser::parse(csv_content.as_bytes(), &DEFAULTS).unwrap();
        assert_eq!(invoices[0].status, InvoiceStatus::Unrecognized("Disputed".to_string()));
    }

    #[test]
    fn test_missing_field_reports_line() {
        let csv_content = "\
id;client;amount
#INV-1;Acme;10";
        let result: Result<Vec<Order>> = CatalogCsvParser::parse(csv_content.as_bytes(), &DEFAULTS);
        let message = result.unwrap_err().to_string();
        assert!(message.contains("Missing 'status' field"));
        assert!(message.contains("line 2"));
    }

    #[test]
    fn test_invalid_number_reports_field() {
        let csv_content = "\
month;revenue;expenses
Jan;lots;28000";
        let result: Result<Vec<RevenuePoint>> = CatalogCsvParser::parse(csv_content.as_bytes(), &DEFAULTS);
        assert!(result.unwrap_err().to_string().contains("Error parsing 'revenue' at line 2"));
    }

    #[test]
    fn test_non_finite_amount_is_rejected() {
        let csv_content = "\
id;client;amount;status
#1001;Acme;NaN;Paid";
        let result: Result<Vec<Order>> = CatalogCsvParser::parse(csv_content.as_bytes(), &DEFAULTS);
        assert!(result.unwrap_err().to_string().contains("'amount' at line 2: 'NaN' is not a finite number"));

        let csv_content = "\
key;current;baseline
total_revenue;inf;637000";
        let result: Result<Vec<KpiBaseline>> = CatalogCsvParser::parse(csv_content.as_bytes(), &DEFAULTS);
        assert!(result.unwrap_err().to_string().contains("'current' at line 2"));
    }

    #[test]
    fn test_parse_sparklines() {
        let csv_content = "\
key;points
new_clients;3|5|4|7
active_orders;8|twelve";
        let result: Result<Vec<Sparkline>> = CatalogCsvParser::parse(csv_content.as_bytes(), &DEFAULTS);
        assert!(result.unwrap_err().to_string().contains("'points' at line 3: 'twelve'"));

        let sparklines: Vec<Sparkline> =
            CatalogCsvParser::parse("key;points\nnew_clients;3|5|4|7".as_bytes(), &DEFAULTS).unwrap();
        assert_eq!(sparklines[0].points, vec![3.0, 5.0, 4.0, 7.0]);
    }

    #[test]
    fn test_parse_payments() {
        let csv_content = "\
date;description;amount
2024-01-01;Pro Plan – Jan 2024;49";
        let payments: Vec<Payment> = CatalogCsvParser::parse(csv_content.as_bytes(), &DEFAULTS).unwrap();
        assert_eq!(payments[0].description, "Pro Plan – Jan 2024");
        assert_eq!(payments[0].amount, 49.0);
        assert_eq!(payments[0].date, chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn test_invalid_date_reports_field() {
        let csv_content = "\
id;company;contact;ltv;last_order;status
1;Tatra s.r.o.;Petr Novák;84000;15/01/2024;Active";
        let result: Result<Vec<Client>> = CatalogCsvParser::parse(csv_content.as_bytes(), &DEFAULTS);
        assert!(result.unwrap_err().to_string().contains("Error parsing 'last_order'"));
    }

    #[test]
    fn test_load_from_path() {
        let tmp_file = create_test_csv("key;current;baseline\ntotal_revenue;;637000\nnew_clients;13;12");
        let kpis: Vec<KpiBaseline> = CatalogCsvParser::load_from_path(tmp_file.path(), &DEFAULTS).unwrap();
        assert_eq!(kpis[0].current, None);
        assert_eq!(kpis[1].current, Some(13.0));
        assert_eq!(kpis[1].baseline, 12.0);
    }

    #[test]
    fn test_header_only_file_is_empty() {
        let tmp_file = create_test_csv("id;client;amount;status");
        let orders: Vec<Order> = CatalogCsvParser::load_from_path(tmp_file.path(), &DEFAULTS).unwrap();
        assert!(orders.is_empty());
    }
}
