// Filter capabilities of the catalog entities.
use chrono::NaiveDate;
use shared::models::{Client, Invoice, Order, Product};

use super::Filterable;

impl Filterable for Client {
    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.company.as_str(), self.contact.as_str()]
    }

    fn category_key(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn filter_date(&self) -> Option<NaiveDate> {
        Some(self.last_order)
    }
}

impl Filterable for Invoice {
    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.client.as_str(), self.company.as_str()]
    }

    fn category_key(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn filter_date(&self) -> Option<NaiveDate> {
        Some(self.issued)
    }
}

impl Filterable for Product {
    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.sku.as_str(), self.category.as_str()]
    }

    fn category_key(&self) -> Option<&str> {
        Some(self.category.as_str())
    }
}

impl Filterable for Order {
    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.client.as_str()]
    }

    fn category_key(&self) -> Option<&str> {
        Some(self.status.as_str())
    }
}
