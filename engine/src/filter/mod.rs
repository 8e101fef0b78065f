// Filter engine: free-text search plus optional category and date-range
// constraints, ANDed together. Output keeps catalog order.
mod entities;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// What the filter engine needs to know about an entity.
pub trait Filterable {
    /// Fields eligible for free-text matching, in display order.
    fn searchable_fields(&self) -> Vec<&str>;

    /// Value compared against [`CategorySelector::Only`]. Entities without one
    /// never match a specific category.
    fn category_key(&self) -> Option<&str> {
        None
    }

    /// Date checked against [`DateRange`]. Entities without one are excluded
    /// as soon as either bound is set.
    fn filter_date(&self) -> Option<NaiveDate> {
        None
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategorySelector {
    #[default]
    All,
    Only(String),
}

impl CategorySelector {
    /// "all" (any case) or an empty string disables the constraint.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            CategorySelector::All
        } else {
            CategorySelector::Only(value.to_string())
        }
    }

    fn matches(&self, key: Option<&str>) -> bool {
        match self {
            CategorySelector::All => true,
            CategorySelector::Only(wanted) => key == Some(wanted.as_str()),
        }
    }
}

/// Inclusive on both ends; `None` leaves that side open. An inverted range is
/// applied as written and simply matches nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    pub fn contains(&self, date: Option<NaiveDate>) -> bool {
        if self.is_unbounded() {
            return true;
        }
        date.map_or(false, |d| {
            self.from.map_or(true, |start| d >= start) && self.to.map_or(true, |end| d <= end)
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub query: String,
    pub category: CategorySelector,
    pub date_range: DateRange,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_category(mut self, category: CategorySelector) -> Self {
        self.category = category;
        self
    }

    pub fn with_date_range(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.date_range = DateRange::new(from, to);
        self
    }

    pub fn matches<T: Filterable + ?Sized>(&self, entity: &T) -> bool {
        self.matches_query(entity)
            && self.category.matches(entity.category_key())
            && self.date_range.contains(entity.filter_date())
    }

    fn matches_query<T: Filterable + ?Sized>(&self, entity: &T) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        entity
            .searchable_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Stable filter: returns the matching entities in their catalog order.
pub fn filter<T: Filterable + Clone>(catalog: &[T], criteria: &FilterCriteria) -> Vec<T> {
    catalog.iter().filter(|entity| criteria.matches(*entity)).cloned().collect()
}
