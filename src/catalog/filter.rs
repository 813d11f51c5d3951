use serde::{Deserialize, Serialize};

use super::types::Product;

/// Category value that disables category filtering.
pub const ALL_CATEGORIES: &str = "All";

/// Free-text and category filter over the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFilter {
    pub query: String,
    pub category: String,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: ALL_CATEGORIES.to_string(),
        }
    }
}

impl ProductFilter {
    pub fn new(query: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            category: category.into(),
        }
    }

    /// Apply the filter, preserving catalog order.
    ///
    /// Category must match exactly unless it is empty or "All". The query is
    /// trimmed and matched case-insensitively against name, description, size
    /// and category; a blank query matches everything.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let query = self.query.trim().to_lowercase();
        let category = self.category.as_str();
        let by_category = !category.is_empty() && category != ALL_CATEGORIES;

        products
            .iter()
            .filter(|p| !by_category || p.category == category)
            .filter(|p| query.is_empty() || p.matches_query(&query))
            .collect()
    }

    /// True when either the query or the category differs from the default.
    pub fn is_active(&self) -> bool {
        *self != Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
