//! Product records for the storefront catalog.

use serde::{Deserialize, Serialize};

/// Technical specs shown on the product detail view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSpecs {
    #[serde(default)]
    pub wattage: Option<String>,
    #[serde(default)]
    pub lumens: Option<String>,
    #[serde(default)]
    pub color_temperature: Option<String>,
}

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub name: String,
    /// Category name, e.g. "Standard" or "Commercial"
    pub category: String,
    /// Display size, e.g. `24" × 24"`
    pub size: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    #[serde(default)]
    pub specs: ProductSpecs,
    #[serde(default)]
    pub features: Vec<String>,
}

fn default_in_stock() -> bool {
    true
}

impl Product {
    /// True when name, description, size or category contains `query_lower`.
    pub(crate) fn matches_query(&self, query_lower: &str) -> bool {
        [&self.name, &self.description, &self.size, &self.category]
            .iter()
            .any(|field| field.to_lowercase().contains(query_lower))
    }
}
