//! Storefront product catalog with free-text and category filtering.
//!
//! Products are loaded from a JSON array once and never mutated; filtering
//! returns borrowed views in catalog order.

mod filter;
mod types;

use std::collections::BTreeSet;
use std::path::Path;

use tracing::{debug, info};

use crate::error::Result;

pub use filter::{ProductFilter, ALL_CATEGORIES};
pub use types::{Product, ProductSpecs};

/// Ordered, read-only list of products.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Parse a catalog from a JSON array of products.
    pub fn from_json(json: &str) -> Result<Self> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        debug!("Parsed {} catalog products", products.len());
        Ok(Self::new(products))
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)?;
        info!("Loaded catalog with {} products from {:?}", catalog.len(), path);
        Ok(catalog)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn filter(&self, filter: &ProductFilter) -> Vec<&Product> {
        filter.apply(&self.products)
    }

    /// "All" followed by every distinct category, sorted.
    pub fn categories(&self) -> Vec<String> {
        let unique: BTreeSet<&str> = self.products.iter().map(|p| p.category.as_str()).collect();

        std::iter::once(ALL_CATEGORIES.to_string())
            .chain(unique.into_iter().map(str::to_string))
            .collect()
    }
}
