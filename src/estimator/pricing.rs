//! TOML price table loading for the estimation engine.
//!
//! Provides two loading methods:
//! - `default_price_table()` - Loads the table compiled into the binary
//! - `load_price_table(path)` - Loads an override table from a file path

use std::path::Path;

use tracing::{debug, info};

use super::types::PriceTable;
use crate::error::{LedPanelsError, Result};

/// Default price table embedded in the binary at compile time.
/// Loaded from `config/price_table.toml`.
const DEFAULT_PRICE_TABLE: &str = include_str!("../../config/price_table.toml");

/// Load and validate a price table from a TOML file.
///
/// # Returns
/// * `Ok(PriceTable)` - Parsed, validated table
/// * `Err` - If the file cannot be read, the TOML is invalid, or a value is out of range
pub fn load_price_table(path: &Path) -> Result<PriceTable> {
    debug!("Loading price table from {:?}", path);
    let content = std::fs::read_to_string(path)?;
    let table = parse_price_table(&content)?;
    info!("Loaded price table from {:?}", path);
    Ok(table)
}

/// Parse and validate a price table from TOML text.
pub fn parse_price_table(content: &str) -> Result<PriceTable> {
    let table: PriceTable = toml::from_str(content)?;
    table.validate()?;
    Ok(table)
}

/// Get the default price table embedded in the binary.
///
/// # Panics
/// Panics if the embedded TOML is invalid (this would be a compile-time bug).
pub fn default_price_table() -> PriceTable {
    parse_price_table(DEFAULT_PRICE_TABLE).expect("embedded price_table.toml must be valid")
}

impl PriceTable {
    /// Reject values that would make the engine's formulas meaningless.
    pub fn validate(&self) -> Result<()> {
        let sizing = &self.sizing;
        if !(sizing.panel_side_inches > 0.0) {
            return Err(invalid("sizing.panel_side_inches must be positive"));
        }
        if sizing.panels_per_transformer == 0 {
            return Err(invalid("sizing.panels_per_transformer must be at least 1"));
        }
        if !(sizing.casing_unit_feet > 0.0) {
            return Err(invalid("sizing.casing_unit_feet must be positive"));
        }
        if !(sizing.wire_slack_factor >= 0.0) || !(sizing.wire_feet_per_panel >= 0.0) {
            return Err(invalid("wire sizing values must not be negative"));
        }

        let prices = [
            ("prices.panel", self.prices.panel),
            ("prices.transformer", self.prices.transformer),
            ("prices.stabilizer", self.prices.stabilizer),
            ("prices.wire_per_foot", self.prices.wire_per_foot),
            ("prices.casing", self.prices.casing),
            ("prices.installation", self.prices.installation),
            ("margin_rate", self.margin_rate),
            ("shipping.base", self.shipping.base),
            ("shipping.low_cart_surcharge", self.shipping.low_cart_surcharge),
        ];
        if let Some((name, _)) = prices.iter().find(|(_, v)| !(*v >= 0.0)) {
            return Err(invalid(&format!("{} must not be negative", name)));
        }

        if !(self.shipping.free_threshold > 0.0) {
            return Err(invalid("shipping.free_threshold must be positive"));
        }

        Ok(())
    }
}

fn invalid(msg: &str) -> LedPanelsError {
    LedPanelsError::PriceTable(msg.to_string())
}
