//! Store settings loaded from `store.toml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;
use crate::estimator::{default_price_table, load_price_table, PriceTable};
use crate::order::MailProvider;

const SETTINGS_FILE: &str = "store.toml";

/// Business details and display preferences for the storefront.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    /// Name used in the order greeting ("<name> Team")
    pub business_name: String,
    /// Recipient for order emails
    pub business_email: String,
    pub currency_symbol: String,
    /// Webmail service used to compose orders
    pub mail_provider: MailProvider,
    /// Optional price table override; the embedded table is used when unset
    pub price_table: Option<PathBuf>,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            business_name: "LED Panels".to_string(),
            business_email: "your-email@example.com".to_string(),
            currency_symbol: "$".to_string(),
            mail_provider: MailProvider::Gmail,
            price_table: None,
        }
    }
}

impl StoreSettings {
    /// Default settings location: `<config_dir>/ledpanels/store.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("ledpanels").join(SETTINGS_FILE))
    }

    /// Parse settings from TOML text. Missing keys take their defaults.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load settings from a file, falling back to defaults if it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No settings at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let settings = Self::from_toml(&content)?;
        info!("Loaded store settings from {:?}", path);
        Ok(settings)
    }

    /// Load from the default location, or defaults when there is no config dir.
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// Resolve the price table: the configured override, else the embedded default.
    pub fn resolve_price_table(&self) -> Result<PriceTable> {
        match &self.price_table {
            Some(path) => load_price_table(path),
            None => Ok(default_price_table()),
        }
    }
}
