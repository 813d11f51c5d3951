pub mod catalog;
pub mod config;
mod error;
pub mod estimator;
pub mod format;
pub mod order;
pub mod quote;

pub use error::{LedPanelsError, Result};

use anyhow::Context;
use tracing::info;

use crate::config::StoreSettings;
use crate::estimator::Estimator;
use crate::order::{dispatch_order, fallback_links, render_order, BrowserTransport, DispatchOutcome, OrderRequest};

pub fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = quote::parse_args(std::env::args().skip(1))?;

    let settings = match &args.settings {
        Some(path) => StoreSettings::load(path),
        None => StoreSettings::load_default(),
    }
    .context("Failed to load store settings")?;

    let table = settings
        .resolve_price_table()
        .context("Failed to load price table")?;
    let estimator = Estimator::try_new(table)?;

    let estimate = estimator.estimate(&args.dimensions, &args.toggles);
    let free_threshold = estimator.price_table().shipping.free_threshold;
    println!("{}", quote::render_quote(&estimate, free_threshold, &settings.currency_symbol));

    let Some(product) = args.order else {
        return Ok(());
    };

    let order = OrderRequest::new(product, &estimate)?;
    let transport = BrowserTransport::from_settings(&settings);
    match dispatch_order(&transport, &order, &settings) {
        DispatchOutcome::Sent => info!("Compose window opened for {}", settings.business_email),
        DispatchOutcome::Fallback { notice } => {
            eprintln!("{}", notice);
            let message = render_order(&order, &settings.business_name, &settings.currency_symbol);
            for link in fallback_links(settings.mail_provider, &settings.business_email, &message) {
                eprintln!("  {}: {}", link.name, link.url);
            }
        }
    }

    Ok(())
}
