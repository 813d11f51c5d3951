//! Component and cost estimation for custom LED panel builds.
//!
//! This module turns a requested panel size (length x breadth, in inches) and
//! a set of component toggles into a bill of materials and a priced breakdown.
//!
//! # Architecture
//!
//! - **Price table**: Loaded from TOML at startup (or the embedded default)
//! - **Counts**: Dimensions -> panels, transformers, stabilizers, wire, casing
//! - **Pricing**: Counts -> subtotal, margin, shipping decision, total
//! - **Comparison**: Dimensions -> ratios against an average adult
//!
//! Nothing here can fail: missing or non-positive dimensions produce a zero
//! estimate that the caller can detect with `Estimate::has_dimensions()`.
//!
//! # Example
//!
//! ```ignore
//! use ledpanels::estimator::{ComponentToggles, Dimensions, Estimator};
//!
//! let estimator = Estimator::default();
//! let estimate = estimator.estimate(&Dimensions::new(48.0, 36.0), &ComponentToggles::all());
//!
//! println!("{} panels, total {:.2}", estimate.counts.panels, estimate.breakdown.total);
//! ```

mod comparison;
mod engine;
mod pricing;
mod types;

pub use comparison::{
    bar_width_percent, compare_to_human, HumanSizeComparison, HUMAN_HEIGHT_INCHES,
    HUMAN_SHOULDER_WIDTH_INCHES,
};
pub use engine::Estimator;
pub use pricing::{default_price_table, load_price_table, parse_price_table};
pub use types::*;
