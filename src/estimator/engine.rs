//! Estimation engine for custom LED panel builds.
//!
//! The `Estimator` turns a requested size and a set of component toggles into
//! a bill of materials and a priced breakdown. Every operation is a pure
//! function of its arguments and the price table the estimator was built with.

use tracing::debug;

use super::pricing::default_price_table;
use super::types::*;
use crate::error::Result;

/// The estimation engine.
///
/// Holds an immutable price table; never fails. Missing, zero, negative or
/// non-finite dimensions produce zero counts instead of an error.
#[derive(Debug, Clone)]
pub struct Estimator {
    table: PriceTable,
}

impl Estimator {
    /// Create an estimator over the given price table.
    ///
    /// # Arguments
    /// * `table` - Price table (typically from `default_price_table()` or `load_price_table()`)
    pub fn new(table: PriceTable) -> Self {
        Self { table }
    }

    /// Create an estimator, rejecting a table that fails `PriceTable::validate`.
    pub fn try_new(table: PriceTable) -> Result<Self> {
        table.validate()?;
        Ok(Self::new(table))
    }

    /// The price table this estimator prices against.
    pub fn price_table(&self) -> &PriceTable {
        &self.table
    }

    /// Number of square panels needed to cover the requested area.
    ///
    /// Partial coverage rounds up, with a floor of one panel for any valid size.
    pub fn panels_required(&self, dims: &Dimensions) -> u32 {
        if !dims.is_valid() {
            return 0;
        }

        let side = self.table.sizing.panel_side_inches;
        let area = dims.length_inches * dims.breadth_inches;
        let panels = (area / (side * side)).ceil();

        panels.max(1.0) as u32
    }

    /// Number of transformers needed to drive `panels` panels.
    ///
    /// A table with no transformer capacity yields 0.
    pub fn transformers_required(&self, panels: u32) -> u32 {
        let capacity = self.table.sizing.panels_per_transformer;
        if panels == 0 || capacity == 0 {
            return 0;
        }
        panels.div_ceil(capacity)
    }

    /// Wire length in feet, rounded to one decimal place.
    ///
    /// The perimeter run (with slack) is rounded up to a whole foot before the
    /// per-panel allowance is added.
    pub fn wire_length_feet(&self, dims: &Dimensions, panels: u32) -> f64 {
        if !dims.is_valid() || panels == 0 {
            return 0.0;
        }

        let sizing = &self.table.sizing;
        let perimeter_run = (dims.perimeter_feet() * sizing.wire_slack_factor).ceil();
        let panel_allowance = panels as f64 * sizing.wire_feet_per_panel;

        round_to_tenth(perimeter_run + panel_allowance)
    }

    /// One stabilizer per transformer.
    pub fn stabilizers_required(&self, transformers: u32) -> u32 {
        transformers
    }

    /// Number of casing segments needed to frame the perimeter.
    pub fn casing_units_required(&self, dims: &Dimensions) -> u32 {
        if !dims.is_valid() {
            return 0;
        }
        (dims.perimeter_feet() / self.table.sizing.casing_unit_feet).ceil() as u32
    }

    /// Compute component counts for the requested size and toggles.
    pub fn component_counts(&self, dims: &Dimensions, toggles: &ComponentToggles) -> ComponentCounts {
        // Panels are always required.
        let panels = self.panels_required(dims);

        let transformers = if toggles.include_transformer {
            self.transformers_required(panels)
        } else {
            0
        };

        // Intentional coupling: stabilizers follow the transformer count after
        // its toggle is applied, so disabling transformers also zeroes
        // stabilizers even when they are toggled on.
        let stabilizers = if toggles.include_stabilizer {
            self.stabilizers_required(transformers)
        } else {
            0
        };

        let wire_length_feet = if toggles.include_wire {
            self.wire_length_feet(dims, panels)
        } else {
            0.0
        };

        let casing_units = if toggles.include_casing {
            self.casing_units_required(dims)
        } else {
            0
        };

        ComponentCounts {
            panels,
            transformers,
            stabilizers,
            wire_length_feet,
            casing_units,
        }
    }

    /// Price a set of component counts.
    ///
    /// Shipping is charged whenever the cost with margin is below the free
    /// threshold, including a zero-cost estimate.
    pub fn price(&self, counts: &ComponentCounts) -> CostBreakdown {
        let prices = &self.table.prices;

        let panels = counts.panels as f64 * prices.panel;
        let transformers = counts.transformers as f64 * prices.transformer;
        let stabilizers = counts.stabilizers as f64 * prices.stabilizer;
        let wire = counts.wire_length_feet * prices.wire_per_foot;
        let casing = counts.casing_units as f64 * prices.casing;

        let subtotal = panels + transformers + stabilizers + wire + casing;
        let margin = subtotal * self.table.margin_rate;
        let cost_with_margin = subtotal + margin;

        let policy = &self.table.shipping;
        let (shipping_decision, shipping) = if cost_with_margin >= policy.free_threshold {
            (ShippingDecision::Free, 0.0)
        } else {
            (ShippingDecision::Charged, policy.base + policy.low_cart_surcharge)
        };

        CostBreakdown {
            panels,
            transformers,
            stabilizers,
            wire,
            casing,
            subtotal,
            margin,
            cost_with_margin,
            shipping,
            total: cost_with_margin + shipping,
            shipping_decision,
        }
    }

    /// Full estimate: component counts plus the priced breakdown.
    pub fn estimate(&self, dims: &Dimensions, toggles: &ComponentToggles) -> Estimate {
        let counts = self.component_counts(dims, toggles);
        let breakdown = self.price(&counts);

        debug!(
            "Estimated {}x{}in: {} panels, total {:.2} ({})",
            dims.length_inches,
            dims.breadth_inches,
            counts.panels,
            breakdown.total,
            breakdown.shipping_label()
        );

        Estimate {
            dimensions: *dims,
            counts,
            breakdown,
        }
    }
}

impl Default for Estimator {
    fn default() -> Self {
        Self::new(default_price_table())
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
