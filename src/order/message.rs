//! Plain-text order message templating.
//!
//! Pure formatting only: nothing here knows how the message is delivered.

use serde::Serialize;

use crate::error::{LedPanelsError, Result};
use crate::estimator::{ComponentCounts, CostBreakdown, Dimensions, Estimate};
use crate::format::{format_dimensions, format_price};

/// Everything needed to describe one custom order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRequest {
    pub product_name: String,
    /// Formatted size, e.g. `48" × 36" (4.0' × 3.0')`
    pub dimensions: String,
    pub counts: ComponentCounts,
    pub breakdown: CostBreakdown,
}

impl OrderRequest {
    /// Build an order from an estimate.
    ///
    /// Fails with `MissingDimensions` when the estimate was made without a
    /// usable size; there is nothing to order in that case.
    pub fn new(product_name: impl Into<String>, estimate: &Estimate) -> Result<Self> {
        if !estimate.has_dimensions() {
            return Err(LedPanelsError::MissingDimensions);
        }

        Ok(Self {
            product_name: product_name.into(),
            dimensions: format_dimensions(&estimate.dimensions),
            counts: estimate.counts,
            breakdown: estimate.breakdown,
        })
    }

    /// Build an order from already-formatted parts, for callers that keep
    /// their own estimate state.
    pub fn from_parts(
        product_name: impl Into<String>,
        dims: &Dimensions,
        counts: ComponentCounts,
        breakdown: CostBreakdown,
    ) -> Result<Self> {
        if !dims.is_valid() {
            return Err(LedPanelsError::MissingDimensions);
        }

        Ok(Self {
            product_name: product_name.into(),
            dimensions: format_dimensions(dims),
            counts,
            breakdown,
        })
    }
}

/// A rendered order email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderMessage {
    pub subject: String,
    pub body: String,
}

/// Render the order email for `business_name`, pricing with `currency_symbol`.
///
/// The "Subtotal" line shows the cost with margin, since the raw component
/// subtotal is never shown to customers.
pub fn render_order(order: &OrderRequest, business_name: &str, currency_symbol: &str) -> OrderMessage {
    let counts = &order.counts;
    let cost = &order.breakdown;

    let shipping = if cost.is_free_shipping() {
        cost.shipping_label().to_string()
    } else {
        format_price(cost.shipping, currency_symbol)
    };

    let subject = format!("Custom LED Panel Order - {}", order.product_name);

    let body = format!(
        "Dear {business_name} Team,

I would like to place an order for a custom LED panel with the following specifications:

Product: {product}
Dimensions: {dimensions}

Component Breakdown:
- Number of Panels: {panels}
- Number of Transformers: {transformers}
- Number of Stabilizers: {stabilizers}
- Wire Length: {wire} feet
- Casing Units: {casing}

Expected Pricing:
- Subtotal: {subtotal}
- Shipping: {shipping}
- Total: {total}

Please confirm the order and provide next steps.

Best regards,
[Your Name]
[Your Phone Number]
[Your Address]",
        product = order.product_name,
        dimensions = order.dimensions,
        panels = counts.panels,
        transformers = counts.transformers,
        stabilizers = counts.stabilizers,
        wire = counts.wire_length_feet,
        casing = counts.casing_units,
        subtotal = format_price(cost.cost_with_margin, currency_symbol),
        total = format_price(cost.total, currency_symbol),
    );

    OrderMessage { subject, body }
}
