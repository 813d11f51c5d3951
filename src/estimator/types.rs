//! Type definitions for the LED panel estimation engine.
//!
//! Configuration types deserialize from TOML (the price table), while the
//! output types serialize to JSON for whatever UI sits on top of the engine.

use serde::{Deserialize, Serialize};

/// Inches in one foot. Used for every inch-to-foot conversion in the engine.
pub const INCHES_PER_FOOT: f64 = 12.0;

// =============================================================================
// CONFIGURATION TYPES (loaded from TOML)
// =============================================================================

/// Root price table loaded from `price_table.toml`.
///
/// Read-only for the life of the process; the engine holds one by value.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PriceTable {
    /// Markup applied to the component subtotal (0.25 = 25%)
    pub margin_rate: f64,
    /// Physical sizing constants
    pub sizing: SizingRules,
    /// Per-unit component prices
    pub prices: UnitPrices,
    /// Shipping charges and the free-shipping cutoff
    pub shipping: ShippingPolicy,
}

/// Constants that turn dimensions into component counts.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SizingRules {
    /// Side length of one square panel, in inches
    pub panel_side_inches: f64,
    /// How many panels one transformer can drive
    pub panels_per_transformer: u32,
    /// Multiplier on the perimeter for connector overhead
    pub wire_slack_factor: f64,
    /// Inter-panel wiring allowance, in feet per panel
    pub wire_feet_per_panel: f64,
    /// Length of one casing segment, in feet
    pub casing_unit_feet: f64,
}

/// Per-unit component prices.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UnitPrices {
    pub panel: f64,
    pub transformer: f64,
    pub stabilizer: f64,
    /// Price per foot of wire
    pub wire_per_foot: f64,
    pub casing: f64,
    /// Base installation charge. Quoted separately, never part of an estimate.
    #[serde(default)]
    pub installation: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ShippingPolicy {
    /// Base shipping charge for orders under the threshold
    pub base: f64,
    /// Extra charge added on top of `base` for orders under the threshold
    pub low_cart_surcharge: f64,
    /// Orders whose cost with margin reaches this amount ship free
    pub free_threshold: f64,
}

// =============================================================================
// INPUT TYPES
// =============================================================================

/// Requested panel size in inches.
///
/// Both sides must be strictly positive and finite for an estimate to exist.
/// Anything else is treated as "missing" and yields a zero estimate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    pub length_inches: f64,
    pub breadth_inches: f64,
}

impl Dimensions {
    pub fn new(length_inches: f64, breadth_inches: f64) -> Self {
        Self {
            length_inches,
            breadth_inches,
        }
    }

    /// Build dimensions from user-entered text.
    ///
    /// Empty or unparseable text becomes 0, which the engine reads as missing.
    pub fn parse(length: &str, breadth: &str) -> Self {
        fn read(text: &str) -> f64 {
            text.trim().parse::<f64>().unwrap_or(0.0)
        }
        Self::new(read(length), read(breadth))
    }

    /// True when both sides are positive, finite numbers.
    pub fn is_valid(&self) -> bool {
        is_positive(self.length_inches) && is_positive(self.breadth_inches)
    }

    pub fn length_feet(&self) -> f64 {
        self.length_inches / INCHES_PER_FOOT
    }

    pub fn breadth_feet(&self) -> f64 {
        self.breadth_inches / INCHES_PER_FOOT
    }

    /// Perimeter in feet. Only meaningful when `is_valid()`.
    pub fn perimeter_feet(&self) -> f64 {
        2.0 * (self.length_feet() + self.breadth_feet())
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Which optional components to include in an estimate.
///
/// Panels are always included and have no toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentToggles {
    pub include_transformer: bool,
    pub include_stabilizer: bool,
    pub include_wire: bool,
    pub include_casing: bool,
}

impl ComponentToggles {
    /// Every component switched on.
    pub fn all() -> Self {
        Self {
            include_transformer: true,
            include_stabilizer: true,
            include_wire: true,
            include_casing: true,
        }
    }

    pub fn with_stabilizer(mut self, include: bool) -> Self {
        self.include_stabilizer = include;
        self
    }
}

/// Storefront defaults: transformer, wire and casing on; stabilizer is opt-in.
impl Default for ComponentToggles {
    fn default() -> Self {
        Self {
            include_transformer: true,
            include_stabilizer: false,
            include_wire: true,
            include_casing: true,
        }
    }
}

// =============================================================================
// OUTPUT TYPES (serialized to the UI)
// =============================================================================

/// Bill of materials derived from the dimensions and toggles.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ComponentCounts {
    pub panels: u32,
    pub transformers: u32,
    pub stabilizers: u32,
    /// Wire length in feet, rounded to one decimal place
    pub wire_length_feet: f64,
    pub casing_units: u32,
}

/// Whether an order qualifies for free shipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShippingDecision {
    Free,
    Charged,
}

impl ShippingDecision {
    /// Label shown next to the shipping line.
    pub fn label(&self) -> &'static str {
        match self {
            ShippingDecision::Free => "Free Shipping",
            ShippingDecision::Charged => "Shipping Charges",
        }
    }
}

/// Monetary breakdown of an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub panels: f64,
    pub transformers: f64,
    pub stabilizers: f64,
    pub wire: f64,
    pub casing: f64,
    /// Sum of the five component lines
    pub subtotal: f64,
    pub margin: f64,
    pub cost_with_margin: f64,
    /// Zero when shipping is free
    pub shipping: f64,
    pub total: f64,
    pub shipping_decision: ShippingDecision,
}

impl CostBreakdown {
    pub fn is_free_shipping(&self) -> bool {
        self.shipping_decision == ShippingDecision::Free
    }

    pub fn shipping_label(&self) -> &'static str {
        self.shipping_decision.label()
    }
}

/// Complete result of one estimation request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Estimate {
    pub dimensions: Dimensions,
    pub counts: ComponentCounts,
    pub breakdown: CostBreakdown,
}

impl Estimate {
    /// False when the estimate was computed from missing dimensions.
    ///
    /// A consumer should show an "enter dimensions" prompt rather than the
    /// (all-zero counts, shipping-only) breakdown in that case.
    pub fn has_dimensions(&self) -> bool {
        self.dimensions.is_valid()
    }
}
