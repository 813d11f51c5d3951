//! Terminal quote front-end over the estimator and order handoff.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::estimator::{compare_to_human, ComponentToggles, Dimensions, Estimate};
use crate::format::{format_dimensions, format_price};

pub const USAGE: &str =
    "usage: ledpanels <length-in> <breadth-in> [--stabilizer] [--order <product>] [--settings <path>]";

/// Parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteArgs {
    pub dimensions: Dimensions,
    pub toggles: ComponentToggles,
    /// Product name to order; `None` only prints the quote
    pub order: Option<String>,
    pub settings: Option<PathBuf>,
}

/// Parse arguments (without the program name).
///
/// Dimension text is read the same way a form field is: anything that is not
/// a number counts as missing rather than as an error.
pub fn parse_args<I>(args: I) -> Result<QuoteArgs>
where
    I: IntoIterator<Item = String>,
{
    let mut positional = Vec::new();
    let mut toggles = ComponentToggles::default();
    let mut order = None;
    let mut settings = None;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--stabilizer" => toggles.include_stabilizer = true,
            "--order" => order = Some(args.next().context("--order needs a product name")?),
            "--settings" => {
                settings = Some(PathBuf::from(args.next().context("--settings needs a path")?))
            }
            flag if flag.starts_with("--") => bail!("unknown option {}\n{}", flag, USAGE),
            _ => positional.push(arg),
        }
    }

    let [length, breadth] = positional.as_slice() else {
        bail!("expected length and breadth\n{}", USAGE);
    };

    Ok(QuoteArgs {
        dimensions: Dimensions::parse(length, breadth),
        toggles,
        order,
        settings,
    })
}

/// Render an estimate as a plain-text quote.
///
/// When shipping is charged, a closing line names the `free_threshold` the
/// cost with margin has to reach for free shipping.
pub fn render_quote(estimate: &Estimate, free_threshold: f64, currency_symbol: &str) -> String {
    if !estimate.has_dimensions() {
        return "Enter dimensions to see pricing".to_string();
    }

    let counts = &estimate.counts;
    let cost = &estimate.breakdown;
    let price = |amount: f64| format_price(amount, currency_symbol);
    let comparison = compare_to_human(&estimate.dimensions);

    let stabilizers = if counts.stabilizers > 0 {
        format!("  Stabilizers:  {}\n", counts.stabilizers)
    } else {
        String::new()
    };
    let (shipping, shipping_note) = if cost.is_free_shipping() {
        (cost.shipping_label().to_string(), String::new())
    } else {
        (
            price(cost.shipping),
            format!("\n\nFree shipping on orders of {} or more", price(free_threshold)),
        )
    };

    format!(
        "Size: {size}
  {length_caption}
  {breadth_caption}

Component Breakdown
  Panels:       {panels}
  Transformers: {transformers}
{stabilizers}  Wire:         {wire} ft
  Casing units: {casing}

Expected Pricing
  Subtotal: {subtotal}
  Shipping: {shipping}
  Total:    {total}{shipping_note}",
        size = format_dimensions(&estimate.dimensions),
        length_caption = comparison.length_caption(),
        breadth_caption = comparison.breadth_caption(),
        panels = counts.panels,
        transformers = counts.transformers,
        wire = counts.wire_length_feet,
        casing = counts.casing_units,
        subtotal = price(cost.cost_with_margin),
        total = price(cost.total),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::Estimator;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_dimensions_only() {
        let parsed = parse_args(args(&["48", "36"])).unwrap();
        assert_eq!(parsed.dimensions, Dimensions::new(48.0, 36.0));
        assert_eq!(parsed.toggles, ComponentToggles::default());
        assert!(parsed.order.is_none());
        assert!(parsed.settings.is_none());
    }

    #[test]
    fn test_parse_all_options() {
        let parsed = parse_args(args(&[
            "--stabilizer",
            "48",
            "--order",
            "Studio Pro",
            "36",
            "--settings",
            "/tmp/store.toml",
        ]))
        .unwrap();
        assert!(parsed.toggles.include_stabilizer);
        assert_eq!(parsed.order.as_deref(), Some("Studio Pro"));
        assert_eq!(parsed.settings, Some(PathBuf::from("/tmp/store.toml")));
        assert_eq!(parsed.dimensions, Dimensions::new(48.0, 36.0));
    }

    #[test]
    fn test_parse_rejects_bad_arity_and_flags() {
        assert!(parse_args(args(&["48"])).is_err());
        assert!(parse_args(args(&["48", "36", "12"])).is_err());
        assert!(parse_args(args(&["48", "36", "--fast"])).is_err());
        assert!(parse_args(args(&["48", "36", "--order"])).is_err());
    }

    #[test]
    fn test_non_numeric_dimension_is_missing() {
        let parsed = parse_args(args(&["wide", "36"])).unwrap();
        assert!(!parsed.dimensions.is_valid());
    }

    #[test]
    fn test_render_quote() {
        let estimate = Estimator::default()
            .estimate(&Dimensions::new(48.0, 36.0), &ComponentToggles::default());
        let text = render_quote(&estimate, 1000.0, "$");

        // 240 + 105 + 102.5 + 180 = 627.5, with margin 784.375
        let expected = "Size: 48\" × 36\" (4.0' × 3.0')
  0.73x average human height (5'6\")
  1.38x average human width (2'2\")

Component Breakdown
  Panels:       12
  Transformers: 3
  Wire:         41 ft
  Casing units: 4

Expected Pricing
  Subtotal: $784.38
  Shipping: $55.00
  Total:    $839.38

Free shipping on orders of $1000.00 or more";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_quote_with_stabilizers_and_free_shipping() {
        // 96 x 96in: 64 panels, 16 transformers and stabilizers
        let estimate = Estimator::default()
            .estimate(&Dimensions::new(96.0, 96.0), &ComponentToggles::all());
        let text = render_quote(&estimate, 1000.0, "$");

        assert!(text.contains("  Transformers: 16\n  Stabilizers:  16\n  Wire:"));
        assert!(text.contains("  Shipping: Free Shipping\n"));
        assert!(!text.contains("Free shipping on orders"));
    }

    #[test]
    fn test_render_quote_without_dimensions() {
        let estimate = Estimator::default()
            .estimate(&Dimensions::default(), &ComponentToggles::default());
        assert_eq!(render_quote(&estimate, 1000.0, "$"), "Enter dimensions to see pricing");
    }
}
