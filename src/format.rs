//! Display formatting for prices and panel sizes.
//!
//! Fixed-point output rounds exact midpoints away from zero (878.125 shows as
//! 878.13), working on the exact value of the float. `format!("{:.2}")`
//! rounds those midpoints to even instead, so it is not used for amounts.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::estimator::Dimensions;

/// Format `value` with exactly `places` decimals, midpoints rounded away from zero.
pub fn to_fixed(value: f64, places: u32) -> String {
    match Decimal::from_f64_retain(value) {
        Some(exact) => {
            let rounded = exact.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
            format!("{:.*}", places as usize, rounded)
        }
        // NaN, infinities and values outside Decimal's range
        None => format!("{:.*}", places as usize, value),
    }
}

/// Format an amount with a currency symbol and two decimal places.
pub fn format_price(amount: f64, symbol: &str) -> String {
    format!("{}{}", symbol, to_fixed(amount, 2))
}

/// Format a panel size as inches with the feet equivalent, e.g.
/// `48" × 36" (4.0' × 3.0')`.
///
/// Returns an empty string when either side is missing.
pub fn format_dimensions(dims: &Dimensions) -> String {
    if !dims.is_valid() {
        return String::new();
    }
    format!(
        "{}\" × {}\" ({}' × {}')",
        dims.length_inches,
        dims.breadth_inches,
        to_fixed(dims.length_feet(), 1),
        to_fixed(dims.breadth_feet(), 1)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(1234.5, "$"), "$1234.50");
        assert_eq!(format_price(55.0, "$"), "$55.00");
        assert_eq!(format_price(0.0, "€"), "€0.00");
    }

    #[test]
    fn test_format_price_midpoint_rounds_up() {
        assert_eq!(format_price(878.125, "$"), "$878.13");
        assert_eq!(format_price(933.125, "$"), "$933.13");
        assert_eq!(format_price(0.125, "$"), "$0.13");
    }

    #[test]
    fn test_near_midpoint_uses_exact_value() {
        // 1.005 is stored just below the midpoint
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(2.675, 2), "2.67");
    }

    #[test]
    fn test_to_fixed_pads_and_handles_negatives() {
        assert_eq!(to_fixed(41.0, 1), "41.0");
        assert_eq!(to_fixed(-0.125, 2), "-0.13");
        assert_eq!(to_fixed(f64::NAN, 2), "NaN");
    }

    #[test]
    fn test_format_dimensions() {
        let dims = Dimensions::new(48.0, 36.0);
        assert_eq!(format_dimensions(&dims), "48\" × 36\" (4.0' × 3.0')");
    }

    #[test]
    fn test_format_fractional_dimensions() {
        let dims = Dimensions::new(30.5, 20.0);
        assert_eq!(format_dimensions(&dims), "30.5\" × 20\" (2.5' × 1.7')");
    }

    #[test]
    fn test_format_dimensions_midpoint_feet() {
        // 15in = 1.25ft, 18in = 1.5ft
        let dims = Dimensions::new(15.0, 18.0);
        assert_eq!(format_dimensions(&dims), "15\" × 18\" (1.3' × 1.5')");
    }

    #[test]
    fn test_format_missing_dimensions() {
        assert_eq!(format_dimensions(&Dimensions::new(0.0, 36.0)), "");
    }
}
