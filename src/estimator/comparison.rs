//! Size comparison against an average adult, for the customize view.

use serde::Serialize;

use super::types::Dimensions;
use crate::format::to_fixed;

/// Average adult height, in inches (5'6").
pub const HUMAN_HEIGHT_INCHES: f64 = 66.0;
/// Average adult shoulder width, in inches (2'2").
pub const HUMAN_SHOULDER_WIDTH_INCHES: f64 = 26.0;

const MIN_VISUAL_RATIO: f64 = 0.1;
const MAX_VISUAL_RATIO: f64 = 5.0;
/// Percent of the comparison track filled per 1.0 of ratio.
const TRACK_PERCENT_PER_RATIO: f64 = 20.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HumanSizeComparison {
    pub human_height_inches: f64,
    pub human_width_inches: f64,
    /// Length / human height, clamped to [0.1, 5.0] for the visual bar
    pub length_ratio: f64,
    /// Breadth / shoulder width, clamped to [0.1, 5.0] for the visual bar
    pub breadth_ratio: f64,
    /// Unclamped length ratio, two decimal places
    pub length_comparison: String,
    /// Unclamped breadth ratio, two decimal places
    pub breadth_comparison: String,
}

impl HumanSizeComparison {
    pub fn length_caption(&self) -> String {
        format!("{}x average human height (5'6\")", self.length_comparison)
    }

    pub fn breadth_caption(&self) -> String {
        format!("{}x average human width (2'2\")", self.breadth_comparison)
    }
}

/// Compare the requested size to an average adult.
///
/// The bar ratios are clamped so the visual track stays bounded, but the
/// text reports the true ratio. A 400in length reads "6.06" while its bar
/// ratio stays at 5.0. Whether the text should also be clamped is
/// unresolved; the split is kept as-is.
///
/// A missing side (zero, negative or non-finite) compares as 0.
pub fn compare_to_human(dims: &Dimensions) -> HumanSizeComparison {
    let length_ratio = usable(dims.length_inches) / HUMAN_HEIGHT_INCHES;
    let breadth_ratio = usable(dims.breadth_inches) / HUMAN_SHOULDER_WIDTH_INCHES;

    HumanSizeComparison {
        human_height_inches: HUMAN_HEIGHT_INCHES,
        human_width_inches: HUMAN_SHOULDER_WIDTH_INCHES,
        length_ratio: length_ratio.clamp(MIN_VISUAL_RATIO, MAX_VISUAL_RATIO),
        breadth_ratio: breadth_ratio.clamp(MIN_VISUAL_RATIO, MAX_VISUAL_RATIO),
        length_comparison: to_fixed(length_ratio, 2),
        breadth_comparison: to_fixed(breadth_ratio, 2),
    }
}

/// Width of a comparison bar as a percent of its track, capped at 100.
pub fn bar_width_percent(ratio: f64) -> f64 {
    (ratio * TRACK_PERCENT_PER_RATIO).min(100.0)
}

fn usable(inches: f64) -> f64 {
    if inches.is_finite() && inches > 0.0 {
        inches
    } else {
        0.0
    }
}
