//! Display helpers

use crate::Float;

/// Shown in place of values that are not finite
pub const PLACEHOLDER: &str = "—";

/// Format `value` with exactly `decimals` digits after the decimal point
///
/// `NaN` and infinities render as [`PLACEHOLDER`], so a diverged loss can be displayed without
/// special casing.
pub fn format_fixed<F: Float>(value: F, decimals: usize) -> String {
    if value.is_finite() {
        format!("{:.*}", decimals, value)
    } else {
        PLACEHOLDER.to_string()
    }
}
