//! Rounding applied to every computed result before it reaches the display.

/// Scale factor for eight decimal places.
const SCALE: f64 = 1e8;

/// Round a result to eight decimal places, ties away from zero.
///
/// Multiplies by 10^8, rounds to the nearest integer, divides back. This
/// suppresses binary floating-point representation artifacts so that
/// `0.1 + 0.2` displays as `0.3` rather than a long decimal expansion,
/// without arbitrary-precision arithmetic.
///
/// Two totality refinements on the raw formula:
/// - A value so large that the scaling step overflows is returned
///   unchanged; such magnitudes carry no fractional digits to clean up.
/// - A result that rounds to negative zero collapses to positive zero so
///   the display reads `"0"`.
///
/// # Example
///
/// ```rust
/// use reckon::core::round_result;
///
/// assert_eq!(round_result(0.1 + 0.2), 0.3);
/// assert_eq!(round_result(1.0 / 3.0), 0.33333333);
/// assert_eq!(round_result(42.0), 42.0);
/// ```
pub fn round_result(value: f64) -> f64 {
    let scaled = value * SCALE;
    if !scaled.is_finite() {
        return value;
    }

    let rounded = scaled.round() / SCALE;
    // Collapse -0.0 so it formats as "0".
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
