//! Canonical decimal text for numbers.

/// Format a number the way values are serialized.
///
/// Magnitudes in `[1e-3, 1e7)` print as plain decimals with at least one
/// fractional digit (`3.0`, `2.5`). Anything else uses scientific notation
/// with a fractional mantissa (`1.0E7`, `1.5E-4`). Zero keeps its sign.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = n.abs();
    if n == 0.0 || (1e-3..1e7).contains(&magnitude) {
        // Debug output is the shortest round-trip form and always keeps `.0`
        // for whole numbers in this range.
        return format!("{n:?}");
    }

    let sci = format!("{n:e}");
    match sci.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => format!("{mantissa}E{exponent}"),
        Some((mantissa, exponent)) => format!("{mantissa}.0E{exponent}"),
        None => sci,
    }
}
