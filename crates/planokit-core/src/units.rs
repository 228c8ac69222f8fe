//! Number formatting shared by the serializers.
//!
//! Both output formats must be byte-deterministic for the same model, so all
//! coordinate and size values go through one fixed, locale-independent
//! formatter instead of `format!("{}")` on raw floats.

/// Format a value with up to two decimals, trimming trailing zeros.
///
/// `-0` normalizes to `0`. Non-finite input formats as `0` (degenerate
/// geometry never reaches the serializers, but the output must stay valid if
/// it does).
pub fn fmt_num(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    // Round away float noise first so -0.0004 prints as 0, not -0.
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    let mut s = format!("{:.2}", rounded);
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}

/// Format a millimeter value for display labels, e.g. `"600"` or `"18.5"`.
pub fn format_mm(value: f64) -> String {
    fmt_num(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_zeros() {
        assert_eq!(fmt_num(50.0), "50");
        assert_eq!(fmt_num(50.10), "50.1");
        assert_eq!(fmt_num(50.125), "50.13");
    }

    #[test]
    fn normalizes_zero_and_non_finite() {
        assert_eq!(fmt_num(0.0), "0");
        assert_eq!(fmt_num(-0.0), "0");
        assert_eq!(fmt_num(-0.0001), "0");
        assert_eq!(fmt_num(f64::NAN), "0");
        assert_eq!(fmt_num(f64::INFINITY), "0");
    }

    #[test]
    fn keeps_negative_values() {
        assert_eq!(fmt_num(-15.0), "-15");
        assert_eq!(fmt_num(-27.5), "-27.5");
    }
}
