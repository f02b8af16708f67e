//! Number and placeholder formatting shared by the prompt templates.
//!
//! Rounding is half away from zero, so `358.5` becomes `359` at zero
//! decimals.

/// Rendered in place of any missing categorical field.
pub const UNKNOWN: &str = "Unknown";

/// `$` followed by the comma-grouped value at zero decimals, e.g. `$46,990`.
pub fn currency(value: f64) -> String {
    let rounded = normalize_zero(value.round());
    let grouped = group_thousands(&format!("{:.0}", rounded.abs()));
    if rounded < 0.0 {
        format!("$-{grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Missing prices render as `$0`.
pub fn currency_or_zero(value: Option<f64>) -> String {
    currency(value.unwrap_or(0.0))
}

pub fn one_decimal(value: f64) -> String {
    format!("{:.1}", normalize_zero((value * 10.0).round() / 10.0))
}

pub fn whole(value: f64) -> String {
    format!("{:.0}", normalize_zero(value.round()))
}

/// The field's text, or [`UNKNOWN`] when it is absent or blank.
pub fn text_or_unknown(value: Option<&str>) -> &str {
    match value {
        Some(text) if !text.trim().is_empty() => text,
        _ => UNKNOWN,
    }
}

pub fn display_or_unknown<T: std::fmt::Display>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

fn group_thousands(digits: &str) -> String {
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return digits.to_string();
    }
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("46990"), "46,990");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }

    #[test]
    fn non_numeric_digits_pass_through() {
        assert_eq!(group_thousands("NaN"), "NaN");
    }
}
