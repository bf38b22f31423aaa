//! Display formatting for metric values.
//!
//! Time columns render as fixed-point numbers with six decimal digits,
//! thousands grouped with apostrophes and a `" ms"` suffix
//! (`1'234.567890 ms`). Counts render as plain integers, truncated rather
//! than rounded.

// Count truncation intentionally converts f64 to i64
#![allow(clippy::cast_possible_truncation)]

/// Format a millisecond value: `1234.5678901` becomes `"1'234.567890 ms"`.
#[must_use]
pub fn format_ms(value: f64) -> String {
    let fixed = format!("{value:.6}");
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "000000"));
    format!("{}.{frac_part} ms", group_thousands(int_part))
}

/// Format a count as a plain integer, truncating the fractional part.
#[must_use]
pub fn format_count(value: f64) -> String {
    format!("{}", value.trunc() as i64)
}

/// Insert an apostrophe every three digits from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push('\'');
        }
        grouped.push(c);
    }
    grouped
}
