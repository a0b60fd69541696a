//! Display formatting shared by the front-ends.
//!
//! Amounts are truncated toward zero, never rounded, before display.

/// Format an amount as `<symbol><grouped integer>`, e.g. `₩4,000,000`.
///
/// Any finite amount is printed in full; there is no integer ceiling.
pub fn format_currency(value: f64, symbol: &str) -> String {
    let truncated = value.trunc();
    let sign = if truncated < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", truncated.abs());
    format!("{}{}{}", symbol, sign, group_digits(&digits))
}

/// Format a 0-100 percentage with one decimal place.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Insert `,` between every group of three digits.
fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}
