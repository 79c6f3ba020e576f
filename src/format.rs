//! Text formatting for amounts and titles.

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};
use unicode_segmentation::UnicodeSegmentation;

/// Format an amount with thousands separators, two decimals and the currency
/// code after it, e.g. "-1,234.50 PLN".
pub fn format_amount(amount: f64, currency: &str) -> String {
    static FORMATTER: OnceLock<Option<Formatter>> = OnceLock::new();

    let formatter = FORMATTER.get_or_init(|| {
        Formatter::currency("")
            .ok()
            .map(|formatter| formatter.precision(Precision::Decimals(2)))
    });

    let rounded = (amount * 100.0).round() / 100.0;
    let number = match formatter {
        // Zero is hardcoded as "0" by numfmt.
        Some(_) if rounded == 0.0 => "0.00".to_owned(),
        Some(formatter) => pad_decimals(formatter.fmt_string(rounded.abs())),
        None => format!("{:.2}", rounded.abs()),
    };
    let sign = if rounded < 0.0 { "-" } else { "" };

    format!("{sign}{number} {currency}")
}

/// numfmt drops trailing zeros, so "12.30" comes out as "12.3".
fn pad_decimals(mut number: String) -> String {
    match number.rfind('.') {
        None => number.push_str(".00"),
        Some(dot) => {
            for _ in (number.len() - dot - 1)..2 {
                number.push('0');
            }
        }
    }

    number
}

/// Shorten `text` to at most `max_graphemes` user-perceived characters,
/// ending with "…" when it was cut.
pub fn truncate_graphemes(text: &str, max_graphemes: usize) -> String {
    if text.graphemes(true).count() <= max_graphemes {
        return text.to_owned();
    }

    let mut truncated: String = text
        .graphemes(true)
        .take(max_graphemes.saturating_sub(1))
        .collect();
    truncated.push('…');

    truncated
}

#[cfg(test)]
mod tests {
    use super::{format_amount, pad_decimals, truncate_graphemes};

    #[test]
    fn formats_amounts_with_two_decimals() {
        assert_eq!(format_amount(1234.5, "PLN"), "1,234.50 PLN");
        assert_eq!(format_amount(-12.3, "EUR"), "-12.30 EUR");
        assert_eq!(format_amount(0.0, "USD"), "0.00 USD");
    }

    #[test]
    fn amounts_rounding_to_zero_have_no_sign() {
        assert_eq!(format_amount(-0.001, "PLN"), "0.00 PLN");
        assert_eq!(format_amount(-0.004, "PLN"), "0.00 PLN");
        assert_eq!(format_amount(-1.004, "PLN"), "-1.00 PLN");
    }

    #[test]
    fn pads_missing_decimals() {
        assert_eq!(pad_decimals("4".to_owned()), "4.00");
        assert_eq!(pad_decimals("4.5".to_owned()), "4.50");
        assert_eq!(pad_decimals("4.55".to_owned()), "4.55");
    }

    #[test]
    fn keeps_short_titles() {
        assert_eq!(truncate_graphemes("Coffee", 6), "Coffee");
    }

    #[test]
    fn truncates_by_grapheme() {
        assert_eq!(truncate_graphemes("Zażółć gęślą jaźń", 7), "Zażółć…");
        assert_eq!(truncate_graphemes("👨‍👩‍👧‍👦👨‍👩‍👧‍👦👨‍👩‍👧‍👦", 2), "👨‍👩‍👧‍👦…");
    }
}
