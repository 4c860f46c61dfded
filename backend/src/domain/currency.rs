//! Currency display formatting.
//!
//! One formatter parameterized by the settings currency, used by every view
//! that shows an amount. Zero fractional digits with thousands grouping,
//! matching how the dashboard presents money.

use shared::CurrencyCode;

/// Format an amount in the given currency with no fractional digits.
///
/// Deterministic and side-effect-free: the same input always yields the
/// same string.
pub fn format_currency(amount: f64, currency: CurrencyCode) -> String {
    let rounded = amount.round() as i64;
    let grouped = group_thousands(rounded.unsigned_abs());
    if rounded < 0 {
        format!("-{}{}", currency.symbol(), grouped)
    } else {
        format!("{}{}", currency.symbol(), grouped)
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
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
    fn test_format_currency_groups_thousands() {
        assert_eq!(format_currency(2500.0, CurrencyCode::Usd), "$2,500");
        assert_eq!(format_currency(950_000.0, CurrencyCode::Usd), "$950,000");
        assert_eq!(format_currency(1_234_567.0, CurrencyCode::Usd), "$1,234,567");
        assert_eq!(format_currency(450.0, CurrencyCode::Usd), "$450");
        assert_eq!(format_currency(0.0, CurrencyCode::Usd), "$0");
    }

    #[test]
    fn test_format_currency_drops_fractional_digits() {
        assert_eq!(format_currency(2500.4, CurrencyCode::Usd), "$2,500");
        assert_eq!(format_currency(2500.6, CurrencyCode::Usd), "$2,501");
    }

    #[test]
    fn test_format_currency_symbols() {
        assert_eq!(format_currency(100.0, CurrencyCode::Aed), "AED 100");
        assert_eq!(format_currency(100.0, CurrencyCode::Eur), "€100");
        assert_eq!(format_currency(100.0, CurrencyCode::Gbp), "£100");
        assert_eq!(format_currency(100.0, CurrencyCode::Inr), "₹100");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-1800.0, CurrencyCode::Usd), "-$1,800");
    }

    #[test]
    fn test_format_currency_is_stable() {
        let first = format_currency(38_400.0, CurrencyCode::Usd);
        let second = format_currency(38_400.0, CurrencyCode::Usd);
        assert_eq!(first, second);
    }
}
