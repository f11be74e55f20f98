//! Currency display formatting.
//!
//! Calculations never round. This is the one place amounts are brought to two
//! decimals, immediately before they are shown or exported.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::CurrencyConfig;

/// Rounds an amount to two decimals, half away from zero.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount as `"{symbol} {amount}"` with exactly two decimals.
///
/// No thousands separator is inserted.
///
/// # Examples
///
/// ```
/// use settlement_engine::config::CurrencyConfig;
/// use settlement_engine::currency::format_amount;
/// use rust_decimal::Decimal;
///
/// let cordoba = CurrencyConfig::cordoba();
/// assert_eq!(format_amount(Decimal::from(1200), &cordoba), "C$ 1200.00");
/// assert_eq!(format_amount(Decimal::new(12345, 3), &cordoba), "C$ 12.35");
/// ```
pub fn format_amount(amount: Decimal, currency: &CurrencyConfig) -> String {
    format!("{} {:.2}", currency.symbol, round_money(amount))
}

/// Formats an optional amount, rendering a missing value as zero.
pub fn format_optional_amount(amount: Option<Decimal>, currency: &CurrencyConfig) -> String {
    format_amount(amount.unwrap_or(Decimal::ZERO), currency)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_whole_amount_gets_two_decimals() {
        assert_eq!(format_amount(dec("84"), &CurrencyConfig::cordoba()), "C$ 84.00");
    }

    #[test]
    fn test_zero_amount() {
        assert_eq!(format_amount(Decimal::ZERO, &CurrencyConfig::cordoba()), "C$ 0.00");
    }

    #[test]
    fn test_missing_amount_formats_as_zero() {
        assert_eq!(
            format_optional_amount(None, &CurrencyConfig::cordoba()),
            "C$ 0.00"
        );
    }

    #[test]
    fn test_long_fraction_rounded() {
        // 1200 / 30 * 7 / 12 = 23.3333...
        let amount = dec("1200") / dec("30") * dec("7") / dec("12");
        assert_eq!(format_amount(amount, &CurrencyConfig::cordoba()), "C$ 23.33");
    }

    #[test]
    fn test_midpoint_rounds_away_from_zero() {
        assert_eq!(round_money(dec("0.125")), dec("0.13"));
        assert_eq!(round_money(dec("2.675")), dec("2.68"));
    }

    #[test]
    fn test_no_thousands_separator() {
        assert_eq!(
            format_amount(dec("1234567.891"), &CurrencyConfig::cordoba()),
            "C$ 1234567.89"
        );
    }

    #[test]
    fn test_uses_configured_symbol() {
        let currency = CurrencyConfig {
            code: "USD".to_string(),
            symbol: "$".to_string(),
            name: "dólares".to_string(),
        };
        assert_eq!(format_amount(dec("5.5"), &currency), "$ 5.50");
    }
}
