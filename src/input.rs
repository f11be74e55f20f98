//! Sanitization of raw form input.
//!
//! Settlement forms arrive as loosely typed text. Every field is converted
//! here, once, with a parse-or-zero rule: anything that is not a finite
//! number becomes zero and negative values are clamped to zero. The
//! calculations downstream never see an invalid number.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{SettlementInput, TenurePeriod};

/// Largest monthly salary accepted from a form; larger values are clamped.
///
/// Keeps every intermediate product well inside `Decimal`'s range even for
/// extreme tenure counts.
pub const MAX_FORM_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// Parses a monetary amount, falling back to zero.
///
/// The whole trimmed string must be a decimal number; partial prefixes such
/// as `"12abc"` are rejected rather than read as 12.
///
/// # Examples
///
/// ```
/// use settlement_engine::input::parse_amount_or_zero;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_amount_or_zero(" 1200.50 "), Decimal::new(120050, 2));
/// assert_eq!(parse_amount_or_zero(""), Decimal::ZERO);
/// assert_eq!(parse_amount_or_zero("abc"), Decimal::ZERO);
/// assert_eq!(parse_amount_or_zero("-50"), Decimal::ZERO);
/// ```
pub fn parse_amount_or_zero(raw: &str) -> Decimal {
    Decimal::from_str(raw.trim())
        .map(clamp_amount)
        .unwrap_or(Decimal::ZERO)
}

/// Parses a whole count of years, months or days, falling back to zero.
///
/// Fractional input is truncated toward zero, so `"3.7"` is 3.
///
/// # Examples
///
/// ```
/// use settlement_engine::input::parse_count_or_zero;
///
/// assert_eq!(parse_count_or_zero("3"), 3);
/// assert_eq!(parse_count_or_zero("3.7"), 3);
/// assert_eq!(parse_count_or_zero("tres"), 0);
/// ```
pub fn parse_count_or_zero(raw: &str) -> u32 {
    Decimal::from_str(raw.trim())
        .map(clamp_count)
        .unwrap_or(0)
}

/// Reads an amount from a JSON field that may be a number, a string, null
/// or absent.
pub fn amount_from_value(value: Option<&Value>) -> Decimal {
    match value {
        Some(Value::Number(number)) => parse_amount_or_zero(&number.to_string()),
        Some(Value::String(text)) => parse_amount_or_zero(text),
        _ => Decimal::ZERO,
    }
}

/// Reads a count from a JSON field that may be a number, a string, null or
/// absent.
pub fn count_from_value(value: Option<&Value>) -> u32 {
    match value {
        Some(Value::Number(number)) => parse_count_or_zero(&number.to_string()),
        Some(Value::String(text)) => parse_count_or_zero(text),
        _ => 0,
    }
}

/// Clamps an already-parsed amount into `[0, MAX_FORM_AMOUNT]`.
///
/// # Examples
///
/// ```
/// use settlement_engine::input::{clamp_amount, MAX_FORM_AMOUNT};
/// use rust_decimal::Decimal;
///
/// assert_eq!(clamp_amount(Decimal::from(-5)), Decimal::ZERO);
/// assert_eq!(clamp_amount(Decimal::MAX), MAX_FORM_AMOUNT);
/// ```
pub fn clamp_amount(amount: Decimal) -> Decimal {
    amount.max(Decimal::ZERO).min(MAX_FORM_AMOUNT)
}

fn clamp_count(count: Decimal) -> u32 {
    let whole = count.trunc();
    if whole <= Decimal::ZERO {
        0
    } else {
        whole.to_u32().unwrap_or(u32::MAX)
    }
}

/// A settlement form exactly as submitted.
///
/// Each field may hold a number, a numeric string, an empty string, null, or
/// be missing entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettlementForm {
    /// Gross monthly salary.
    #[serde(default)]
    pub monthly_salary: Option<Value>,
    /// Whole years of service.
    #[serde(default)]
    pub years: Option<Value>,
    /// Additional months of service.
    #[serde(default)]
    pub months: Option<Value>,
    /// Additional days of service.
    #[serde(default)]
    pub days: Option<Value>,
    /// Vacation days carried over.
    #[serde(default)]
    pub pending_vacation_days: Option<Value>,
}

impl SettlementForm {
    /// Converts the form into a calculation input, zeroing anything invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use settlement_engine::input::SettlementForm;
    /// use rust_decimal::Decimal;
    ///
    /// let form: SettlementForm = serde_json::from_str(
    ///     r#"{"monthly_salary": "1200", "years": 1, "months": "", "days": null}"#,
    /// ).unwrap();
    /// let input = form.sanitize();
    ///
    /// assert_eq!(input.monthly_salary, Decimal::from(1200));
    /// assert_eq!(input.tenure.years, 1);
    /// assert_eq!(input.tenure.months, 0);
    /// assert_eq!(input.pending_vacation_days, 0);
    /// ```
    pub fn sanitize(&self) -> SettlementInput {
        SettlementInput::new(
            amount_from_value(self.monthly_salary.as_ref()),
            TenurePeriod::new(
                count_from_value(self.years.as_ref()),
                count_from_value(self.months.as_ref()),
                count_from_value(self.days.as_ref()),
            ),
            count_from_value(self.pending_vacation_days.as_ref()),
        )
    }
}
