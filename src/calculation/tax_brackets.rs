//! Progressive bracket tax evaluation.
//!
//! Annual tax is `base_amount + (income - lower_bound) * marginal_rate` for
//! the bracket containing the income. Because every bracket's base equals the
//! tax accumulated below it (enforced by [`TaxBracketTable::new`]), the result
//! is continuous across bracket boundaries.

use rust_decimal::Decimal;

use crate::models::TaxBracketTable;

/// Evaluates the annual tax owed on `annual_taxable_income`.
///
/// Negative income is clamped to zero, so the result is never negative.
/// Income exactly on a boundary is taxed by the bracket that starts there.
///
/// # Examples
///
/// ```
/// use settlement_engine::calculation::evaluate_annual_tax;
/// use settlement_engine::config::SettlementConfig;
/// use rust_decimal::Decimal;
///
/// let config = SettlementConfig::nicaragua();
/// let brackets = config.tax_brackets();
///
/// assert_eq!(evaluate_annual_tax(Decimal::ZERO, brackets), Decimal::ZERO);
/// // 15% of the 50,000 above the first tier
/// assert_eq!(evaluate_annual_tax(Decimal::from(150_000), brackets), Decimal::from(7_500));
/// ```
pub fn evaluate_annual_tax(annual_taxable_income: Decimal, brackets: &TaxBracketTable) -> Decimal {
    let income = annual_taxable_income.max(Decimal::ZERO);
    let (_, bracket) = brackets.bracket_for(income);
    bracket.base_amount + (income - bracket.lower_bound) * bracket.marginal_rate
}
