//! Progressive income tax bracket model.
//!
//! A [`TaxBracketTable`] is an ordered, non-overlapping, gapless sequence of
//! [`TaxBracket`]s covering `[0, ∞)`. Tables are validated on construction so
//! that the evaluator can jump straight to the containing bracket and trust its
//! `base_amount`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A single marginal tax bracket.
///
/// Income in `[lower_bound, upper_bound)` is taxed at
/// `base_amount + (income - lower_bound) * marginal_rate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Inclusive lower edge of the bracket.
    pub lower_bound: Decimal,
    /// Exclusive upper edge of the bracket, `None` for the unbounded top tier.
    #[serde(default)]
    pub upper_bound: Option<Decimal>,
    /// Marginal rate applied to income above `lower_bound`, as a fraction.
    pub marginal_rate: Decimal,
    /// Cumulative tax on all income up to `lower_bound`.
    pub base_amount: Decimal,
}

impl TaxBracket {
    /// Returns true if `income` falls within `[lower_bound, upper_bound)`.
    pub fn contains(&self, income: Decimal) -> bool {
        income >= self.lower_bound && self.upper_bound.is_none_or(|upper| income < upper)
    }

    /// Tax owed on the full width of this bracket, added to the base of the next one.
    fn full_slice_tax(&self) -> Option<Decimal> {
        self.upper_bound
            .map(|upper| (upper - self.lower_bound) * self.marginal_rate)
    }
}

/// A validated, ordered set of tax brackets.
///
/// # Example
///
/// ```
/// use settlement_engine::models::{TaxBracket, TaxBracketTable};
/// use rust_decimal::Decimal;
///
/// let table = TaxBracketTable::new(vec![
///     TaxBracket {
///         lower_bound: Decimal::ZERO,
///         upper_bound: Some(Decimal::from(1000)),
///         marginal_rate: Decimal::ZERO,
///         base_amount: Decimal::ZERO,
///     },
///     TaxBracket {
///         lower_bound: Decimal::from(1000),
///         upper_bound: None,
///         marginal_rate: Decimal::new(10, 2),
///         base_amount: Decimal::ZERO,
///     },
/// ])
/// .unwrap();
/// assert_eq!(table.brackets().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxBracketTable {
    brackets: Vec<TaxBracket>,
}

impl TaxBracketTable {
    /// Builds a table, checking that the brackets cover `[0, ∞)` without gaps
    /// or overlaps and that every `base_amount` equals the accumulated tax of
    /// its predecessors.
    pub fn new(brackets: Vec<TaxBracket>) -> EngineResult<Self> {
        let Some(first) = brackets.first() else {
            return Err(invalid("table must contain at least one bracket"));
        };

        if first.lower_bound != Decimal::ZERO {
            return Err(invalid(format!(
                "first bracket must start at 0, found {}",
                first.lower_bound
            )));
        }

        let mut expected_base = Decimal::ZERO;
        for (index, bracket) in brackets.iter().enumerate() {
            if bracket.marginal_rate < Decimal::ZERO || bracket.marginal_rate > Decimal::ONE {
                return Err(invalid(format!(
                    "bracket {} has marginal rate {} outside [0, 1]",
                    index + 1,
                    bracket.marginal_rate
                )));
            }

            if bracket.base_amount != expected_base {
                return Err(invalid(format!(
                    "bracket {} has base amount {} but preceding brackets accumulate {}",
                    index + 1,
                    bracket.base_amount,
                    expected_base
                )));
            }

            let is_last = index + 1 == brackets.len();
            match (bracket.upper_bound, is_last) {
                (None, true) => {}
                (None, false) => {
                    return Err(invalid(format!(
                        "only the last bracket may be unbounded, bracket {} is not last",
                        index + 1
                    )));
                }
                (Some(upper), true) => {
                    return Err(invalid(format!(
                        "last bracket must be unbounded, found upper bound {}",
                        upper
                    )));
                }
                (Some(upper), false) => {
                    if upper <= bracket.lower_bound {
                        return Err(invalid(format!(
                            "bracket {} upper bound {} is not above its lower bound {}",
                            index + 1,
                            upper,
                            bracket.lower_bound
                        )));
                    }
                    let next_lower = brackets[index + 1].lower_bound;
                    if next_lower != upper {
                        return Err(invalid(format!(
                            "bracket {} ends at {} but bracket {} starts at {}",
                            index + 1,
                            upper,
                            index + 2,
                            next_lower
                        )));
                    }
                }
            }

            if let Some(slice_tax) = bracket.full_slice_tax() {
                expected_base += slice_tax;
            }
        }

        Ok(Self { brackets })
    }

    /// Wraps brackets already known to be consistent.
    pub(crate) fn from_validated(brackets: Vec<TaxBracket>) -> Self {
        Self { brackets }
    }

    /// Returns the brackets in ascending order.
    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Returns the index and bracket containing `income`.
    ///
    /// Negative income is treated as zero. Because the table is gapless from
    /// zero with an unbounded top tier, every non-negative income has exactly
    /// one containing bracket.
    pub fn bracket_for(&self, income: Decimal) -> (usize, &TaxBracket) {
        let income = income.max(Decimal::ZERO);
        self.brackets
            .iter()
            .enumerate()
            .find(|(_, bracket)| bracket.contains(income))
            .unwrap_or_else(|| {
                let last = self.brackets.len() - 1;
                (last, &self.brackets[last])
            })
    }
}

fn invalid(message: impl Into<String>) -> EngineError {
    EngineError::InvalidTaxBrackets {
        message: message.into(),
    }
}
