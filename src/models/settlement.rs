//! Settlement input and report models.
//!
//! This module contains the [`SettlementReport`] produced by a settlement
//! calculation, its six [`SettlementLineItem`]s, and the sanitized
//! [`SettlementInput`] the calculation consumes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::CurrencyConfig;
use crate::currency::format_amount;

use super::{AuditTrace, TenurePeriod};

/// Sanitized inputs for a settlement calculation.
///
/// Values are assumed to have passed through [`crate::input`], so the salary
/// is non-negative and every count is a plain integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementInput {
    /// Gross monthly salary.
    pub monthly_salary: Decimal,
    /// Elapsed employment time.
    pub tenure: TenurePeriod,
    /// Vacation days carried over and not yet taken.
    #[serde(default)]
    pub pending_vacation_days: u32,
}

impl SettlementInput {
    /// Creates a new settlement input.
    pub fn new(monthly_salary: Decimal, tenure: TenurePeriod, pending_vacation_days: u32) -> Self {
        Self {
            monthly_salary,
            tenure,
            pending_vacation_days,
        }
    }
}

/// Identifies one of the six fixed settlement line items.
///
/// The declaration order is the display order on the receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineItemKind {
    /// Employee social security (INSS) contribution.
    SocialSecurityWithholding,
    /// Monthly share of the annual income tax (IR).
    MonthlyTaxWithholding,
    /// Thirteenth-month bonus (aguinaldo) prorated by tenure.
    ProratedBonus,
    /// Accrued and pending vacation pay.
    VacationPay,
    /// Termination payment (indemnización), capped in years.
    Severance,
    /// Salary for the months and days beyond whole years.
    ProratedPartialSalary,
}

impl LineItemKind {
    /// All line item kinds in receipt order.
    pub const ALL: [LineItemKind; 6] = [
        LineItemKind::SocialSecurityWithholding,
        LineItemKind::MonthlyTaxWithholding,
        LineItemKind::ProratedBonus,
        LineItemKind::VacationPay,
        LineItemKind::Severance,
        LineItemKind::ProratedPartialSalary,
    ];

    /// The label printed on the receipt.
    pub fn label(&self) -> &'static str {
        match self {
            LineItemKind::SocialSecurityWithholding => "INSS laboral",
            LineItemKind::MonthlyTaxWithholding => "IR mensual",
            LineItemKind::ProratedBonus => "Aguinaldo proporcional",
            LineItemKind::VacationPay => "Vacaciones",
            LineItemKind::Severance => "Indemnización",
            LineItemKind::ProratedPartialSalary => "Salario proporcional",
        }
    }
}

/// A single labelled amount on the settlement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementLineItem {
    /// Which line item this is.
    pub kind: LineItemKind,
    /// The receipt label.
    pub label: String,
    /// The unrounded amount.
    pub amount: Decimal,
}

impl SettlementLineItem {
    /// Creates a line item labelled from its kind.
    pub fn new(kind: LineItemKind, amount: Decimal) -> Self {
        Self {
            kind,
            label: kind.label().to_string(),
            amount,
        }
    }
}

/// A formatted row ready for a receipt or exported document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLine {
    /// The row label.
    pub label: String,
    /// The amount rendered with currency symbol and two decimals.
    pub amount: String,
}

/// The complete result of a settlement calculation.
///
/// Reports are built once per calculation and never mutated; recalculating
/// produces a new report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementReport {
    /// The six line items in receipt order.
    pub line_items: Vec<SettlementLineItem>,
    /// Sum of all line item amounts, unrounded.
    pub total: Decimal,
    /// The whole part of the total written out in Spanish, with currency name.
    pub total_in_words: String,
    /// Tenure expressed as fractional years.
    pub years_equivalent: Decimal,
    /// Rule applications and warnings behind the figures.
    pub audit_trace: AuditTrace,
}

impl SettlementReport {
    /// Returns the amount of the given line item, or zero if absent.
    pub fn amount_of(&self, kind: LineItemKind) -> Decimal {
        self.line_items
            .iter()
            .find(|item| item.kind == kind)
            .map(|item| item.amount)
            .unwrap_or(Decimal::ZERO)
    }

    /// Renders the line items and total as formatted receipt rows.
    ///
    /// # Example
    ///
    /// ```
    /// use settlement_engine::calculation::calculate_settlement;
    /// use settlement_engine::config::SettlementConfig;
    /// use settlement_engine::models::{SettlementInput, TenurePeriod};
    /// use rust_decimal::Decimal;
    ///
    /// let config = SettlementConfig::nicaragua();
    /// let input = SettlementInput::new(Decimal::from(1200), TenurePeriod::new(1, 0, 0), 0);
    /// let report = calculate_settlement(&input, &config);
    ///
    /// let rows = report.receipt_lines(config.currency());
    /// assert_eq!(rows[0].label, "INSS laboral");
    /// assert_eq!(rows[0].amount, "C$ 84.00");
    /// assert_eq!(rows.last().unwrap().label, "Total");
    /// ```
    pub fn receipt_lines(&self, currency: &CurrencyConfig) -> Vec<ReceiptLine> {
        self.line_items
            .iter()
            .map(|item| ReceiptLine {
                label: item.label.clone(),
                amount: format_amount(item.amount, currency),
            })
            .chain(std::iter::once(ReceiptLine {
                label: "Total".to_string(),
                amount: format_amount(self.total, currency),
            }))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_report() -> SettlementReport {
        let line_items: Vec<SettlementLineItem> = LineItemKind::ALL
            .iter()
            .zip(["84", "0", "1200", "600", "1200", "0"])
            .map(|(kind, amount)| SettlementLineItem::new(*kind, dec(amount)))
            .collect();
        SettlementReport {
            line_items,
            total: dec("3084"),
            total_in_words: "tres mil ochenta y cuatro córdobas".to_string(),
            years_equivalent: dec("1"),
            audit_trace: AuditTrace::default(),
        }
    }

    #[test]
    fn test_line_item_order_is_stable() {
        assert_eq!(LineItemKind::ALL[0], LineItemKind::SocialSecurityWithholding);
        assert_eq!(LineItemKind::ALL[5], LineItemKind::ProratedPartialSalary);
    }

    #[test]
    fn test_line_item_label_from_kind() {
        let item = SettlementLineItem::new(LineItemKind::Severance, dec("1200"));
        assert_eq!(item.label, "Indemnización");
    }

    #[test]
    fn test_amount_of_finds_line_item() {
        let report = sample_report();
        assert_eq!(report.amount_of(LineItemKind::VacationPay), dec("600"));
        assert_eq!(report.amount_of(LineItemKind::MonthlyTaxWithholding), dec("0"));
    }

    #[test]
    fn test_receipt_lines_round_to_two_decimals() {
        let mut report = sample_report();
        report.line_items[0].amount = dec("84.005");
        report.total = dec("3084.005");
        let currency = CurrencyConfig::cordoba();

        let rows = report.receipt_lines(&currency);
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0].amount, "C$ 84.01");
        assert_eq!(rows[6].label, "Total");
        assert_eq!(rows[6].amount, "C$ 3084.01");
    }

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_string(&LineItemKind::ProratedPartialSalary).unwrap();
        assert_eq!(json, "\"prorated_partial_salary\"");
    }

    #[test]
    fn test_settlement_input_pending_days_default() {
        let input: SettlementInput = serde_json::from_str(
            r#"{"monthly_salary": "1200", "tenure": {"years": 1, "months": 0, "days": 0}}"#,
        )
        .unwrap();
        assert_eq!(input.pending_vacation_days, 0);
        assert_eq!(input.monthly_salary, dec("1200"));
    }
}
