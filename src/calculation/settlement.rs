//! Settlement calculation.
//!
//! Runs every settlement rule over one sanitized input and assembles the
//! resulting [`SettlementReport`]. Each rule records an audit step in the
//! order it is applied; line items always appear in [`LineItemKind::ALL`]
//! order.

use rust_decimal::Decimal;

use crate::config::SettlementConfig;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, LineItemKind, SettlementInput, SettlementLineItem,
    SettlementReport, WarningSeverity,
};
use crate::words::{MAX_WORDS_VALUE, amount_in_words};

use super::aguinaldo::calculate_prorated_bonus;
use super::income_tax::calculate_income_tax;
use super::partial_salary::calculate_prorated_partial_salary;
use super::severance::calculate_severance;
use super::social_security::calculate_social_security;
use super::vacation::calculate_vacation_pay;

/// Warning code raised when months exceed 11 or days exceed 30.
pub const WARNING_TENURE_OUT_OF_RANGE: &str = "TENURE_COMPONENT_OUT_OF_RANGE";

/// Warning code raised when tenure exceeds the severance cap.
pub const WARNING_SEVERANCE_CAPPED: &str = "SEVERANCE_CAPPED";

/// Warning code raised when the total is too large to write out in words.
pub const WARNING_TOTAL_EXCEEDS_WORDS_CEILING: &str = "TOTAL_EXCEEDS_WORDS_CEILING";

/// Calculates a full labor settlement.
///
/// Never fails: an all-zero input yields six zero line items and a total of
/// "cero córdobas". Amounts are left unrounded; use
/// [`SettlementReport::receipt_lines`] or [`crate::currency::format_amount`]
/// for display. Identical inputs always produce identical reports.
///
/// # Examples
///
/// ```
/// use settlement_engine::calculation::calculate_settlement;
/// use settlement_engine::config::SettlementConfig;
/// use settlement_engine::models::{LineItemKind, SettlementInput, TenurePeriod};
/// use rust_decimal::Decimal;
///
/// let config = SettlementConfig::nicaragua();
/// let input = SettlementInput::new(Decimal::from(1200), TenurePeriod::new(1, 0, 0), 0);
/// let report = calculate_settlement(&input, &config);
///
/// assert_eq!(report.amount_of(LineItemKind::SocialSecurityWithholding), Decimal::from(84));
/// assert_eq!(report.amount_of(LineItemKind::ProratedBonus), Decimal::from(1200));
/// assert_eq!(report.amount_of(LineItemKind::VacationPay), Decimal::from(600));
/// assert_eq!(report.amount_of(LineItemKind::Severance), Decimal::from(1200));
/// assert_eq!(report.total, Decimal::from(3084));
/// assert_eq!(report.total_in_words, "tres mil ochenta y cuatro córdobas");
/// ```
pub fn calculate_settlement(input: &SettlementInput, config: &SettlementConfig) -> SettlementReport {
    let mut trace = AuditTrace::default();
    let salary = input.monthly_salary;
    let tenure = &input.tenure;
    let benefits = config.benefits();

    let years_equivalent = tenure.years_equivalent();
    let step_number = trace.next_step_number();
    trace.steps.push(AuditStep {
        step_number,
        rule_id: "tenure_conversion".to_string(),
        rule_name: "Tenure Conversion".to_string(),
        input: serde_json::json!({
            "years": tenure.years,
            "months": tenure.months,
            "days": tenure.days
        }),
        output: serde_json::json!({
            "years_equivalent": years_equivalent.normalize().to_string()
        }),
        reasoning: format!(
            "{} + {} / 12 + {} / 365 = {} years",
            tenure.years,
            tenure.months,
            tenure.days,
            years_equivalent.round_dp(4).normalize()
        ),
    });
    if tenure.has_out_of_range_components() {
        trace.warnings.push(AuditWarning::new(
            WARNING_TENURE_OUT_OF_RANGE,
            format!(
                "Tenure of {} months and {} days exceeds the usual 11 months / 30 days; values are used as given",
                tenure.months, tenure.days
            ),
            WarningSeverity::Medium,
        ));
    }

    let social_security = calculate_social_security(
        salary,
        config.withholdings().social_security_rate,
        trace.next_step_number(),
    );
    trace.steps.push(social_security.audit_step);

    let income_tax = calculate_income_tax(
        salary,
        social_security.withholding,
        config.tax_brackets(),
        trace.next_step_number(),
    );
    trace.steps.push(income_tax.audit_step);

    let bonus = calculate_prorated_bonus(salary, years_equivalent, trace.next_step_number());
    trace.steps.push(bonus.audit_step);

    let vacation = calculate_vacation_pay(
        salary,
        years_equivalent,
        input.pending_vacation_days,
        benefits,
        trace.next_step_number(),
    );
    trace.steps.push(vacation.audit_step);

    let severance = calculate_severance(
        salary,
        years_equivalent,
        benefits.severance_cap_years,
        trace.next_step_number(),
    );
    trace.steps.push(severance.audit_step);
    if severance.cap_applied {
        trace.warnings.push(AuditWarning::new(
            WARNING_SEVERANCE_CAPPED,
            format!(
                "Severance limited to {} years of salary",
                benefits.severance_cap_years.normalize()
            ),
            WarningSeverity::Low,
        ));
    }

    let partial_salary = calculate_prorated_partial_salary(
        salary,
        tenure,
        benefits.days_per_month,
        trace.next_step_number(),
    );
    trace.steps.push(partial_salary.audit_step);

    let line_items: Vec<SettlementLineItem> = LineItemKind::ALL
        .iter()
        .map(|kind| {
            let amount = match kind {
                LineItemKind::SocialSecurityWithholding => social_security.withholding,
                LineItemKind::MonthlyTaxWithholding => income_tax.monthly_withholding,
                LineItemKind::ProratedBonus => bonus.amount,
                LineItemKind::VacationPay => vacation.amount,
                LineItemKind::Severance => severance.amount,
                LineItemKind::ProratedPartialSalary => partial_salary.amount,
            };
            SettlementLineItem::new(*kind, amount)
        })
        .collect();

    let total: Decimal = line_items.iter().map(|item| item.amount).sum();
    let total_in_words = amount_in_words(total, config.currency());

    if total.floor() > Decimal::from(MAX_WORDS_VALUE) {
        trace.warnings.push(AuditWarning::new(
            WARNING_TOTAL_EXCEEDS_WORDS_CEILING,
            format!(
                "Total {} is above {} and cannot be written out in words",
                total.round_dp(2),
                MAX_WORDS_VALUE
            ),
            WarningSeverity::High,
        ));
    }

    let step_number = trace.next_step_number();
    trace.steps.push(AuditStep {
        step_number,
        rule_id: "settlement_total".to_string(),
        rule_name: "Settlement Total".to_string(),
        input: serde_json::Value::Object(
            line_items
                .iter()
                .map(|item| (item.label.clone(), item.amount.normalize().to_string().into()))
                .collect(),
        ),
        output: serde_json::json!({
            "total": total.normalize().to_string(),
            "total_in_words": total_in_words
        }),
        reasoning: format!(
            "Sum of {} line items = {}",
            line_items.len(),
            total.round_dp(4).normalize()
        ),
    });

    SettlementReport {
        line_items,
        total,
        total_in_words,
        years_equivalent,
        audit_trace: trace,
    }
}
