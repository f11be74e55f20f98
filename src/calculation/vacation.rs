//! Vacation pay calculation.
//!
//! Vacation accrues at a fixed number of days per year of service. Accrued
//! days and any pending days carried over are both paid at the daily rate,
//! one thirtieth of the monthly salary.

use rust_decimal::Decimal;

use crate::config::BenefitsConfig;
use crate::models::AuditStep;

/// The result of computing vacation pay.
#[derive(Debug, Clone)]
pub struct VacationPayResult {
    /// `monthly_salary / days_per_month`.
    pub daily_rate: Decimal,
    /// `vacation_days_per_year × years_equivalent`.
    pub accrued_days: Decimal,
    /// Pay for the accrued days.
    pub accrued_amount: Decimal,
    /// Pay for the pending days.
    pub pending_amount: Decimal,
    /// `accrued_amount + pending_amount`.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes vacation pay for accrued and pending vacation days.
///
/// # Examples
///
/// ```
/// use settlement_engine::calculation::calculate_vacation_pay;
/// use settlement_engine::config::SettlementConfig;
/// use rust_decimal::Decimal;
///
/// let config = SettlementConfig::nicaragua();
/// let result = calculate_vacation_pay(Decimal::from(1200), Decimal::ONE, 0, config.benefits(), 4);
///
/// // 1200 / 30 = 40 a day; 15 days accrued in one year
/// assert_eq!(result.daily_rate, Decimal::from(40));
/// assert_eq!(result.amount, Decimal::from(600));
/// ```
pub fn calculate_vacation_pay(
    monthly_salary: Decimal,
    years_equivalent: Decimal,
    pending_vacation_days: u32,
    benefits: &BenefitsConfig,
    step_number: u32,
) -> VacationPayResult {
    let daily_rate = monthly_salary / benefits.days_per_month;
    let accrued_days = benefits.vacation_days_per_year * years_equivalent;
    let accrued_amount = daily_rate * accrued_days;
    let pending_amount = daily_rate * Decimal::from(pending_vacation_days);
    let amount = accrued_amount + pending_amount;

    let audit_step = AuditStep {
        step_number,
        rule_id: "vacation_pay".to_string(),
        rule_name: "Vacation Pay".to_string(),
        input: serde_json::json!({
            "monthly_salary": monthly_salary.normalize().to_string(),
            "years_equivalent": years_equivalent.normalize().to_string(),
            "pending_vacation_days": pending_vacation_days,
            "vacation_days_per_year": benefits.vacation_days_per_year.normalize().to_string()
        }),
        output: serde_json::json!({
            "daily_rate": daily_rate.normalize().to_string(),
            "accrued_days": accrued_days.normalize().to_string(),
            "accrued_amount": accrued_amount.normalize().to_string(),
            "pending_amount": pending_amount.normalize().to_string(),
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "{} / {} = {} per day; {} days x {} years = {} days accrued plus {} pending = {}",
            monthly_salary.normalize(),
            benefits.days_per_month.normalize(),
            daily_rate.round_dp(4).normalize(),
            benefits.vacation_days_per_year.normalize(),
            years_equivalent.round_dp(4).normalize(),
            accrued_days.round_dp(4).normalize(),
            pending_vacation_days,
            amount.round_dp(4).normalize()
        ),
    };

    VacationPayResult {
        daily_rate,
        accrued_days,
        accrued_amount,
        pending_amount,
        amount,
        audit_step,
    }
}
