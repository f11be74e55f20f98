//! Monthly payroll slip.
//!
//! Pays the days actually worked at one thirtieth of the base salary and
//! withholds a flat payroll deduction. Unlike the settlement lines, the
//! deduction and net pay are rounded to cents, since a slip reports what is
//! actually paid out.
//!
//! Employee records arrive straight from request bodies, so the salary is
//! clamped the same way form amounts are and the rate is held to `[0, 1]`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::currency::round_money;
use crate::input::clamp_amount;
use crate::models::{AuditStep, Employee};

/// A computed payroll slip for one employee and month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollSlip {
    /// The employee this slip belongs to.
    pub employee_id: String,
    /// `base_salary / days_per_month`, unrounded.
    pub daily_salary: Decimal,
    /// `daily_salary × days_worked`, unrounded.
    pub earned_salary: Decimal,
    /// `earned_salary × deduction_rate`, rounded to cents.
    pub deductions: Decimal,
    /// `earned_salary − deductions`, rounded to cents.
    pub net_pay: Decimal,
    /// Untaken vacation days on record.
    pub vacation_days: u32,
    /// `daily_salary × vacation_days`, unrounded; what the untaken days are worth.
    pub vacation_balance: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the payroll slip for an employee.
///
/// # Examples
///
/// ```
/// use settlement_engine::calculation::calculate_payroll;
/// use settlement_engine::models::{Employee, EmployeeStatus};
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: "1".to_string(),
///     name: "Juan Perez".to_string(),
///     base_salary: Decimal::from(1200),
///     days_worked: 30,
///     vacation_days: 10,
///     status: EmployeeStatus::Active,
/// };
/// let slip = calculate_payroll(&employee, Decimal::new(9, 2), Decimal::from(30));
///
/// assert_eq!(slip.earned_salary, Decimal::from(1200));
/// assert_eq!(slip.deductions, Decimal::from(108));
/// assert_eq!(slip.net_pay, Decimal::from(1092));
/// ```
pub fn calculate_payroll(
    employee: &Employee,
    deduction_rate: Decimal,
    days_per_month: Decimal,
) -> PayrollSlip {
    let base_salary = clamp_amount(employee.base_salary);
    let deduction_rate = deduction_rate.max(Decimal::ZERO).min(Decimal::ONE);

    let daily_salary = base_salary / days_per_month;
    let earned_salary = daily_salary * Decimal::from(employee.days_worked);
    let deductions = round_money(earned_salary * deduction_rate);
    let net_pay = round_money(earned_salary - deductions);
    let vacation_balance = daily_salary * Decimal::from(employee.vacation_days);

    let audit_step = AuditStep {
        step_number: 1,
        rule_id: "payroll_slip".to_string(),
        rule_name: "Payroll Slip".to_string(),
        input: serde_json::json!({
            "employee_id": employee.id,
            "base_salary": base_salary.normalize().to_string(),
            "days_worked": employee.days_worked,
            "vacation_days": employee.vacation_days,
            "deduction_rate": deduction_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "daily_salary": daily_salary.normalize().to_string(),
            "earned_salary": earned_salary.normalize().to_string(),
            "deductions": deductions.normalize().to_string(),
            "net_pay": net_pay.normalize().to_string(),
            "vacation_balance": vacation_balance.normalize().to_string()
        }),
        reasoning: format!(
            "{} / {} x {} days = {}; deductions {} x {} = {}; net {}",
            base_salary.normalize(),
            days_per_month.normalize(),
            employee.days_worked,
            earned_salary.round_dp(4).normalize(),
            earned_salary.round_dp(4).normalize(),
            deduction_rate.normalize(),
            deductions.normalize(),
            net_pay.normalize()
        ),
    };

    PayrollSlip {
        employee_id: employee.id.clone(),
        daily_salary,
        earned_salary,
        deductions,
        net_pay,
        vacation_days: employee.vacation_days,
        vacation_balance,
        audit_step,
    }
}
