//! Calculation logic for the Settlement Engine.
//!
//! This module contains the rule functions for a labor settlement: social
//! security and income tax withholdings, the prorated bonus, vacation pay,
//! severance, and the prorated partial salary. [`calculate_settlement`] runs
//! them in order and builds the report. The monthly payroll slip lives here
//! too.

mod aguinaldo;
mod income_tax;
mod partial_salary;
mod payroll;
mod settlement;
mod severance;
mod social_security;
mod tax_brackets;
mod vacation;

pub use aguinaldo::{ProratedBonusResult, calculate_prorated_bonus};
pub use income_tax::{IncomeTaxResult, calculate_income_tax};
pub use partial_salary::{PartialSalaryResult, calculate_prorated_partial_salary};
pub use payroll::{PayrollSlip, calculate_payroll};
pub use settlement::{
    WARNING_SEVERANCE_CAPPED, WARNING_TENURE_OUT_OF_RANGE, WARNING_TOTAL_EXCEEDS_WORDS_CEILING,
    calculate_settlement,
};
pub use severance::{SeveranceResult, calculate_severance};
pub use social_security::{SocialSecurityResult, calculate_social_security};
pub use tax_brackets::evaluate_annual_tax;
pub use vacation::{VacationPayResult, calculate_vacation_pay};
