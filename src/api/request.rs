//! Request types for the Settlement Engine API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::input::SettlementForm;
use crate::models::Employee;

/// Request body for the `/settlement` endpoint.
///
/// The form is accepted as submitted; every field is sanitized before
/// calculation, so a blank or non-numeric field counts as zero rather than
/// failing the request.
pub type SettlementRequest = SettlementForm;

/// Request body for the `/payroll` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// The employee to pay.
    pub employee: Employee,
    /// Overrides the configured payroll deduction rate.
    #[serde(default)]
    pub deduction_rate: Option<Decimal>,
}
