//! Response types for the Settlement Engine API.
//!
//! This module defines the success envelopes and the error response
//! structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::PayrollSlip;
use crate::config::CurrencyConfig;
use crate::currency::format_amount;
use crate::models::{ReceiptLine, SettlementReport};

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an invalid number error for the words endpoint.
    pub fn invalid_number(raw: &str) -> Self {
        Self::with_details(
            "INVALID_NUMBER",
            format!("Not a whole number: {}", raw),
            "Only non-negative whole numbers can be written out in words",
        )
    }

    /// Creates an error for a payroll deduction rate outside `[0, 1]`.
    pub fn invalid_deduction_rate(rate: Decimal) -> Self {
        Self::with_details(
            "INVALID_DEDUCTION_RATE",
            format!("Deduction rate {} is out of range", rate),
            "The deduction rate must be between 0 and 1",
        )
    }

    /// Creates an inactive employee error for the payroll endpoint.
    pub fn inactive_employee(id: &str) -> Self {
        Self::with_details(
            "INACTIVE_EMPLOYEE",
            format!("Employee '{}' is inactive", id),
            "Payroll slips are only issued for active employees",
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response carrying the given error.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

/// Display strings for a settlement, as they appear on the receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedSettlement {
    /// The six line items followed by the total row.
    pub lines: Vec<ReceiptLine>,
    /// The total written out in words.
    pub total_in_words: String,
}

impl FormattedSettlement {
    /// Formats a report for display in the given currency.
    pub fn from_report(report: &SettlementReport, currency: &CurrencyConfig) -> Self {
        Self {
            lines: report.receipt_lines(currency),
            total_in_words: report.total_in_words.clone(),
        }
    }
}

/// Response body for the `/settlement` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The engine version that produced this result.
    pub engine_version: String,
    /// Calculation time in microseconds.
    pub duration_us: u64,
    /// The unrounded settlement report with its audit trace.
    pub report: SettlementReport,
    /// The same report formatted for display.
    pub formatted: FormattedSettlement,
}

/// Display strings for a payroll slip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedPayroll {
    /// Earned salary for the days worked.
    pub earned_salary: String,
    /// Payroll deductions.
    pub deductions: String,
    /// Net pay.
    pub net_pay: String,
    /// Value of the untaken vacation days.
    pub vacation_balance: String,
}

impl FormattedPayroll {
    /// Formats a slip for display in the given currency.
    pub fn from_slip(slip: &PayrollSlip, currency: &CurrencyConfig) -> Self {
        Self {
            earned_salary: format_amount(slip.earned_salary, currency),
            deductions: format_amount(slip.deductions, currency),
            net_pay: format_amount(slip.net_pay, currency),
            vacation_balance: format_amount(slip.vacation_balance, currency),
        }
    }
}

/// Response body for the `/payroll` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The engine version that produced this result.
    pub engine_version: String,
    /// The computed slip.
    pub slip: PayrollSlip,
    /// The slip formatted for display.
    pub formatted: FormattedPayroll,
}

/// Response body for the `/words/:n` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordsResponse {
    /// The number that was converted.
    pub number: u64,
    /// Its Spanish cardinal words.
    pub words: String,
}
