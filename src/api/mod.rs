//! HTTP API module for the Settlement Engine.
//!
//! This module provides the REST endpoints for calculating settlements and
//! payroll slips, and for writing numbers out in Spanish words.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{PayrollRequest, SettlementRequest};
pub use response::{
    ApiError, ApiErrorResponse, FormattedPayroll, FormattedSettlement, PayrollResponse,
    SettlementResponse, WordsResponse,
};
pub use state::AppState;
