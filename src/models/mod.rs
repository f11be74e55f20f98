//! Core data models for the Settlement Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod audit;
mod employee;
mod settlement;
mod tax_bracket;
mod tenure;

pub use audit::{AuditStep, AuditTrace, AuditWarning, WarningSeverity};
pub use employee::{Employee, EmployeeStatus};
pub use settlement::{
    LineItemKind, ReceiptLine, SettlementInput, SettlementLineItem, SettlementReport,
};
pub use tax_bracket::{TaxBracket, TaxBracketTable};
pub use tenure::TenurePeriod;
