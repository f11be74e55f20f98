//! Employee model and related types.
//!
//! This module defines the Employee struct and EmployeeStatus enum used by
//! the monthly payroll slip.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether an employee is currently on the payroll.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    /// Currently employed and paid.
    #[default]
    Active,
    /// No longer paid; kept for records.
    Inactive,
}

/// Represents an employee on the restaurant payroll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's full name.
    pub name: String,
    /// Monthly base salary.
    pub base_salary: Decimal,
    /// Days worked in the current pay month.
    #[serde(default)]
    pub days_worked: u32,
    /// Vacation days available to the employee.
    #[serde(default)]
    pub vacation_days: u32,
    /// Employment status.
    #[serde(default)]
    pub status: EmployeeStatus,
}

impl Employee {
    /// Returns true if the employee is active.
    ///
    /// # Examples
    ///
    /// ```
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
    /// assert!(employee.is_active());
    /// ```
    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }
}
