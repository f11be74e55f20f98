//! Settlement Engine for Nicaraguan labor law
//!
//! This crate calculates an employee's final labor settlement (liquidación):
//! social security and income tax withholdings, prorated thirteenth-month
//! bonus, vacation pay, capped severance and prorated partial salary. The
//! total is written out in Spanish words for the receipt, and every rule
//! application is recorded in an audit trail.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod currency;
pub mod error;
pub mod input;
pub mod models;
pub mod words;
