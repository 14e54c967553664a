//! Statutory Deduction & Net-Pay Engine for Philippine payroll
//!
//! This crate computes the employee-side statutory deductions mandated for
//! Philippine payroll (SSS contribution, PhilHealth premium, Pag-IBIG
//! contribution, BIR withholding tax) and composes them with overtime pay and
//! allowances into a net-pay figure.
//!
//! Every computation is a pure, synchronous function of its arguments. All
//! monetary arithmetic uses [`rust_decimal::Decimal`] so that chained bracket
//! lookups never accumulate binary floating-point drift.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod error;
pub mod models;
