//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll computation.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the payroll engine.
///
/// The engine is total over its documented domain (non-negative salaries,
/// hours, and rates), so the only errors are domain violations detected at
/// the function boundary. The arithmetic itself cannot fail.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
/// use rust_decimal::Decimal;
///
/// let error = EngineError::InvalidSalary {
///     amount: Decimal::from(-100),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid monthly salary: -100 (must be non-negative)"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A salary input was negative.
    #[error("Invalid monthly salary: {amount} (must be non-negative)")]
    InvalidSalary {
        /// The offending salary amount.
        amount: Decimal,
    },

    /// An hours input was negative.
    #[error("Invalid overtime hours: {hours} (must be non-negative)")]
    InvalidHours {
        /// The offending hours value.
        hours: Decimal,
    },

    /// An hourly rate input was negative.
    #[error("Invalid hourly rate: {rate} (must be non-negative)")]
    InvalidRate {
        /// The offending hourly rate.
        rate: Decimal,
    },

    /// An overtime rate multiplier was negative.
    #[error("Invalid overtime multiplier: {multiplier} (must be non-negative)")]
    InvalidMultiplier {
        /// The offending multiplier.
        multiplier: Decimal,
    },

    /// A monetary amount input (overtime pay, allowances) was negative.
    #[error("Invalid {field}: {amount} (must be non-negative)")]
    InvalidAmount {
        /// The name of the offending field.
        field: String,
        /// The offending amount.
        amount: Decimal,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
